use std::sync::Arc;

use log::{error, info};
use tokio::{sync::Notify, task::JoinHandle};

use quizinator_content::{ContentGenerator, OpenAiChatModel};
use quizinator_database::interfaces::TaskStore;
use quizinator_database::sqlite::SqliteDb;
use quizinator_models::errors::SendableError;
use quizinator_notify::HttpMailNotifier;
use quizinator_scheduler::{
    config::parse_config, executor::TaskExecutor, scheduler_loop,
};
use quizinator_utilities::startup;

#[tokio::main]
async fn main() -> Result<(), SendableError> {
    startup::startup("Quizinator Scheduler")?;

    info!("Parse scheduler config");
    let config = parse_config();

    info!("Opening task store at {}", config.database);
    let store = Arc::new(SqliteDb::new(&config.database).await?);
    store.create_scheduled_tasks_table().await?;
    store.create_activities_table().await?;

    let model = Arc::new(OpenAiChatModel::with_url(
        config.model_api_key(),
        config.model_name.clone(),
        config.model_api_url.clone(),
    ));
    let generator = ContentGenerator::new(model);
    let notifier = Arc::new(HttpMailNotifier::new(config.mail_config()));
    let executor = TaskExecutor::new(store.clone(), generator, notifier);

    let notify = Arc::new(Notify::new());

    info!("Starting scheduler loop");
    let notify_scheduler = notify.clone();
    let scheduler_config = config.clone();
    let scheduler_store = store.clone();
    let scheduler_task: JoinHandle<Result<(), SendableError>> = tokio::spawn(async move {
        scheduler_loop(
            scheduler_store,
            executor,
            notify_scheduler,
            &scheduler_config,
        )
        .await;
        Ok(())
    });

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Received shutdown signal. Shutting down...");
    notify.notify_waiters();

    if let Err(e) = tokio::try_join!(scheduler_task) {
        error!("Error while shutting down scheduler: {:?}", e);
    }

    info!("Scheduler shutdown complete.");
    Ok(())
}
