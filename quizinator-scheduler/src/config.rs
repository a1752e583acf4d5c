use clap::Parser;
use log::warn;
use quizinator_notify::MailConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: String,
    pub poll_interval_seconds: u64,
    pub model_api_url: String,
    pub model_name: String,
    pub mail_api_url: Option<String>,
    pub mail_from: Option<String>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(long, default_value = "quizinator.db")]
    database: String,

    #[arg(long, default_value_t = 60)]
    poll_interval_seconds: u64,

    #[arg(long, default_value = "https://api.openai.com/v1/chat/completions")]
    model_api_url: String,

    #[arg(long, default_value = "gpt-4o-mini")]
    model_name: String,

    #[arg(long)]
    mail_api_url: Option<String>,

    #[arg(long)]
    mail_from: Option<String>,
}

pub fn parse_config() -> Config {
    let args = CliArgs::parse();
    Config {
        database: args.database,
        poll_interval_seconds: args.poll_interval_seconds,
        model_api_url: args.model_api_url,
        model_name: args.model_name,
        mail_api_url: args.mail_api_url,
        mail_from: args.mail_from,
    }
}

impl Config {
    /// Missing key still yields a generator; every call then fails soft
    /// into placeholder content.
    pub fn model_api_key(&self) -> String {
        std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            warn!("OPENAI_API_KEY is not set; content generation will degrade");
            String::new()
        })
    }

    /// All three of endpoint, key and sender must be present for delivery;
    /// anything missing disables the notifier.
    pub fn mail_config(&self) -> Option<MailConfig> {
        let api_url = self.mail_api_url.clone()?;
        let from = self.mail_from.clone()?;
        let api_key = match std::env::var("MAIL_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!("MAIL_API_KEY is not set; email delivery is disabled");
                return None;
            }
        };
        Some(MailConfig {
            api_url,
            api_key,
            from,
        })
    }
}
