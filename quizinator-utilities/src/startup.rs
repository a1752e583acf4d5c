use std::env;

use log::info;
use quizinator_models::errors::SendableError;

use crate::logger::{self, print_env};

pub fn startup(name: &str) -> Result<(), SendableError> {
    env::set_var("RUST_BACKTRACE", "1");
    logger::setup_logger()?;
    log_panics::init();

    info!("--- {} ---", name);
    print_env()?;

    Ok(())
}
