use std::io;

use anyhow::Result;
use dotenvy::dotenv;

mod api;
mod auth;
mod cli;
mod config;
mod error;
mod model;
mod models;
mod queue;

use api::attendance::AttendanceService;
use cli::CliOptions;
use cli::console::Console;
use config::Config;
use model::user::Identity;

use tracing::info;
use tracing_appender::rolling;

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log, kept off the console
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(admin_id = config.admin_id, "Attendance tracker starting");

    let mut service = AttendanceService::new(Identity::new(
        config.admin_id,
        config.admin_name.clone(),
        config.admin_password.clone(),
    ));
    let options = CliOptions::from_config(&config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    cli::run(&mut console, &mut service, &options)
}
