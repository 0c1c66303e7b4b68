use std::io::Read;
use std::process::ExitCode;

use dotenvy::dotenv;
use order_placement::config::Config;
use order_placement::errors::AppError;
use order_placement::handlers::commands::Command;
use order_placement::{build_handlers, create_pool, run_migrations};

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url, config.pool_size)?;
    run_migrations(&pool)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let command = Command::parse(&input)?;
    log::debug!("running {:?}", command);

    let output = build_handlers(pool).handle(command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
