mod cli;
mod config;
mod error;
mod logging;
mod runtime;
mod services;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", cli::USAGE);
            return Err(AppError::Usage(err));
        }
    };

    let config = config::ClientConfig::from_env()?;

    tracing::info!(
        base_url = %config.base_url,
        request_timeout_secs = config.request_timeout_secs,
        connect_timeout_secs = config.connect_timeout_secs,
        default_id_tag = %config.default_id_tag,
        "client bootstrap initialized"
    );

    runtime::run(&config, command)
}
