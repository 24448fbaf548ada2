use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use crate::adapters::http::ControllerHttpClient;
use crate::app::cli::CliCommand;
use crate::app::config::ClientConfig;
use crate::app::error::AppError;
use crate::app::services::{
    ActiveSessions, CommandOutcome, ControllerService, SessionCommandHandler, SessionQueryHandler,
};
use crate::domain::command::ChargeCommand;

pub fn run(config: &ClientConfig, command: CliCommand) -> Result<(), AppError> {
    let transport = ControllerHttpClient::new(
        &config.base_url,
        &config.api_key,
        Duration::from_secs(config.request_timeout_secs),
        Duration::from_secs(config.connect_timeout_secs),
    )?;
    let service = ControllerService::new(transport);

    execute(&service, config, command)
}

fn execute<S>(service: &S, config: &ClientConfig, command: CliCommand) -> Result<(), AppError>
where
    S: SessionCommandHandler + SessionQueryHandler,
{
    match command {
        CliCommand::Start {
            cpid,
            connector_id,
            id_tag,
            transaction_id,
        } => {
            let command = ChargeCommand::start(
                cpid,
                connector_id,
                id_tag,
                transaction_id,
                &config.default_id_tag,
                utc_timestamp(),
            );
            report_outcome("start", service.start_session(&command)?);
        }
        CliCommand::Stop {
            cpid,
            connector_id,
            id_tag,
            transaction_id,
        } => {
            let command =
                ChargeCommand::stop(cpid, connector_id, id_tag, transaction_id, utc_timestamp());
            report_outcome("stop", service.stop_session(&command)?);
        }
        CliCommand::ListActive => report_sessions(service.list_active()?),
    }

    Ok(())
}

fn report_outcome(operation: &str, outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Completed { status, body } => {
            println!("{operation} -> {status} {}", String::from_utf8_lossy(&body));
        }
        CommandOutcome::Released {
            stop_status,
            status,
            body,
        } => {
            println!(
                "{operation} -> {stop_status}, connector released -> {status} {}",
                String::from_utf8_lossy(&body)
            );
        }
    }
}

fn report_sessions(outcome: ActiveSessions) {
    match outcome {
        ActiveSessions::Listed(sessions) if sessions.is_empty() => {
            println!("no active sessions");
        }
        ActiveSessions::Listed(sessions) => {
            for session in &sessions {
                println!(
                    "{} {} {} {}",
                    session.cpid, session.connector_id, session.id_tag, session.transaction_id
                );
            }
        }
        ActiveSessions::Rejected { status, body } => {
            println!(
                "active sessions request rejected: {status} {}",
                String::from_utf8_lossy(&body)
            );
        }
    }
}

fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
