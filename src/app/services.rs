use thiserror::Error;

use crate::adapters::http::{CommandTransport, TransportError};
use crate::domain::command::{ChargeCommand, ReleaseCommand};
use crate::domain::session::{ActiveSession, ActiveSessionList};

pub const START_PATH: &str = "/api/v1/start";
pub const STOP_PATH: &str = "/api/v1/stop";
pub const RELEASE_PATH: &str = "/api/v1/release";
pub const ACTIVE_PATH: &str = "/api/v1/active";

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("failed to encode command payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode active sessions response: {source}; body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

/// Terminal result of a start or stop command. Non-2xx statuses outside the
/// documented fallback case land here verbatim; interpreting them is the
/// operator's job, not this layer's.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Completed {
        status: u16,
        body: Vec<u8>,
    },
    /// The stop came back 404 with no session identifiers to go on, so the
    /// connector was force-released instead.
    Released {
        stop_status: u16,
        status: u16,
        body: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveSessions {
    Listed(Vec<ActiveSession>),
    Rejected { status: u16, body: Vec<u8> },
}

pub trait SessionCommandHandler {
    fn start_session(&self, command: &ChargeCommand) -> Result<CommandOutcome, ServiceError>;
    fn stop_session(&self, command: &ChargeCommand) -> Result<CommandOutcome, ServiceError>;
}

pub trait SessionQueryHandler {
    fn list_active(&self) -> Result<ActiveSessions, ServiceError>;
}

pub struct ControllerService<T> {
    transport: T,
}

impl<T> ControllerService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: CommandTransport> SessionCommandHandler for ControllerService<T> {
    fn start_session(&self, command: &ChargeCommand) -> Result<CommandOutcome, ServiceError> {
        let body = serde_json::to_string(command).map_err(ServiceError::Encode)?;
        let exchange = self.transport.post_json(START_PATH, &body)?;

        Ok(CommandOutcome::Completed {
            status: exchange.status,
            body: exchange.body,
        })
    }

    fn stop_session(&self, command: &ChargeCommand) -> Result<CommandOutcome, ServiceError> {
        let body = serde_json::to_string(command).map_err(ServiceError::Encode)?;
        let exchange = self.transport.post_json(STOP_PATH, &body)?;

        if exchange.status != STATUS_NOT_FOUND || !command.fallback_eligible() {
            return Ok(CommandOutcome::Completed {
                status: exchange.status,
                body: exchange.body,
            });
        }

        // Nothing identified the session, so a 404 means the controller no
        // longer tracks it by id. Ask for a forced release of the connector
        // instead; this happens at most once per stop.
        let release = ReleaseCommand::for_connector(command);
        let release_body = serde_json::to_string(&release).map_err(ServiceError::Encode)?;
        let release_exchange = self.transport.post_json(RELEASE_PATH, &release_body)?;

        tracing::info!(
            cpid = %command.cpid,
            connector_id = command.connector_id,
            release_status = release_exchange.status,
            "stop returned 404 without identifiers, connector release requested"
        );

        Ok(CommandOutcome::Released {
            stop_status: exchange.status,
            status: release_exchange.status,
            body: release_exchange.body,
        })
    }
}

impl<T: CommandTransport> SessionQueryHandler for ControllerService<T> {
    fn list_active(&self) -> Result<ActiveSessions, ServiceError> {
        let exchange = self.transport.get(ACTIVE_PATH)?;

        if exchange.status != STATUS_OK {
            return Ok(ActiveSessions::Rejected {
                status: exchange.status,
                body: exchange.body,
            });
        }

        let decoded: ActiveSessionList =
            serde_json::from_slice(&exchange.body).map_err(|source| ServiceError::Decode {
                source,
                body: String::from_utf8_lossy(&exchange.body).into_owned(),
            })?;

        Ok(ActiveSessions::Listed(decoded.sessions))
    }
}
