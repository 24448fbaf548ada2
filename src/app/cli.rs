use thiserror::Error;

pub const USAGE: &str = "usage:
  csms_client start <cpid> <connectorId> [idTag] [transactionId]
  csms_client stop  <cpid> <connectorId> [idTag] [transactionId]
  csms_client

With no arguments the client lists the currently active sessions.
If idTag/transactionId are omitted on stop, a 404 from the controller
triggers a forced release of the connector.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing required arguments for {0}")]
    MissingArguments(&'static str),
    #[error("invalid connectorId: {0}")]
    InvalidConnectorId(String),
    #[error("invalid transactionId: {0}")]
    InvalidTransactionId(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Start {
        cpid: String,
        connector_id: u32,
        id_tag: Option<String>,
        transaction_id: Option<i64>,
    },
    Stop {
        cpid: String,
        connector_id: u32,
        id_tag: Option<String>,
        transaction_id: Option<i64>,
    },
    ListActive,
}

/// Parse the argv tail (program name already stripped). All integer
/// validation happens here, before anything touches the network.
pub fn parse(args: &[String]) -> Result<CliCommand, UsageError> {
    let Some(command) = args.first() else {
        return Ok(CliCommand::ListActive);
    };

    match command.as_str() {
        "start" => {
            let (cpid, connector_id, id_tag, transaction_id) = session_args("start", args)?;
            Ok(CliCommand::Start {
                cpid,
                connector_id,
                id_tag,
                transaction_id,
            })
        }
        "stop" => {
            let (cpid, connector_id, id_tag, transaction_id) = session_args("stop", args)?;
            Ok(CliCommand::Stop {
                cpid,
                connector_id,
                id_tag,
                transaction_id,
            })
        }
        other => Err(UsageError::UnknownCommand(other.to_string())),
    }
}

type SessionArgs = (String, u32, Option<String>, Option<i64>);

fn session_args(command: &'static str, args: &[String]) -> Result<SessionArgs, UsageError> {
    if args.len() < 3 {
        return Err(UsageError::MissingArguments(command));
    }

    let cpid = args[1].clone();
    let connector_id = args[2]
        .parse::<u32>()
        .map_err(|_| UsageError::InvalidConnectorId(args[2].clone()))?;
    let id_tag = args.get(3).cloned();
    let transaction_id = args
        .get(4)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| UsageError::InvalidTransactionId(raw.clone()))
        })
        .transpose()?;

    Ok((cpid, connector_id, id_tag, transaction_id))
}
