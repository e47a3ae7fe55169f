use std::fmt::{Display, Formatter, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CmdToolError {
    MissingCredentials,
    MissingUsername,
}

impl Display for CmdToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingCredentials => {
                write!(f, "Missing Gatehouse credentials")
            }
            Self::MissingUsername => {
                write!(f, "Missing Gatehouse username, use --username or GATEHOUSE_USERNAME")
            }
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum GatehouseCmdError {
    #[error("Gatehouse client error")]
    GatehouseClient(#[from] gatehouse::error::GatehouseError),

    #[error("Gatehouse sdk or command error")]
    CommandError(#[from] anyhow::Error),

    #[error("Gatehouse password prompt error")]
    PasswordPrompt(#[from] passterm::PromptError),

    #[error("Gatehouse command line tool error")]
    CmdToolError(#[from] CmdToolError),
}
