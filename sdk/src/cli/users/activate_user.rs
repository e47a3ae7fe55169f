use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::user::UserId;
use crate::users::activate_user::ActivateUser;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct ActivateUserCmd {
    activate_user: ActivateUser,
}

impl ActivateUserCmd {
    pub fn new(user_id: UserId) -> Self {
        Self {
            activate_user: ActivateUser { user_id },
        }
    }
}

#[async_trait]
impl CliCommand for ActivateUserCmd {
    fn explain(&self) -> String {
        format!("activate user with ID: {}", self.activate_user.user_id)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .activate_user(&self.activate_user)
            .await
            .with_context(|| format!("Problem to activate user with ID: {}", self.activate_user.user_id))?;

        event!(target: PRINT_TARGET, Level::INFO, "User with ID: {} activated", self.activate_user.user_id);

        Ok(())
    }
}
