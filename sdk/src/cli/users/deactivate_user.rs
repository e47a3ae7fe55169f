use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::user::UserId;
use crate::users::deactivate_user::DeactivateUser;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeactivateUserCmd {
    deactivate_user: DeactivateUser,
}

impl DeactivateUserCmd {
    pub fn new(user_id: UserId) -> Self {
        Self {
            deactivate_user: DeactivateUser { user_id },
        }
    }
}

#[async_trait]
impl CliCommand for DeactivateUserCmd {
    fn explain(&self) -> String {
        format!("deactivate user with ID: {}", self.deactivate_user.user_id)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .deactivate_user(&self.deactivate_user)
            .await
            .with_context(|| format!("Problem to deactivate user with ID: {}", self.deactivate_user.user_id))?;

        event!(target: PRINT_TARGET, Level::INFO, "User with ID: {} deactivated", self.deactivate_user.user_id);

        Ok(())
    }
}
