use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::models::user::UserId;
use crate::users::delete_users::DeleteUsers;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeleteUsersCmd {
    delete_users: DeleteUsers,
}

impl DeleteUsersCmd {
    pub fn new(ids: Vec<UserId>) -> Self {
        Self {
            delete_users: DeleteUsers { ids },
        }
    }
}

#[async_trait]
impl CliCommand for DeleteUsersCmd {
    fn explain(&self) -> String {
        format!("delete users with IDs: {}", self.delete_users)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .delete_users(&self.delete_users)
            .await
            .with_context(|| format!("Problem deleting users with IDs: {}", self.delete_users))?;

        event!(target: PRINT_TARGET, Level::INFO, "Users with IDs: {} deleted", self.delete_users);

        Ok(())
    }
}
