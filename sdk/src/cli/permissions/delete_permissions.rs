use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::permissions::delete_permissions::DeletePermissions;
use crate::models::permission::PermissionId;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeletePermissionsCmd {
    delete_permissions: DeletePermissions,
}

impl DeletePermissionsCmd {
    pub fn new(ids: Vec<PermissionId>) -> Self {
        Self {
            delete_permissions: DeletePermissions { ids },
        }
    }
}

#[async_trait]
impl CliCommand for DeletePermissionsCmd {
    fn explain(&self) -> String {
        format!("delete permissions with IDs: {}", self.delete_permissions)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .delete_permissions(&self.delete_permissions)
            .await
            .with_context(|| format!("Problem deleting permissions with IDs: {}", self.delete_permissions))?;

        event!(target: PRINT_TARGET, Level::INFO, "Permissions with IDs: {} deleted", self.delete_permissions);

        Ok(())
    }
}
