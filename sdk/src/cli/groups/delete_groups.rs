use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::groups::delete_groups::DeleteGroups;
use crate::models::group::GroupId;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct DeleteGroupsCmd {
    delete_groups: DeleteGroups,
}

impl DeleteGroupsCmd {
    pub fn new(ids: Vec<GroupId>) -> Self {
        Self {
            delete_groups: DeleteGroups { ids },
        }
    }
}

#[async_trait]
impl CliCommand for DeleteGroupsCmd {
    fn explain(&self) -> String {
        format!("delete groups with IDs: {}", self.delete_groups)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        client
            .delete_groups(&self.delete_groups)
            .await
            .with_context(|| format!("Problem deleting groups with IDs: {}", self.delete_groups))?;

        event!(target: PRINT_TARGET, Level::INFO, "Groups with IDs: {} deleted", self.delete_groups);

        Ok(())
    }
}
