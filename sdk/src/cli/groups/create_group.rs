use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::forms::group::CreateGroupForm;
use crate::forms::Form;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct CreateGroupCmd {
    form: CreateGroupForm,
}

impl CreateGroupCmd {
    pub fn new(name: String) -> Self {
        Self {
            form: CreateGroupForm { name },
        }
    }
}

#[async_trait]
impl CliCommand for CreateGroupCmd {
    fn explain(&self) -> String {
        format!("create group with name: {}", self.form.name)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let command = self.form.to_command()?;
        let group = client
            .create_group(&command)
            .await
            .with_context(|| format!("Problem creating group (name: {})", self.form.name))?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Group with name: {} created with ID: {}",
            group.name,
            group.id,
        );

        Ok(())
    }
}
