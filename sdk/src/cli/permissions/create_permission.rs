use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::forms::permission::CreatePermissionForm;
use crate::forms::Form;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct CreatePermissionCmd {
    form: CreatePermissionForm,
}

impl CreatePermissionCmd {
    pub fn new(name: String) -> Self {
        Self {
            form: CreatePermissionForm { name },
        }
    }
}

#[async_trait]
impl CliCommand for CreatePermissionCmd {
    fn explain(&self) -> String {
        format!("create permission with name: {}", self.form.name)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let command = self.form.to_command()?;
        let permission = client
            .create_permission(&command)
            .await
            .with_context(|| format!("Problem creating permission (name: {})", self.form.name))?;

        event!(target: PRINT_TARGET, Level::INFO,
            "Permission with name: {} created with ID: {}",
            permission.name,
            permission.id,
        );

        Ok(())
    }
}
