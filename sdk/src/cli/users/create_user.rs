use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::forms::user::CreateUserForm;
use crate::forms::Form;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

pub struct CreateUserCmd {
    form: CreateUserForm,
}

impl CreateUserCmd {
    pub fn new(username: String, nickname: String, password: String, avatar_uri: String) -> Self {
        Self {
            form: CreateUserForm {
                username,
                nickname,
                password,
                avatar_uri,
            },
        }
    }
}

#[async_trait]
impl CliCommand for CreateUserCmd {
    fn explain(&self) -> String {
        format!("create user with username: {}", self.form.username)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let command = self.form.to_command()?;
        let user = client.create_user(&command).await.with_context(|| {
            format!("Problem creating user (username: {})", self.form.username)
        })?;

        event!(target: PRINT_TARGET, Level::INFO,
            "User with username: {} created with ID: {}",
            user.username,
            user.id,
        );

        Ok(())
    }
}
