use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::forms::user::UpdateUserForm;
use crate::forms::Form;
use crate::models::user::UserId;
use anyhow::{bail, Context};
use async_trait::async_trait;
use tracing::{event, Level};

pub struct UpdateUserCmd {
    form: UpdateUserForm,
}

impl UpdateUserCmd {
    pub fn new(
        user_id: UserId,
        nickname: Option<String>,
        avatar_uri: Option<String>,
        password: Option<String>,
    ) -> Self {
        let mut form = UpdateUserForm::new(user_id);
        form.password = password.unwrap_or_default();
        form.nickname = nickname.unwrap_or_default();
        form.avatar_uri = avatar_uri.unwrap_or_default();
        Self { form }
    }
}

#[async_trait]
impl CliCommand for UpdateUserCmd {
    fn explain(&self) -> String {
        format!("update user with ID: {}", self.form.user_id)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let command = self.form.to_command()?;
        if command.is_empty() {
            bail!("Nothing to update for user with ID: {}", self.form.user_id);
        }

        client.update_user(&command).await.with_context(|| {
            format!("Problem updating user with ID: {}", self.form.user_id)
        })?;

        event!(target: PRINT_TARGET, Level::INFO,
            "User with ID: {} updated",
            self.form.user_id,
        );

        Ok(())
    }
}
