use crate::cli_command::{CliCommand, PRINT_TARGET};
use crate::client::Client;
use crate::console::columns::user_columns;
use crate::console::detail::DetailView;
use crate::users::get_me::GetMe;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{event, Level};

#[derive(Default)]
pub struct GetMeCmd {
    get_me: GetMe,
}

impl GetMeCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CliCommand for GetMeCmd {
    fn explain(&self) -> String {
        "me command".to_owned()
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let user = client
            .get_me(&self.get_me)
            .await
            .with_context(|| String::from("Problem sending get me command"))?;

        let detail = DetailView::new(&user.username, &user_columns(), &user);
        event!(target: PRINT_TARGET, Level::INFO, "{detail}");

        Ok(())
    }
}
