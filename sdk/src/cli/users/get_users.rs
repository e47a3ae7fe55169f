use crate::cli::output::{print_page, ListOutput};
use crate::cli_command::CliCommand;
use crate::client::Client;
use crate::console::columns::user_columns;
use crate::models::page::PageRequest;
use crate::users::get_users::GetUsers;
use anyhow::Context;
use async_trait::async_trait;

pub struct GetUsersCmd {
    get_users: GetUsers,
    output: ListOutput,
}

impl GetUsersCmd {
    pub fn new(
        page: PageRequest,
        with_groups: bool,
        with_permissions: bool,
        output: ListOutput,
    ) -> Self {
        GetUsersCmd {
            get_users: GetUsers {
                page,
                with_groups: with_groups.then_some(true),
                with_permissions: with_permissions.then_some(true),
            },
            output,
        }
    }
}

impl Default for GetUsersCmd {
    fn default() -> Self {
        GetUsersCmd {
            get_users: GetUsers::default(),
            output: ListOutput::Table,
        }
    }
}

#[async_trait]
impl CliCommand for GetUsersCmd {
    fn explain(&self) -> String {
        format!(
            "list users on page {} in {} mode",
            self.get_users.page.current,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let users = client
            .get_users(&self.get_users)
            .await
            .with_context(|| String::from("Problem getting list of users"))?;

        print_page("users", &user_columns(), &users, self.output);

        Ok(())
    }
}
