use crate::cli::output::{print_page, ListOutput};
use crate::cli_command::CliCommand;
use crate::client::Client;
use crate::console::columns::permission_columns;
use crate::permissions::get_permissions::GetPermissions;
use crate::models::page::PageRequest;
use anyhow::Context;
use async_trait::async_trait;

pub struct GetPermissionsCmd {
    get_permissions: GetPermissions,
    output: ListOutput,
}

impl GetPermissionsCmd {
    pub fn new(page: PageRequest, output: ListOutput) -> Self {
        Self {
            get_permissions: GetPermissions::new(page),
            output,
        }
    }
}

#[async_trait]
impl CliCommand for GetPermissionsCmd {
    fn explain(&self) -> String {
        format!(
            "list permissions on page {} in {} mode",
            self.get_permissions.page.current,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let permissions = client
            .get_permissions(&self.get_permissions)
            .await
            .with_context(|| String::from("Problem getting list of permissions"))?;

        print_page("permissions", &permission_columns(), &permissions, self.output);

        Ok(())
    }
}
