use crate::cli::output::{print_page, ListOutput};
use crate::cli_command::CliCommand;
use crate::client::Client;
use crate::console::columns::group_columns;
use crate::groups::get_groups::GetGroups;
use crate::models::page::PageRequest;
use anyhow::Context;
use async_trait::async_trait;

pub struct GetGroupsCmd {
    get_groups: GetGroups,
    output: ListOutput,
}

impl GetGroupsCmd {
    pub fn new(page: PageRequest, output: ListOutput) -> Self {
        Self {
            get_groups: GetGroups::new(page),
            output,
        }
    }
}

#[async_trait]
impl CliCommand for GetGroupsCmd {
    fn explain(&self) -> String {
        format!(
            "list groups on page {} in {} mode",
            self.get_groups.page.current,
            self.output.as_str()
        )
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        let groups = client
            .get_groups(&self.get_groups)
            .await
            .with_context(|| String::from("Problem getting list of groups"))?;

        print_page("groups", &group_columns(), &groups, self.output);

        Ok(())
    }
}
