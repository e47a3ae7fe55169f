use crate::args::common::ListMode;
use clap::{Args, Subcommand};
use gatehouse::models::group::GroupId;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum GroupAction {
    /// Create group with given name
    ///
    /// Examples
    ///  gatehouse group create operators
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(GroupCreateArgs),
    /// Delete groups with given IDs
    ///
    /// Examples
    ///  gatehouse group delete 4
    ///  gatehouse group delete 4 5
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(GroupDeleteArgs),
    /// List groups page by page
    ///
    /// Examples
    ///  gatehouse group list
    ///  gatehouse group list --page 3 -l list
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(GroupListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GroupCreateArgs {
    /// Group name, 3 to 256 characters
    pub(crate) name: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GroupDeleteArgs {
    /// Permission IDs to delete
    #[clap(required = true, num_args = 1..)]
    pub(crate) group_ids: Vec<GroupId>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GroupListArgs {
    /// Page number, starting from 1
    #[clap(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Number of groups on a page
    #[clap(long)]
    pub(crate) page_size: Option<u32>,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
