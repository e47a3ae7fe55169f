use crate::args::common::ListMode;
use clap::{Args, Subcommand};
use gatehouse::models::permission::PermissionId;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum PermissionAction {
    /// Create permission with given name
    ///
    /// Examples
    ///  gatehouse permission create users.write
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(PermissionCreateArgs),
    /// Delete permissions with given IDs
    ///
    /// Examples
    ///  gatehouse permission delete 7
    ///  gatehouse permission delete 7 8
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(PermissionDeleteArgs),
    /// List permissions page by page
    ///
    /// Examples
    ///  gatehouse permission list
    ///  gatehouse permission list --page 3 -l list
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(PermissionListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PermissionCreateArgs {
    /// Permission name, 3 to 256 characters
    pub(crate) name: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PermissionDeleteArgs {
    /// Permission IDs to delete
    #[clap(required = true, num_args = 1..)]
    pub(crate) permission_ids: Vec<PermissionId>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PermissionListArgs {
    /// Page number, starting from 1
    #[clap(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Number of permissions on a page
    #[clap(long)]
    pub(crate) page_size: Option<u32>,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
