use crate::args::common::ListMode;
use clap::{Args, Subcommand};
use gatehouse::models::user::UserId;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum UserAction {
    /// Create user with given username, nickname and avatar URI
    ///
    /// Password is prompted interactively when not given with --password.
    ///
    /// Examples
    ///  gatehouse user create alice Alice https://x.com/a.png
    ///  gatehouse user create bob Bobby https://x.com/b.png --password secret123
    #[clap(verbatim_doc_comment, visible_alias = "c")]
    Create(UserCreateArgs),
    /// Update nickname, avatar URI or password of user with given ID
    ///
    /// Only the given fields are sent, username cannot be changed.
    ///
    /// Examples
    ///  gatehouse user update 2 --nickname Bobby
    ///  gatehouse user update 2 --avatar-uri https://x.com/b.png --password secret123
    #[clap(verbatim_doc_comment, visible_alias = "u")]
    Update(UserUpdateArgs),
    /// Delete users with given IDs
    ///
    /// All users are deleted with a single request.
    ///
    /// Examples
    ///  gatehouse user delete 2
    ///  gatehouse user delete 2 3 4
    #[clap(verbatim_doc_comment, visible_alias = "d")]
    Delete(UserDeleteArgs),
    /// Activate user with given ID
    ///
    /// Examples
    ///  gatehouse user activate 2
    #[clap(verbatim_doc_comment)]
    Activate(UserIdArgs),
    /// Deactivate user with given ID
    ///
    /// Examples
    ///  gatehouse user deactivate 2
    #[clap(verbatim_doc_comment)]
    Deactivate(UserIdArgs),
    /// List users page by page
    ///
    /// Examples
    ///  gatehouse user list
    ///  gatehouse user list --page 2 --page-size 50
    ///  gatehouse user list --with-groups --with-permissions -l list
    #[clap(verbatim_doc_comment, visible_alias = "l")]
    List(UserListArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct UserCreateArgs {
    /// Username, 3 to 20 characters
    pub(crate) username: String,
    /// Nickname, 3 to 20 characters
    pub(crate) nickname: String,
    /// Avatar URI
    pub(crate) avatar_uri: String,
    /// Password, 8 to 20 characters
    #[clap(long)]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct UserUpdateArgs {
    /// User ID to update
    pub(crate) user_id: UserId,
    /// New nickname
    #[clap(short, long)]
    pub(crate) nickname: Option<String>,
    /// New avatar URI
    #[clap(short, long)]
    pub(crate) avatar_uri: Option<String>,
    /// New password
    #[clap(long)]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct UserDeleteArgs {
    /// User IDs to delete
    #[clap(required = true, num_args = 1..)]
    pub(crate) user_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct UserIdArgs {
    /// User ID
    pub(crate) user_id: UserId,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct UserListArgs {
    /// Page number, starting from 1
    #[clap(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Number of users on a page
    ///
    /// Defaults to the page size from the connection options.
    #[clap(long)]
    pub(crate) page_size: Option<u32>,
    /// Include groups of every user
    #[clap(long, default_value_t = false)]
    pub(crate) with_groups: bool,
    /// Include permissions of every user
    #[clap(long, default_value_t = false)]
    pub(crate) with_permissions: bool,
    /// List mode (table or list)
    #[clap(short, long, value_enum, default_value_t = ListMode::Table)]
    pub(crate) list_mode: ListMode,
}
