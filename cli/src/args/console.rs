use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ConsoleResource {
    Users,
    Permissions,
    Groups,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ConsoleArgs {
    /// Resource managed in the session
    #[clap(value_enum)]
    pub(crate) resource: ConsoleResource,
    /// Include groups of every user (users only)
    #[clap(long, default_value_t = false)]
    pub(crate) with_groups: bool,
    /// Include permissions of every user (users only)
    #[clap(long, default_value_t = false)]
    pub(crate) with_permissions: bool,
}
