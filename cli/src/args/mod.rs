pub(crate) mod common;
pub(crate) mod console;
pub(crate) mod group;
pub(crate) mod permission;
pub(crate) mod user;

use crate::args::console::ConsoleArgs;
use crate::args::group::GroupAction;
use crate::args::permission::PermissionAction;
use crate::args::user::UserAction;
use clap::{Args, Command as ClapCommand};
use clap::{Parser, Subcommand};
use clap_complete::{generate, Generator, Shell};
use figlet_rs::FIGfont;
use gatehouse::args::{Args as GatehouseArgs, ArgsOptional as GatehouseArgsOptional};
use std::path::PathBuf;

static CARGO_BIN_NAME: &str = env!("CARGO_BIN_NAME");
static CARGO_PKG_HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct GatehouseConsoleArgs {
    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) gatehouse: GatehouseArgsOptional,

    #[clap(flatten, verbatim_doc_comment)]
    pub(crate) cli: CliOptions,

    #[clap(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CliOptions {
    /// Quiet mode (disabled stdout printing)
    #[clap(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Debug mode (verbose printing to given file)
    #[clap(short, long)]
    pub(crate) debug: Option<PathBuf>,

    /// Gatehouse username
    #[clap(short, long, group = "credentials")]
    pub(crate) username: Option<String>,

    /// Gatehouse password
    ///
    /// An optional parameter to specify the password for authentication.
    /// If not provided, user will be prompted interactively to enter the
    /// password securely.
    #[clap(short, long, verbatim_doc_comment)]
    pub(crate) password: Option<String>,

    /// Gatehouse session token
    ///
    /// Token returned by a previous login, sent as is with every request.
    #[clap(short, long, group = "credentials", verbatim_doc_comment)]
    pub(crate) token: Option<String>,

    /// Shell completion generator for gatehouse command
    ///
    /// Option prints shell completion code on standard output for selected shell.
    /// Redirect standard output to file and follow and use selected shell means
    /// to enable completion for gatehouse command.
    /// Option cannot be combined with other options.
    ///
    /// Example:
    ///  source <(gatehouse --generate bash)
    /// or
    ///  gatehouse --generate bash > gatehouse_completion.bash
    ///  source gatehouse_completion.bash
    #[clap(verbatim_doc_comment)]
    #[clap(long = "generate", value_enum)]
    pub(crate) generator: Option<Shell>,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    /// user operations
    #[command(subcommand, visible_alias = "u")]
    User(UserAction),
    /// permission operations
    #[command(subcommand, visible_alias = "p")]
    Permission(PermissionAction),
    /// group operations
    #[command(subcommand, visible_alias = "g")]
    Group(GroupAction),
    /// interactive list-and-mutate session
    ///
    /// Loads the first page of the chosen resource and reads actions from
    /// standard input until "quit". Type "help" inside the session for the
    /// list of actions.
    ///
    /// Examples
    ///  gatehouse console users
    ///  gatehouse console users --with-groups
    ///  gatehouse console permissions
    #[clap(verbatim_doc_comment)]
    Console(ConsoleArgs),
    /// get details of the logged in user
    Me,
    /// login to Gatehouse and keep the session
    ///
    /// Session token is stored in platform-specific secure storage and used
    /// by following commands for the same API URL, so no credentials have
    /// to be given until logout.
    ///
    /// Examples
    ///  gatehouse -u admin login
    #[clap(verbatim_doc_comment)]
    Login,
    /// logout from Gatehouse and remove the stored session
    Logout,
}

impl GatehouseConsoleArgs {
    pub(crate) fn generate_completion<G: Generator>(&self, generator: G) {
        generate(
            generator,
            &mut GatehouseConsoleArgs::augment_args_for_update(
                ClapCommand::new(CARGO_BIN_NAME).bin_name(CARGO_BIN_NAME),
            ),
            CARGO_BIN_NAME,
            &mut std::io::stdout(),
        );
    }

    pub(crate) fn print_overview() {
        let mut cli = GatehouseConsoleArgs::augment_args_for_update(
            ClapCommand::new(CARGO_BIN_NAME).bin_name(CARGO_BIN_NAME),
        );

        let full_help = cli.render_help().to_string();
        let help = match full_help.find("Options:") {
            Some(options) => &full_help[..options],
            None => full_help.as_str(),
        };

        println!();
        let font = FIGfont::standard().ok();
        if let Some(figure) = font.as_ref().and_then(|font| font.convert("Gatehouse")) {
            println!("{figure}");
        }
        println!("{help}");
        println!("Run '{CARGO_BIN_NAME} --help' for full help message.");
        println!("Run '{CARGO_BIN_NAME} COMMAND --help' for more information on a command.");
        println!();
        println!("For more help on how to use Gatehouse, head to {CARGO_PKG_HOMEPAGE}");
    }
}

/// Command line options merged with the defaults read from config.toml.
pub(crate) struct GatehouseMergedConsoleArgs {
    pub(crate) gatehouse: GatehouseArgs,
    pub(crate) cli: CliOptions,
    pub(crate) command: Option<Command>,
}

impl GatehouseMergedConsoleArgs {
    pub(crate) fn from_config(config: GatehouseArgsOptional, args: GatehouseConsoleArgs) -> Self {
        let gatehouse = GatehouseArgs::from(vec![config, args.gatehouse]);
        let merged_cli_options = CliOptions {
            quiet: args.cli.quiet,
            debug: args.cli.debug,
            username: args.cli.username.or_else(|| gatehouse.username.clone()),
            password: args.cli.password,
            token: args.cli.token,
            generator: args.cli.generator,
        };

        Self {
            gatehouse,
            cli: merged_cli_options,
            command: args.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_username_should_win_over_config() {
        let config = GatehouseArgsOptional {
            username: Some("admin".to_string()),
            page_size: Some(50),
            ..Default::default()
        };
        let args = GatehouseConsoleArgs::parse_from(["gatehouse", "-u", "alice", "me"]);

        let merged = GatehouseMergedConsoleArgs::from_config(config, args);
        assert_eq!(merged.cli.username.as_deref(), Some("alice"));
        assert_eq!(merged.gatehouse.page_size, 50);
        assert!(matches!(merged.command, Some(Command::Me)));
    }

    #[test]
    fn config_username_should_be_used_when_not_given() {
        let config = GatehouseArgsOptional {
            username: Some("admin".to_string()),
            ..Default::default()
        };
        let args = GatehouseConsoleArgs::parse_from([
            "gatehouse",
            "--api-url",
            "http://localhost:9000",
            "user",
            "list",
        ]);

        let merged = GatehouseMergedConsoleArgs::from_config(config, args);
        assert_eq!(merged.cli.username.as_deref(), Some("admin"));
        assert_eq!(merged.gatehouse.api_url, "http://localhost:9000");
    }

    #[test]
    fn user_delete_should_accept_many_ids() {
        let args = GatehouseConsoleArgs::parse_from(["gatehouse", "user", "delete", "1", "2"]);
        match args.command {
            Some(Command::User(UserAction::Delete(delete))) => {
                assert_eq!(delete.user_ids, vec![1, 2])
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn clap_definition_should_be_consistent() {
        use clap::CommandFactory;
        GatehouseConsoleArgs::command().debug_assert();
    }
}
