mod args;
mod console;
mod credentials;
mod error;
mod logging;

use crate::args::{
    group::GroupAction, permission::PermissionAction, user::UserAction, Command,
    GatehouseConsoleArgs, GatehouseMergedConsoleArgs,
};
use crate::console::ConsoleCmd;
use crate::credentials::{read_password, resolve_username, GatehouseCredentials};
use crate::error::GatehouseCmdError;
use crate::logging::Logging;
use clap::Parser;
use gatehouse::cli::config::ConfigManager;
use gatehouse::cli::groups::{
    create_group::CreateGroupCmd, delete_groups::DeleteGroupsCmd, get_groups::GetGroupsCmd,
};
use gatehouse::cli::permissions::{
    create_permission::CreatePermissionCmd, delete_permissions::DeletePermissionsCmd,
    get_permissions::GetPermissionsCmd,
};
use gatehouse::cli::system::{login::LoginCmd, logout::LogoutCmd, me::GetMeCmd};
use gatehouse::cli::users::{
    activate_user::ActivateUserCmd, create_user::CreateUserCmd,
    deactivate_user::DeactivateUserCmd, delete_users::DeleteUsersCmd, get_users::GetUsersCmd,
    update_user::UpdateUserCmd,
};
use gatehouse::cli_command::{CliCommand, PRINT_TARGET};
use gatehouse::http::client::HttpClient;
use gatehouse::models::page::PageRequest;
use std::sync::Arc;
use tracing::{event, Level};

fn get_command(
    command: Command,
    args: &GatehouseMergedConsoleArgs,
) -> Result<Box<dyn CliCommand>, GatehouseCmdError> {
    let page_size = args.gatehouse.page_size;

    let command: Box<dyn CliCommand> = match command {
        Command::User(command) => match command {
            UserAction::Create(create) => {
                let password = read_password(&create.password, "New user password: ")?;
                Box::new(CreateUserCmd::new(
                    create.username,
                    create.nickname,
                    password,
                    create.avatar_uri,
                ))
            }
            UserAction::Update(update) => Box::new(UpdateUserCmd::new(
                update.user_id,
                update.nickname,
                update.avatar_uri,
                update.password,
            )),
            UserAction::Delete(delete) => Box::new(DeleteUsersCmd::new(delete.user_ids)),
            UserAction::Activate(user) => Box::new(ActivateUserCmd::new(user.user_id)),
            UserAction::Deactivate(user) => Box::new(DeactivateUserCmd::new(user.user_id)),
            UserAction::List(list) => Box::new(GetUsersCmd::new(
                PageRequest::new(list.page, list.page_size.unwrap_or(page_size)),
                list.with_groups,
                list.with_permissions,
                list.list_mode.into(),
            )),
        },
        Command::Permission(command) => match command {
            PermissionAction::Create(create) => Box::new(CreatePermissionCmd::new(create.name)),
            PermissionAction::Delete(delete) => {
                Box::new(DeletePermissionsCmd::new(delete.permission_ids))
            }
            PermissionAction::List(list) => Box::new(GetPermissionsCmd::new(
                PageRequest::new(list.page, list.page_size.unwrap_or(page_size)),
                list.list_mode.into(),
            )),
        },
        Command::Group(command) => match command {
            GroupAction::Create(create) => Box::new(CreateGroupCmd::new(create.name)),
            GroupAction::Delete(delete) => Box::new(DeleteGroupsCmd::new(delete.group_ids)),
            GroupAction::List(list) => Box::new(GetGroupsCmd::new(
                PageRequest::new(list.page, list.page_size.unwrap_or(page_size)),
                list.list_mode.into(),
            )),
        },
        Command::Console(console) => Box::new(ConsoleCmd::new(
            console.resource,
            page_size,
            console.with_groups,
            console.with_permissions,
        )),
        Command::Me => Box::new(GetMeCmd::new()),
        Command::Login => {
            let username = resolve_username(&args.cli)?;
            let password = read_password(&args.cli.password, "Password: ")?;
            Box::new(LoginCmd::new(
                args.gatehouse.get_server_address(),
                username,
                password,
            ))
        }
        Command::Logout => Box::new(LogoutCmd::new(args.gatehouse.get_server_address())),
    };

    Ok(command)
}

#[tokio::main]
async fn main() -> Result<(), GatehouseCmdError> {
    let args = GatehouseConsoleArgs::parse();

    if let Some(generator) = args.cli.generator {
        args.generate_completion(generator);
        return Ok(());
    }

    if args.command.is_none() {
        GatehouseConsoleArgs::print_overview();
        return Ok(());
    }

    let config = ConfigManager::default().load().await?;
    let mut args = GatehouseMergedConsoleArgs::from_config(config, args);

    let mut logging = Logging::new();
    logging.init(args.cli.quiet, &args.cli.debug);

    let Some(command) = args.command.take() else {
        return Ok(());
    };

    // Get command based on command line arguments
    let mut command = get_command(command, &args)?;

    // Create credentials based on command line arguments and command
    let mut credentials =
        GatehouseCredentials::new(&args.cli, &args.gatehouse, command.login_required())?;

    let client = HttpClient::create(Arc::new(args.gatehouse.http_client_config()))?;

    credentials.set_client(&client);
    credentials.login_user().await?;

    if command.use_tracing() {
        event!(target: PRINT_TARGET, Level::INFO, "Executing {}", command.explain());
    }
    command.execute_cmd(&client).await?;

    credentials.logout_user().await?;

    Ok(())
}
