use crate::args::console::ConsoleResource;
use async_trait::async_trait;
use gatehouse::cli::output::build_table;
use gatehouse::cli_command::{CliCommand, PRINT_TARGET};
use gatehouse::client::{Client, GroupClient, PermissionClient, UserClient};
use gatehouse::console::resource::{Groups, Permissions, Resource, Users};
use gatehouse::console::screen::Screen;
use gatehouse::forms::group::CreateGroupForm;
use gatehouse::forms::permission::CreatePermissionForm;
use gatehouse::forms::user::{CreateUserForm, UpdateUserForm};
use std::fmt::Display;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{event, Level};

const HELP: &str = "\
Actions:
  list                     load the current page again
  page <n> | next | prev   go to another page
  size <n>                 change the page size
  select <id>... | select all
  unselect <id>... | clear
  create <field>=<value>...
  edit <id> [<field>=<value>...]   (users)
  toggle <id>              activate or deactivate (users)
  delete                   delete the selected rows
  show <id> | close        open or close the detail view
  help | quit";

/// A single line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConsoleAction {
    Help,
    Quit,
    List,
    Page(u32),
    Next,
    Previous,
    PageSize(u32),
    Select(Vec<u32>),
    SelectAll,
    Deselect(Vec<u32>),
    ClearSelection,
    Create(Vec<(String, String)>),
    Edit(u32, Vec<(String, String)>),
    Toggle(u32),
    Delete,
    Show(u32),
    Close,
}

fn parse_id(value: Option<&str>, action: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("Missing ID for '{action}'"))?;
    value
        .parse()
        .map_err(|_| format!("Invalid number '{value}' for '{action}'"))
}

fn parse_ids<'a>(values: impl Iterator<Item = &'a str>, action: &str) -> Result<Vec<u32>, String> {
    let ids = values
        .map(|value| parse_id(Some(value), action))
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err(format!("Missing ID for '{action}'"));
    }
    Ok(ids)
}

fn parse_fields<'a>(values: impl Iterator<Item = &'a str>) -> Result<Vec<(String, String)>, String> {
    values
        .map(|pair| match pair.split_once('=') {
            Some((field, value)) if !field.is_empty() => {
                Ok((field.to_lowercase().replace('-', "_"), value.to_string()))
            }
            _ => Err(format!("Expected <field>=<value>, got '{pair}'")),
        })
        .collect()
}

impl FromStr for ConsoleAction {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(action) = words.next() else {
            return Err("Empty action".to_string());
        };

        let action = action.to_lowercase();
        let parsed = match action.as_str() {
            "help" | "?" => ConsoleAction::Help,
            "quit" | "exit" | "q" => ConsoleAction::Quit,
            "list" | "reload" => ConsoleAction::List,
            "page" => ConsoleAction::Page(parse_id(words.next(), &action)?),
            "next" => ConsoleAction::Next,
            "prev" | "previous" => ConsoleAction::Previous,
            "size" => ConsoleAction::PageSize(parse_id(words.next(), &action)?),
            "select" => {
                let mut rest = words.clone().peekable();
                if rest.peek() == Some(&"all") {
                    words.next();
                    ConsoleAction::SelectAll
                } else {
                    ConsoleAction::Select(parse_ids(words.by_ref(), &action)?)
                }
            }
            "unselect" | "deselect" => ConsoleAction::Deselect(parse_ids(words.by_ref(), &action)?),
            "clear" => ConsoleAction::ClearSelection,
            "create" | "add" => ConsoleAction::Create(parse_fields(words.by_ref())?),
            "edit" | "update" => {
                let id = parse_id(words.next(), &action)?;
                ConsoleAction::Edit(id, parse_fields(words.by_ref())?)
            }
            "toggle" => ConsoleAction::Toggle(parse_id(words.next(), &action)?),
            "delete" => ConsoleAction::Delete,
            "show" => ConsoleAction::Show(parse_id(words.next(), &action)?),
            "close" => ConsoleAction::Close,
            _ => return Err(format!("Unknown action '{action}', type 'help' for the list")),
        };

        if let Some(extra) = words.next() {
            return Err(format!("Unexpected '{extra}' after '{action}'"));
        }
        Ok(parsed)
    }
}

/// Form that can be filled from `<field>=<value>` pairs.
pub(crate) trait FormInput {
    const FIELDS: &'static [&'static str];

    fn set(&mut self, field: &str, value: String) -> bool;
}

impl FormInput for CreateUserForm {
    const FIELDS: &'static [&'static str] = &["username", "nickname", "password", "avatar_uri"];

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "username" => self.username = value,
            "nickname" => self.nickname = value,
            "password" => self.password = value,
            "avatar_uri" | "avatar" => self.avatar_uri = value,
            _ => return false,
        }
        true
    }
}

impl FormInput for UpdateUserForm {
    const FIELDS: &'static [&'static str] = &["nickname", "password", "avatar_uri"];

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "nickname" => self.nickname = value,
            "password" => self.password = value,
            "avatar_uri" | "avatar" => self.avatar_uri = value,
            _ => return false,
        }
        true
    }
}

impl FormInput for CreatePermissionForm {
    const FIELDS: &'static [&'static str] = &["name"];

    fn set(&mut self, field: &str, value: String) -> bool {
        if field != "name" {
            return false;
        }
        self.name = value;
        true
    }
}

impl FormInput for CreateGroupForm {
    const FIELDS: &'static [&'static str] = &["name"];

    fn set(&mut self, field: &str, value: String) -> bool {
        if field != "name" {
            return false;
        }
        self.name = value;
        true
    }
}

pub(crate) fn fill<F: FormInput>(form: &mut F, fields: Vec<(String, String)>) -> Result<(), String> {
    for (field, value) in fields {
        if !form.set(&field, value) {
            return Err(format!(
                "Unknown field '{field}', expected one of: {}",
                F::FIELDS.join(", ")
            ));
        }
    }
    Ok(())
}

fn warn(message: impl Display) {
    event!(target: PRINT_TARGET, Level::WARN, "{message}");
}

fn selection<R: Resource>(screen: &Screen<R>) -> String {
    screen
        .selected()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_screen<R: Resource>(screen: &Screen<R>) {
    let page = screen.page();
    if screen.rows().is_empty() {
        event!(target: PRINT_TARGET, Level::INFO, "No {}s found on page {}", R::NAME, page.current);
    } else {
        let table = build_table(&R::columns(), screen.rows());
        event!(target: PRINT_TARGET, Level::INFO, "{table}");
    }

    let selected = selection(screen);
    event!(target: PRINT_TARGET, Level::INFO,
        "Page: {}, page size: {}, total: {}, selected: [{selected}]",
        page.current,
        page.page_size,
        screen.total(),
    );
}

fn print_selection<R: Resource>(screen: &Screen<R>) {
    let selected = selection(screen);
    event!(target: PRINT_TARGET, Level::INFO, "Selected: [{selected}]");
}

/// Actions every resource supports.
async fn apply_common<R>(screen: &mut Screen<R>, action: ConsoleAction)
where
    R: Resource,
    R::CreateForm: FormInput,
{
    match action {
        ConsoleAction::Help => event!(target: PRINT_TARGET, Level::INFO, "{HELP}"),
        ConsoleAction::Quit => {}
        ConsoleAction::List => {
            if screen.reload().await {
                print_screen(screen);
            }
        }
        ConsoleAction::Page(current) => {
            if screen.go_to_page(current).await {
                print_screen(screen);
            }
        }
        ConsoleAction::Next => {
            let next = screen.page().current.saturating_add(1);
            if screen.go_to_page(next).await {
                print_screen(screen);
            }
        }
        ConsoleAction::Previous => {
            let previous = screen.page().current.saturating_sub(1);
            if screen.go_to_page(previous).await {
                print_screen(screen);
            }
        }
        ConsoleAction::PageSize(page_size) => {
            if screen.set_page_size(page_size).await {
                print_screen(screen);
            }
        }
        ConsoleAction::Select(ids) => {
            for id in ids {
                if !screen.select(id) {
                    warn(format!("No {} with ID: {id} on this page", R::NAME));
                }
            }
            print_selection(screen);
        }
        ConsoleAction::SelectAll => {
            screen.select_all();
            print_selection(screen);
        }
        ConsoleAction::Deselect(ids) => {
            ids.into_iter().for_each(|id| screen.deselect(id));
            print_selection(screen);
        }
        ConsoleAction::ClearSelection => {
            screen.clear_selection();
            print_selection(screen);
        }
        ConsoleAction::Create(fields) => {
            let mut form = screen.open_create();
            if let Err(error) = fill(&mut form, fields) {
                warn(error);
                screen.close_create();
                return;
            }
            if screen.submit_create(&form).await {
                print_screen(screen);
            } else {
                screen.close_create();
            }
        }
        ConsoleAction::Delete => {
            screen.delete_selected().await;
            print_screen(screen);
        }
        ConsoleAction::Show(id) => match screen.row(id).cloned() {
            Some(row) => {
                screen.show_detail(row);
                if let Some(detail) = screen.detail() {
                    event!(target: PRINT_TARGET, Level::INFO, "{detail}");
                }
            }
            None => warn(format!("No {} with ID: {id} on this page", R::NAME)),
        },
        ConsoleAction::Close => screen.close_detail(),
        ConsoleAction::Edit(_, _) | ConsoleAction::Toggle(_) => {
            warn(format!("Action is not available for {}s", R::NAME))
        }
    }
}

#[async_trait]
pub(crate) trait Session: Send {
    async fn apply(&mut self, action: ConsoleAction);
}

#[async_trait]
impl<C: UserClient + Sync + ?Sized> Session for Screen<Users<'_, C>> {
    async fn apply(&mut self, action: ConsoleAction) {
        match action {
            ConsoleAction::Edit(id, fields) => {
                let Some(row) = self.row(id).cloned() else {
                    warn(format!("No user with ID: {id} on this page"));
                    return;
                };

                let mut form = self.open_update(row);
                if fields.is_empty() {
                    event!(target: PRINT_TARGET, Level::INFO,
                        "User {id}: nickname={}, avatar_uri={}, password is left unchanged when blank",
                        form.nickname,
                        form.avatar_uri,
                    );
                    self.cancel_update();
                    return;
                }
                if let Err(error) = fill(&mut form, fields) {
                    warn(error);
                    self.cancel_update();
                    return;
                }
                if self.submit_update(&form).await {
                    print_screen(self);
                } else {
                    self.cancel_update();
                }
            }
            ConsoleAction::Toggle(id) => {
                let Some(row) = self.row(id).cloned() else {
                    warn(format!("No user with ID: {id} on this page"));
                    return;
                };
                self.toggle_active(&row).await;
                print_screen(self);
            }
            action => apply_common(self, action).await,
        }
    }
}

#[async_trait]
impl<C: PermissionClient + Sync + ?Sized> Session for Screen<Permissions<'_, C>> {
    async fn apply(&mut self, action: ConsoleAction) {
        apply_common(self, action).await
    }
}

#[async_trait]
impl<C: GroupClient + Sync + ?Sized> Session for Screen<Groups<'_, C>> {
    async fn apply(&mut self, action: ConsoleAction) {
        apply_common(self, action).await
    }
}

/// Reads actions from stdin until `quit` or end of input.
async fn run_session(session: &mut dyn Session) -> anyhow::Result<()> {
    session.apply(ConsoleAction::List).await;
    event!(target: PRINT_TARGET, Level::INFO, "Enter action, 'help' lists all of them:");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<ConsoleAction>() {
            Ok(ConsoleAction::Quit) => break,
            Ok(action) => session.apply(action).await,
            Err(error) => warn(error),
        }
    }

    Ok(())
}

pub(crate) struct ConsoleCmd {
    resource: ConsoleResource,
    page_size: u32,
    with_groups: bool,
    with_permissions: bool,
}

impl ConsoleCmd {
    pub(crate) fn new(
        resource: ConsoleResource,
        page_size: u32,
        with_groups: bool,
        with_permissions: bool,
    ) -> Self {
        Self {
            resource,
            page_size,
            with_groups,
            with_permissions,
        }
    }
}

#[async_trait]
impl CliCommand for ConsoleCmd {
    fn explain(&self) -> String {
        let resource = match self.resource {
            ConsoleResource::Users => "users",
            ConsoleResource::Permissions => "permissions",
            ConsoleResource::Groups => "groups",
        };
        format!("console session for {resource} with page size {}", self.page_size)
    }

    async fn execute_cmd(&mut self, client: &dyn Client) -> anyhow::Result<(), anyhow::Error> {
        match self.resource {
            ConsoleResource::Users => {
                let mut users = Users::new(client);
                users.with_groups = self.with_groups.then_some(true);
                users.with_permissions = self.with_permissions.then_some(true);
                run_session(&mut Screen::new(users, self.page_size)).await
            }
            ConsoleResource::Permissions => {
                run_session(&mut Screen::new(Permissions::new(client), self.page_size)).await
            }
            ConsoleResource::Groups => {
                run_session(&mut Screen::new(Groups::new(client), self.page_size)).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_actions_should_be_parsed() {
        assert_eq!("help".parse::<ConsoleAction>(), Ok(ConsoleAction::Help));
        assert_eq!("  QUIT ".parse::<ConsoleAction>(), Ok(ConsoleAction::Quit));
        assert_eq!("page 3".parse::<ConsoleAction>(), Ok(ConsoleAction::Page(3)));
        assert_eq!("size 50".parse::<ConsoleAction>(), Ok(ConsoleAction::PageSize(50)));
        assert_eq!("delete".parse::<ConsoleAction>(), Ok(ConsoleAction::Delete));
        assert_eq!("toggle 7".parse::<ConsoleAction>(), Ok(ConsoleAction::Toggle(7)));
    }

    #[test]
    fn selection_should_accept_many_ids_or_all() {
        assert_eq!("select 1 2".parse::<ConsoleAction>(), Ok(ConsoleAction::Select(vec![1, 2])));
        assert_eq!("select all".parse::<ConsoleAction>(), Ok(ConsoleAction::SelectAll));
        assert_eq!("unselect 2".parse::<ConsoleAction>(), Ok(ConsoleAction::Deselect(vec![2])));
        assert!("select".parse::<ConsoleAction>().is_err());
        assert!("select 1 x".parse::<ConsoleAction>().is_err());
    }

    #[test]
    fn create_should_collect_field_pairs() {
        let action = "create username=alice nickname=Alice password=password1 avatar-uri=https://x.com/a.png"
            .parse::<ConsoleAction>()
            .unwrap();

        assert_eq!(
            action,
            ConsoleAction::Create(vec![
                ("username".to_string(), "alice".to_string()),
                ("nickname".to_string(), "Alice".to_string()),
                ("password".to_string(), "password1".to_string()),
                ("avatar_uri".to_string(), "https://x.com/a.png".to_string()),
            ])
        );
    }

    #[test]
    fn edit_should_require_id_and_allow_no_fields() {
        assert_eq!("edit 4".parse::<ConsoleAction>(), Ok(ConsoleAction::Edit(4, vec![])));
        assert_eq!(
            "edit 4 nickname=Bob".parse::<ConsoleAction>(),
            Ok(ConsoleAction::Edit(
                4,
                vec![("nickname".to_string(), "Bob".to_string())]
            ))
        );
        assert!("edit nickname=Bob".parse::<ConsoleAction>().is_err());
    }

    #[test]
    fn malformed_input_should_be_rejected() {
        assert!("".parse::<ConsoleAction>().is_err());
        assert!("dance".parse::<ConsoleAction>().is_err());
        assert!("page x".parse::<ConsoleAction>().is_err());
        assert!("list now".parse::<ConsoleAction>().is_err());
        assert!("create username".parse::<ConsoleAction>().is_err());
    }

    #[test]
    fn fill_should_set_known_fields() {
        let mut form = CreateUserForm::default();
        fill(
            &mut form,
            vec![
                ("username".to_string(), "alice".to_string()),
                ("avatar".to_string(), "https://x.com/a.png".to_string()),
            ],
        )
        .unwrap();

        assert_eq!(form.username, "alice");
        assert_eq!(form.avatar_uri, "https://x.com/a.png");
        assert!(form.password.is_empty());
    }

    #[test]
    fn fill_should_reject_unknown_fields() {
        let mut form = UpdateUserForm::default();
        let error = fill(&mut form, vec![("username".to_string(), "bob".to_string())]).unwrap_err();
        assert_eq!(
            error,
            "Unknown field 'username', expected one of: nickname, password, avatar_uri"
        );

        let mut form = CreatePermissionForm::default();
        assert!(fill(&mut form, vec![("title".to_string(), "x".to_string())]).is_err());
    }
}
