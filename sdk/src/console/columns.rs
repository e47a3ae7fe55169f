use crate::models::group::Group;
use crate::models::permission::Permission;
use crate::models::user::User;
use crate::utils::timestamp::Timestamp;

/// A titled projection of a row, shared by the list table and the detail view.
pub struct Column<T> {
    pub title: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(title: &'static str, value: fn(&T) -> String) -> Self {
        Self { title, value }
    }

    pub fn render(&self, row: &T) -> String {
        (self.value)(row)
    }
}

pub fn titles<T>(columns: &[Column<T>]) -> Vec<&'static str> {
    columns.iter().map(|column| column.title).collect()
}

pub fn render_row<T>(columns: &[Column<T>], row: &T) -> Vec<String> {
    columns.iter().map(|column| column.render(row)).collect()
}

fn optional_timestamp(value: &Option<Timestamp>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("User ID", |user: &User| user.id.to_string()),
        Column::new("Username", |user: &User| user.username.clone()),
        Column::new("Nickname", |user: &User| user.nickname.clone()),
        Column::new("Status", |user: &User| user.status().label().to_string()),
        Column::new("Created at", |user: &User| user.created_at.to_string()),
        Column::new("Updated at", |user: &User| user.updated_at.to_string()),
    ]
}

pub fn permission_columns() -> Vec<Column<Permission>> {
    vec![
        Column::new("Permission ID", |permission: &Permission| permission.id.to_string()),
        Column::new("Permission Name", |permission: &Permission| permission.name.clone()),
        Column::new("Created at", |permission: &Permission| {
            optional_timestamp(&permission.created_at)
        }),
        Column::new("Updated at", |permission: &Permission| {
            optional_timestamp(&permission.updated_at)
        }),
    ]
}

pub fn group_columns() -> Vec<Column<Group>> {
    vec![
        Column::new("Group ID", |group: &Group| group.id.to_string()),
        Column::new("Group Name", |group: &Group| group.name.clone()),
        Column::new("Created at", |group: &Group| optional_timestamp(&group.created_at)),
        Column::new("Updated at", |group: &Group| optional_timestamp(&group.updated_at)),
    ]
}
