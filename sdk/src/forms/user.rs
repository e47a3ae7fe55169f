use crate::forms::rules;
use crate::forms::{non_blank, Form, FormErrors};
use crate::models::user::{User, UserId};
use crate::users::create_user::CreateUser;
use crate::users::update_user::UpdateUser;

/// Input of the "new user" form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreateUserForm {
    pub username: String,
    pub nickname: String,
    pub password: String,
    pub avatar_uri: String,
}

impl Form for CreateUserForm {
    type Command = CreateUser;

    fn validate(&self) -> Result<(), FormErrors> {
        FormErrors::collect([
            rules::USERNAME.check(Some(&self.username)),
            rules::NICKNAME.check(Some(&self.nickname)),
            rules::PASSWORD.check(Some(&self.password)),
            rules::AVATAR_URI.check(Some(&self.avatar_uri)),
        ])
    }

    fn build(&self) -> CreateUser {
        CreateUser {
            username: self.username.clone(),
            nickname: self.nickname.clone(),
            password: self.password.clone(),
            avatar_uri: self.avatar_uri.clone(),
        }
    }
}

/// Input of the "edit user" form.
///
/// The password is write-only and always starts blank. Only edited fields are
/// checked and sent: a field left blank or equal to the value it was filled
/// with stays out of the request, an edited one must satisfy the creation rule.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateUserForm {
    pub user_id: UserId,
    pub password: String,
    pub nickname: String,
    pub avatar_uri: String,
    prefilled_nickname: String,
    prefilled_avatar_uri: String,
}

impl UpdateUserForm {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            password: String::new(),
            nickname: user.nickname.clone(),
            avatar_uri: user.avatar_uri.clone(),
            prefilled_nickname: user.nickname.clone(),
            prefilled_avatar_uri: user.avatar_uri.clone(),
        }
    }

    fn edited_nickname(&self) -> Option<&str> {
        edited(&self.nickname, &self.prefilled_nickname)
    }

    fn edited_avatar_uri(&self) -> Option<&str> {
        edited(&self.avatar_uri, &self.prefilled_avatar_uri)
    }
}

fn edited<'a>(value: &'a str, prefilled: &str) -> Option<&'a str> {
    (!value.trim().is_empty() && value.trim() != prefilled.trim()).then_some(value)
}

impl Form for UpdateUserForm {
    type Command = UpdateUser;

    fn validate(&self) -> Result<(), FormErrors> {
        FormErrors::collect([
            rules::PASSWORD.optional().check(Some(&self.password)),
            rules::NICKNAME.optional().check(self.edited_nickname()),
            rules::AVATAR_URI.optional().check(self.edited_avatar_uri()),
        ])
    }

    fn build(&self) -> UpdateUser {
        UpdateUser {
            user_id: self.user_id,
            password: non_blank(&self.password),
            nickname: self.edited_nickname().map(str::to_string),
            avatar_uri: self.edited_avatar_uri().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::Timestamp;

    fn user() -> User {
        let timestamp: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00\"").unwrap();
        User {
            id: 12,
            username: "alice".to_string(),
            nickname: "Alice".to_string(),
            avatar_uri: "https://x.com/a.png".to_string(),
            is_active: true,
            permissions: None,
            groups: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn create_form_should_report_every_invalid_field() {
        let form = CreateUserForm {
            username: "ab".to_string(),
            nickname: "Alice".to_string(),
            password: "pw".to_string(),
            avatar_uri: "https://x.com/a.png".to_string(),
        };

        let errors = form.to_command().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert!(errors.has_field("username"));
        assert!(errors.has_field("password"));
        assert!(!errors.has_field("nickname"));
    }

    #[test]
    fn create_form_should_map_all_four_fields() {
        let form = CreateUserForm {
            username: "alice".to_string(),
            nickname: "Alice".to_string(),
            password: "password1".to_string(),
            avatar_uri: "https://x.com/a.png".to_string(),
        };

        let command = form.to_command().unwrap();
        assert_eq!(command.username, "alice");
        assert_eq!(command.nickname, "Alice");
        assert_eq!(command.password, "password1");
        assert_eq!(command.avatar_uri, "https://x.com/a.png");
    }

    #[test]
    fn update_form_should_be_prefilled_without_password() {
        let form = UpdateUserForm::from_user(&user());
        assert_eq!(form.user_id, 12);
        assert_eq!(form.nickname, "Alice");
        assert_eq!(form.avatar_uri, "https://x.com/a.png");
        assert!(form.password.is_empty());
    }

    #[test]
    fn update_form_should_leave_out_blank_fields() {
        let mut form = UpdateUserForm::from_user(&user());
        form.nickname = "  ".to_string();

        let command = form.to_command().unwrap();
        assert_eq!(command.user_id, 12);
        assert_eq!(command.password, None);
        assert_eq!(command.nickname, None);
        assert_eq!(command.avatar_uri, None);
        assert!(command.is_empty());
    }

    #[test]
    fn update_form_should_send_only_edited_fields() {
        let mut row = user();
        row.avatar_uri = "https://cdn.example.com/avatars/9.png".to_string();
        let mut form = UpdateUserForm::from_user(&row);
        form.nickname = "Renamed".to_string();

        assert!(form.validate().is_ok());
        let command = form.build();
        assert_eq!(command.nickname.as_deref(), Some("Renamed"));
        assert_eq!(command.avatar_uri, None);
        assert_eq!(command.password, None);
    }

    #[test]
    fn update_form_without_prefill_should_send_every_provided_field() {
        let mut form = UpdateUserForm::new(3);
        form.nickname = "Bob".to_string();
        form.avatar_uri = "https://x.com/b.png".to_string();

        let command = form.to_command().unwrap();
        assert_eq!(command.user_id, 3);
        assert_eq!(command.nickname.as_deref(), Some("Bob"));
        assert_eq!(command.avatar_uri.as_deref(), Some("https://x.com/b.png"));
    }

    #[test]
    fn update_form_should_apply_creation_rules_to_provided_fields() {
        let mut form = UpdateUserForm::from_user(&user());
        form.password = "1234".to_string();
        form.nickname = "Al".to_string();

        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("password"));
        assert!(errors.has_field("nickname"));
    }
}
