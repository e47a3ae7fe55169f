use crate::forms::FieldError;
use crate::users::defaults::*;
use crate::utils::text;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 256;

/// A client-side constraint on a single form field.
///
/// Rules are advisory: they stop obviously wrong input before a request is
/// issued, the backend still enforces its own constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub url: bool,
    pub message: &'static str,
}

pub const USERNAME: FieldRule = FieldRule {
    field: "username",
    required: true,
    min_length: MIN_USERNAME_LENGTH,
    max_length: MAX_USERNAME_LENGTH,
    url: false,
    message: "Username is required (3 ~ 20 chars)",
};

pub const NICKNAME: FieldRule = FieldRule {
    field: "nickname",
    required: true,
    min_length: MIN_NICKNAME_LENGTH,
    max_length: MAX_NICKNAME_LENGTH,
    url: false,
    message: "Nickname is required (3 ~ 20 chars)",
};

pub const PASSWORD: FieldRule = FieldRule {
    field: "password",
    required: true,
    min_length: MIN_PASSWORD_LENGTH,
    max_length: MAX_PASSWORD_LENGTH,
    url: false,
    message: "Password is required (8 ~ 20 chars)",
};

pub const AVATAR_URI: FieldRule = FieldRule {
    field: "avatar_uri",
    required: true,
    min_length: MIN_AVATAR_URI_LENGTH,
    max_length: MAX_AVATAR_URI_LENGTH,
    url: true,
    message: "Avatar URI is required to be a valid URL",
};

pub const PERMISSION_NAME: FieldRule = FieldRule {
    field: "name",
    required: true,
    min_length: MIN_NAME_LENGTH,
    max_length: MAX_NAME_LENGTH,
    url: false,
    message: "Permission name is required (3 ~ 256 chars)",
};

pub const GROUP_NAME: FieldRule = FieldRule {
    field: "name",
    required: true,
    min_length: MIN_NAME_LENGTH,
    max_length: MAX_NAME_LENGTH,
    url: false,
    message: "Group name is required (3 ~ 256 chars)",
};

impl FieldRule {
    /// Same constraints, but a missing or blank value is accepted.
    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    pub fn check(&self, value: Option<&str>) -> Result<(), FieldError> {
        let value = match value {
            Some(value) if !text::is_blank(value) => value,
            _ => {
                return match self.required {
                    true => Err(self.error()),
                    false => Ok(()),
                }
            }
        };

        if !text::is_length_between(value, self.min_length, self.max_length) {
            return Err(self.error());
        }

        if self.url && !text::is_url_valid(value) {
            return Err(self.error());
        }

        Ok(())
    }

    fn error(&self) -> FieldError {
        FieldError {
            field: self.field,
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rule_should_reject_missing_and_blank_values() {
        assert!(USERNAME.check(None).is_err());
        assert!(USERNAME.check(Some("   ")).is_err());
        assert!(USERNAME.check(Some("alice")).is_ok());
    }

    #[test]
    fn optional_rule_should_accept_missing_value_but_check_provided_one() {
        let rule = PASSWORD.optional();
        assert!(rule.check(None).is_ok());
        assert!(rule.check(Some("")).is_ok());
        assert!(rule.check(Some("short")).is_err());
        assert!(rule.check(Some("long-enough")).is_ok());
    }

    #[test]
    fn avatar_rule_should_require_url_within_bounds() {
        assert!(AVATAR_URI.check(Some("https://x.com/a.png")).is_ok());
        assert!(AVATAR_URI.check(Some("not a url")).is_err());
        assert!(AVATAR_URI
            .check(Some("https://example.com/avatars/alice.png"))
            .is_err());
    }

    #[test]
    fn name_rule_should_allow_up_to_256_characters() {
        assert!(PERMISSION_NAME.check(Some(&"p".repeat(256))).is_ok());
        assert!(PERMISSION_NAME.check(Some(&"p".repeat(257))).is_err());
        assert!(GROUP_NAME.check(Some("ab")).is_err());
    }

    #[test]
    fn error_should_carry_field_and_message() {
        let error = USERNAME.check(Some("ab")).unwrap_err();
        assert_eq!(error.field, "username");
        assert_eq!(error.message, "Username is required (3 ~ 20 chars)");
    }
}
