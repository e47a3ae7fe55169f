use crate::forms::rules;
use crate::forms::{Form, FormErrors};
use crate::permissions::create_permission::CreatePermission;

/// Input of the "new permission" form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreatePermissionForm {
    pub name: String,
}

impl Form for CreatePermissionForm {
    type Command = CreatePermission;

    fn validate(&self) -> Result<(), FormErrors> {
        FormErrors::collect([rules::PERMISSION_NAME.check(Some(&self.name))])
    }

    fn build(&self) -> CreatePermission {
        CreatePermission {
            name: self.name.clone(),
        }
    }
}
