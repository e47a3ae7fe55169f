use crate::forms::rules;
use crate::forms::{Form, FormErrors};
use crate::groups::create_group::CreateGroup;

/// Input of the "new group" form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreateGroupForm {
    pub name: String,
}

impl Form for CreateGroupForm {
    type Command = CreateGroup;

    fn validate(&self) -> Result<(), FormErrors> {
        FormErrors::collect([rules::GROUP_NAME.check(Some(&self.name))])
    }

    fn build(&self) -> CreateGroup {
        CreateGroup {
            name: self.name.clone(),
        }
    }
}
