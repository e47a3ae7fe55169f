use crate::console::columns::Column;
use std::fmt::Display;

/// Read-only projection of a single row, built from the list columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

impl DetailView {
    pub fn new<T>(title: impl Into<String>, columns: &[Column<T>], row: &T) -> Self {
        Self {
            title: title.into(),
            fields: columns
                .iter()
                .map(|column| (column.title, column.render(row)))
                .collect(),
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == title)
            .map(|(_, value)| value.as_str())
    }
}

impl Display for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        let width = self
            .fields
            .iter()
            .map(|(title, _)| title.len())
            .max()
            .unwrap_or_default();
        for (title, value) in &self.fields {
            writeln!(f, "  {title:<width$}  {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::columns::group_columns;
    use crate::models::group::Group;

    #[test]
    fn detail_should_use_list_columns() {
        let group = Group {
            id: 4,
            name: "admins".to_string(),
            created_at: None,
            updated_at: None,
        };

        let detail = DetailView::new("admins", &group_columns(), &group);
        assert_eq!(detail.fields.len(), 4);
        assert_eq!(detail.get("Group ID"), Some("4"));
        assert_eq!(detail.get("Group Name"), Some("admins"));
        assert_eq!(detail.get("Missing"), None);
        assert!(detail.to_string().starts_with("admins\n"));
    }
}
