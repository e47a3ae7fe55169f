use crate::cli_command::PRINT_TARGET;
use crate::console::columns::{render_row, titles, Column};
use crate::models::page::Page;
use comfy_table::Table;
use tracing::{event, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutput {
    Table,
    List,
}

impl ListOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOutput::Table => "table",
            ListOutput::List => "list",
        }
    }
}

pub fn build_table<T>(columns: &[Column<T>], rows: &[T]) -> Table {
    let mut table = Table::new();
    table.set_header(titles(columns));
    rows.iter().for_each(|row| {
        table.add_row(render_row(columns, row));
    });
    table
}

/// Prints a page of rows with the given columns, `name` is the plural used in messages.
pub fn print_page<T>(name: &str, columns: &[Column<T>], page: &Page<T>, output: ListOutput) {
    if page.is_empty() {
        event!(target: PRINT_TARGET, Level::INFO, "No {name} found!");
        return;
    }

    match output {
        ListOutput::Table => {
            let table = build_table(columns, &page.data);
            event!(target: PRINT_TARGET, Level::INFO, "{table}");
            event!(target: PRINT_TARGET, Level::INFO, "Total: {}", page.total);
        }
        ListOutput::List => {
            page.data.iter().for_each(|row| {
                event!(target: PRINT_TARGET, Level::INFO, "{}", render_row(columns, row).join("|"));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::columns::permission_columns;
    use crate::models::permission::Permission;

    #[test]
    fn table_should_contain_header_and_rows() {
        let rows = vec![Permission {
            id: 9,
            name: "groups.write".to_string(),
            created_at: None,
            updated_at: None,
        }];

        let table = build_table(&permission_columns(), &rows).to_string();
        assert!(table.contains("Permission Name"));
        assert!(table.contains("groups.write"));
    }
}
