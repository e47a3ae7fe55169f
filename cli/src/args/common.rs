use clap::ValueEnum;
use gatehouse::cli::output::ListOutput;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ListMode {
    Table,
    List,
}

impl From<ListMode> for ListOutput {
    fn from(mode: ListMode) -> Self {
        match mode {
            ListMode::Table => ListOutput::Table,
            ListMode::List => ListOutput::List,
        }
    }
}
