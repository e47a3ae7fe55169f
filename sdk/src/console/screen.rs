use crate::console::detail::DetailView;
use crate::console::notifier::*;
use crate::console::resource::{Activatable, Editable, Resource};
use crate::forms::Form;
use crate::models::page::{PageRequest, MAX_PAGE_SIZE};
use tracing::{debug, error};

/// State of a single list-and-mutate screen.
///
/// Methods take `&mut self`, so at most one flow runs on a screen at a time and
/// every mutation has finished before its reload is issued.
pub struct Screen<R: Resource, N: Notifier = TracingNotifier> {
    resource: R,
    notifier: N,
    page: PageRequest,
    rows: Vec<R::Row>,
    total: u64,
    selected: Vec<u32>,
    current_row: Option<R::Row>,
    create_modal_open: bool,
    update_modal_open: bool,
    detail_open: bool,
}

impl<R: Resource> Screen<R> {
    pub fn new(resource: R, page_size: u32) -> Self {
        Self::with_notifier(resource, TracingNotifier, page_size)
    }
}

impl<R: Resource, N: Notifier> Screen<R, N> {
    pub fn with_notifier(resource: R, notifier: N, page_size: u32) -> Self {
        Self {
            resource,
            notifier,
            page: PageRequest::first(page_size),
            rows: Vec::new(),
            total: 0,
            selected: Vec::new(),
            current_row: None,
            create_modal_open: false,
            update_modal_open: false,
            detail_open: false,
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn rows(&self) -> &[R::Row] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn row(&self, id: u32) -> Option<&R::Row> {
        self.rows.iter().find(|row| R::id(row) == id)
    }

    pub fn current_row(&self) -> Option<&R::Row> {
        self.current_row.as_ref()
    }

    pub fn is_create_modal_open(&self) -> bool {
        self.create_modal_open
    }

    pub fn is_update_modal_open(&self) -> bool {
        self.update_modal_open
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    /// Selects a row of the loaded page. Returns false for unknown rows.
    pub fn select(&mut self, id: u32) -> bool {
        if self.row(id).is_none() {
            return false;
        }

        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
        true
    }

    pub fn deselect(&mut self, id: u32) {
        self.selected.retain(|selected| *selected != id);
    }

    pub fn select_all(&mut self) {
        self.selected = self.rows.iter().map(R::id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Loads the current page again. On failure the previous rows are kept.
    pub async fn reload(&mut self) -> bool {
        debug!(
            "Loading {} list, page: {}, page size: {}",
            R::NAME,
            self.page.current,
            self.page.page_size
        );
        match self.resource.list(&self.page).await {
            Ok(page) => {
                self.rows = page.data;
                self.total = page.total;
                let rows = &self.rows;
                self.selected
                    .retain(|id| rows.iter().any(|row| R::id(row) == *id));
                true
            }
            Err(error) => {
                error!("Cannot load {} list: {error}", R::NAME);
                self.notifier.error(LOADING_FAILED);
                false
            }
        }
    }

    /// Goes back to the first page and loads it.
    pub async fn reload_and_reset(&mut self) -> bool {
        self.page.current = 1;
        self.reload().await
    }

    pub async fn go_to_page(&mut self, current: u32) -> bool {
        if current == 0 {
            self.notifier.warning("Page numbers start at 1");
            return false;
        }

        self.page.current = current;
        self.reload().await
    }

    /// Changes the page size and goes back to the first page.
    pub async fn set_page_size(&mut self, page_size: u32) -> bool {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            self.notifier
                .warning(&format!("Page size must be between 1 and {MAX_PAGE_SIZE}"));
            return false;
        }

        self.page = PageRequest::first(page_size);
        self.reload().await
    }

    pub fn open_create(&mut self) -> R::CreateForm {
        self.create_modal_open = true;
        R::CreateForm::default()
    }

    pub fn close_create(&mut self) {
        self.create_modal_open = false;
    }

    /// Validates the form and adds the row. On success the modal is closed and
    /// the current page is loaded again, on failure the modal stays open.
    pub async fn submit_create(&mut self, form: &R::CreateForm) -> bool {
        let command = match form.to_command() {
            Ok(command) => command,
            Err(errors) => {
                self.notifier.warning(&errors.to_string());
                return false;
            }
        };

        let result = {
            let _loading = Loading::show(&self.notifier, ADDING);
            self.resource.create(&command).await
        };
        if let Err(error) = result {
            error!("Cannot add {}: {error}", R::NAME);
            self.notifier.error(ADDING_FAILED);
            return false;
        }

        self.notifier.success(ADDED);
        self.create_modal_open = false;
        self.reload().await;
        true
    }

    /// Deletes all selected rows in a single request. The selection is cleared
    /// and the first page is loaded again whatever the outcome.
    pub async fn delete_selected(&mut self) -> bool {
        if self.selected.is_empty() {
            self.notifier.warning(NOTHING_SELECTED);
            return false;
        }

        let ids = self.selected.clone();
        let result = {
            let _loading = Loading::show(&self.notifier, DELETING);
            self.resource.delete(ids).await
        };
        let deleted = match result {
            Ok(()) => {
                self.notifier.success(DELETED);
                true
            }
            Err(error) => {
                error!("Cannot delete {} list: {error}", R::NAME);
                self.notifier.error(DELETE_FAILED);
                false
            }
        };

        self.selected.clear();
        self.reload_and_reset().await;
        deleted
    }

    /// Opens the read-only view of an already loaded row.
    pub fn show_detail(&mut self, row: R::Row) {
        self.current_row = Some(row);
        self.detail_open = true;
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
        self.current_row = None;
    }

    pub fn detail(&self) -> Option<DetailView> {
        if !self.detail_open {
            return None;
        }

        let row = self.current_row.as_ref()?;
        Some(DetailView::new(
            format!("{} {}", R::NAME, R::id(row)),
            &R::columns(),
            row,
        ))
    }
}

impl<R: Editable, N: Notifier> Screen<R, N> {
    /// Targets the row and returns the update form filled from it.
    pub fn open_update(&mut self, row: R::Row) -> R::UpdateForm {
        let form = R::prefill(&row);
        self.current_row = Some(row);
        self.update_modal_open = true;
        form
    }

    pub async fn submit_update(&mut self, form: &R::UpdateForm) -> bool {
        let command = match form.to_command() {
            Ok(command) => command,
            Err(errors) => {
                self.notifier.warning(&errors.to_string());
                return false;
            }
        };

        let result = {
            let _loading = Loading::show(&self.notifier, CONFIGURING);
            self.resource.update(&command).await
        };
        if let Err(error) = result {
            error!("Cannot update {}: {error}", R::NAME);
            self.notifier.error(CONFIGURATION_FAILED);
            return false;
        }

        self.notifier.success(CONFIGURED);
        self.update_modal_open = false;
        self.current_row = None;
        self.reload().await;
        true
    }

    /// Closes the update modal. The targeted row survives when the detail view shows it.
    pub fn cancel_update(&mut self) {
        self.update_modal_open = false;
        if !self.detail_open {
            self.current_row = None;
        }
    }
}

impl<R: Activatable, N: Notifier> Screen<R, N> {
    /// Deactivates an active row and activates an inactive one, judged by the
    /// loaded row. The page is loaded again once the call has finished.
    pub async fn toggle_active(&mut self, row: &R::Row) -> bool {
        let id = R::id(row);
        let active = R::is_active(row);
        let result = {
            let message = if active { DEACTIVATING } else { ACTIVATING };
            let _loading = Loading::show(&self.notifier, message);
            if active {
                self.resource.deactivate(id).await
            } else {
                self.resource.activate(id).await
            }
        };

        let changed = match result {
            Ok(()) => {
                self.notifier
                    .success(if active { DEACTIVATED } else { ACTIVATED });
                true
            }
            Err(error) => {
                error!("Cannot change status of {} with ID: {id}: {error}", R::NAME);
                self.notifier.error(STATUS_CHANGE_FAILED);
                false
            }
        };

        self.reload().await;
        changed
    }
}
