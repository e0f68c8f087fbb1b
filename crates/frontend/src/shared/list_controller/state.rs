use super::pagination::{clamp_page, page_range, total_pages};
use super::{Command, ListEntity, PAGE_SIZE};
use crate::shared::api_client::ApiError;
use crate::shared::list_utils::filter_list;
use crate::shared::notification::{Notice, NoticeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Create,
    Update,
    Delete,
}

/// State of one entity list page: the fetched snapshot, the search term,
/// the page cursor, the create/edit form and the delete confirmation.
///
/// Every operation that needs the network returns a [`Command`]; the caller
/// runs it and reports the outcome through the matching `*_loaded` /
/// `*_settled` method.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E: ListEntity> {
    items: Vec<E>,
    filter: String,
    page: usize,
    editing: Option<E>,
    pub form: E::Form,
    pending_delete: Option<String>,
    modal_open: bool,
    notices: NoticeSlot,
    fetch_seq: u64,
    loading: bool,
    is_loaded: bool,
    in_flight: Option<Mutation>,
}

impl<E: ListEntity> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            page: 1,
            editing: None,
            form: E::Form::default(),
            pending_delete: None,
            modal_open: false,
            notices: NoticeSlot::default(),
            fetch_seq: 0,
            loading: false,
            is_loaded: false,
            in_flight: None,
        }
    }
}

impl<E: ListEntity> ListState<E> {
    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Starts a full reload. Any fetch issued earlier becomes stale.
    pub fn load_list(&mut self) -> Command<E::Payload> {
        self.fetch_seq += 1;
        self.loading = true;
        Command::Fetch {
            seq: self.fetch_seq,
        }
    }

    /// Applies the outcome of fetch `seq`. Outcomes of stale fetches are dropped.
    pub fn list_loaded(&mut self, seq: u64, result: Result<Vec<E>, ApiError>) {
        if seq != self.fetch_seq {
            log::debug!(
                "{}: dropping fetch #{} (latest is #{})",
                E::RESOURCE,
                seq,
                self.fetch_seq
            );
            return;
        }

        self.loading = false;
        self.is_loaded = true;
        match result {
            Ok(items) => {
                log::debug!("{}: loaded {} records", E::RESOURCE, items.len());
                self.items = items;
            }
            Err(e) => {
                log::warn!("{}: list fetch failed: {}", E::RESOURCE, e);
                self.items.clear();
                self.notices.error(E::MESSAGES.load_failed);
            }
        }
        self.clamp_page();
    }

    // ------------------------------------------------------------------
    // Create / update
    // ------------------------------------------------------------------

    /// Submits the form: an update when a record with an id is being
    /// edited, a create otherwise. Returns `None` when there is nothing to
    /// send (another mutation in flight, creation unsupported, invalid form).
    pub fn submit(&mut self) -> Option<Command<E::Payload>> {
        if self.in_flight.is_some() {
            return None;
        }

        let target_id = self
            .editing
            .as_ref()
            .and_then(|record| record.id().map(str::to_string));
        if target_id.is_none() && !E::CAN_CREATE {
            return None;
        }

        let payload = match E::payload(&self.form) {
            Ok(payload) => payload,
            Err(reason) => {
                self.notices
                    .error(format!("{}: {}", E::MESSAGES.save_failed, reason));
                return None;
            }
        };

        Some(match target_id {
            Some(id) => {
                self.in_flight = Some(Mutation::Update);
                Command::Update { id, payload }
            }
            None => {
                self.in_flight = Some(Mutation::Create);
                Command::Create { payload }
            }
        })
    }

    /// Applies the outcome of a create or update. On success the form is
    /// reset and a fresh fetch is returned.
    pub fn submit_settled(&mut self, result: Result<(), ApiError>) -> Option<Command<E::Payload>> {
        let mutation = self.in_flight.take();
        match result {
            Ok(()) => {
                let message = match mutation {
                    Some(Mutation::Update) => E::MESSAGES.updated,
                    _ => E::MESSAGES.created,
                };
                self.notices.success(message);
                self.editing = None;
                self.form = E::Form::default();
                Some(self.load_list())
            }
            Err(e) => {
                log::warn!("{}: save failed: {}", E::RESOURCE, e);
                self.notices.error(failure_text(E::MESSAGES.save_failed, &e));
                None
            }
        }
    }

    pub fn begin_edit(&mut self, record: E) {
        self.form = record.to_form();
        self.editing = Some(record);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = E::Form::default();
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Marks `id` for deletion and opens the confirmation modal. Ignored
    /// while a delete is in flight.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        if self.is_deleting() {
            return;
        }
        self.pending_delete = Some(id.into());
        self.modal_open = true;
    }

    pub fn confirm_delete(&mut self) -> Option<Command<E::Payload>> {
        if self.in_flight.is_some() {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.in_flight = Some(Mutation::Delete);
        Some(Command::Delete { id })
    }

    /// Applies the outcome of a delete. The modal is closed and the pending
    /// id cleared whatever the outcome.
    pub fn delete_settled(&mut self, result: Result<(), ApiError>) -> Option<Command<E::Payload>> {
        self.in_flight = None;
        self.modal_open = false;
        self.pending_delete = None;

        match result {
            Ok(()) => {
                self.notices.success(E::MESSAGES.deleted);
                Some(self.load_list())
            }
            Err(e) => {
                log::warn!("{}: delete failed: {}", E::RESOURCE, e);
                self.notices.error(failure_text(E::MESSAGES.delete_failed, &e));
                None
            }
        }
    }

    /// Closes the modal and forgets the pending id. A confirmed delete
    /// cannot be cancelled; the modal stays open until it settles.
    pub fn cancel_delete(&mut self) {
        if self.is_deleting() {
            return;
        }
        self.modal_open = false;
        self.pending_delete = None;
    }

    // ------------------------------------------------------------------
    // Search & pagination
    // ------------------------------------------------------------------

    pub fn set_filter_term(&mut self, term: impl Into<String>) {
        self.filter = term.into();
        self.clamp_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    fn clamp_page(&mut self) {
        self.page = clamp_page(self.page, self.total_pages());
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self, seq: u64) {
        self.notices.dismiss(seq);
    }

    // ------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn filter_term(&self) -> &str {
        &self.filter
    }

    pub fn filtered(&self) -> Vec<&E> {
        filter_list(&self.items, &self.filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// 0 when the filtered collection is empty
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Records on the current page
    pub fn visible(&self) -> Vec<E> {
        let filtered = self.filtered();
        let range = page_range(self.page, PAGE_SIZE, filtered.len());
        filtered[range].iter().map(|record| (*record).clone()).collect()
    }

    pub fn editing(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.in_flight == Some(Mutation::Delete)
    }
}

/// Fixed failure text, followed by the server's own message when it sent one
fn failure_text(fallback: &str, error: &ApiError) -> String {
    match error.server_message() {
        Some(message) => format!("{fallback}: {message}"),
        None => fallback.to_string(),
    }
}
