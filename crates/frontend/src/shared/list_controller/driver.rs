use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Command, ListEntity, ListState};
use crate::shared::api_client::ApiError;

/// REST endpoints backing a list page
#[allow(async_fn_in_trait)]
pub trait EntityApi: ListEntity {
    async fn fetch_all() -> Result<Vec<Self>, ApiError>;

    async fn create(_payload: Self::Payload) -> Result<(), ApiError> {
        Err(ApiError::Status(405))
    }

    async fn update(id: String, payload: Self::Payload) -> Result<(), ApiError>;

    async fn delete(id: String) -> Result<(), ApiError>;
}

/// Reactive handle over a [`ListState`] that executes the commands it returns.
pub struct ListController<E: ListEntity> {
    state: RwSignal<ListState<E>>,
}

impl<E: ListEntity> Clone for ListController<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ListEntity> Copy for ListController<E> {}

impl<E: EntityApi> ListController<E> {
    /// Creates the controller and starts the initial fetch
    pub fn new() -> Self {
        let controller = Self {
            state: RwSignal::new(ListState::default()),
        };
        controller.load_list();
        controller
    }

    pub fn state(&self) -> RwSignal<ListState<E>> {
        self.state
    }

    pub fn load_list(self) {
        let command = self.state.try_update(|s| s.load_list());
        self.run(command);
    }

    pub fn submit(self) {
        let command = self.state.try_update(|s| s.submit()).flatten();
        self.run(command);
    }

    pub fn begin_edit(self, record: E) {
        self.state.update(|s| s.begin_edit(record));
    }

    pub fn cancel_edit(self) {
        self.state.update(|s| s.cancel_edit());
    }

    pub fn update_form(self, edit: impl FnOnce(&mut E::Form)) {
        self.state.update(|s| edit(&mut s.form));
    }

    pub fn request_delete(self, id: String) {
        self.state.update(|s| s.request_delete(id));
    }

    pub fn confirm_delete(self) {
        let command = self.state.try_update(|s| s.confirm_delete()).flatten();
        self.run(command);
    }

    pub fn cancel_delete(self) {
        self.state.update(|s| s.cancel_delete());
    }

    pub fn set_filter_term(self, term: String) {
        self.state.update(|s| s.set_filter_term(term));
    }

    pub fn set_page(self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn dismiss_notice(self, seq: u64) {
        self.state.update(|s| s.dismiss_notice(seq));
    }

    /// Executes `command` and keeps going while the settled state asks for
    /// more. The state may be gone by the time a request settles (page
    /// unmounted); `try_update` then drops the result.
    fn run(self, command: Option<Command<E::Payload>>) {
        let Some(command) = command else {
            return;
        };

        spawn_local(async move {
            let next = match command {
                Command::Fetch { seq } => {
                    let result = E::fetch_all().await;
                    self.state.try_update(|s| s.list_loaded(seq, result));
                    None
                }
                Command::Create { payload } => {
                    let result = E::create(payload).await;
                    self.state.try_update(|s| s.submit_settled(result)).flatten()
                }
                Command::Update { id, payload } => {
                    let result = E::update(id, payload).await;
                    self.state.try_update(|s| s.submit_settled(result)).flatten()
                }
                Command::Delete { id } => {
                    let result = E::delete(id).await;
                    self.state.try_update(|s| s.delete_settled(result)).flatten()
                }
            };
            self.run(next);
        });
    }
}
