//! List management shared by the metrics, tenants and users pages.
//!
//! A page owns one [`ListController`] per entity. The controller keeps a
//! [`ListState`] in a signal; state transitions are plain synchronous
//! methods that hand back a [`Command`] whenever the server has to be
//! involved. The controller runs the command on the browser event loop and
//! feeds the settled result back into the state, which may in turn ask for
//! the follow-up refetch.
//!
//! Refetches carry a sequence number and only the latest one may replace the
//! snapshot, so the list shown after a mutation always comes from a fetch
//! issued after that mutation was acknowledged.

mod driver;
pub mod pagination;
mod state;

pub use driver::{EntityApi, ListController};
pub use state::ListState;

use crate::shared::list_utils::Searchable;

/// Records per page on every list page
pub const PAGE_SIZE: usize = 5;

/// User-facing texts of one entity list
#[derive(Debug, Clone, Copy)]
pub struct EntityMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub load_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
}

/// A record type managed through a list page
pub trait ListEntity:
    Searchable + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// Editable form fields, as typed by the user
    type Form: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;
    /// Body sent on create and update
    type Payload: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    /// Short name used in logs
    const RESOURCE: &'static str;
    const MESSAGES: EntityMessages;
    /// Whether the form can create new records (users are edit-only)
    const CAN_CREATE: bool = true;

    /// Server identifier; absent before creation
    fn id(&self) -> Option<&str>;

    /// Copies the record into form fields for editing
    fn to_form(&self) -> Self::Form;

    /// Validates the form and builds the request body
    fn payload(form: &Self::Form) -> Result<Self::Payload, String>;
}

/// Network work requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Command<P> {
    Fetch { seq: u64 },
    Create { payload: P },
    Update { id: String, payload: P },
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use crate::shared::notification::NoticeKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<String>,
        name: String,
        date: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct ItemForm {
        name: String,
        date: String,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    impl ListEntity for Item {
        type Form = ItemForm;
        type Payload = ItemForm;

        const RESOURCE: &'static str = "items";
        const MESSAGES: EntityMessages = EntityMessages {
            created: "Item creado",
            updated: "Item actualizado",
            deleted: "Item eliminado",
            load_failed: "Error al cargar items",
            save_failed: "Error al guardar item",
            delete_failed: "Error al eliminar item",
        };

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn to_form(&self) -> ItemForm {
            ItemForm {
                name: self.name.clone(),
                date: self.date.chars().take(10).collect(),
            }
        }

        fn payload(form: &ItemForm) -> Result<ItemForm, String> {
            if form.name.trim().is_empty() {
                return Err("nombre vacío".to_string());
            }
            Ok(form.clone())
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct EditOnly(Item);

    impl Searchable for EditOnly {
        fn search_fields(&self) -> Vec<&str> {
            self.0.search_fields()
        }
    }

    impl ListEntity for EditOnly {
        type Form = ItemForm;
        type Payload = ItemForm;

        const RESOURCE: &'static str = "edit-only";
        const MESSAGES: EntityMessages = Item::MESSAGES;
        const CAN_CREATE: bool = false;

        fn id(&self) -> Option<&str> {
            self.0.id()
        }

        fn to_form(&self) -> ItemForm {
            self.0.to_form()
        }

        fn payload(form: &ItemForm) -> Result<ItemForm, String> {
            Item::payload(form)
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: Some(id.to_string()),
            name: name.to_string(),
            date: "2025-09-01T00:00:00.000Z".to_string(),
        }
    }

    fn items(count: usize) -> Vec<Item> {
        (1..=count)
            .map(|i| item(&format!("i{i}"), &format!("Item {i}")))
            .collect()
    }

    /// State after the initial mount fetch settled with `records`
    fn loaded(records: Vec<Item>) -> ListState<Item> {
        let mut state = ListState::default();
        let Command::Fetch { seq } = state.load_list() else {
            panic!("expected fetch");
        };
        state.list_loaded(seq, Ok(records));
        state
    }

    fn server_error(message: &str) -> ApiError {
        ApiError::Server {
            status: 400,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_create_issues_payload_then_exactly_one_fetch() {
        let mut state = loaded(Vec::new());
        state.form = ItemForm {
            name: "Metric 2".to_string(),
            date: "2025-09-15".to_string(),
        };

        let command = state.submit();
        assert_eq!(
            command,
            Some(Command::Create {
                payload: ItemForm {
                    name: "Metric 2".to_string(),
                    date: "2025-09-15".to_string(),
                }
            })
        );

        let follow_up = state.submit_settled(Ok(()));
        assert!(matches!(follow_up, Some(Command::Fetch { .. })));
        assert_eq!(state.form, ItemForm::default());
        assert!(!state.is_editing());

        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains("creado"));
    }

    #[test]
    fn test_edit_prefills_and_updates_by_id() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);

        state.begin_edit(state.items()[0].clone());
        assert_eq!(state.form.name, "Metric 1");
        assert_eq!(state.form.date, "2025-09-01");

        state.form.name = "Metric 1 updated".to_string();
        let command = state.submit();
        assert_eq!(
            command,
            Some(Command::Update {
                id: "m1".to_string(),
                payload: ItemForm {
                    name: "Metric 1 updated".to_string(),
                    date: "2025-09-01".to_string(),
                },
            })
        );

        let follow_up = state.submit_settled(Ok(()));
        assert!(matches!(follow_up, Some(Command::Fetch { .. })));
        assert!(state.notice().unwrap().message.contains("actualizado"));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_failed_submit_keeps_form_and_snapshot() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);
        state.form.name = "Nuevo".to_string();

        assert!(state.submit().is_some());
        let follow_up = state.submit_settled(Err(server_error("Nombre duplicado")));

        assert_eq!(follow_up, None);
        assert_eq!(state.form.name, "Nuevo");
        assert_eq!(state.items().len(), 1);
        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Error al guardar item: Nombre duplicado");
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let mut state = loaded(Vec::new());
        assert_eq!(state.submit(), None);
        assert_eq!(state.notice().unwrap().kind, NoticeKind::Error);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut state = loaded(Vec::new());
        state.form.name = "A".to_string();
        assert!(state.submit().is_some());
        assert_eq!(state.submit(), None);
        state.submit_settled(Ok(()));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_edit_only_entity_never_creates() {
        let mut state: ListState<EditOnly> = ListState::default();
        state.form.name = "Alguien".to_string();
        assert_eq!(state.submit(), None);

        state.begin_edit(EditOnly(item("u1", "Ana")));
        assert!(matches!(state.submit(), Some(Command::Update { id, .. }) if id == "u1"));
    }

    #[test]
    fn test_delete_flow_confirm() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);

        state.request_delete("m1");
        assert!(state.is_modal_open());
        assert_eq!(state.pending_delete(), Some("m1"));

        let command = state.confirm_delete();
        assert_eq!(command, Some(Command::Delete { id: "m1".to_string() }));

        let follow_up = state.delete_settled(Ok(()));
        assert!(matches!(follow_up, Some(Command::Fetch { .. })));
        assert!(!state.is_modal_open());
        assert_eq!(state.pending_delete(), None);
        assert!(state.notice().unwrap().message.contains("eliminado"));
    }

    #[test]
    fn test_failed_delete_still_closes_modal() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);
        state.request_delete("m1");
        state.confirm_delete();

        let follow_up = state.delete_settled(Err(ApiError::Network("offline".to_string())));
        assert_eq!(follow_up, None);
        assert!(!state.is_modal_open());
        assert_eq!(state.pending_delete(), None);
        assert_eq!(state.notice().unwrap().message, "Error al eliminar item");
    }

    #[test]
    fn test_cancel_delete_issues_nothing() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);
        state.request_delete("m1");
        state.cancel_delete();

        assert!(!state.is_modal_open());
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn test_in_flight_delete_cannot_be_cancelled() {
        let mut state = loaded(vec![item("a", "A"), item("b", "B")]);
        state.request_delete("a");
        assert_eq!(state.confirm_delete(), Some(Command::Delete { id: "a".to_string() }));

        // overlay click or Escape while the request runs
        state.cancel_delete();
        assert!(state.is_modal_open());
        assert_eq!(state.pending_delete(), Some("a"));

        state.request_delete("b");
        assert_eq!(state.pending_delete(), Some("a"));
        assert_eq!(state.confirm_delete(), None);

        let follow_up = state.delete_settled(Ok(()));
        assert!(matches!(follow_up, Some(Command::Fetch { .. })));
        assert!(!state.is_modal_open());

        // b can be deleted once a has settled
        state.request_delete("b");
        assert_eq!(state.confirm_delete(), Some(Command::Delete { id: "b".to_string() }));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut state = loaded(vec![item("m1", "Metric 1")]);
        let before = state.clone();

        state.cancel_edit();
        state.cancel_delete();
        assert_eq!(state, before);

        state.cancel_edit();
        state.cancel_delete();
        assert_eq!(state, before);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut state = loaded(vec![item("m1", "Old")]);

        let Command::Fetch { seq: early } = state.load_list() else {
            panic!("expected fetch");
        };
        let Command::Fetch { seq: late } = state.load_list() else {
            panic!("expected fetch");
        };

        state.list_loaded(late, Ok(vec![item("m1", "Fresh"), item("m2", "New")]));
        state.list_loaded(early, Ok(vec![item("m1", "Old")]));

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[0].name, "Fresh");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_fetch_empties_snapshot() {
        let mut state = loaded(items(7));
        state.set_page(2);

        let Command::Fetch { seq } = state.load_list() else {
            panic!("expected fetch");
        };
        state.list_loaded(seq, Err(ApiError::Status(500)));

        assert!(state.items().is_empty());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.notice().unwrap().message, "Error al cargar items");
    }

    #[test]
    fn test_twelve_records_paginate_by_five() {
        let mut state = loaded(items(12));
        assert_eq!(state.total_pages(), 3);

        let names = |s: &ListState<Item>| s.visible().into_iter().map(|i| i.name).collect::<Vec<_>>();

        assert_eq!(names(&state).first().map(String::as_str), Some("Item 1"));
        assert_eq!(state.visible().len(), 5);

        state.set_page(2);
        assert_eq!(names(&state), vec!["Item 6", "Item 7", "Item 8", "Item 9", "Item 10"]);

        state.set_page(3);
        assert_eq!(names(&state), vec!["Item 11", "Item 12"]);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = loaded(items(12));
        state.set_page(10);
        assert_eq!(state.current_page(), 3);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_filter_change_reclamps_cursor() {
        let mut state = loaded(items(12));
        state.set_page(3);

        state.set_filter_term("item 1");
        // "Item 1", "Item 10", "Item 11", "Item 12"
        assert_eq!(state.filtered_count(), 4);
        assert_eq!(state.current_page(), 1);

        state.set_filter_term("nothing matches");
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.current_page(), 1);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_shrinking_collection_reclamps_cursor() {
        let mut state = loaded(items(12));
        state.set_page(3);

        let Command::Fetch { seq } = state.load_list() else {
            panic!("expected fetch");
        };
        state.list_loaded(seq, Ok(items(6)));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut state = loaded(Vec::new());
        state.request_delete("x");
        state.confirm_delete();
        state.delete_settled(Ok(()));

        let seq = state.notice().unwrap().seq;
        state.dismiss_notice(seq);
        assert!(state.notice().is_none());
    }
}
