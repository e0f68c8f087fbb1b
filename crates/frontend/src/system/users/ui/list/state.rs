use contracts::enums::role::Role;
use contracts::system::users::{User, UserPayload};

use crate::shared::list_controller::{EntityMessages, ListEntity};
use crate::shared::list_utils::Searchable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl ListEntity for User {
    type Form = UserForm;
    type Payload = UserPayload;

    const RESOURCE: &'static str = "users";
    const MESSAGES: EntityMessages = EntityMessages {
        created: "Usuario creado",
        updated: "Usuario actualizado",
        deleted: "Usuario eliminado",
        load_failed: "Error al cargar usuarios",
        save_failed: "Error al actualizar usuario",
        delete_failed: "Error al eliminar usuario",
    };
    const CAN_CREATE: bool = false;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    fn payload(form: &UserForm) -> Result<UserPayload, String> {
        let name = form.name.trim();
        let email = form.email.trim();
        if name.is_empty() {
            return Err("el nombre es obligatorio".to_string());
        }
        if !email.contains('@') {
            return Err("el email no es válido".to_string());
        }
        Ok(UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            role: form.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::{Command, ListState};

    fn user(id: &str, name: &str, role: Role) -> User {
        User {
            id: Some(id.to_string()),
            name: name.to_string(),
            email: format!("{}@acme.com", name.to_lowercase()),
            role,
            created_at: "2025-02-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_submit_without_edit_does_nothing() {
        let mut state = ListState::<User>::default();
        state.form = UserForm {
            name: "Ana".into(),
            email: "ana@acme.com".into(),
            role: Role::Analyst,
        };
        assert_eq!(state.submit(), None);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_role_change_is_sent_to_update() {
        let mut state = ListState::<User>::default();
        state.begin_edit(user("u7", "Ana", Role::Viewer));
        state.form.role = Role::Analyst;

        assert_eq!(
            state.submit(),
            Some(Command::Update {
                id: "u7".into(),
                payload: UserPayload {
                    name: "Ana".into(),
                    email: "ana@acme.com".into(),
                    role: Role::Analyst,
                },
            })
        );
    }

    #[test]
    fn test_failed_update_uses_user_wording() {
        let mut state = ListState::<User>::default();
        state.begin_edit(user("u7", "Ana", Role::Viewer));
        state.submit();
        state.submit_settled(Err(crate::shared::api_client::ApiError::Status(500)));

        let notice = state.notice().expect("error notice");
        assert_eq!(notice.message, "Error al actualizar usuario");
        assert!(state.is_editing());
    }
}
