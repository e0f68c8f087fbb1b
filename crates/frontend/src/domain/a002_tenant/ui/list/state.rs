use contracts::domain::a002_tenant::aggregate::{Tenant, TenantPayload};
use contracts::enums::plan::Plan;

use crate::shared::list_controller::{EntityMessages, ListEntity};
use crate::shared::list_utils::Searchable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantForm {
    pub name: String,
    pub plan: Plan,
}

impl Searchable for Tenant {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.plan.code()]
    }
}

impl ListEntity for Tenant {
    type Form = TenantForm;
    type Payload = TenantPayload;

    const RESOURCE: &'static str = "tenants";
    const MESSAGES: EntityMessages = EntityMessages {
        created: "Tenant creado",
        updated: "Tenant actualizado",
        deleted: "Tenant eliminado",
        load_failed: "Error al cargar tenants",
        save_failed: "Error al guardar tenant",
        delete_failed: "Error al eliminar tenant",
    };

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_form(&self) -> TenantForm {
        TenantForm {
            name: self.name.clone(),
            plan: self.plan,
        }
    }

    fn payload(form: &TenantForm) -> Result<TenantPayload, String> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err("el nombre es obligatorio".to_string());
        }
        Ok(TenantPayload {
            name: name.to_string(),
            plan: form.plan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::{Command, ListState};
    use crate::shared::list_utils::filter_list;

    fn tenant(id: &str, name: &str, plan: Plan) -> Tenant {
        Tenant {
            id: Some(id.to_string()),
            name: name.to_string(),
            plan,
            created_at: "2025-01-10T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_search_by_name_or_plan() {
        let tenants = vec![
            tenant("t1", "Acme", Plan::Pro),
            tenant("t2", "Globex", Plan::Free),
        ];
        assert_eq!(filter_list(&tenants, "glob").len(), 1);
        assert_eq!(filter_list(&tenants, "PRO")[0].name, "Acme");
    }

    #[test]
    fn test_edit_keeps_plan_and_updates_by_id() {
        let mut state = ListState::<Tenant>::default();
        state.begin_edit(tenant("t1", "Acme", Plan::Pro));
        assert_eq!(state.form.plan, Plan::Pro);

        state.form.name = "Acme Labs".into();
        assert_eq!(
            state.submit(),
            Some(Command::Update {
                id: "t1".into(),
                payload: TenantPayload {
                    name: "Acme Labs".into(),
                    plan: Plan::Pro,
                },
            })
        );
    }

    #[test]
    fn test_new_tenant_defaults_to_free() {
        let mut state = ListState::<Tenant>::default();
        state.form.name = "Initech".into();
        match state.submit() {
            Some(Command::Create { payload }) => assert_eq!(payload.plan, Plan::Free),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut state = ListState::<Tenant>::default();
        state.form.name = "   ".into();
        assert_eq!(state.submit(), None);
        assert!(state.notice().is_some());
    }
}
