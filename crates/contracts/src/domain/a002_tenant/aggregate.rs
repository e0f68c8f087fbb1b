use serde::{Deserialize, Serialize};

use crate::enums::plan::Plan;

/// A company or startup workspace owning its own metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
    pub plan: Plan,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for `POST /tenants` and `PUT /tenants/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantPayload {
    pub name: String,
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_wire_names() {
        let json = r#"{"_id":"t1","name":"Acme","plan":"pro","createdAt":"2025-01-02T10:00:00.000Z"}"#;
        let tenant: Tenant = serde_json::from_str(json).unwrap();
        assert_eq!(tenant.id.as_deref(), Some("t1"));
        assert_eq!(tenant.plan, Plan::Pro);
        assert_eq!(tenant.created_at, "2025-01-02T10:00:00.000Z");
    }

    #[test]
    fn test_tenant_without_id_omits_it() {
        let tenant = Tenant {
            id: None,
            name: "Acme".to_string(),
            plan: Plan::Free,
            created_at: String::new(),
        };
        let value = serde_json::to_value(&tenant).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["plan"], "free");
    }
}
