use serde::{Deserialize, Serialize};

/// A single measured value recorded for a tenant on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "tenantId", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    pub name: String,
    pub value: f64,

    /// ISO date or datetime as stored by the API
    pub date: String,
}

/// Body for `POST /metrics` and `PUT /metrics/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPayload {
    pub name: String,
    pub value: f64,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_reads_mongo_style_id() {
        let json = r#"{"_id":"m1","tenantId":null,"name":"Metric 1","value":10,"date":"2025-09-01"}"#;
        let metric: Metric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.id.as_deref(), Some("m1"));
        assert_eq!(metric.tenant_id, None);
        assert_eq!(metric.value, 10.0);
    }

    #[test]
    fn test_payload_has_only_editable_fields() {
        let payload = MetricPayload {
            name: "Metric 2".to_string(),
            value: 20.0,
            date: "2025-09-15".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "Metric 2", "value": 20.0, "date": "2025-09-15" })
        );
    }
}
