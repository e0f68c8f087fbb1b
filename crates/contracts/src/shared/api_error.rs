use serde::{Deserialize, Serialize};

/// Error body returned by the API on 4xx/5xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The server message, if it carries any visible text
    pub fn usable_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Credenciales inválidas"}"#).unwrap();
        assert_eq!(body.usable_message(), Some("Credenciales inválidas"));

        let blank: ApiErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(blank.usable_message(), None);

        let missing: ApiErrorBody = serde_json::from_str(r#"{"error":true}"#).unwrap();
        assert_eq!(missing.usable_message(), None);
    }
}
