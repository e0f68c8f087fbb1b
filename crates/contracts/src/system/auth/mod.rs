use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(rename = "tenantName")]
    pub tenant_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// `tempPassword` is only present when the server could not send the reset mail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    #[serde(rename = "tempPassword", default)]
    pub temp_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case_tenant() {
        let request = RegisterRequest {
            name: "Ana".to_string(),
            tenant_name: "Acme".to_string(),
            email: "ana@acme.com".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tenantName"], "Acme");
    }

    #[test]
    fn test_reset_response_without_temp_password() {
        let response: ResetPasswordResponse = serde_json::from_str("{}").unwrap();
        assert!(response.temp_password.is_none());
    }
}
