use serde::{Deserialize, Serialize};

use crate::enums::role::Role;

/// Row of `GET /users/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Body for `PUT /users/update/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The signed-in user, as returned by `GET /users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// Body for `PUT /users/profile/{id}`. An empty password keeps the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(rename = "updatedUser")]
    pub updated_user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_me_endpoint() {
        let json = r#"{"_id":"u1","name":"Admin","email":"a@a.com","role":"admin"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.role, Role::Admin);
    }

    #[test]
    fn test_profile_update_response() {
        let json = r#"{"updatedUser":{"_id":"u1","name":"New","email":"n@a.com","role":"viewer"}}"#;
        let response: ProfileUpdateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.updated_user.name, "New");
    }
}
