//! User records as exchanged with the remote user API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A login session belonging to a user. The server returns sessions newest
/// first, so the first entry is the most recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub start_time: DateTime<Utc>,
}

/// A device a user has logged in from, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
}

/// A user record. The remote store owns the canonical copy; everything the
/// client holds is a read-through snapshot that may be stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned, immutable once created.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Write-only; the server never echoes it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Sessions", default)]
    pub sessions: Vec<Session>,
    #[serde(rename = "Devices", default)]
    pub devices: Vec<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Start time of the most recent session, if any.
    #[must_use]
    pub fn last_active_time(&self) -> Option<DateTime<Utc>> {
        self.sessions.first().map(|s| s.start_time)
    }

    /// Name of the most recently used device, if any.
    #[must_use]
    pub fn last_device(&self) -> Option<&str> {
        self.devices.first().map(|d| d.name.as_str())
    }

    /// A user is active when it has at least one recorded session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.sessions.is_empty()
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a user. The server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Partial update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: None,
            sessions: vec![
                Session {
                    start_time: Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap(),
                },
                Session {
                    start_time: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
                },
            ],
            devices: vec![Device {
                name: "Pixel 8".into(),
            }],
            created_at: Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_last_active_time_uses_first_session() {
        let user = sample_user();
        assert_eq!(
            user.last_active_time(),
            Some(Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap())
        );
        assert_eq!(user.last_device(), Some("Pixel 8"));
        assert!(user.is_active());
    }

    #[test]
    fn test_user_without_sessions_is_inactive() {
        let user = User {
            sessions: vec![],
            devices: vec![],
            ..sample_user()
        };
        assert_eq!(user.last_active_time(), None);
        assert_eq!(user.last_device(), None);
        assert!(!user.is_active());
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("firstName").is_some());
        assert!(value.get("lastName").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("Sessions").is_some());
        assert!(value.get("Devices").is_some());
        assert!(value["Sessions"][0].get("start_time").is_some());
        // Absent password never serializes
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_deserializes_record_with_missing_collections() {
        let user: User = serde_json::from_str(
            r#"{"id":"u2","firstName":"Grace","lastName":"Hopper","email":"grace@example.com"}"#,
        )
        .unwrap();
        assert!(user.sessions.is_empty());
        assert!(user.devices.is_empty());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_partial_update_skips_unset_fields() {
        let update = UserUpdate {
            email: Some("new@example.com".into()),
            ..UserUpdate::default()
        };
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["email"], "new@example.com");
    }
}
