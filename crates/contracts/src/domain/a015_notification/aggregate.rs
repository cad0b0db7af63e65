use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

pub const NOTIFICATIONS_PATH: &str = "/api/notifications";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, with = "lenient::flag")]
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    /// Body when present, otherwise the title.
    pub fn text(&self) -> String {
        self.body
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .or(self.title.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.sent_at.as_deref().or(self.created_at.as_deref())
    }
}

pub fn read_path(id: i64) -> String {
    format!("{}/{}/read", NOTIFICATIONS_PATH, id)
}

pub fn element_path(id: i64) -> String {
    format!("{}/{}", NOTIFICATIONS_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_paths() {
        let n: Notification =
            serde_json::from_str(r#"{"id": 3, "title": "PM due", "body": "", "is_read": 0}"#).unwrap();
        assert!(!n.is_read);
        assert_eq!(n.text(), "PM due");
        assert_eq!(read_path(3), "/api/notifications/3/read");
        assert_eq!(element_path(3), "/api/notifications/3");
    }
}
