//! Scheduled activities and the news items they publish.

use serde::{Deserialize, Serialize};

use crate::model::Location;

/// A scheduled or executed action tied to one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Platform-side primary key, once persisted.
    pub id: Option<u64>,
    /// Display name.
    pub name: String,
    /// Where the activity publishes.
    pub location: Location,
}

impl Activity {
    /// Creates an unsaved activity for a location.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            id: None,
            name: name.into(),
            location,
        }
    }

    /// Returns the LinkedIn identifier of the activity's location.
    #[must_use]
    pub fn location_identifier(&self) -> &str {
        &self.location.identifier
    }
}

/// A previously published share.
///
/// `update_key` is the opaque key LinkedIn returned when the share was
/// created; statistics are fetched with it later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// LinkedIn update key, e.g. `UPDATE-c2414183-6045587251523457024`.
    pub update_key: String,
    /// Public URL of the update, if LinkedIn returned one.
    pub link: Option<String>,
    /// The comment text that was shared.
    pub message: Option<String>,
}

impl NewsItem {
    /// Creates a news item from an update key.
    #[must_use]
    pub fn new(update_key: impl Into<String>) -> Self {
        Self {
            update_key: update_key.into(),
            link: None,
            message: None,
        }
    }

    /// Builds a news item from the object returned by a share call.
    ///
    /// LinkedIn answers a share with `{"updateKey": "...", "updateUrl": "..."}`.
    /// Returns `None` if no update key is present.
    #[must_use]
    pub fn from_share_response(response: &serde_json::Map<String, serde_json::Value>) -> Option<Self> {
        let update_key = response.get("updateKey")?.as_str()?;
        Some(Self {
            update_key: update_key.to_string(),
            link: response
                .get("updateUrl")
                .and_then(serde_json::Value::as_str)
                .map(String::from),
            message: None,
        })
    }
}
