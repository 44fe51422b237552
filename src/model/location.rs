//! Connected LinkedIn locations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What kind of LinkedIn entity a location points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// A member's personal profile.
    User,
    /// A company page the member administers.
    Company,
}

impl LocationKind {
    /// Returns the location module identifier the platform registers for this kind.
    #[must_use]
    pub const fn module_identifier(self) -> &'static str {
        match self {
            Self::User => "campaignchain-linkedin-user",
            Self::Company => "campaignchain-linkedin",
        }
    }
}

/// A LinkedIn profile or company page that content can be posted to.
///
/// `identifier` is LinkedIn's own id (a member id or a numeric company id)
/// and is what company-scoped API paths are built from.
///
/// # Example
///
/// ```rust
/// use linkedin_channel::model::{Location, LocationKind};
///
/// let page = Location::company("2414183", "Acme Inc.");
/// assert_eq!(page.kind, LocationKind::Company);
/// assert_eq!(page.url.as_deref(), Some("https://www.linkedin.com/company/2414183"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Platform-side primary key, once persisted.
    pub id: Option<u64>,
    /// LinkedIn identifier.
    pub identifier: String,
    /// Display name.
    pub name: String,
    /// Avatar or logo URL.
    pub image: Option<String>,
    /// Public URL of the profile or page.
    pub url: Option<String>,
    /// Profile or company page.
    pub kind: LocationKind,
}

impl Location {
    /// Creates an unsaved user-profile location.
    #[must_use]
    pub fn user(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            identifier: identifier.into(),
            name: name.into(),
            image: None,
            url: None,
            kind: LocationKind::User,
        }
    }

    /// Creates an unsaved company-page location with its public page URL.
    #[must_use]
    pub fn company(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            id: None,
            url: Some(Self::company_page_url(&identifier)),
            identifier,
            name: name.into(),
            image: None,
            kind: LocationKind::Company,
        }
    }

    /// Sets the avatar or logo URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the public LinkedIn URL for a company id.
    #[must_use]
    pub fn company_page_url(identifier: &str) -> String {
        format!("https://www.linkedin.com/company/{identifier}")
    }

    /// Builds a company location from one entry of a company listing.
    ///
    /// Returns `None` if the entry has no usable `id` or `name`. The id may
    /// arrive as a number or a string.
    #[must_use]
    pub fn from_company(value: &Value) -> Option<Self> {
        let identifier = match value.get("id")? {
            Value::Number(n) => n.to_string(),
            Value::String(s) if !s.is_empty() => s.clone(),
            _ => return None,
        };
        let name = value.get("name")?.as_str()?;

        let mut location = Self::company(identifier, name);
        location.image = ["squareLogoUrl", "logoUrl"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(String::from);
        Some(location)
    }

    /// Returns `true` for company-page locations.
    #[must_use]
    pub fn is_company(&self) -> bool {
        self.kind == LocationKind::Company
    }
}
