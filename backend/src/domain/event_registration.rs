//! Event sign-ups.
//!
//! Registrations are additive and anonymous: no authentication, no duplicate
//! checks, and the timestamp always comes from the server clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rejection;

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventRegistration {
    domain_preference: String,
    event_name: String,
}

impl NewEventRegistration {
    /// Validate presence of both fields.
    ///
    /// # Examples
    /// ```
    /// use vitmas::domain::{NewEventRegistration, Rejection};
    ///
    /// let ok = NewEventRegistration::try_from_parts(Some("web"), Some("hackathon")).unwrap();
    /// assert_eq!(ok.event_name(), "hackathon");
    /// assert_eq!(
    ///     NewEventRegistration::try_from_parts(Some("web"), Some(" ")).unwrap_err(),
    ///     Rejection::MissingFields { field: "event" },
    /// );
    /// ```
    pub fn try_from_parts(
        raw_domain_preference: Option<&str>,
        raw_event_name: Option<&str>,
    ) -> Result<Self, Rejection> {
        Ok(Self {
            domain_preference: present("domainpref", raw_domain_preference)?,
            event_name: present("event", raw_event_name)?,
        })
    }

    /// Trimmed domain preference (`domainpref`).
    #[must_use]
    pub fn domain_preference(&self) -> &str {
        &self.domain_preference
    }

    /// Trimmed event name (`event`).
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Stamp the request with an identifier and the observed time.
    #[must_use]
    pub fn into_registration(self, id: Uuid, registered_at: DateTime<Utc>) -> EventRegistration {
        EventRegistration {
            id,
            domain_preference: self.domain_preference,
            event_name: self.event_name,
            registered_at,
        }
    }
}

fn present(field: &'static str, value: Option<&str>) -> Result<String, Rejection> {
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::to_owned)
        .ok_or(Rejection::MissingFields { field })
}

/// Persisted event registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    id: Uuid,
    #[serde(rename = "domainpref")]
    domain_preference: String,
    #[serde(rename = "event")]
    event_name: String,
    registered_at: DateTime<Utc>,
}

impl EventRegistration {
    /// Rebuild a registration read back from storage.
    #[must_use]
    pub fn from_stored(
        id: Uuid,
        domain_preference: impl Into<String>,
        event_name: impl Into<String>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            domain_preference: domain_preference.into(),
            event_name: event_name.into(),
            registered_at,
        }
    }

    /// Registration identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Domain preference as stored.
    #[must_use]
    pub fn domain_preference(&self) -> &str {
        &self.domain_preference
    }

    /// Event name as stored.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Server-observed registration time.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
