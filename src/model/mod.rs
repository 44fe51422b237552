//! Domain records the channel works with.
//!
//! These mirror the platform entities that the connector and the facade
//! read from: where to post ([`Location`]), what was scheduled
//! ([`Activity`]) and what was published ([`NewsItem`]). Persistence is the
//! caller's concern; all records are `serde`-serializable.

mod activity;
mod location;

pub use activity::{Activity, NewsItem};
pub use location::{Location, LocationKind};

/// Builds company locations from a company listing, skipping malformed entries.
#[must_use]
pub fn company_locations(companies: &[serde_json::Value]) -> Vec<Location> {
    companies.iter().filter_map(Location::from_company).collect()
}
