//! The "connect a LinkedIn channel" flow as an explicit state machine.
//!
//! Connecting runs through three steps:
//!
//! 1. [`WizardStep::AwaitingLogin`]: the member authorizes the app and the
//!    resulting token is recorded under their LinkedIn id.
//! 2. [`WizardStep::SelectingLocations`]: the member's profile and the
//!    company pages they administer are offered, minus those already
//!    connected, and the member picks which to add.
//! 3. [`WizardStep::Configuring`]: each picked location is reviewed in turn.
//!
//! [`ChannelWizard::advance`] consumes the wizard and returns the next
//! [`Transition`]. A rejected event hands the wizard back inside
//! [`Rejected`], unchanged, so the step can be retried or the run
//! [abandoned](ChannelWizard::abandon). The wizard holds no I/O; persisting
//! the outcome and cleaning up unused tokens is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use linkedin_channel::model::Location;
//! use linkedin_channel::wizard::{ChannelWizard, Transition, WizardEvent};
//! use linkedin_channel::{AccessToken, Token};
//!
//! let me = Location::user("-aB3x", "Jane Doe");
//! let steps = [
//!     WizardEvent::LoggedIn {
//!         user_id: "-aB3x".to_string(),
//!         token: Token::new(AccessToken::new("AQV").unwrap()),
//!     },
//!     WizardEvent::LocationsFetched { locations: vec![me.clone()], connected: HashSet::new() },
//!     WizardEvent::LocationsSelected { identifiers: vec!["-aB3x".to_string()] },
//!     WizardEvent::LocationConfigured { location: me },
//! ];
//!
//! let mut wizard = ChannelWizard::new();
//! let mut finished = None;
//! for event in steps {
//!     match wizard.advance(event).unwrap() {
//!         Transition::Continue(next) => wizard = next,
//!         Transition::Finished(outcome) => { finished = Some(outcome); break; }
//!         Transition::Aborted(abort) => panic!("{}", abort.message()),
//!     }
//! }
//!
//! let outcome = finished.unwrap();
//! assert_eq!(outcome.tokens[0].location_identifier.as_deref(), Some("-aB3x"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::auth::Token;
use crate::model::Location;

/// Where the wizard currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    /// Waiting for the OAuth login to complete.
    AwaitingLogin,
    /// Waiting for the available locations, then for the member's choice.
    SelectingLocations,
    /// Reviewing the selected location at `index`.
    Configuring {
        /// Position in the selection.
        index: usize,
    },
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingLogin => write!(f, "awaiting login"),
            Self::SelectingLocations => write!(f, "selecting locations"),
            Self::Configuring { index } => write!(f, "configuring location {index}"),
        }
    }
}

/// Input that drives the wizard forward.
#[derive(Clone, Debug)]
pub enum WizardEvent {
    /// The member logged in.
    LoggedIn {
        /// The member's LinkedIn id.
        user_id: String,
        /// The grant obtained for the member.
        token: Token,
    },
    /// The member's profile and administered pages were fetched.
    LocationsFetched {
        /// Everything the account can post to.
        locations: Vec<Location>,
        /// Identifiers already connected to the platform.
        connected: HashSet<String>,
    },
    /// The member ticked the locations to add.
    LocationsSelected {
        /// Identifiers of the chosen locations.
        identifiers: Vec<String>,
    },
    /// The member confirmed the current location.
    LocationConfigured {
        /// The location as edited by the member.
        location: Location,
    },
}

impl WizardEvent {
    const fn name(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "logged_in",
            Self::LocationsFetched { .. } => "locations_fetched",
            Self::LocationsSelected { .. } => "locations_selected",
            Self::LocationConfigured { .. } => "location_configured",
        }
    }
}

/// Errors raised by [`ChannelWizard::advance`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The event does not belong to the current step.
    #[error("Unexpected event '{event}' while {step}")]
    UnexpectedEvent {
        /// The current step.
        step: String,
        /// The rejected event.
        event: String,
    },

    /// The event names a location that is not on offer.
    #[error("Unknown location '{identifier}'")]
    UnknownLocation {
        /// The identifier that was not found.
        identifier: String,
    },
}

/// An event [`ChannelWizard::advance`] refused, with the wizard as it was.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Rejected {
    /// The wizard, untouched by the rejected event.
    pub wizard: ChannelWizard,
    /// Why the event was refused.
    pub error: WizardError,
}

impl Rejected {
    /// Splits into the wizard and the error.
    #[must_use]
    pub fn into_parts(self) -> (ChannelWizard, WizardError) {
        (self.wizard, self.error)
    }
}

/// Why the wizard stopped without connecting anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardAbort {
    /// Every location of the account is already connected.
    AllConnected {
        /// Tokens from this run that no location will own.
        unassigned_tokens: Vec<Token>,
    },
    /// The member did not select anything.
    NothingSelected {
        /// Tokens from this run that no location will own.
        unassigned_tokens: Vec<Token>,
    },
}

impl WizardAbort {
    /// Returns the warning to show the member.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AllConnected { .. } => {
                "All available Locations of this LinkedIn account are already connected."
            }
            Self::NothingSelected { .. } => "No new location has been added.",
        }
    }

    /// Returns the tokens the caller should discard.
    #[must_use]
    pub fn unassigned_tokens(&self) -> &[Token] {
        match self {
            Self::AllConnected { unassigned_tokens } | Self::NothingSelected { unassigned_tokens } => {
                unassigned_tokens
            }
        }
    }
}

/// Result of a completed wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardOutcome {
    /// Locations to persist, in offer order.
    pub locations: Vec<Location>,
    /// Tokens bound to the location with the same LinkedIn id.
    pub tokens: Vec<Token>,
    /// Tokens whose owner was not selected.
    pub unassigned_tokens: Vec<Token>,
    /// Confirmation listing the connected locations.
    pub summary: String,
}

/// What [`ChannelWizard::advance`] produced.
#[derive(Clone, Debug)]
pub enum Transition {
    /// More input is needed.
    Continue(ChannelWizard),
    /// All selected locations are configured.
    Finished(WizardOutcome),
    /// Nothing will be connected.
    Aborted(WizardAbort),
}

/// State of one channel connection attempt.
#[derive(Clone, Debug)]
pub struct ChannelWizard {
    step: WizardStep,
    linkedin_user_id: Option<String>,
    tokens: HashMap<String, Token>,
    candidates: Vec<Location>,
}

impl Default for ChannelWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelWizard {
    /// Starts a new wizard awaiting login.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::AwaitingLogin,
            linkedin_user_id: None,
            tokens: HashMap::new(),
            candidates: Vec::new(),
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the LinkedIn id of the member who logged in.
    #[must_use]
    pub fn linkedin_user_id(&self) -> Option<&str> {
        self.linkedin_user_id.as_deref()
    }

    /// Returns the locations still in play.
    #[must_use]
    pub fn candidates(&self) -> &[Location] {
        &self.candidates
    }

    /// Returns the location being configured, if in that step.
    #[must_use]
    pub fn current(&self) -> Option<&Location> {
        match self.step {
            WizardStep::Configuring { index } => self.candidates.get(index),
            _ => None,
        }
    }

    /// Ends the run early, returning every token it collected.
    #[must_use]
    pub fn abandon(self) -> Vec<Token> {
        tracing::debug!(step = %self.step, "channel wizard abandoned");
        self.tokens.into_values().collect()
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with the unchanged wizard and:
    ///
    /// - [`WizardError::UnexpectedEvent`] if the event does not fit the step
    /// - [`WizardError::UnknownLocation`] if a selection or configured
    ///   location does not match the locations on offer
    pub fn advance(mut self, event: WizardEvent) -> Result<Transition, Rejected> {
        let from = self.step;
        let event_name = event.name();

        let transition = match (self.step, event) {
            (WizardStep::AwaitingLogin, WizardEvent::LoggedIn { user_id, token }) => {
                self.tokens.insert(user_id.clone(), token);
                self.linkedin_user_id = Some(user_id);
                self.step = WizardStep::SelectingLocations;
                Transition::Continue(self)
            }

            (
                WizardStep::SelectingLocations,
                WizardEvent::LocationsFetched {
                    locations,
                    connected,
                },
            ) => {
                self.candidates = locations
                    .into_iter()
                    .filter(|location| !connected.contains(&location.identifier))
                    .collect();

                if self.candidates.is_empty() {
                    Transition::Aborted(WizardAbort::AllConnected {
                        unassigned_tokens: self.tokens.into_values().collect(),
                    })
                } else {
                    Transition::Continue(self)
                }
            }

            (WizardStep::SelectingLocations, WizardEvent::LocationsSelected { identifiers }) => {
                if let Some(unknown) = identifiers
                    .iter()
                    .find(|id| !self.candidates.iter().any(|c| &c.identifier == *id))
                {
                    let error = WizardError::UnknownLocation {
                        identifier: unknown.clone(),
                    };
                    return Err(self.reject(error));
                }

                self.candidates
                    .retain(|candidate| identifiers.contains(&candidate.identifier));

                if self.candidates.is_empty() {
                    Transition::Aborted(WizardAbort::NothingSelected {
                        unassigned_tokens: self.tokens.into_values().collect(),
                    })
                } else {
                    self.step = WizardStep::Configuring { index: 0 };
                    Transition::Continue(self)
                }
            }

            (WizardStep::Configuring { index }, WizardEvent::LocationConfigured { location }) => {
                let Some(expected) = self
                    .candidates
                    .get_mut(index)
                    .filter(|candidate| candidate.identifier == location.identifier)
                else {
                    let error = WizardError::UnknownLocation {
                        identifier: location.identifier,
                    };
                    return Err(self.reject(error));
                };
                *expected = location;

                if index + 1 < self.candidates.len() {
                    self.step = WizardStep::Configuring { index: index + 1 };
                    Transition::Continue(self)
                } else {
                    Transition::Finished(self.finish())
                }
            }

            (step, _) => {
                let error = WizardError::UnexpectedEvent {
                    step: step.to_string(),
                    event: event_name.to_string(),
                };
                return Err(self.reject(error));
            }
        };

        tracing::debug!(from = %from, event = event_name, "channel wizard advanced");
        Ok(transition)
    }

    fn reject(self, error: WizardError) -> Rejected {
        tracing::debug!(step = %self.step, %error, "channel wizard rejected event");
        Rejected {
            wizard: self,
            error,
        }
    }

    fn finish(self) -> WizardOutcome {
        let mut tokens = Vec::new();
        let mut unassigned_tokens = Vec::new();

        for (identifier, mut token) in self.tokens {
            match self.candidates.iter().find(|l| l.identifier == identifier) {
                Some(location) => {
                    token.assign_to(location);
                    tokens.push(token);
                }
                None => unassigned_tokens.push(token),
            }
        }

        let names = self
            .candidates
            .iter()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        WizardOutcome {
            summary: format!("The following locations are now connected: {names}"),
            locations: self.candidates,
            tokens,
            unassigned_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn token(value: &str) -> Token {
        Token::new(AccessToken::new(value).unwrap())
    }

    fn continue_with(transition: Transition) -> ChannelWizard {
        match transition {
            Transition::Continue(wizard) => wizard,
            other => panic!("expected Continue, got {other:?}"),
        }
    }

    fn logged_in() -> ChannelWizard {
        continue_with(
            ChannelWizard::new()
                .advance(WizardEvent::LoggedIn {
                    user_id: "-aB3x".to_string(),
                    token: token("user-token"),
                })
                .unwrap(),
        )
    }

    fn offered() -> Vec<Location> {
        vec![
            Location::user("-aB3x", "Jane Doe"),
            Location::company("555", "Acme"),
            Location::company("777", "Beta"),
        ]
    }

    fn fetched(connected: &[&str]) -> Transition {
        logged_in()
            .advance(WizardEvent::LocationsFetched {
                locations: offered(),
                connected: connected.iter().map(|s| (*s).to_string()).collect(),
            })
            .unwrap()
    }

    fn select(wizard: ChannelWizard, ids: &[&str]) -> Result<Transition, Rejected> {
        wizard.advance(WizardEvent::LocationsSelected {
            identifiers: ids.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    #[test]
    fn test_login_records_token_under_user_id() {
        let wizard = logged_in();
        assert_eq!(wizard.step(), WizardStep::SelectingLocations);
        assert_eq!(wizard.linkedin_user_id(), Some("-aB3x"));
    }

    #[test]
    fn test_already_connected_locations_are_dropped() {
        let wizard = continue_with(fetched(&["555"]));
        let ids: Vec<&str> = wizard
            .candidates()
            .iter()
            .map(|l| l.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["-aB3x", "777"]);
    }

    #[test]
    fn test_all_connected_aborts_with_tokens_to_clean_up() {
        let Transition::Aborted(abort) = fetched(&["-aB3x", "555", "777"]) else {
            panic!("expected abort");
        };
        assert_eq!(
            abort.message(),
            "All available Locations of this LinkedIn account are already connected."
        );
        assert_eq!(abort.unassigned_tokens().len(), 1);
    }

    #[test]
    fn test_empty_selection_aborts() {
        let wizard = continue_with(fetched(&[]));
        let Transition::Aborted(abort) = select(wizard, &[]).unwrap() else {
            panic!("expected abort");
        };
        assert!(matches!(abort, WizardAbort::NothingSelected { .. }));
        assert_eq!(abort.message(), "No new location has been added.");
    }

    #[test]
    fn test_selecting_unknown_location_fails() {
        let wizard = continue_with(fetched(&["555"]));
        let rejected = select(wizard, &["555"]).unwrap_err();
        assert_eq!(
            rejected.error,
            WizardError::UnknownLocation {
                identifier: "555".to_string()
            }
        );
        assert_eq!(rejected.to_string(), "Unknown location '555'");
    }

    #[test]
    fn test_selection_can_be_retried_after_unknown_location() {
        let wizard = continue_with(fetched(&["555"]));
        let (wizard, _) = select(wizard, &["-aB3x", "555"]).unwrap_err().into_parts();

        assert_eq!(wizard.step(), WizardStep::SelectingLocations);
        assert_eq!(wizard.candidates().len(), 2);

        let wizard = continue_with(select(wizard, &["-aB3x"]).unwrap());
        let Transition::Finished(outcome) = wizard
            .advance(WizardEvent::LocationConfigured {
                location: Location::user("-aB3x", "Jane Doe"),
            })
            .unwrap()
        else {
            panic!("expected finish");
        };
        assert_eq!(outcome.tokens.len(), 1);
        assert_eq!(outcome.tokens[0].location_identifier.as_deref(), Some("-aB3x"));
    }

    #[test]
    fn test_rejected_wizard_can_be_abandoned() {
        let wizard = continue_with(fetched(&[]));
        let wizard = continue_with(select(wizard, &["555"]).unwrap());
        let rejected = wizard
            .advance(WizardEvent::LoggedIn {
                user_id: "other".to_string(),
                token: token("other-token"),
            })
            .unwrap_err();

        assert_eq!(rejected.wizard.step(), WizardStep::Configuring { index: 0 });
        let tokens = rejected.wizard.abandon();
        assert_eq!(tokens, vec![token("user-token")]);
    }

    #[test]
    fn test_full_flow_assigns_user_token() {
        let wizard = continue_with(fetched(&[]));
        let mut wizard = continue_with(select(wizard, &["777", "-aB3x"]).unwrap());
        assert_eq!(wizard.step(), WizardStep::Configuring { index: 0 });
        // Offer order, not selection order.
        assert_eq!(wizard.current().map(|l| l.name.as_str()), Some("Jane Doe"));

        let edited = Location::user("-aB3x", "Jane D.");
        wizard = continue_with(
            wizard
                .advance(WizardEvent::LocationConfigured { location: edited })
                .unwrap(),
        );
        assert_eq!(wizard.step(), WizardStep::Configuring { index: 1 });

        let Transition::Finished(outcome) = wizard
            .advance(WizardEvent::LocationConfigured {
                location: Location::company("777", "Beta"),
            })
            .unwrap()
        else {
            panic!("expected finish");
        };

        assert_eq!(outcome.locations.len(), 2);
        assert_eq!(outcome.locations[0].name, "Jane D.");
        assert_eq!(outcome.tokens.len(), 1);
        assert_eq!(outcome.tokens[0].location_identifier.as_deref(), Some("-aB3x"));
        assert!(outcome.unassigned_tokens.is_empty());
        assert_eq!(
            outcome.summary,
            "The following locations are now connected: Jane D., Beta"
        );
    }

    #[test]
    fn test_company_only_selection_leaves_user_token_unassigned() {
        let wizard = continue_with(fetched(&[]));
        let wizard = continue_with(select(wizard, &["555"]).unwrap());
        let Transition::Finished(outcome) = wizard
            .advance(WizardEvent::LocationConfigured {
                location: Location::company("555", "Acme"),
            })
            .unwrap()
        else {
            panic!("expected finish");
        };

        assert!(outcome.tokens.is_empty());
        assert_eq!(outcome.unassigned_tokens.len(), 1);
    }

    #[test]
    fn test_configuring_wrong_location_fails() {
        let wizard = continue_with(fetched(&[]));
        let wizard = continue_with(select(wizard, &["555"]).unwrap());
        let (wizard, error) = wizard
            .advance(WizardEvent::LocationConfigured {
                location: Location::company("777", "Beta"),
            })
            .unwrap_err()
            .into_parts();
        assert!(matches!(error, WizardError::UnknownLocation { identifier } if identifier == "777"));
        assert_eq!(wizard.current().map(|l| l.identifier.as_str()), Some("555"));
    }

    #[test]
    fn test_out_of_order_event_is_rejected() {
        let error = ChannelWizard::new()
            .advance(WizardEvent::LocationsSelected {
                identifiers: vec![],
            })
            .unwrap_err()
            .error;
        assert_eq!(
            error,
            WizardError::UnexpectedEvent {
                step: "awaiting login".to_string(),
                event: "locations_selected".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Unexpected event 'locations_selected' while awaiting login"
        );
    }
}
