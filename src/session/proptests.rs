//! Property-based tests for the session state machine
//!
//! These tests verify the log and pending invariants hold across all
//! possible event sequences.

use super::state::{SessionContext, SessionState};
use super::transition::{transition, SendRejection};
use super::*;
use crate::gateway::{GatewayError, ReplyOutcome};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context(online: bool) -> SessionContext {
    SessionContext {
        online,
        history_window: 5,
        greeting: "greeting".to_string(),
    }
}

/// Cloneable description of an event, materialized per application.
#[derive(Debug, Clone)]
enum EventSpec {
    Send(String),
    Resolve(OutcomeSpec),
    Clear,
}

#[derive(Debug, Clone)]
enum OutcomeSpec {
    Reply(String),
    Empty,
    Transport,
    Http(u16),
}

impl OutcomeSpec {
    fn materialize(&self) -> Result<ReplyOutcome, GatewayError> {
        match self {
            OutcomeSpec::Reply(text) => Ok(ReplyOutcome {
                reply: Some(text.clone()),
            }),
            OutcomeSpec::Empty => Ok(ReplyOutcome { reply: None }),
            OutcomeSpec::Transport => Err(GatewayError::Transport("refused".to_string())),
            OutcomeSpec::Http(status) => Err(GatewayError::Http {
                status: *status,
                status_text: "Error".to_string(),
            }),
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, OutcomeSpec::Transport | OutcomeSpec::Http(_))
    }
}

impl EventSpec {
    fn materialize(&self) -> Event {
        match self {
            EventSpec::Send(text) => Event::UserMessage { text: text.clone() },
            EventSpec::Resolve(outcome) => Event::ReplyResolved {
                outcome: outcome.materialize(),
            },
            EventSpec::Clear => Event::Clear,
        }
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{1,30}",
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t\n".to_string()),
    ]
}

fn arb_outcome() -> impl Strategy<Value = OutcomeSpec> {
    prop_oneof![
        "[a-zA-Z ]{1,40}".prop_map(OutcomeSpec::Reply),
        Just(OutcomeSpec::Empty),
        Just(OutcomeSpec::Transport),
        (400u16..600).prop_map(OutcomeSpec::Http),
    ]
}

fn arb_event() -> impl Strategy<Value = EventSpec> {
    prop_oneof![
        4 => arb_text().prop_map(EventSpec::Send),
        3 => arb_outcome().prop_map(EventSpec::Resolve),
        1 => Just(EventSpec::Clear),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Accepted sends append exactly one user message, set pending, and
    /// emit exactly one request effect.
    #[test]
    fn accepted_send_is_single_flight(text in "[a-zA-Z0-9]{1,20}") {
        let state = SessionState::new("greeting");
        let result = transition(&state, &test_context(true), Event::UserMessage { text });

        prop_assert!(result.rejected.is_none());
        prop_assert_eq!(result.new_state.messages.len(), state.messages.len() + 1);
        prop_assert!(result.new_state.pending);
        prop_assert_eq!(result.effects.len(), 1);
    }

    /// Sends while pending never change the log and never make a request.
    #[test]
    fn pending_send_is_a_no_op(text in arb_text()) {
        let mut state = SessionState::new("greeting");
        state.pending = true;
        let result = transition(&state, &test_context(true), Event::UserMessage { text });

        prop_assert!(result.rejected.is_some());
        prop_assert_eq!(result.new_state, state);
        prop_assert!(result.effects.is_empty());
    }

    /// Sends while offline never change the log and never make a request.
    #[test]
    fn offline_send_is_a_no_op(text in arb_text()) {
        let state = SessionState::new("greeting");
        let result = transition(&state, &test_context(false), Event::UserMessage { text });

        prop_assert!(result.rejected.is_some());
        prop_assert_eq!(result.new_state, state);
        prop_assert!(result.effects.is_empty());
    }

    /// Every resolution appends exactly one assistant message and clears
    /// pending, whatever the outcome.
    #[test]
    fn resolution_appends_exactly_one_reply(outcome in arb_outcome(), online in any::<bool>()) {
        let mut state = SessionState::new("greeting");
        state.pending = true;
        let event = Event::ReplyResolved { outcome: outcome.materialize() };
        let result = transition(&state, &test_context(online), event);

        prop_assert_eq!(result.new_state.messages.len(), state.messages.len() + 1);
        prop_assert!(!result.new_state.pending);
        prop_assert_eq!(
            result.new_state.messages.last().unwrap().author,
            Author::Assistant
        );
    }

    /// Failure outcomes are tagged as errors; success and degraded success
    /// are not.
    #[test]
    fn error_flag_matches_outcome_kind(outcome in arb_outcome(), online in any::<bool>()) {
        let mut state = SessionState::new("greeting");
        state.pending = true;
        let expected = outcome.is_failure();
        let event = Event::ReplyResolved { outcome: outcome.materialize() };
        let result = transition(&state, &test_context(online), event);

        prop_assert_eq!(result.new_state.messages.last().unwrap().error, expected);
    }

    /// Across arbitrary event sequences the log only grows, except that a
    /// clear resets it to exactly one greeting.
    #[test]
    fn log_is_append_only_between_clears(
        events in prop::collection::vec(arb_event(), 0..40),
        online in any::<bool>(),
    ) {
        let context = test_context(online);
        let mut state = SessionState::new("greeting");

        for spec in &events {
            let before = state.messages.len();
            let was_pending = state.pending;
            let result = transition(&state, &context, spec.materialize());

            match spec {
                EventSpec::Clear => {
                    prop_assert_eq!(result.new_state.messages.len(), 1);
                    prop_assert_eq!(result.new_state.pending, was_pending);
                }
                EventSpec::Resolve(_) => {
                    prop_assert_eq!(result.new_state.messages.len(), before + 1);
                    prop_assert!(!result.new_state.pending);
                }
                EventSpec::Send(_) => {
                    if result.rejected.is_none() {
                        prop_assert_eq!(result.new_state.messages.len(), before + 1);
                        prop_assert!(result.new_state.pending);
                    } else {
                        prop_assert_eq!(result.new_state.messages.len(), before);
                        prop_assert_eq!(result.new_state.pending, was_pending);
                    }
                }
            }

            // Messages already in the log are never mutated.
            let unchanged = match spec {
                EventSpec::Clear => true,
                _ => result.new_state.messages.iter().take(before).eq(state.messages.iter()),
            };
            prop_assert!(unchanged);

            state = result.new_state;
        }
    }

    /// The rejection reason is consistent with the precondition that failed.
    #[test]
    fn rejection_reasons_are_precise(text in arb_text(), pending in any::<bool>(), online in any::<bool>()) {
        let mut state = SessionState::new("greeting");
        state.pending = pending;
        let result = transition(
            &state,
            &test_context(online),
            Event::UserMessage { text: text.clone() },
        );

        let expected = if text.trim().is_empty() {
            Some(SendRejection::EmptyText)
        } else if pending {
            Some(SendRejection::RequestPending)
        } else if !online {
            Some(SendRejection::Offline)
        } else {
            None
        };
        prop_assert_eq!(result.rejected, expected);
    }
}
