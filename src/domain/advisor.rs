//! Bookkeeping for recipe-advisor lookups.
//!
//! Lookups run asynchronously. Only one may be in flight per input, and a
//! response is applied only if it answers the most recently issued request.

use tracing::{debug, info};

use super::entities::CraftableItem;

pub const NOT_FOUND_MESSAGE: &str =
    "The advisor could not find that recipe. Try a more specific item name.";

/// Handed out by [`AdvisorSession::begin`]; must be returned to `finish`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AdvisorOutcome {
    Imported(CraftableItem),
    NotFound(&'static str),
    /// A newer request was issued after this one; its answer is dropped.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvisorSession {
    latest_seq: u64,
    in_flight: bool,
    last_error: Option<&'static str>,
}

impl AdvisorSession {
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    /// Starts a lookup unless the query is blank or one is already running.
    pub fn begin(&mut self, query: &str) -> Option<LookupTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if self.in_flight {
            debug!(query, "advisor lookup already running; ignoring submit");
            return None;
        }

        self.latest_seq += 1;
        self.in_flight = true;
        self.last_error = None;
        Some(LookupTicket {
            seq: self.latest_seq,
            query: query.to_string(),
        })
    }

    pub fn finish(
        &mut self,
        ticket: &LookupTicket,
        result: Option<CraftableItem>,
    ) -> AdvisorOutcome {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding stale advisor response"
            );
            return AdvisorOutcome::Stale;
        }

        self.in_flight = false;
        match result {
            Some(item) => {
                info!(query = %ticket.query, item = %item.name, "advisor recipe imported");
                AdvisorOutcome::Imported(item)
            }
            None => {
                self.last_error = Some(NOT_FOUND_MESSAGE);
                AdvisorOutcome::NotFound(NOT_FOUND_MESSAGE)
            }
        }
    }

    /// Forgets the in-flight request so a new one can be issued. Any
    /// response to the abandoned ticket will come back as stale.
    pub fn abandon(&mut self) {
        if self.in_flight {
            self.latest_seq += 1;
            self.in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemType;

    fn item(name: &str) -> CraftableItem {
        CraftableItem {
            id: format!("ai_{name}"),
            name: name.into(),
            tier: 0,
            item_type: ItemType::Ingredient,
            ingredients: Vec::new(),
            yield_base: Some(1),
            description: None,
            unique_name: None,
        }
    }

    #[test]
    fn blank_queries_are_refused() {
        let mut session = AdvisorSession::default();
        assert!(session.begin("   ").is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn second_submit_while_loading_is_refused() {
        let mut session = AdvisorSession::default();
        let ticket = session.begin("roast pork").unwrap();
        assert!(session.is_loading());
        assert!(session.begin("roast pork").is_none());

        let outcome = session.finish(&ticket, Some(item("Roast Pork")));
        assert!(matches!(outcome, AdvisorOutcome::Imported(ref i) if i.name == "Roast Pork"));
        assert!(!session.is_loading());
        assert!(session.begin("stew").is_some());
    }

    #[test]
    fn missing_result_records_message() {
        let mut session = AdvisorSession::default();
        let ticket = session.begin("???").unwrap();
        assert_eq!(
            session.finish(&ticket, None),
            AdvisorOutcome::NotFound(NOT_FOUND_MESSAGE)
        );
        assert_eq!(session.last_error(), Some(NOT_FOUND_MESSAGE));

        session.begin("again").unwrap();
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn abandoned_request_answers_as_stale() {
        let mut session = AdvisorSession::default();
        let slow = session.begin("slow").unwrap();
        session.abandon();
        let fast = session.begin("fast").unwrap();

        let fast_outcome = session.finish(&fast, Some(item("Fast")));
        assert!(matches!(fast_outcome, AdvisorOutcome::Imported(_)));
        assert_eq!(session.finish(&slow, Some(item("Slow"))), AdvisorOutcome::Stale);
        assert!(!session.is_loading());
    }

    #[test]
    fn stale_response_does_not_clear_loading_flag() {
        let mut session = AdvisorSession::default();
        let old = session.begin("old").unwrap();
        session.abandon();
        let _current = session.begin("current").unwrap();

        assert_eq!(session.finish(&old, None), AdvisorOutcome::Stale);
        assert!(session.is_loading());
        assert_eq!(session.last_error(), None);
    }
}
