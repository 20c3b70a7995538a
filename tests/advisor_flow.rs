use std::time::Duration;

use albion_ledger::{
    domain::{advisor::NOT_FOUND_MESSAGE, AdvisorOutcome, AppState, City, CraftableItem, Ingredient, ItemType},
    infra::{GeminiClient, RecipeSource},
    util::settings::AdvisorSettings,
};

/// Answers after a fixed delay; `None` models a miss.
struct FakeSource {
    delay: Duration,
    answer: Option<CraftableItem>,
}

impl RecipeSource for FakeSource {
    async fn lookup_recipe(&self, _query: &str) -> Option<CraftableItem> {
        tokio::time::sleep(self.delay).await;
        self.answer.clone()
    }
}

fn stew(id: &str) -> CraftableItem {
    CraftableItem {
        id: id.to_string(),
        name: "Avalonian Stew".to_string(),
        tier: 0,
        item_type: ItemType::Ingredient,
        ingredients: vec![Ingredient {
            name: "Eel".to_string(),
            quantity: 3.0,
            recommended_city: City::Any,
            tier: None,
            unique_name: None,
        }],
        yield_base: Some(1),
        description: None,
        unique_name: None,
    }
}

#[tokio::test]
async fn found_recipe_is_queued() {
    let source = FakeSource {
        delay: Duration::from_millis(1),
        answer: Some(stew("ai_stew")),
    };
    let mut state = AppState::default();

    let ticket = state.begin_lookup("avalonian stew").expect("lookup starts");
    assert!(state.advisor.is_loading());

    let result = source.lookup_recipe(&ticket.query).await;
    let outcome = state.finish_lookup(&ticket, result);

    assert!(matches!(outcome, AdvisorOutcome::Imported(ref item) if item.id == "ai_stew"));
    assert!(!state.advisor.is_loading());
    assert_eq!(state.queue.quantity_of("ai_stew"), Some(1));
    assert_eq!(state.shopping_list()[0].total_quantity, 3.0);
}

#[tokio::test]
async fn miss_reports_message_and_keeps_queue() {
    let source = FakeSource {
        delay: Duration::from_millis(1),
        answer: None,
    };
    let mut state = AppState::default();

    let ticket = state.begin_lookup("nonsense").expect("lookup starts");
    let result = source.lookup_recipe(&ticket.query).await;

    assert_eq!(
        state.finish_lookup(&ticket, result),
        AdvisorOutcome::NotFound(NOT_FOUND_MESSAGE)
    );
    assert_eq!(state.advisor.last_error(), Some(NOT_FOUND_MESSAGE));
    assert!(state.queue.is_empty());
}

#[test]
fn second_submit_while_loading_is_refused() {
    let mut state = AppState::default();
    let _first = state.begin_lookup("first").expect("lookup starts");
    assert!(state.begin_lookup("second").is_none());
}

#[tokio::test]
async fn slow_abandoned_answer_is_dropped() {
    let slow = FakeSource {
        delay: Duration::from_millis(30),
        answer: Some(stew("ai_old")),
    };
    let fast = FakeSource {
        delay: Duration::from_millis(1),
        answer: Some(stew("ai_new")),
    };
    let mut state = AppState::default();

    let old = state.begin_lookup("old").expect("lookup starts");
    state.cancel_lookup();
    let new = state.begin_lookup("new").expect("lookup starts");

    let (old_result, new_result) = tokio::join!(
        slow.lookup_recipe(&old.query),
        fast.lookup_recipe(&new.query)
    );

    assert!(matches!(
        state.finish_lookup(&new, new_result),
        AdvisorOutcome::Imported(_)
    ));
    assert_eq!(state.finish_lookup(&old, old_result), AdvisorOutcome::Stale);
    assert_eq!(state.queue.len(), 1);
    assert_eq!(state.queue.quantity_of("ai_old"), None);
}

#[tokio::test]
async fn lookup_dropped_mid_flight_does_not_lock_the_advisor() {
    let source = FakeSource {
        delay: Duration::from_millis(1),
        answer: Some(stew("ai_retry")),
    };
    let mut state = AppState::default();

    // The panel owning this ticket unmounts before the answer arrives.
    let dropped = state.begin_lookup("roast pork").expect("lookup starts");
    drop(dropped);
    state.cancel_lookup();

    assert!(!state.advisor.is_loading());
    let retry = state
        .begin_lookup("roast pork")
        .expect("advisor accepts a new lookup");
    let result = source.lookup_recipe(&retry.query).await;

    assert!(matches!(
        state.finish_lookup(&retry, result),
        AdvisorOutcome::Imported(_)
    ));
    assert!(!state.advisor.is_loading());
}

#[tokio::test]
async fn gemini_without_key_returns_none() {
    let settings = AdvisorSettings {
        api_key: None,
        ..AdvisorSettings::default()
    };
    let client = GeminiClient::from_settings(&settings).expect("client builds");

    assert!(!client.is_configured());
    assert!(client.lookup_recipe("minor healing potion").await.is_none());
}
