use dioxus::prelude::*;
use tracing::debug;

use albion_ledger::{
    domain::{AdvisorOutcome, AppState},
    infra::RecipeSource,
};

use crate::app::{AdvisorClient, Route};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};

/// Free-text recipe lookup. A found recipe is queued and the user is sent
/// back to the craft grid.
#[component]
pub fn AdvisorPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let advisor = use_context::<AdvisorClient>();
    let client = use_signal(move || advisor.0);
    let nav = use_navigator();

    let mut query = use_signal(String::new);
    let loading = state.with(|st| st.advisor.is_loading());
    let last_error = state.with(|st| st.advisor.last_error());
    let configured = client.with(|c| c.as_ref().map(|c| c.is_configured()).unwrap_or(false));

    // The lookup future dies with this component; release the session.
    use_drop(move || {
        if let Ok(mut st) = state.try_write() {
            st.cancel_lookup();
        }
    });

    let mut submit = move || {
        let text = query();
        let Some(ticket) = state.with_mut(|st| st.begin_lookup(&text)) else {
            return;
        };
        let client = client.peek().clone();
        spawn(async move {
            let result = match client.as_ref() {
                Some(client) => client.lookup_recipe(&ticket.query).await,
                None => None,
            };
            match state.with_mut(|st| st.finish_lookup(&ticket, result)) {
                AdvisorOutcome::Imported(item) => {
                    query.set(String::new());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("{} added to the queue", item.name),
                    );
                    nav.push(Route::Craft {});
                }
                AdvisorOutcome::NotFound(message) => {
                    push_toast(toasts, ToastKind::Warning, message);
                }
                AdvisorOutcome::Stale => {
                    debug!(seq = ticket.seq, "ignoring stale advisor answer");
                }
            }
        });
    };

    rsx! {
        div { class: "relative mb-8 overflow-hidden rounded-lg border border-slate-600 bg-[#1e2532] p-6 shadow-inner",
            div { class: "pointer-events-none absolute right-0 top-0 p-4 text-6xl opacity-10", "🔮" }
            h2 { class: "mb-2 flex items-center gap-2 font-fantasy text-lg text-amber-500",
                "✨ Royal Advisor"
            }
            p { class: "mb-4 text-sm text-slate-400",
                "Need a recipe that is not listed? Ask the advisor for the ingredients."
            }
            div { class: "flex gap-2",
                input {
                    class: "flex-1 rounded border border-slate-600 bg-[#0f141f] px-4 py-2 text-slate-200 placeholder-slate-600 focus:border-amber-500 focus:outline-none",
                    r#type: "text",
                    placeholder: "e.g. Avalonian Roast, T8 Elder's Bag",
                    value: "{query}",
                    disabled: loading,
                    oninput: move |evt| query.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "flex items-center gap-2 rounded border border-amber-500 bg-gradient-to-b from-amber-600 to-amber-700 px-6 py-2 font-fantasy font-bold text-white shadow-lg hover:from-amber-500 hover:to-amber-600 disabled:cursor-not-allowed disabled:opacity-50",
                    disabled: loading,
                    onclick: move |_| submit(),
                    if loading {
                        span { class: "ledger-spinner" }
                        "Consulting"
                    } else {
                        "Consult"
                    }
                }
                if loading {
                    button {
                        class: "rounded border border-slate-600 bg-slate-800 px-4 py-2 text-sm text-slate-300 hover:border-red-500 hover:text-red-400",
                        title: "Stop waiting and ask again",
                        onclick: move |_| state.with_mut(|st| st.cancel_lookup()),
                        "Cancel"
                    }
                }
            }
            if let Some(message) = last_error {
                p { class: "mt-3 rounded border border-red-800 bg-red-900/20 p-2 text-sm text-red-400",
                    "{message}"
                }
            }
            if !configured {
                p { class: "mt-3 text-xs italic text-slate-500",
                    "No API key configured. Set GEMINI_API_KEY or add one to settings.json to enable the advisor."
                }
            }
        }
    }
}
