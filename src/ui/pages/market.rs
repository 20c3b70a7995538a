use std::time::Duration;

use dioxus::{document, prelude::*};
use tokio::time::sleep;

use albion_ledger::domain::{format_quantity, shopping_list_text, summarize, AppState};

use crate::ui::{
    components::{
        kpi_card::KpiCard,
        shopping_list::ShoppingList,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme,
};

#[component]
pub fn MarketPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut copied = use_signal(|| false);

    let list = state.with(|st| st.shopping_list());
    let groups = state.with(|st| st.shopping_groups());
    let queued = state.with(|st| st.queue.len());
    let summary = summarize(&list);
    let list_text = shopping_list_text(&groups);

    let on_copy = move |_| {
        if copy_text_to_clipboard(&list_text) {
            copied.set(true);
            spawn(async move {
                sleep(Duration::from_secs(2)).await;
                copied.set(false);
            });
        }
    };

    let on_clear = move |_| {
        state.with_mut(|st| st.clear_queue());
        push_toast(toasts, ToastKind::Info, "Queue cleared");
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-col justify-between gap-4 rounded-lg border border-slate-700 bg-[#1e2532] p-6 shadow-lg md:flex-row md:items-center",
                div {
                    h2 { class: "mb-1 font-fantasy text-2xl text-amber-500", "Buy Orders" }
                    p { class: "text-sm text-slate-400", "Materials grouped by the city where they are cheapest to source." }
                }
                if queued > 0 {
                    div { class: "flex gap-2",
                        button { class: theme::BTN_SECONDARY, onclick: on_copy,
                            if copied() { "Copied" } else { "Copy list" }
                        }
                        button { class: theme::BTN_DANGER, onclick: on_clear, "Clear queue" }
                    }
                }
            }

            if queued > 0 {
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                    KpiCard {
                        title: "Ingredients".to_string(),
                        value: summary.distinct_ingredients.to_string(),
                        description: Some(format!("From {queued} queued recipes")),
                    }
                    KpiCard {
                        title: "Cities".to_string(),
                        value: summary.cities.to_string(),
                        description: None,
                    }
                    KpiCard {
                        title: "Total units".to_string(),
                        value: format_quantity(summary.total_units),
                        description: None,
                    }
                }
            }

            ShoppingList { groups }
        }
    }
}

fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{}}
            try {{
                const textarea = document.createElement('textarea');
                textarea.value = data;
                textarea.style.position = 'fixed';
                textarea.style.opacity = '0';
                document.body.appendChild(textarea);
                textarea.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(textarea);
                return ok;
            }} catch (_err) {{
                return false;
            }}
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        let _ = eval.await;
    });
    true
}
