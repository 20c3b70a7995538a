use dioxus::prelude::*;

use albion_ledger::domain::QueueEntry;

#[component]
pub fn QueueBar(
    entries: Vec<QueueEntry>,
    on_remove: EventHandler<String>,
    on_build_list: EventHandler<()>,
) -> Element {
    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "fixed bottom-6 left-1/2 z-50 flex w-[90%] max-w-4xl -translate-x-1/2 items-center justify-between rounded-lg border border-amber-600/50 bg-[#131824] p-4 shadow-2xl",
            div { class: "scrollbar-hide flex items-center gap-4 overflow-x-auto",
                span { class: "mr-2 whitespace-nowrap border-r border-slate-700 pr-4 font-fantasy font-bold text-amber-500",
                    "QUEUE:"
                }
                for entry in entries {
                    QueueChip {
                        key: "{entry.item.id}",
                        id: entry.item.id.clone(),
                        name: entry.item.name.clone(),
                        quantity: entry.quantity,
                        on_remove,
                    }
                }
            }
            button {
                class: "ml-4 whitespace-nowrap rounded bg-amber-600 px-4 py-2 text-sm font-bold text-white shadow-lg hover:bg-amber-500",
                onclick: move |_| on_build_list.call(()),
                "Build List"
            }
        }
    }
}

#[component]
fn QueueChip(id: String, name: String, quantity: u32, on_remove: EventHandler<String>) -> Element {
    rsx! {
        div { class: "flex min-w-max items-center gap-2 rounded border border-slate-600 bg-slate-800 px-3 py-1",
            span { class: "text-xs text-slate-300", "{name}" }
            span { class: "font-mono text-xs text-amber-400", "x{quantity}" }
            button {
                class: "ml-1 text-slate-500 hover:text-red-400",
                title: "Remove from queue",
                onclick: move |_| on_remove.call(id.clone()),
                "×"
            }
        }
    }
}
