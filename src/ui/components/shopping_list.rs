use dioxus::prelude::*;

use albion_ledger::domain::{format_quantity, render_url, CityGroup, ShoppingListItem};

use crate::ui::theme;

/// Buy orders grouped per city, or the blank-scroll state for an empty queue.
#[component]
pub fn ShoppingList(groups: Vec<CityGroup>) -> Element {
    if groups.is_empty() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center rounded-xl border-2 border-dashed border-slate-700 bg-[#1a202c] p-12 text-slate-500",
                span { class: "mb-4 text-6xl opacity-30", "📜" }
                p { class: "font-fantasy text-xl text-slate-400", "Blank Scroll" }
                p { class: "text-sm opacity-60", "Visit the Craft Station to add orders." }
            }
        };
    }

    rsx! {
        div { class: "grid grid-cols-1 gap-8 pb-12",
            for group in groups {
                CityCard { key: "{group.city.label()}", group }
            }
        }
    }
}

#[component]
fn CityCard(group: CityGroup) -> Element {
    let city = group.city;
    let text = theme::city_text(city);
    let border = theme::city_border(city);

    rsx! {
        div { class: "relative overflow-hidden rounded-lg border-2 bg-[#131824] shadow-xl {border}",
            div { class: "flex items-center gap-4 border-b border-slate-700 bg-gradient-to-r from-black/60 to-transparent px-6 py-4",
                div { class: "rounded border border-slate-600 bg-[#0b0f19] p-3 text-xl shadow-inner {text}",
                    "{theme::city_icon(city)}"
                }
                div {
                    h3 { class: "font-fantasy text-2xl font-bold {text}", "{city.label()}" }
                    div { class: "flex items-center gap-2 text-xs font-semibold uppercase tracking-widest text-slate-400",
                        span { "Local Market" }
                        span { class: "h-1 w-1 rounded-full bg-slate-500" }
                        span { "Buy Orders" }
                    }
                }
            }
            div { class: "bg-[#1a2130] p-4",
                div { class: "grid grid-cols-1 gap-3 md:grid-cols-2 lg:grid-cols-3",
                    for item in group.items {
                        ShoppingRow { key: "{item.name}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn ShoppingRow(item: ShoppingListItem) -> Element {
    let quantity = format_quantity(item.total_quantity);
    let icon = item.unique_name.as_deref().map(render_url);

    rsx! {
        div { class: "group flex items-center justify-between rounded border border-slate-700/50 bg-[#0f141f] p-3 shadow-sm hover:border-slate-500",
            div { class: "flex items-center gap-3",
                div { class: "flex h-10 w-10 flex-shrink-0 items-center justify-center overflow-hidden rounded border border-slate-700 bg-black/40 text-slate-500",
                    if let Some(src) = icon {
                        img { class: "h-full w-full object-contain", src: "{src}", alt: "{item.name}" }
                    } else {
                        "📦"
                    }
                }
                div { class: "flex flex-col",
                    span { class: "text-sm font-semibold text-slate-200 group-hover:text-amber-400", "{item.name}" }
                    div { class: "mt-1 flex gap-1",
                        for tier in item.tiers {
                            span { class: "rounded-sm border border-slate-700/50 bg-slate-800 px-1.5 text-[10px] font-bold text-slate-400",
                                "T{tier}"
                            }
                        }
                    }
                }
            }
            div { class: "ml-2 border-l border-slate-800 pl-4 text-right",
                span { class: "block font-mono text-xl font-bold leading-none tabular-nums text-amber-500", "{quantity}" }
                span { class: "text-[10px] uppercase text-slate-500", "units" }
            }
        }
    }
}
