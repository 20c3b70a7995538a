use dioxus::prelude::*;

use albion_ledger::domain::{AppState, CityBonus};

use crate::ui::theme;

/// Crafting and refining bonuses per royal city.
#[component]
pub fn GuidePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let bonuses = state.with(|st| st.catalog.city_bonuses().to_vec());

    rsx! {
        div { class: "space-y-6",
            div { class: "rounded-lg border border-slate-700 bg-[#1e2532] p-6",
                h2 { class: "mb-1 font-fantasy text-2xl text-amber-500", "City Bonuses" }
                p { class: "text-sm text-slate-400",
                    "Each royal city grants a return-rate bonus to specific crafts. Craft there to save materials."
                }
            }
            if bonuses.is_empty() {
                div { class: "rounded border border-slate-700 bg-[#131824] p-6 text-sm text-slate-400",
                    "No city data available."
                }
            } else {
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3",
                    for bonus in bonuses {
                        BonusCard { key: "{bonus.city.label()}", bonus }
                    }
                }
            }
        }
    }
}

#[component]
fn BonusCard(bonus: CityBonus) -> Element {
    let city = bonus.city;
    rsx! {
        div { class: "rounded-lg border-l-4 bg-[#131824] p-5 shadow-lg {theme::city_panel(city)}",
            div { class: "mb-3 flex items-center gap-3",
                span { class: "text-2xl {theme::city_text(city)}", "{theme::city_icon(city)}" }
                h3 { class: "font-fantasy text-xl font-bold {theme::city_text(city)}", "{city.label()}" }
            }
            p { class: "mb-3 text-sm text-slate-300", "{bonus.description}" }
            div { class: "flex flex-wrap gap-2",
                for resource in bonus.resources {
                    span { class: "rounded border border-slate-700 bg-black/30 px-2 py-0.5 text-xs text-slate-400",
                        "{resource}"
                    }
                }
            }
        }
    }
}
