use dioxus::prelude::*;

use albion_ledger::domain::{AppState, CatalogFilter};

use crate::app::Route;
use crate::ui::{
    components::{
        advisor_panel::AdvisorPanel,
        queue_bar::QueueBar,
        recipe_card::RecipeCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme,
};

#[component]
pub fn CraftPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let active_filter = state.with(|st| st.filter);
    let recipes = state.with(|st| st.visible_recipes());
    let entries = state.with(|st| st.queue.entries().to_vec());

    rsx! {
        div { class: "space-y-6 pb-24",
            AdvisorPanel {}

            div { class: "flex items-center justify-between border-b border-slate-700 pb-2",
                h2 { class: "font-fantasy text-xl text-slate-200", "Recipe Book" }
                div { class: "flex gap-1",
                    for filter in CatalogFilter::ALL {
                        button {
                            key: "{filter.label()}",
                            class: theme::filter_button(filter == active_filter),
                            onclick: move |_| state.with_mut(|st| st.filter = filter),
                            "{filter.label()}"
                        }
                    }
                }
            }

            if recipes.is_empty() {
                div { class: "rounded border border-slate-700 bg-[#131824] p-6 text-sm text-slate-400",
                    "No recipes in this category."
                }
            } else {
                div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4",
                    for item in recipes {
                        RecipeCard {
                            key: "{item.id}",
                            item: item.clone(),
                            on_add: move |quantity: u32| {
                                let name = item.name.clone();
                                state.with_mut(|st| st.add_to_queue(item.clone(), quantity));
                                push_toast(toasts, ToastKind::Info, format!("Queued {quantity} x {name}"));
                            },
                        }
                    }
                }
            }

            QueueBar {
                entries,
                on_remove: move |id: String| state.with_mut(|st| st.remove_from_queue(&id)),
                on_build_list: move |_| { nav.push(Route::Market {}); },
            }
        }
    }
}
