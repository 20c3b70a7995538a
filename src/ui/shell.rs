use dioxus::prelude::*;

use albion_ledger::{domain::AppState, util::version::version_label};

use crate::app::Route;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let queue_len = state.with(|st| st.queue.len());

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen p-2 text-slate-200 md:p-6 flex flex-col items-center",
            div { class: "ledger-window w-full max-w-7xl rounded-lg overflow-hidden flex flex-col min-h-[90vh]",
                header { class: "relative z-20 flex items-center justify-between border-b-2 border-amber-600/50 bg-[#1f2937] p-4 shadow-md",
                    div { class: "flex items-center gap-3",
                        div { class: "flex h-10 w-10 rotate-45 items-center justify-center rounded border border-amber-300 bg-gradient-to-br from-amber-500 to-amber-700 shadow-lg",
                            span { class: "-rotate-45 font-fantasy text-2xl font-bold text-slate-900", "A" }
                        }
                        h1 { class: "font-fantasy text-2xl tracking-wider text-amber-500",
                            "Albion "
                            span { class: "text-slate-300", "Ledger" }
                        }
                    }
                    span { class: "rounded border border-slate-700 bg-black/30 px-3 py-1 font-mono text-xs text-slate-400",
                        "{version_label()}"
                    }
                }

                nav { class: "flex gap-2 overflow-x-auto border-b border-slate-700 bg-[#1a2130] px-4 pt-4",
                    TabButton {
                        active: matches!(current_route, Route::Craft {}),
                        onclick: move |_| { nav.push(Route::Craft {}); },
                        label: "Craft Station",
                        count: None,
                    }
                    TabButton {
                        active: matches!(current_route, Route::Market {}),
                        onclick: move |_| { nav.push(Route::Market {}); },
                        label: "Market & Purchases",
                        count: Some(queue_len),
                    }
                    TabButton {
                        active: matches!(current_route, Route::Guide {}),
                        onclick: move |_| { nav.push(Route::Guide {}); },
                        label: "World Map (Bonuses)",
                        count: None,
                    }
                }

                main { class: "relative flex-1 overflow-y-auto bg-[#252e40] p-4 md:p-8",
                    div { class: "relative z-10 mx-auto max-w-7xl", {children} }
                }
            }
        }
    }
}

#[component]
fn TabButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    count: Option<usize>,
) -> Element {
    rsx! {
        button {
            class: "{theme::tab_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
            if let Some(count) = count.filter(|c| *c > 0) {
                span { class: "ml-2 rounded-full bg-amber-600 px-1.5 py-0.5 text-[10px] text-white shadow-sm",
                    "{count}"
                }
            }
        }
    }
}
