use dioxus::prelude::*;

use albion_ledger::domain::{parse_quantity, render_url, CraftableItem, ItemType};

use crate::ui::theme;

const PREVIEW_INGREDIENTS: usize = 4;

#[component]
pub fn RecipeCard(item: CraftableItem, on_add: EventHandler<u32>) -> Element {
    let mut amount = use_signal(|| item.default_order_quantity());
    let mut image_failed = use_signal(|| false);

    let tier = theme::tier_colors(item.tier);
    let image = item.render_url().filter(|_| !image_failed());
    let fallback_icon = match item.item_type {
        ItemType::Potion => "⚗",
        ItemType::Food => "🍲",
        ItemType::Ingredient => "📦",
    };
    let yield_hint = item.yield_per_craft();
    let previews = item
        .ingredients
        .iter()
        .take(PREVIEW_INGREDIENTS)
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "group relative overflow-hidden rounded-md border-2 bg-[#181d29] shadow-lg transition-transform hover:-translate-y-1 hover:shadow-xl {tier.border}",
            div {
                class: "relative flex h-32 flex-col items-center justify-center border-b border-slate-700/50 p-2 {tier.bg}",
                div {
                    class: "absolute left-0 top-0 rounded-br-md border-b border-r border-slate-700 bg-black/60 px-2 py-0.5 text-xs font-bold {tier.text}",
                    "Tier {item.tier}"
                }
                div { class: "relative z-10 flex h-24 w-24 items-center justify-center",
                    if let Some(src) = image {
                        img {
                            class: "h-full w-full object-contain",
                            src: "{src}",
                            alt: "{item.name}",
                            onerror: move |_| image_failed.set(true),
                        }
                    } else {
                        span { class: "text-5xl opacity-80 {tier.text}", "{fallback_icon}" }
                    }
                }
            }

            div { class: "p-3",
                h3 {
                    class: "mb-1 min-h-[2.5rem] font-fantasy text-sm font-bold leading-snug text-slate-100",
                    title: item.description.clone().unwrap_or_default(),
                    "{item.name}"
                }
                p { class: "mb-2 text-[10px] uppercase tracking-widest text-slate-500",
                    "{item.item_type.label()} · yields {yield_hint}"
                }
                div { class: "mb-3 flex h-6 gap-1",
                    for ingredient in previews {
                        div {
                            class: "flex h-6 w-6 items-center justify-center rounded border border-slate-700 bg-black/50",
                            title: "{ingredient.name}",
                            if let Some(unique) = ingredient.unique_name.as_deref() {
                                img {
                                    class: "h-full w-full object-contain p-0.5",
                                    src: render_url(unique),
                                    alt: "{ingredient.name}",
                                }
                            } else {
                                div { class: quantity_dot(ingredient.quantity) }
                            }
                        }
                    }
                }
                div { class: "mt-auto flex items-center gap-2 border-t border-slate-700/50 pt-2",
                    input {
                        class: theme::INPUT_NUMBER,
                        r#type: "number",
                        min: "0",
                        step: "{yield_hint}",
                        value: "{amount}",
                        oninput: move |evt| amount.set(parse_quantity(&evt.value())),
                    }
                    button {
                        class: theme::BTN_CRAFT,
                        onclick: move |_| on_add.call(amount()),
                        "Craft"
                    }
                }
            }
        }
    }
}

/// Bulk ingredients get an amber dot in the preview strip.
fn quantity_dot(quantity: f64) -> &'static str {
    if quantity > 10.0 {
        "h-2 w-2 rounded-full bg-amber-500"
    } else {
        "h-2 w-2 rounded-full bg-slate-400"
    }
}
