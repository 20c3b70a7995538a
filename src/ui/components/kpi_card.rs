use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-slate-700 bg-[#131824] p-4 shadow-sm",
            h3 { class: "text-xs font-semibold uppercase tracking-widest text-slate-500", "{title}" }
            p { class: "mt-2 font-mono text-2xl font-bold tabular-nums text-amber-500", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs text-slate-500", "{desc}" }
            }
        }
    }
}
