use std::time::Duration;

use dioxus::prelude::*;

use albion_ledger::util::generate_id;

const DISMISS_AFTER: Duration = Duration::from_secs(5);
const STACK_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn classes(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-950/80 text-sky-100",
            ToastKind::Success => "border-amber-500/50 bg-amber-950/80 text-amber-100",
            ToastKind::Warning => "border-yellow-500/40 bg-yellow-950/80 text-yellow-100",
            ToastKind::Error => "border-red-500/50 bg-red-950/80 text-red-100",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ToastKind::Info => "Ledger",
            ToastKind::Success => "Advisor",
            ToastKind::Warning => "Advisor",
            ToastKind::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub body: String,
    /// How many identical notices were folded into this one.
    pub repeats: u32,
}

/// Queues a notice. An identical notice already on top is bumped instead of
/// stacked.
pub fn push_toast(mut stack: Signal<Vec<ToastMessage>>, kind: ToastKind, body: impl Into<String>) {
    let body = body.into();
    stack.with_mut(|stack| {
        if let Some(top) = stack.last_mut() {
            if top.kind == kind && top.body == body {
                top.repeats += 1;
                return;
            }
        }
        if stack.len() >= STACK_LIMIT {
            stack.remove(0);
        }
        stack.push(ToastMessage {
            id: generate_id("toast"),
            kind,
            body,
            repeats: 1,
        });
    });
}

fn dismiss(mut stack: Signal<Vec<ToastMessage>>, id: &str) {
    stack.with_mut(|stack| stack.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let stack = use_context::<Signal<Vec<ToastMessage>>>();
    let visible = stack();

    rsx! {
        if !visible.is_empty() {
            div { class: "pointer-events-none fixed inset-x-0 top-4 z-[60] flex justify-center",
                ul { class: "space-y-2",
                    for message in visible {
                        ToastCard { key: "{message.id}", message, stack }
                    }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, stack: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            dismiss(stack, &id);
        }
    });

    let close_id = message.id.clone();
    let kind = message.kind;

    rsx! {
        li { class: "pointer-events-auto flex min-w-[16rem] items-start gap-3 rounded border px-4 py-2 shadow-xl backdrop-blur {kind.classes()}",
            div { class: "flex-1",
                p { class: "font-fantasy text-xs uppercase tracking-widest opacity-70", "{kind.title()}" }
                p { class: "text-sm",
                    "{message.body}"
                    if message.repeats > 1 {
                        span { class: "ml-2 font-mono text-xs opacity-60", "×{message.repeats}" }
                    }
                }
            }
            button {
                class: "text-xs text-slate-400 hover:text-white",
                onclick: move |_| dismiss(stack, &close_id),
                "✕"
            }
        }
    }
}
