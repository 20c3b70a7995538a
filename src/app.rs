use dioxus::prelude::*;
use tracing::{error, warn};

use albion_ledger::{
    domain::{AppState, Catalog},
    infra::GeminiClient,
    util::{assets, settings::AdvisorSettings},
};

use crate::ui::{
    components::toast::{push_toast, Toast, ToastKind, ToastMessage},
    pages::{CraftPage, GuidePage, MarketPage},
    shell::Shell,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/craft")]
    Craft {},
    #[route("/market")]
    Market {},
    #[route("/guide")]
    Guide {},
}

/// Advisor client shared through context. `None` when the client could not
/// be built (bad base URL); lookups then resolve to "no result".
#[derive(Clone)]
pub struct AdvisorClient(pub Option<GeminiClient>);

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let state = use_signal(|| match Catalog::load() {
        Ok(catalog) => AppState::new(catalog),
        Err(err) => {
            error!("failed to load recipe catalog: {err}");
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Recipe catalog unavailable: {err}"),
            );
            AppState::default()
        }
    });
    use_context_provider(|| state);

    use_context_provider(|| {
        let settings = AdvisorSettings::load();
        if !settings.has_api_key() {
            warn!("no advisor API key configured; recipe advisor will return no results");
        }
        match GeminiClient::from_settings(&settings) {
            Ok(client) => AdvisorClient(Some(client)),
            Err(err) => {
                error!("failed to initialise advisor client: {err}");
                AdvisorClient(None)
            }
        }
    });

    rsx! {
        document::Script { src: TAILWIND_CDN }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Craft() -> Element {
    rsx! { Shell { CraftPage {} } }
}

#[component]
pub fn Market() -> Element {
    rsx! { Shell { MarketPage {} } }
}

#[component]
pub fn Guide() -> Element {
    rsx! { Shell { GuidePage {} } }
}
