pub const APP_NAME: &str = "Albion Ledger";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

/// Sent with every outbound HTTP request.
pub fn user_agent() -> String {
    format!("albion-ledger/{APP_VERSION}")
}
