use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod settings;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Session-local ids for UI bits like toasts. Items use uuids instead.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}
