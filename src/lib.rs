//! Headless core of Albion Ledger: recipe catalog, craft queue, shopping
//! list aggregation and the recipe advisor client. The Dioxus front end in
//! `main.rs` sits on top of this.

pub mod domain;
pub mod infra;
pub mod util;
