//! Crafting queue and shopping-list logic lives here.

pub mod advisor;
pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod queue;
pub mod shopping;

pub use advisor::{AdvisorOutcome, AdvisorSession, LookupTicket};
pub use app_state::AppState;
pub use catalog::{Catalog, CatalogError, CatalogFilter};
pub use entities::{render_url, City, CityBonus, CraftableItem, Ingredient, ItemType};
pub use queue::{CraftQueue, QueueEntry};
pub use shopping::{
    aggregate, format_quantity, group_by_city, parse_quantity, shopping_list_text, summarize,
    CityGroup, ShoppingListItem, ShoppingSummary,
};
