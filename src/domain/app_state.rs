use super::advisor::{AdvisorOutcome, AdvisorSession, LookupTicket};
use super::catalog::{Catalog, CatalogFilter};
use super::entities::CraftableItem;
use super::queue::CraftQueue;
use super::shopping::{aggregate, group_by_city, CityGroup, ShoppingListItem};

/// Everything the UI reads and mutates during one session. Nothing here is
/// written to disk.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub queue: CraftQueue,
    pub filter: CatalogFilter,
    pub advisor: AdvisorSession,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn visible_recipes(&self) -> Vec<CraftableItem> {
        self.catalog.filter(self.filter).cloned().collect()
    }

    pub fn add_to_queue(&mut self, item: CraftableItem, quantity: u32) {
        self.queue.add(item, quantity);
    }

    pub fn remove_from_queue(&mut self, item_id: &str) {
        self.queue.remove(item_id);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn shopping_list(&self) -> Vec<ShoppingListItem> {
        aggregate(self.queue.entries())
    }

    pub fn shopping_groups(&self) -> Vec<CityGroup> {
        group_by_city(&self.shopping_list())
    }

    pub fn begin_lookup(&mut self, query: &str) -> Option<LookupTicket> {
        self.advisor.begin(query)
    }

    /// Releases the advisor after its caller went away or the user gave up.
    /// A late answer to the dropped ticket comes back as stale.
    pub fn cancel_lookup(&mut self) {
        self.advisor.abandon();
    }

    /// Applies an advisor answer. A found recipe is queued with one default
    /// order's worth of output.
    pub fn finish_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: Option<CraftableItem>,
    ) -> AdvisorOutcome {
        let outcome = self.advisor.finish(ticket, result);
        if let AdvisorOutcome::Imported(item) = &outcome {
            let quantity = item.default_order_quantity();
            self.queue.add(item.clone(), quantity);
        }
        outcome
    }
}
