use thiserror::Error;
use tracing::info;

use super::entities::{CityBonus, CraftableItem, ItemType};
use crate::util::assets::{self, AssetError};

const RECIPES_ASSET: &str = "recipes.json";
const CITY_BONUSES_ASSET: &str = "city_bonuses.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("invalid catalog data in {path}: {source}")]
    Json {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Tab filter on the craft station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    Potion,
    Food,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [CatalogFilter::All, CatalogFilter::Potion, CatalogFilter::Food];

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::Potion => "Potions",
            CatalogFilter::Food => "Food",
        }
    }

    pub fn matches(&self, item: &CraftableItem) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Potion => item.item_type == ItemType::Potion,
            CatalogFilter::Food => item.item_type == ItemType::Food,
        }
    }
}

/// Read-only recipe table and city bonus guide, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CraftableItem>,
    city_bonuses: Vec<CityBonus>,
}

impl Catalog {
    pub fn new(items: Vec<CraftableItem>, city_bonuses: Vec<CityBonus>) -> Self {
        Self {
            items,
            city_bonuses,
        }
    }

    /// Parses the embedded data assets.
    pub fn load() -> Result<Self, CatalogError> {
        let items: Vec<CraftableItem> = parse_asset(RECIPES_ASSET)?;
        let city_bonuses: Vec<CityBonus> = parse_asset(CITY_BONUSES_ASSET)?;
        info!(
            recipes = items.len(),
            cities = city_bonuses.len(),
            "catalog loaded"
        );
        Ok(Self::new(items, city_bonuses))
    }

    pub fn items(&self) -> &[CraftableItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&CraftableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self, filter: CatalogFilter) -> impl Iterator<Item = &CraftableItem> + '_ {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    pub fn city_bonuses(&self) -> &[CityBonus] {
        &self.city_bonuses
    }
}

fn parse_asset<T: serde::de::DeserializeOwned>(path: &'static str) -> Result<T, CatalogError> {
    let raw = assets::load_text(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Json { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load().expect("embedded catalog should parse");
        assert!(!catalog.items().is_empty());
        assert!(!catalog.city_bonuses().is_empty());
        assert!(catalog.find("p_acid_5").is_some());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn filters_split_potions_and_food() {
        let catalog = Catalog::load().unwrap();
        let total = catalog.items().len();
        let potions = catalog.filter(CatalogFilter::Potion).count();
        let food = catalog.filter(CatalogFilter::Food).count();
        assert!(potions > 0 && food > 0);
        assert_eq!(catalog.filter(CatalogFilter::All).count(), total);
        assert!(catalog
            .filter(CatalogFilter::Potion)
            .all(|item| item.item_type == ItemType::Potion));
    }
}
