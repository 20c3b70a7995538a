use std::fmt;

use serde::{Deserialize, Serialize};

/// Royal cities (plus the wildcard) where ingredients are bought.
///
/// Serialised by display label so the embedded catalog reads like the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Martlock,
    Bridgewatch,
    Lymhurst,
    #[serde(rename = "Fort Sterling")]
    FortSterling,
    Thetford,
    Caerleon,
    Brecilien,
    /// No city-specific bonus applies.
    #[serde(rename = "Any City")]
    Any,
}

impl City {
    pub const ALL: [City; 8] = [
        City::Martlock,
        City::Bridgewatch,
        City::Lymhurst,
        City::FortSterling,
        City::Thetford,
        City::Caerleon,
        City::Brecilien,
        City::Any,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            City::Martlock => "Martlock",
            City::Bridgewatch => "Bridgewatch",
            City::Lymhurst => "Lymhurst",
            City::FortSterling => "Fort Sterling",
            City::Thetford => "Thetford",
            City::Caerleon => "Caerleon",
            City::Brecilien => "Brecilien",
            City::Any => "Any City",
        }
    }

    /// Exact match against the display labels. No fuzzy spelling fixes.
    pub fn from_label(raw: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.label() == raw)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, City::Any)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Potion,
    Food,
    Ingredient,
}

impl ItemType {
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Potion => "Potion",
            ItemType::Food => "Food",
            ItemType::Ingredient => "Ingredient",
        }
    }
}

/// One ingredient line of a recipe, quantities are per single craft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub recommended_city: City,
    #[serde(default)]
    pub tier: Option<u8>,
    /// Albion item id, e.g. `T4_MILK`.
    #[serde(default)]
    pub unique_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraftableItem {
    pub id: String,
    pub name: String,
    pub tier: u8,
    pub item_type: ItemType,
    pub ingredients: Vec<Ingredient>,
    /// Finished units per craft. Absent or zero means one.
    #[serde(default)]
    pub yield_base: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unique_name: Option<String>,
}

impl CraftableItem {
    pub fn yield_per_craft(&self) -> u32 {
        self.yield_base.filter(|value| *value > 0).unwrap_or(1)
    }

    /// Crafts needed for `desired` finished units. Partial batches round up.
    pub fn crafts_needed(&self, desired: u32) -> u32 {
        desired.div_ceil(self.yield_per_craft())
    }

    /// Quantity pre-filled in the craft input and used for advisor imports.
    pub fn default_order_quantity(&self) -> u32 {
        self.yield_base.filter(|value| *value > 0).unwrap_or(10)
    }

    pub fn render_url(&self) -> Option<String> {
        self.unique_name.as_deref().map(render_url)
    }
}

/// Item icon served by the official render service.
pub fn render_url(unique_name: &str) -> String {
    format!("https://render.albiononline.com/v1/item/{unique_name}.png")
}

/// Resources a city produces with a local bonus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityBonus {
    pub city: City,
    pub description: String,
    pub resources: Vec<String>,
}
