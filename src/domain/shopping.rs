//! Turns the craft queue into a city-grouped shopping list.
//!
//! Everything here is pure: the list is rebuilt from the queue on every read
//! and never patched in place.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use super::entities::City;
use super::queue::QueueEntry;

/// Aggregated demand for one ingredient bought in one city.
#[derive(Clone, Debug, PartialEq)]
pub struct ShoppingListItem {
    pub name: String,
    pub recommended_city: City,
    pub total_quantity: f64,
    /// Distinct tiers seen for this ingredient, in first-seen order.
    pub tiers: Vec<u8>,
    /// First identifier seen wins and is never replaced.
    pub unique_name: Option<String>,
}

impl ShoppingListItem {
    fn empty(name: &str, city: City) -> Self {
        Self {
            name: name.to_string(),
            recommended_city: city,
            total_quantity: 0.0,
            tiers: Vec::new(),
            unique_name: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CityGroup {
    pub city: City,
    pub items: Vec<ShoppingListItem>,
}

/// Header figures for the market page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShoppingSummary {
    pub distinct_ingredients: usize,
    pub cities: usize,
    pub total_units: f64,
}

/// Multiplies out every queued recipe and merges ingredients that share a
/// name and a city. The result is sorted by city label with a stable sort,
/// so buckets of one city keep their first-appearance order.
pub fn aggregate(entries: &[QueueEntry]) -> Vec<ShoppingListItem> {
    let mut buckets: Vec<ShoppingListItem> = Vec::new();
    let mut index: HashMap<(&str, City), usize> = HashMap::new();

    for entry in entries {
        let crafts = f64::from(entry.item.crafts_needed(entry.quantity));

        for ingredient in &entry.item.ingredients {
            let key = (ingredient.name.as_str(), ingredient.recommended_city);
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(ShoppingListItem::empty(
                    &ingredient.name,
                    ingredient.recommended_city,
                ));
                buckets.len() - 1
            });
            let bucket = &mut buckets[slot];

            bucket.total_quantity += ingredient.quantity * crafts;
            if let Some(tier) = ingredient.tier {
                if !bucket.tiers.contains(&tier) {
                    bucket.tiers.push(tier);
                }
            }
            if bucket.unique_name.is_none() {
                bucket.unique_name = ingredient.unique_name.clone();
            }
        }
    }

    buckets.sort_by(|a, b| a.recommended_city.label().cmp(b.recommended_city.label()));
    buckets
}

/// Folds a city-sorted list into one group per city.
pub fn group_by_city(list: &[ShoppingListItem]) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    for item in list {
        match groups.last_mut() {
            Some(group) if group.city == item.recommended_city => group.items.push(item.clone()),
            _ => groups.push(CityGroup {
                city: item.recommended_city,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

pub fn summarize(list: &[ShoppingListItem]) -> ShoppingSummary {
    let cities: HashSet<City> = list.iter().map(|item| item.recommended_city).collect();
    ShoppingSummary {
        distinct_ingredients: list.len(),
        cities: cities.len(),
        total_units: list.iter().map(|item| item.total_quantity).sum(),
    }
}

/// Plain-text buy orders, one block per city. Used by "Copy list".
pub fn shopping_list_text(groups: &[CityGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}:", group.city.label());
        for item in &group.items {
            let _ = write!(
                out,
                "  - {} x {}",
                format_quantity(item.total_quantity),
                item.name
            );
            if !item.tiers.is_empty() {
                let tiers = item
                    .tiers
                    .iter()
                    .map(|tier| format!("T{tier}"))
                    .collect::<Vec<_>>()
                    .join("/");
                let _ = write!(out, " [{tiers}]");
            }
            out.push('\n');
        }
    }
    out
}

/// Whole numbers get thousands separators, fractions two decimals.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() != 0.0 {
        return format!("{value:.2}");
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Parses a quantity typed by the player the way a number input does:
/// leading digits count, anything else (empty, text, negative) becomes 0.
/// Values past `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let digits: &str = {
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };
    if digits.is_empty() {
        return 0;
    }
    digits
        .bytes()
        .try_fold(0_u32, |acc, byte| {
            acc.checked_mul(10)?.checked_add(u32::from(byte - b'0'))
        })
        .unwrap_or(u32::MAX)
}
