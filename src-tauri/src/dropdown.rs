//! Option lists for the country, city, venue and category pickers.

use std::collections::HashSet;

use crate::models::{City, Venue};
use crate::repository::Repository;

pub const CATEGORIES: [&str; 6] = [
    "Food and Drink",
    "Beauty and Spa",
    "Health and Fitness",
    "Fun and Leisure",
    "Room Nights",
    "Services and Retail",
];

fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trims, drops blanks and case-insensitive duplicates (first spelling wins),
/// then sorts case-insensitively.
pub fn normalize<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options: Vec<String> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(norm(v)))
        .map(str::to_string)
        .collect();

    options.sort_by_key(|v| norm(v));
    options
}

pub fn country_options(cities: &[City]) -> Vec<String> {
    normalize(cities.iter().map(|c| c.country_name.as_str()))
}

pub fn city_options(cities: &[City], selected_country: Option<&str>) -> Vec<String> {
    let country = selected_country.map(norm).filter(|c| !c.is_empty());
    normalize(
        cities
            .iter()
            .filter(|c| match &country {
                Some(country) => norm(&c.country_name) == *country,
                None => true,
            })
            .map(|c| c.city_name.as_str()),
    )
}

pub fn venue_options(venues: &[Venue]) -> Vec<String> {
    normalize(venues.iter().map(|v| v.venue_name.as_str()))
}

pub fn category_options() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Fetches the full list; a failed fetch logs and yields no options.
pub async fn fetch_cities(repo: &dyn Repository<City>) -> Vec<City> {
    repo.list().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching cities");
        Vec::new()
    })
}

pub async fn fetch_venues(repo: &dyn Repository<Venue>) -> Vec<Venue> {
    repo.list().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching venues");
        Vec::new()
    })
}
