//! Client-side search and pagination for the table screens.

use serde::{Deserialize, Serialize};

use crate::assets::{resolve_url, source_label};
use crate::config::Config;
use crate::models::{
    AdminAccount, Brand, City, GroupAccount, GroupBrand, RedeemedDiscount, Vendor, Venue,
};
use crate::timestamp;

pub const PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub search: String,
    /// 1-based; out-of-range pages are clamped.
    pub page: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

pub trait Searchable {
    /// `needle` is already trimmed and lowercased; `raw` is what was typed.
    fn matches(&self, needle: &str, raw: &str) -> bool;
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for AdminAccount {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.name, needle) || contains(&self.email, needle)
    }
}

impl Searchable for City {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.city_name, needle) || contains(&self.country_name, needle)
    }
}

impl Searchable for Brand {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.name_eng, needle)
    }
}

impl Searchable for Venue {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.venue_name, needle)
    }
}

impl Searchable for GroupAccount {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.group_name, needle)
    }
}

impl Searchable for GroupBrand {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.brand_name, needle)
    }
}

impl Searchable for Vendor {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains(&self.name, needle) || contains(&self.email, needle)
    }
}

impl Searchable for RedeemedDiscount {
    fn matches(&self, needle: &str, raw: &str) -> bool {
        contains(&self.username, needle)
            || self.phone_number.contains(raw)
            || contains(&self.brand, needle)
    }
}

pub fn search<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let raw = query.trim();
    if raw.is_empty() {
        return items;
    }
    let needle = raw.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches(&needle, raw))
        .collect()
}

pub fn list<T: Searchable>(items: Vec<T>, query: &ListQuery) -> Page<T> {
    paginate(search(items, &query.search), query.page, PAGE_SIZE)
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Brands belonging to the signed-in vendor, matched by name.
pub fn vendor_brands(brands: Vec<Brand>, vendor_name: &str) -> Vec<Brand> {
    brands
        .into_iter()
        .filter(|b| same_name(&b.name_eng, vendor_name))
        .collect()
}

pub fn vendor_redeems(
    redeems: Vec<RedeemedDiscount>,
    vendor_name: &str,
) -> Vec<RedeemedDiscount> {
    redeems
        .into_iter()
        .filter(|r| same_name(&r.brand, vendor_name))
        .collect()
}

/// Brands of one group account (`/brands/:id`).
pub fn group_brands(brands: Vec<GroupBrand>, group_id: &str) -> Vec<GroupBrand> {
    brands
        .into_iter()
        .filter(|b| b.group_id == group_id)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    #[serde(flatten)]
    pub account: AdminAccount,
    pub protected: bool,
}

impl AccountRow {
    pub fn new(account: AdminAccount, config: &Config) -> Self {
        let protected = config.is_protected_account(&account.email);
        Self { account, protected }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRow {
    #[serde(flatten)]
    pub brand: Brand,
    pub display_discount: String,
    pub logo_url: String,
    pub logo_source: &'static str,
}

impl BrandRow {
    pub fn new(brand: Brand, asset_base: &str) -> Self {
        let logo_url = resolve_url(brand.logo(), asset_base);
        Self {
            display_discount: brand.display_discount(),
            logo_source: source_label(&logo_url),
            logo_url,
            brand,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRow {
    #[serde(flatten)]
    pub redeem: RedeemedDiscount,
    pub redeemed_at: String,
}

impl From<RedeemedDiscount> for RedeemRow {
    fn from(redeem: RedeemedDiscount) -> Self {
        Self {
            redeemed_at: timestamp::display(&redeem.created_at),
            redeem,
        }
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
