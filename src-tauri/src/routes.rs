use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::session::{Portal, SessionSource};

/// Hidden path of the mobile brand-entry screen.
pub const ADD_BRAND_PATH: &str = "/AddBrand/12652154214641264521465124xxp1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Admin,
    Vendor,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route {
    pub pattern: &'static str,
    pub screen: &'static str,
    pub access: Access,
}

const fn route(pattern: &'static str, screen: &'static str, access: Access) -> Route {
    Route {
        pattern,
        screen,
        access,
    }
}

pub const NO_PAGE: Route = route("/*", "NoPage", Access::Public);

pub const ROUTES: &[Route] = &[
    // Admin
    route("/", "Home", Access::Admin),
    route("/login", "Login", Access::Public),
    route("/users", "Users", Access::Admin),
    route("/venues", "Venues", Access::Admin),
    route("/services", "Services", Access::Admin),
    route("/offers", "Offers", Access::Admin),
    route("/accounts", "Accounts", Access::Admin),
    route("/cities", "Cities", Access::Admin),
    route("/group_account", "GroupAccount", Access::Admin),
    route("/brands/:id", "BrandList", Access::Admin),
    route(ADD_BRAND_PATH, "AddBrand", Access::Public),
    route("/vender-acc", "VendorAccounts", Access::Admin),
    // Vendor
    route("/vender-login", "VendorLogin", Access::Public),
    route("/vendor-dashboard", "VendorDashboard", Access::Vendor),
    route("/Vender-RedeemHistory", "VendorRedeemHistory", Access::Vendor),
    route("/Vender-Brands", "VendorBrands", Access::Vendor),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RouteDecision {
    Render { screen: &'static str },
    Redirect { to: &'static str },
}

pub fn resolve(path: &str) -> Route {
    ROUTES
        .iter()
        .copied()
        .find(|route| matches(route.pattern, path))
        .unwrap_or(NO_PAGE)
}

pub fn guard(
    path: &str,
    sessions: &dyn SessionSource,
    now: DateTime<Utc>,
) -> AppResult<RouteDecision> {
    let route = resolve(path);

    let portal = match route.access {
        Access::Public => return Ok(RouteDecision::Render { screen: route.screen }),
        Access::Admin => Portal::Admin,
        Access::Vendor => Portal::Vendor,
    };

    if sessions.current(portal, now)?.is_some() {
        Ok(RouteDecision::Render { screen: route.screen })
    } else {
        Ok(RouteDecision::Redirect {
            to: portal.login_route(),
        })
    }
}

fn matches(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = |s: &str| s.trim_end_matches('/').to_string();

    let (pattern, path) = (trimmed(pattern), trimmed(path));
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(path_segments.iter())
        .all(|(expected, actual)| match expected.strip_prefix(':') {
            Some(_) => !actual.is_empty(),
            None => expected == actual,
        })
}
