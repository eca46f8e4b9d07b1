//! Sidebar navigation items

use serde::Serialize;

/// Icon identifier; the web crate maps each variant to an inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavIcon {
    Dashboard,
    Leads,
    Customer,
    Document,
    Cart,
    Mail,
    Archive,
    Calendar,
    Help,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// Exact path equality; an active path matching no item means no
    /// highlight anywhere, which is not an error.
    pub fn is_active(&self, active_path: &str) -> bool {
        self.path == active_path
    }
}

const fn item(path: &'static str, label: &'static str, icon: NavIcon) -> NavItem {
    NavItem { path, label, icon }
}

pub static MAIN_NAV: [NavItem; 9] = [
    item("/dashboard", "Dashboard", NavIcon::Dashboard),
    item("/leads", "Leads", NavIcon::Leads),
    item("/customers", "Customers", NavIcon::Customer),
    item("/proposals", "Proposals", NavIcon::Document),
    item("/invoices", "Invoices", NavIcon::Document),
    item("/items", "Items", NavIcon::Cart),
    item("/mail", "Mail", NavIcon::Mail),
    item("/shoebox", "Shoebox", NavIcon::Archive),
    item("/calendar", "Calendar", NavIcon::Calendar),
];

pub static SUPPORT_NAV: [NavItem; 3] = [
    item("/help", "Help", NavIcon::Help),
    item("/settings", "Settings", NavIcon::Settings),
    item("/support", "Help", NavIcon::Help),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_within_each_group() {
        let main: HashSet<_> = MAIN_NAV.iter().map(|i| i.path).collect();
        assert_eq!(main.len(), MAIN_NAV.len());
        let support: HashSet<_> = SUPPORT_NAV.iter().map(|i| i.path).collect();
        assert_eq!(support.len(), SUPPORT_NAV.len());
    }

    #[test]
    fn exactly_one_item_matches_dashboard() {
        let matches: Vec<_> = MAIN_NAV
            .iter()
            .chain(SUPPORT_NAV.iter())
            .filter(|i| i.is_active("/dashboard"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].label, "Dashboard");
    }

    #[test]
    fn unmatched_path_highlights_nothing() {
        let matches = MAIN_NAV
            .iter()
            .chain(SUPPORT_NAV.iter())
            .filter(|i| i.is_active("/reports"))
            .count();
        assert_eq!(matches, 0);
    }

    #[test]
    fn prefix_is_not_a_match() {
        let item = &MAIN_NAV[0];
        assert!(item.is_active("/dashboard"));
        assert!(!item.is_active("/dashboard/"));
        assert!(!item.is_active("/dash"));
    }
}
