//! Tab keys - the single source of truth for the navigation set.
//!
//! Every tab maps to exactly one content container. "Dynamic" tabs share
//! one physical container and are remounted on every switch; the rest own
//! a dedicated container that stays mounted and is hidden while inactive.

/// The fixed set of views reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKey {
    Dashboard,
    Products,
    PricePlans,
    Mappings,
    Competitors,
    Suppliers,
    Settings,
    Analytics,
}

/// Id of the container shared by all dynamic tabs.
pub const DYNAMIC_CONTAINER_ID: &str = "dynamic-tab";

impl TabKey {
    pub const ALL: [TabKey; 8] = [
        TabKey::Dashboard,
        TabKey::Products,
        TabKey::PricePlans,
        TabKey::Mappings,
        TabKey::Competitors,
        TabKey::Suppliers,
        TabKey::Settings,
        TabKey::Analytics,
    ];

    pub const DEFAULT: TabKey = TabKey::Dashboard;

    /// Stable name used in the URL hash and in `data-tab` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabKey::Dashboard => "dashboard",
            TabKey::Products => "products",
            TabKey::PricePlans => "price-plans",
            TabKey::Mappings => "mappings",
            TabKey::Competitors => "competitors",
            TabKey::Suppliers => "suppliers",
            TabKey::Settings => "settings",
            TabKey::Analytics => "analytics",
        }
    }

    pub fn parse(name: &str) -> Option<TabKey> {
        TabKey::ALL.iter().copied().find(|key| key.as_str() == name)
    }

    /// Parse a `location.hash` value; tolerates the leading `#`.
    pub fn from_hash(hash: &str) -> Option<TabKey> {
        TabKey::parse(hash.trim_start_matches('#'))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabKey::Dashboard => "Dashboard",
            TabKey::Products => "Products",
            TabKey::PricePlans => "Price plans",
            TabKey::Mappings => "Mappings",
            TabKey::Competitors => "Competitors",
            TabKey::Suppliers => "Suppliers",
            TabKey::Settings => "Settings",
            TabKey::Analytics => "Analytics",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            TabKey::Dashboard => "bar-chart",
            TabKey::Products => "package",
            TabKey::PricePlans => "tag",
            TabKey::Mappings => "link",
            TabKey::Competitors => "crosshair",
            TabKey::Suppliers => "truck",
            TabKey::Settings => "settings",
            TabKey::Analytics => "activity",
        }
    }

    /// Dynamic tabs share [`DYNAMIC_CONTAINER_ID`] and are rebuilt on each
    /// switch instead of staying mounted.
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            TabKey::Mappings | TabKey::Competitors | TabKey::Suppliers | TabKey::Analytics
        )
    }

    pub fn content_container_id(&self) -> String {
        if self.is_dynamic() {
            DYNAMIC_CONTAINER_ID.to_string()
        } else {
            format!("{}-tab", self.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_tabs_share_one_container() {
        for key in [
            TabKey::Mappings,
            TabKey::Competitors,
            TabKey::Suppliers,
            TabKey::Analytics,
        ] {
            assert_eq!(key.content_container_id(), DYNAMIC_CONTAINER_ID);
        }
    }

    #[test]
    fn static_tabs_get_dedicated_containers() {
        assert_eq!(TabKey::Dashboard.content_container_id(), "dashboard-tab");
        assert_eq!(TabKey::Products.content_container_id(), "products-tab");
        assert_eq!(
            TabKey::PricePlans.content_container_id(),
            "price-plans-tab"
        );
        assert_eq!(TabKey::Settings.content_container_id(), "settings-tab");
    }

    #[test]
    fn names_round_trip() {
        for key in TabKey::ALL {
            assert_eq!(TabKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(TabKey::parse("unknown"), None);
    }

    #[test]
    fn hash_parse_tolerates_prefix() {
        assert_eq!(TabKey::from_hash("#competitors"), Some(TabKey::Competitors));
        assert_eq!(TabKey::from_hash("price-plans"), Some(TabKey::PricePlans));
        assert_eq!(TabKey::from_hash("#"), None);
        assert_eq!(TabKey::from_hash(""), None);
    }
}
