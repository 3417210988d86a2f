//! Tab content registry - the single mapping from tab key to view.

use leptos::prelude::*;

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::dashboards::d401_analytics::AnalyticsDashboard;
use crate::domain::a101_shop_product::ui::ShopProductList;
use crate::domain::a102_competitor_product::ui::CompetitorProductList;
use crate::domain::a103_supplier_product::ui::SupplierProductList;
use crate::domain::a104_product_mapping::ui::ProductMappingList;
use crate::domain::a105_price_plan::ui::PricePlanList;
use crate::layout::tabs::TabKey;
use crate::system::settings::ui::SettingsPage;

/// Build the content view for a tab key.
pub fn render_tab_content(key: TabKey) -> AnyView {
    match key {
        TabKey::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        TabKey::Products => view! { <ShopProductList /> }.into_any(),
        TabKey::PricePlans => view! { <PricePlanList /> }.into_any(),
        TabKey::Mappings => view! { <ProductMappingList /> }.into_any(),
        TabKey::Competitors => view! { <CompetitorProductList /> }.into_any(),
        TabKey::Suppliers => view! { <SupplierProductList /> }.into_any(),
        TabKey::Settings => view! { <SettingsPage /> }.into_any(),
        TabKey::Analytics => view! { <AnalyticsDashboard /> }.into_any(),
    }
}
