use crate::dashboards::d400_role_home::api;
use crate::routes::paths::AppRoute;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::{use_auth, use_user_scope};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Карточка сводки: ресурс API, по которому считается количество, и экран,
/// куда ведет клик.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTile {
    pub resource: &'static str,
    pub sort_key: &'static str,
    pub target: AppRoute,
}

impl DashboardTile {
    const fn new(resource: &'static str, sort_key: &'static str, target: AppRoute) -> Self {
        Self {
            resource,
            sort_key,
            target,
        }
    }
}

pub fn tiles_for(role: Role) -> Vec<DashboardTile> {
    match role {
        Role::MbkcAdmin => vec![
            DashboardTile::new("kitchencenters", "name", AppRoute::AdminKitchenCenters),
            DashboardTile::new("brands", "name", AppRoute::AdminBrands),
            DashboardTile::new("stores", "name", AppRoute::AdminStores),
        ],
        Role::BrandManager => vec![
            DashboardTile::new("stores", "name", AppRoute::BrandStores),
            DashboardTile::new("products", "name", AppRoute::BrandProducts),
            DashboardTile::new("storepartners", "storeName", AppRoute::BrandStorePartners),
        ],
        Role::KitchenCenterManager => vec![
            DashboardTile::new("stores", "name", AppRoute::KitchenCenterStores),
            DashboardTile::new("cashiers", "fullName", AppRoute::KitchenCenterCashiers),
            DashboardTile::new("orders", "createdDate", AppRoute::KitchenCenterOrders),
        ],
        Role::Cashier => vec![
            DashboardTile::new("orders", "createdDate", AppRoute::CashierOrders),
            DashboardTile::new("moneyexchanges", "transactionTime", AppRoute::CashierTransactions),
        ],
    }
}

#[component]
fn DashboardStat(tile: DashboardTile) -> impl IntoView {
    let scope = use_user_scope();
    let total = RwSignal::new(None::<usize>);

    spawn_local(async move {
        match api::fetch_total(tile.resource, tile.sort_key, scope).await {
            Ok(count) => {
                total.try_set(Some(count));
            }
            // Карточка остается с "-", остальной дашборд работает
            Err(e) => log::warn!("dashboard total for {} failed: {}", tile.resource, e),
        }
    });

    view! {
        <StatCard
            label=tile.target.label()
            icon_name=tile.target.icon()
            value=total
            href=tile.target.path()
        />
    }
}

/// Домашняя страница роли: приветствие и карточки с количеством записей
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let email = auth_state.with_untracked(|s| {
        s.user_info
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    });

    view! {
        <PageFrame page_id="d400_role_home--dashboard" category=PageCategory::Dashboard>
            <PageHeader title="Dashboard" subtitle=format!("{} · {}", role.display_name(), email) />
            <div class="dashboard__cards">
                {tiles_for(role)
                    .into_iter()
                    .map(|tile| view! { <DashboardStat tile=tile /> })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::paths::{route_access, RouteDecision};

    #[test]
    fn test_tiles_link_to_allowed_screens() {
        for role in Role::all() {
            let tiles = tiles_for(role);
            assert!(!tiles.is_empty());
            for tile in tiles {
                assert_eq!(
                    route_access(Some(role), &tile.target.path()),
                    RouteDecision::Allow,
                    "{:?} -> {:?}",
                    role,
                    tile.target
                );
            }
        }
    }
}
