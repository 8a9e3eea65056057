use crate::dashboards::RoleDashboard;
use crate::domain::a001_kitchen_center::ui::details::KitchenCenterDetails;
use crate::domain::a001_kitchen_center::ui::list::KitchenCenterList;
use crate::domain::a002_brand::ui::details::BrandDetails;
use crate::domain::a002_brand::ui::list::BrandList;
use crate::domain::a003_store::ui::list::StoreList;
use crate::domain::a004_category::ui::list::CategoryList;
use crate::domain::a005_product::ui::details::ProductDetails;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_order::ui::details::OrderDetails;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_banking_account::ui::details::BankingAccountCreate;
use crate::domain::a007_banking_account::ui::list::BankingAccountList;
use crate::domain::a008_money_exchange::ui::list::MoneyExchangeList;
use crate::domain::a008_money_exchange::ui::wallet::WalletPage;
use crate::domain::a009_store_partner::ui::details::StorePartnerDetails;
use crate::domain::a009_store_partner::ui::list::StorePartnerList;
use crate::domain::a010_cashier::ui::details::CashierDetails;
use crate::domain::a010_cashier::ui::list::CashierList;
use crate::layout::Shell;
use crate::routes::paths::{AppRoute, LOGIN_PATH};
use crate::system::auth::context::current_role;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::access_denied::{AccessDeniedPage, NotFoundPage};
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use contracts::enums::status::CategoryType;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Каркас раздела роли: guard + боковое меню + `<Outlet/>`
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireRole>
            <Shell />
        </RequireRole>
    }
}

/// `/` ведет на домашнюю страницу роли или на логин
#[component]
fn HomeRedirect() -> impl IntoView {
    let target = current_role()
        .get_untracked()
        .map(|role| AppRoute::home_for(role).path())
        .unwrap_or_else(|| LOGIN_PATH.to_string());
    view! { <Redirect path=target /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomeRedirect />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <Route path=path!("/error/no-permission") view=AccessDeniedPage />

                <ParentRoute path=path!("/admin") view=ProtectedShell>
                    <Route path=path!("") view=|| view! { <RoleDashboard role=Role::MbkcAdmin /> } />
                    <Route path=path!("kitchen-centers") view=KitchenCenterList />
                    <Route path=path!("kitchen-centers/new") view=KitchenCenterDetails />
                    <Route path=path!("kitchen-centers/:id/edit") view=KitchenCenterDetails />
                    <Route path=path!("brands") view=BrandList />
                    <Route path=path!("brands/new") view=BrandDetails />
                    <Route path=path!("brands/:id/edit") view=BrandDetails />
                    <Route path=path!("stores") view=StoreList />
                </ParentRoute>

                <ParentRoute path=path!("/brand") view=ProtectedShell>
                    <Route path=path!("") view=|| view! { <RoleDashboard role=Role::BrandManager /> } />
                    <Route path=path!("stores") view=StoreList />
                    <Route
                        path=path!("categories")
                        view=|| view! { <CategoryList category_type=CategoryType::Normal /> }
                    />
                    <Route
                        path=path!("extra-categories")
                        view=|| view! { <CategoryList category_type=CategoryType::Extra /> }
                    />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("products/:id") view=ProductDetails />
                    <Route path=path!("store-partners") view=StorePartnerList />
                    <Route path=path!("store-partners/new") view=StorePartnerDetails />
                    <Route
                        path=path!("store-partners/:store_id/:partner_id/edit")
                        view=StorePartnerDetails
                    />
                </ParentRoute>

                <ParentRoute path=path!("/kitchen-center") view=ProtectedShell>
                    <Route
                        path=path!("")
                        view=|| view! { <RoleDashboard role=Role::KitchenCenterManager /> }
                    />
                    <Route path=path!("stores") view=StoreList />
                    <Route path=path!("cashiers") view=CashierList />
                    <Route path=path!("cashiers/new") view=CashierDetails />
                    <Route path=path!("cashiers/:id/edit") view=CashierDetails />
                    <Route path=path!("orders") view=OrderList />
                    <Route
                        path=path!("orders/:id")
                        view=|| view! { <OrderDetails back=AppRoute::KitchenCenterOrders /> }
                    />
                    <Route path=path!("wallet") view=WalletPage />
                    <Route path=path!("banking-accounts") view=BankingAccountList />
                    <Route path=path!("banking-accounts/new") view=BankingAccountCreate />
                </ParentRoute>

                <ParentRoute path=path!("/cashier") view=ProtectedShell>
                    <Route path=path!("") view=|| view! { <RoleDashboard role=Role::Cashier /> } />
                    <Route path=path!("orders") view=OrderList />
                    <Route
                        path=path!("orders/:id")
                        view=|| view! { <OrderDetails back=AppRoute::CashierOrders /> }
                    />
                    <Route
                        path=path!("transactions")
                        view=|| {
                            view! {
                                <MoneyExchangeList
                                    title="Transactions"
                                    page_id="a008_money_exchange--list"
                                />
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
