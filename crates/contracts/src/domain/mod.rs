pub mod a001_kitchen_center;
pub mod a002_brand;
pub mod a003_store;
pub mod a004_category;
pub mod a005_product;
pub mod a006_order;
pub mod a007_banking_account;
pub mod a008_money_exchange;
pub mod a009_store_partner;
pub mod a010_cashier;
