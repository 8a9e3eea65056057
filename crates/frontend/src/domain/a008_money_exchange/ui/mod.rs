pub mod list;
pub mod wallet;
