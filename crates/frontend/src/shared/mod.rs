pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod detail_load;
pub mod icons;
pub mod list_coordinator;
pub mod list_screen;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
pub mod validation;
