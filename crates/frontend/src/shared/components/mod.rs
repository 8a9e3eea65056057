pub mod confirm_dialog;
pub mod field_error;
pub mod list_view;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_label;
pub mod table;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use field_error::field_error;
pub use list_view::{ColumnDef, ListView};
pub use page_header::PageHeader;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_label::{status_badge, toggle_label, StatusLabel};
