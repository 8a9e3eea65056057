pub mod extra_dialog;
pub mod list;
