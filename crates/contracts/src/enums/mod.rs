pub mod gender;
pub mod partner_type;
pub mod status;
