pub mod access_denied;
pub mod forgot_password;
pub mod login;
