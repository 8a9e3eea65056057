pub mod d400_role_home;

pub use d400_role_home::ui::RoleDashboard;
