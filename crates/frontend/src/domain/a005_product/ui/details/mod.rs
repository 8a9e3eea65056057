pub mod view;

pub use view::ProductDetails;
