pub mod params;
pub mod paths;
pub mod routes;
