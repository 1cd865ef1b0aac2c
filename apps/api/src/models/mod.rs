pub mod resources;
pub mod user;
