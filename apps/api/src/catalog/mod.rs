pub mod resources;
pub mod roles;
