pub mod config;
pub mod provider;
pub mod resources;
pub mod size;
