pub mod config;
pub mod constants;
pub mod integrators;
pub mod models;
pub mod physics;
