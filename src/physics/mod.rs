pub mod atmosphere;
pub mod drag;
pub mod profile;
