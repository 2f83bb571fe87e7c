mod conflict;
mod embedded_registry;
mod installer;
pub mod transform;

pub use embedded_registry::EmbeddedComponentRegistry;
pub use installer::install;
