//! nativecn: install nativecn UI component source into a React Native
//! project, rewritten for that project's styling and theming preferences.
//!
//! Components are distributed as editable source, not a compiled package:
//! `add` materializes a component's template files under the project's
//! component directory, transformed to match `nativecn.config.toml`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

pub use domain::{
    ComponentId, InstallConfig, InstallError, InstallOutcome, SkipReason, StylingStrategy,
    ThemeConfig, TransformError,
};
pub use ports::{Template, TemplateFile, TemplateRegistry};
pub use services::{EmbeddedComponentRegistry, install, transform};

/// Write a default `nativecn.config.toml` in the current directory.
pub fn init_config() -> Result<PathBuf, InstallError> {
    let cwd = std::env::current_dir().map_err(InstallError::WriteFailure)?;
    let path = app::config_loader::init(&cwd)?;
    println!("✅ Created {}", app::config_loader::CONFIG_FILE);
    Ok(path)
}

/// Install one component under `target_dir`, reading configuration from
/// `nativecn.config.toml` in the current directory.
///
/// Returns the engine outcome after printing a one-line status for it.
pub fn add(
    component: &str,
    target_dir: &Path,
    overwrite: bool,
) -> Result<InstallOutcome, InstallError> {
    let cwd = std::env::current_dir().map_err(InstallError::WriteFailure)?;
    let config = app::config_loader::load(&cwd)?;

    let registry = EmbeddedComponentRegistry::new();
    let outcome = install(&registry, component, target_dir, overwrite, &config)?;

    match &outcome {
        InstallOutcome::Installed { dir, files } => {
            println!("✅ Added component '{}' ({} files) at {}", component, files.len(), dir.display());
        }
        InstallOutcome::Skipped { reason } => {
            println!("! {}", reason.message(component));
        }
    }
    Ok(outcome)
}

/// Names of all components available in the embedded template set.
pub fn components() -> Vec<String> {
    EmbeddedComponentRegistry::new().component_names()
}
