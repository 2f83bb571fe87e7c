//! Project configuration loading and bootstrap.
//!
//! Owns the `nativecn.config.toml` file format so the engine never has to:
//! the engine consumes the parsed [`InstallConfig`] only.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{InstallConfig, InstallError};

pub const CONFIG_FILE: &str = "nativecn.config.toml";

const DEFAULT_CONFIG: &str = r#"# nativecn project configuration.

# Styling strategy for installed components:
#   "utility-classes"   - NativeWind-style class names (default)
#   "native-stylesheet" - React Native StyleSheet objects
styling = "utility-classes"

[theme]
# Set to true to bind installed components to your own theme provider
# instead of the bundled @nativecn/theme module.
use_existing = false
# Import path of your theme module, e.g. "@/lib/theme".
# Required when use_existing is true.
# existing_theme_path = "@/lib/theme"
"#;

/// Load and parse `nativecn.config.toml` from the project root.
pub fn load(project_root: &Path) -> Result<InstallConfig, InstallError> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Err(InstallError::config_file(format!(
            "{CONFIG_FILE} not found. Run 'nativecn init' first."
        )));
    }

    let content = fs::read_to_string(&path).map_err(|err| {
        InstallError::config_file(format!("Failed to read {CONFIG_FILE}: {err}"))
    })?;

    toml::from_str(&content).map_err(|err| {
        InstallError::config_file(format!("Failed to parse {CONFIG_FILE}: {err}"))
    })
}

/// Write the default `nativecn.config.toml` into the project root.
///
/// Refuses to clobber an existing file; edit it in place instead.
pub fn init(project_root: &Path) -> Result<PathBuf, InstallError> {
    let path = project_root.join(CONFIG_FILE);
    if path.exists() {
        return Err(InstallError::config_file(format!(
            "{CONFIG_FILE} already exists. Edit it directly to change preferences."
        )));
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(InstallError::WriteFailure)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StylingStrategy;
    use tempfile::TempDir;

    #[test]
    fn init_writes_a_loadable_default() {
        let dir = TempDir::new().unwrap();
        init(dir.path()).expect("init should succeed");

        let config = load(dir.path()).expect("default config should load");
        assert_eq!(config.styling, StylingStrategy::UtilityClasses);
        assert!(!config.theme.use_existing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init(dir.path()).unwrap();
        assert!(init(dir.path()).is_err());
    }

    #[test]
    fn missing_config_points_at_init() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("nativecn init"));
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "styling = 42").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, InstallError::ConfigFile(_)));
    }
}
