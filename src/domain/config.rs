use serde::Deserialize;

use super::InstallError;

/// Project preferences consumed by the installation engine.
///
/// The engine never reads this from disk itself; the CLI (or any other
/// caller) supplies an already-parsed value, read once per invocation and
/// never mutated by the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// How installed components express their styling.
    #[serde(default)]
    pub styling: StylingStrategy,

    /// How installed components bind to a theme provider.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl InstallConfig {
    /// Reject configurations the transformation pipeline cannot honor.
    ///
    /// Checked before resolution begins, so an invalid configuration never
    /// reaches the filesystem.
    pub fn validate(&self) -> Result<(), InstallError> {
        if self.theme.use_existing {
            match self.theme.existing_theme_path.as_deref() {
                Some(path) if !path.trim().is_empty() => {}
                _ => {
                    return Err(InstallError::InvalidConfiguration(
                        "theme.use_existing requires a non-empty theme.existing_theme_path"
                            .to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Styling strategy for installed component source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum StylingStrategy {
    /// Utility class names (the template default; content is left as-is).
    #[default]
    #[serde(rename = "utility-classes")]
    UtilityClasses,
    /// Native StyleSheet objects; flips the styling marker in templates.
    #[serde(rename = "native-stylesheet")]
    NativeStylesheet,
}

/// Theme binding preferences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Rebind installed components to the project's own theme provider.
    #[serde(default)]
    pub use_existing: bool,

    /// Import path of the project's theme module. Required when
    /// `use_existing` is set.
    #[serde(default)]
    pub existing_theme_path: Option<String>,
}
