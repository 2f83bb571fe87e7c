use std::path::PathBuf;

/// Result of a single install invocation.
///
/// `Skipped` is a normal steady state (the component is already present and
/// overwrite was not requested), distinct from both `Installed` and the
/// error cases so batch callers can continue past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The full file set was committed to `dir`.
    Installed {
        dir: PathBuf,
        /// File names written, in template declaration order.
        files: Vec<String>,
    },
    /// Nothing was written.
    Skipped { reason: SkipReason },
}

/// Why an installation was skipped rather than performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Destination already contains files for this component and overwrite
    /// was not requested.
    AlreadyExists,
}

impl SkipReason {
    pub fn message(&self, component: &str) -> String {
        match self {
            SkipReason::AlreadyExists => format!(
                "Component '{component}' already exists. Use --overwrite to replace it."
            ),
        }
    }
}
