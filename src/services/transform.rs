//! Configuration-driven rewriting of template content.
//!
//! Rules match exact literal marker tokens, not parsed syntax. Every rule is
//! written so that its own output no longer contains the marker it matched,
//! which makes the whole pipeline idempotent: transforming already
//! transformed content is a no-op.

use crate::domain::{InstallConfig, StylingStrategy, TransformError};

/// Marker flipped when the project styles with native StyleSheet objects.
const STYLING_MARKER: &str = "useNativeStyleSheet = false";
const STYLING_REWRITE: &str = "useNativeStyleSheet = true";

/// Import of the distribution's built-in theme provider.
const THEME_IMPORT_MARKER: &str = r#"import { useNativeCNTheme } from "@nativecn/theme";"#;

/// Invocation of the built-in theme hook.
const THEME_HOOK_MARKER: &str = "useNativeCNTheme()";
const THEME_HOOK_REWRITE: &str = "useTheme()";

/// The bare hook token; must be gone once the theme rules have run.
const THEME_TOKEN: &str = "useNativeCNTheme";

/// One ordered rewrite step: an applicability predicate over the
/// configuration plus a content rewrite. Rules are pure and idempotent.
struct TransformRule {
    applies: fn(&InstallConfig) -> bool,
    rewrite: fn(&str, &InstallConfig) -> Result<String, TransformError>,
}

/// The fixed rule order. Later rules see earlier rules' output, so order is
/// part of the contract: the theme-import rewrite must land before the hook
/// rewrite validates that no built-in theme token survived.
const RULES: &[TransformRule] = &[
    TransformRule { applies: styling_applies, rewrite: rewrite_styling_flag },
    TransformRule { applies: theme_applies, rewrite: rewrite_theme_import },
    TransformRule { applies: theme_applies, rewrite: rewrite_theme_hook },
];

/// Run the full pipeline over one file's content.
///
/// Files without markers, and configurations selecting no rule, pass
/// through unchanged; the transformation layer is additive and
/// conservative.
pub fn transform(content: &str, config: &InstallConfig) -> Result<String, TransformError> {
    let mut current = content.to_string();
    for rule in RULES {
        if (rule.applies)(config) {
            current = (rule.rewrite)(&current, config)?;
        }
    }
    Ok(current)
}

fn styling_applies(config: &InstallConfig) -> bool {
    config.styling == StylingStrategy::NativeStylesheet
}

fn theme_applies(config: &InstallConfig) -> bool {
    config.theme.use_existing
}

fn rewrite_styling_flag(content: &str, _: &InstallConfig) -> Result<String, TransformError> {
    Ok(content.replace(STYLING_MARKER, STYLING_REWRITE))
}

fn rewrite_theme_import(content: &str, config: &InstallConfig) -> Result<String, TransformError> {
    // validate() guarantees the path is present when use_existing is set.
    let path = config.theme.existing_theme_path.as_deref().unwrap_or_default();
    let replacement = format!(r#"import {{ useTheme }} from "{path}";"#);
    Ok(content.replace(THEME_IMPORT_MARKER, &replacement))
}

fn rewrite_theme_hook(content: &str, _: &InstallConfig) -> Result<String, TransformError> {
    let rewritten = content.replace(THEME_HOOK_MARKER, THEME_HOOK_REWRITE);
    // The import rule ran first; any surviving occurrence means the template
    // carries the token in a shape no rule recognizes.
    if rewritten.contains(THEME_TOKEN) {
        return Err(TransformError::UnrewrittenMarker(THEME_TOKEN));
    }
    Ok(rewritten)
}
