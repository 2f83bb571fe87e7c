use crate::domain::{ComponentId, InstallError};

/// The canonical, unmodified source files for one installable component.
///
/// Templates are read-only distribution data; the engine transforms copies
/// of their content and never mutates the template itself.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    /// File entries in declaration order. Installed file lists preserve
    /// this order.
    pub files: Vec<TemplateFile>,
}

/// One named file inside a template.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Name relative to the component directory, e.g. `index.tsx`.
    pub name: String,
    pub content: String,
}

/// Source of component templates.
pub trait TemplateRegistry {
    /// Resolve a component identifier to its full template.
    ///
    /// Exact, case-sensitive lookup with no side effects: either the
    /// complete file set is returned or the call fails with
    /// [`InstallError::TemplateNotFound`]. Never returns a partial set.
    fn resolve(&self, id: &ComponentId) -> Result<Template, InstallError>;

    /// Names of every available component, sorted.
    fn component_names(&self) -> Vec<String>;
}
