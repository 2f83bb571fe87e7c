mod template_registry;

pub use template_registry::{Template, TemplateFile, TemplateRegistry};
