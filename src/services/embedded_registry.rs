use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{ComponentId, InstallError};
use crate::ports::{Template, TemplateFile, TemplateRegistry};

static COMPONENTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/components");

/// Template registry backed by the component set embedded in the binary.
///
/// One top-level directory per component under `src/assets/components/`;
/// every UTF-8 file beneath it belongs to that component's template.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedComponentRegistry;

impl EmbeddedComponentRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRegistry for EmbeddedComponentRegistry {
    fn resolve(&self, id: &ComponentId) -> Result<Template, InstallError> {
        let dir = COMPONENTS_DIR
            .get_dir(id.as_str())
            .ok_or_else(|| InstallError::TemplateNotFound {
                name: id.as_str().to_string(),
                available: self.component_names().join(", "),
            })?;

        let mut files = Vec::new();
        collect_files(dir, dir.path(), &mut files);
        files.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Template { name: id.as_str().to_string(), files })
    }

    fn component_names(&self) -> Vec<String> {
        let mut names: Vec<String> = COMPONENTS_DIR
            .dirs()
            .filter_map(|d| d.path().file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

fn collect_files(dir: &'static Dir, base: &std::path::Path, files: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    let name = file
                        .path()
                        .strip_prefix(base)
                        .unwrap_or(file.path())
                        .to_string_lossy()
                        .to_string();
                    files.push(TemplateFile { name, content: content.to_string() });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, base, files),
        }
    }
}
