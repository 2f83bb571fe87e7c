//! Installation executor: resolve, check, transform, stage, commit.
//!
//! The staged-commit discipline is the central correctness property here. A
//! transformed file set is first written to a temporary directory inside the
//! target root; only once every file has staged successfully is the whole
//! set swapped into place with directory renames. A pre-existing
//! installation is moved aside before the staged set lands and is restored
//! if the swap fails, so a caller never observes a component directory
//! holding some-but-not-all files, or a mix of old and new ones.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use crate::domain::{ComponentId, InstallConfig, InstallError, InstallOutcome};
use crate::ports::TemplateRegistry;
use crate::services::conflict::{self, ConflictDecision};
use crate::services::transform;

/// Install one component under `target_dir`, producing
/// `<target_dir>/<component>/<template file names>`.
///
/// Runs to completion synchronously. Failures are classified in
/// [`InstallError`]; a denied conflict check is the `Ok(Skipped)` outcome,
/// not an error. On any failure path the destination directory is left
/// exactly as it was before the call.
pub fn install(
    registry: &dyn TemplateRegistry,
    component: &str,
    target_dir: &Path,
    overwrite: bool,
    config: &InstallConfig,
) -> Result<InstallOutcome, InstallError> {
    config.validate()?;

    let id = ComponentId::new(component)?;
    let template = registry.resolve(&id)?;

    let dest = target_dir.join(id.as_str());
    match conflict::check(&dest, overwrite).map_err(InstallError::WriteFailure)? {
        ConflictDecision::Deny(reason) => return Ok(InstallOutcome::Skipped { reason }),
        ConflictDecision::Allow => {}
    }

    // Transforming is pure; nothing has touched the filesystem yet.
    let mut transformed = Vec::with_capacity(template.files.len());
    for file in &template.files {
        let content = transform::transform(&file.content, config).map_err(|source| {
            InstallError::Transformation { file: file.name.clone(), source }
        })?;
        transformed.push((file.name.clone(), content));
    }

    // Writing. The per-destination lock covers staging and commit only;
    // two installs into the same component directory serialize here.
    let lock = destination_lock(&dest);
    let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    commit(&dest, target_dir, &transformed).map_err(InstallError::WriteFailure)?;

    Ok(InstallOutcome::Installed {
        dir: dest,
        files: template.files.iter().map(|f| f.name.clone()).collect(),
    })
}

fn commit(
    dest: &Path,
    target_dir: &Path,
    files: &[(String, String)],
) -> std::io::Result<()> {
    fs::create_dir_all(target_dir)?;

    // Stage the complete set first. The TempDir guard removes everything
    // staged so far if any single write fails.
    let staging = tempfile::Builder::new()
        .prefix(".nativecn-staging-")
        .tempdir_in(target_dir)?;

    for (name, content) in files {
        let path = staging.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
    }

    // Commit: swap the fully staged set into the destination. The conflict
    // check already approved replacement (overwrite, or empty dir).
    let staged = staging.into_path();
    if let Err(err) = replace_dest(&staged, dest, target_dir) {
        let _ = fs::remove_dir_all(&staged);
        return Err(err);
    }

    Ok(())
}

/// Swap the staged set into place. Afterwards the destination holds either
/// the complete staged set or exactly what it held before the call.
fn replace_dest(staged: &Path, dest: &Path, target_dir: &Path) -> std::io::Result<()> {
    if !dest.exists() {
        return fs::rename(staged, dest);
    }

    // Move the existing installation aside first; each step is a single
    // rename, never a partial delete of the old file set.
    let aside = tempfile::Builder::new()
        .prefix(".nativecn-replaced-")
        .tempdir_in(target_dir)?;
    let previous = aside.path().join("previous");
    fs::rename(dest, &previous)?;

    if let Err(err) = fs::rename(staged, dest) {
        if fs::rename(&previous, dest).is_err() {
            // Restoring failed too; keep the moved-aside copy on disk
            // instead of letting the aside guard delete it.
            let _ = aside.into_path();
        }
        return Err(err);
    }

    // Dropping `aside` removes the replaced installation.
    Ok(())
}

/// Process-wide lock table, one mutex per destination directory.
///
/// Mutual exclusion is required across the Writing phase only; Transforming
/// is pure and runs outside the lock.
fn destination_lock(dest: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

    let locks = LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut table = locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    table.entry(dest.to_path_buf()).or_default().clone()
}
