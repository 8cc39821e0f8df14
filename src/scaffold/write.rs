use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BeautiTexError, Result};
use crate::scaffold::plan::{FileKind, ProjectPlan};

#[derive(Debug)]
pub struct GeneratedProject {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files_rendered: Vec<PathBuf>,
    pub files_copied: Vec<PathBuf>,
    pub files_empty: Vec<PathBuf>,
}

/// Fail unless a new directory can be created at `root`.
///
/// Checks the nearest existing ancestor by creating an anonymous temporary
/// file in it.
pub fn ensure_writable(root: &Path) -> Result<()> {
    let mut dir = root.parent().unwrap_or(Path::new("."));
    while !dir.as_os_str().is_empty() && !dir.exists() {
        dir = dir.parent().unwrap_or(Path::new(""));
    }
    if dir.as_os_str().is_empty() {
        dir = Path::new(".");
    }

    tempfile::tempfile_in(dir).map_err(|e| BeautiTexError::PermissionDenied {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Create the planned tree on disk. The root must not exist yet.
///
/// Nothing is rolled back if a write fails partway.
pub fn execute_plan(plan: &ProjectPlan) -> Result<GeneratedProject> {
    if plan.root.exists() {
        return Err(BeautiTexError::ProjectExists {
            path: plan.root.clone(),
        });
    }

    create_dir(&plan.root)?;
    for dir in &plan.directories {
        create_dir(&plan.root.join(dir))?;
    }

    let mut files_rendered = Vec::new();
    let mut files_copied = Vec::new();
    let mut files_empty = Vec::new();

    for file in &plan.files {
        let dest = plan.root.join(&file.relative_path);
        if let Some(parent) = dest.parent() {
            create_dir(parent)?;
        }
        std::fs::write(&dest, &file.content).map_err(|e| BeautiTexError::Io {
            context: format!("writing {}", dest.display()),
            source: e,
        })?;
        debug!(path = %file.relative_path.display(), kind = ?file.kind, "wrote file");

        let bucket = match file.kind {
            FileKind::Rendered => &mut files_rendered,
            FileKind::Copied => &mut files_copied,
            FileKind::Empty => &mut files_empty,
        };
        bucket.push(file.relative_path.clone());
    }

    Ok(GeneratedProject {
        root: plan.root.clone(),
        directories: plan.directories.clone(),
        files_rendered,
        files_copied,
        files_empty,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| BeautiTexError::Io {
        context: format!("creating directory {}", path.display()),
        source: e,
    })
}
