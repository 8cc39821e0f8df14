pub mod check;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod scaffold;

use std::path::{Path, PathBuf};

use console::style;
use tracing::{debug, info};

use crate::config::{default_assets_dir, resolve_config_from, Config};
use crate::error::{BeautiTexError, Result};
use crate::sanitize::safe_name;
use crate::scaffold::{
    ensure_writable, execute_plan, plan_files, FileKind, GeneratedProject, ProjectPlan,
};

/// Options for the `make-project` operation.
#[derive(Debug, Default, Clone)]
pub struct MakeProjectOptions {
    /// Project name as typed by the user; sanitized before use.
    pub name: String,
    /// Directory the project is created in. If None, uses the current directory.
    pub project_dir: Option<PathBuf>,
    /// User configuration layered on top of the built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Directory holding `default.ini` and the bundled templates.
    /// If None, uses [`default_assets_dir`].
    pub assets_dir: Option<PathBuf>,
}

/// A planned project together with the configuration it was planned from.
pub struct FullProjectPlan {
    pub plan: ProjectPlan,
    pub config: Config,
}

/// Plan a project: sanitize the name, resolve the configuration, check
/// preconditions and stage every file in memory.
///
/// Nothing is written to disk, so every failure this can report leaves the
/// filesystem untouched.
pub fn plan_project(options: MakeProjectOptions) -> Result<FullProjectPlan> {
    let name = safe_name(&options.name);
    if name != options.name {
        debug!(raw = %options.name, sanitized = %name, "sanitized project name");
    }

    let assets_dir = options.assets_dir.unwrap_or_else(default_assets_dir);
    let config = resolve_config_from(&assets_dir, options.config_path.as_deref())?;

    let base = match options.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| BeautiTexError::Io {
            context: "getting current directory".into(),
            source: e,
        })?,
    };
    let root = base.join(&name);

    if root.exists() {
        return Err(BeautiTexError::ProjectExists { path: root });
    }
    ensure_writable(&root)?;

    let plan = plan_files(&config, root)?;

    Ok(FullProjectPlan { plan, config })
}

/// Execute a previously planned project: create directories and write files.
pub fn execute_project(plan: &FullProjectPlan) -> Result<GeneratedProject> {
    let result = execute_plan(&plan.plan)?;

    info!(root = %result.root.display(), "project created");
    println!(
        "\n{} LaTeX project created at {}",
        style("✓").green().bold(),
        style(result.root.display()).cyan()
    );
    println!(
        "  {} files rendered, {} copied, {} empty",
        plan.plan.count(FileKind::Rendered),
        plan.plan.count(FileKind::Copied),
        plan.plan.count(FileKind::Empty)
    );

    Ok(result)
}

/// Create a structured LaTeX project named `name` inside `project_dir`
/// (default: current directory), configured by the optional `config_path`.
pub fn make_project(
    name: &str,
    project_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<GeneratedProject> {
    let plan = plan_project(MakeProjectOptions {
        name: name.to_string(),
        project_dir: project_dir.map(Path::to_path_buf),
        config_path: config_path.map(Path::to_path_buf),
        assets_dir: None,
    })?;
    execute_project(&plan)
}
