use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{BeautiTexError, Result};
use crate::scaffold::render::{chapter_heading, render_main, ABSTRACT_SKELETON};

pub const CHAPTERS_DIR: &str = "chapters";
pub const MAIN_TEMPLATE: &str = "main.tex";
pub const TITLEPAGE_TEMPLATE: &str = "titlepage.tex";

/// Placeholder files created empty in every project.
pub const EMPTY_FILES: [&str; 3] = ["pak.tex", "literature.bib", "chapters/appendix.tex"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Generated from configuration or a template with substitutions.
    Rendered,
    /// Copied verbatim from the template directory.
    Copied,
    /// Created empty.
    Empty,
}

/// A file that would be written during scaffolding.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    pub content: Vec<u8>,
    pub kind: FileKind,
}

/// Everything scaffolding will create, staged in memory.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub root: PathBuf,
    /// Directories relative to `root`, in creation order.
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl ProjectPlan {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    fn add_dir(&mut self, relative: impl Into<PathBuf>) {
        let relative = relative.into();
        if !self.directories.contains(&relative) {
            self.directories.push(relative);
        }
    }

    /// Later writes to the same path replace earlier ones.
    fn write(&mut self, relative: impl Into<PathBuf>, content: Vec<u8>, kind: FileKind) {
        let relative = relative.into();
        self.files.retain(|f| f.relative_path != relative);
        self.files.push(PlannedFile {
            relative_path: relative,
            content,
            kind,
        });
    }

    /// An empty file never clobbers content already planned for its path.
    fn touch(&mut self, relative: impl Into<PathBuf>) {
        let relative = relative.into();
        if !self.files.iter().any(|f| f.relative_path == relative) {
            self.files.push(PlannedFile {
                relative_path: relative,
                content: Vec::new(),
                kind: FileKind::Empty,
            });
        }
    }

    pub fn count(&self, kind: FileKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }
}

/// Stage the directory tree and every file of a new project rooted at
/// `root`. Reads the template files but writes nothing.
pub fn plan_files(config: &Config, root: PathBuf) -> Result<ProjectPlan> {
    let main_path = config.template_path().join(MAIN_TEMPLATE);
    let main_template = String::from_utf8(read_template(config.template_path(), MAIN_TEMPLATE)?)
        .map_err(|e| BeautiTexError::TemplateEncoding {
            path: main_path,
            source: e,
        })?;
    let titlepage = read_template(config.template_path(), TITLEPAGE_TEMPLATE)?;

    let mut plan = ProjectPlan::new(root);

    for folder in config.folders() {
        plan.add_dir(folder);
    }
    plan.add_dir(CHAPTERS_DIR);

    let main = render_main(&main_template, config);
    plan.write(MAIN_TEMPLATE, main.into_bytes(), FileKind::Rendered);

    let chapters_dir = Path::new(CHAPTERS_DIR);
    for chapter in config.chapters() {
        plan.write(
            chapters_dir.join(format!("{chapter}.tex")),
            chapter_heading(chapter).into_bytes(),
            FileKind::Rendered,
        );
    }

    for empty in EMPTY_FILES {
        plan.touch(empty);
    }

    plan.write(
        chapters_dir.join("abstract.tex"),
        ABSTRACT_SKELETON.as_bytes().to_vec(),
        FileKind::Rendered,
    );
    plan.write(
        chapters_dir.join(TITLEPAGE_TEMPLATE),
        titlepage,
        FileKind::Copied,
    );

    Ok(plan)
}

fn read_template(template_dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = template_dir.join(name);
    if !path.is_file() {
        return Err(BeautiTexError::TemplateFileMissing { path });
    }
    std::fs::read(&path).map_err(|e| BeautiTexError::Io {
        context: format!("reading template {}", path.display()),
        source: e,
    })
}
