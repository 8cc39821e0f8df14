use crate::config::Config;
use crate::sanitize::is_safe_name;
use crate::scaffold::plan::{MAIN_TEMPLATE, TITLEPAGE_TEMPLATE};
use crate::scaffold::render::PLACEHOLDERS;

/// Chapter ids whose files are overwritten by fixed project files.
const RESERVED_CHAPTERS: [&str; 2] = ["abstract", "titlepage"];

/// Result of validating a resolved configuration.
pub struct CheckResult {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the template directory and entries of a resolved config
/// without creating anything.
pub fn check_config(config: &Config) -> CheckResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let template_dir = config.template_path();

    let main_path = template_dir.join(MAIN_TEMPLATE);
    match std::fs::read_to_string(&main_path) {
        Ok(content) => {
            for placeholder in PLACEHOLDERS {
                if !content.contains(placeholder) {
                    warnings.push(format!("{MAIN_TEMPLATE} does not contain {placeholder}"));
                }
            }
        }
        Err(e) if main_path.exists() => {
            errors.push(format!("Could not read {}: {e}", main_path.display()));
        }
        Err(_) => {
            errors.push(format!("Main template not found: {}", main_path.display()));
        }
    }

    let titlepage_path = template_dir.join(TITLEPAGE_TEMPLATE);
    if !titlepage_path.is_file() {
        errors.push(format!(
            "Title page template not found: {}",
            titlepage_path.display()
        ));
    }

    for chapter in config.chapters() {
        if RESERVED_CHAPTERS.contains(&chapter.as_str()) {
            warnings.push(format!(
                "Chapter '{chapter}' is overwritten by the generated {chapter}.tex"
            ));
        }
        if !is_safe_name(chapter) {
            warnings.push(format!("Chapter '{chapter}' is not a safe file name"));
        }
    }

    for folder in config.folders() {
        let unsafe_segment = folder
            .split(['/', '\\'])
            .any(|segment| segment == ".." || !is_safe_name(segment));
        if unsafe_segment {
            warnings.push(format!("Folder '{folder}' is not a safe path"));
        }
    }

    CheckResult { warnings, errors }
}
