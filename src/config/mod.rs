pub mod layers;
pub mod schema;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BeautiTexError, Result};

pub use layers::LayeredIni;
pub use schema::{parse_list, Config};

/// Environment variable overriding the directory that holds `default.ini`
/// and the bundled templates.
pub const ASSETS_ENV: &str = "BEAUTI_TEX_ASSETS";

/// File name of the built-in defaults inside the assets directory.
pub const DEFAULTS_FILE: &str = "default.ini";

const PROJECT: &str = "project";
const PACKAGES: &str = "packages";

/// The assets directory shipped with the crate, unless overridden through
/// `BEAUTI_TEX_ASSETS`.
pub fn default_assets_dir() -> PathBuf {
    match std::env::var_os(ASSETS_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
    }
}

/// Resolve the configuration against the default assets directory.
pub fn resolve_config(user_path: Option<&Path>) -> Result<Config> {
    resolve_config_from(&default_assets_dir(), user_path)
}

/// Load `<assets_dir>/default.ini`, layer the optional user file on top and
/// build a validated [`Config`].
///
/// A relative `templates` value is resolved against `assets_dir`, never the
/// current working directory.
pub fn resolve_config_from(assets_dir: &Path, user_path: Option<&Path>) -> Result<Config> {
    let defaults = assets_dir.join(DEFAULTS_FILE);
    if !defaults.is_file() {
        return Err(BeautiTexError::MissingDefaults { path: defaults });
    }

    let mut layers = LayeredIni::new();
    layers.merge_file(&defaults)?;

    if let Some(path) = user_path {
        if path.as_os_str().is_empty() {
            return Err(BeautiTexError::InvalidArgument {
                message: "configuration path must not be an empty string".into(),
            });
        }
        if !path.exists() {
            return Err(BeautiTexError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        layers.merge_file(path)?;
    }

    build_config(&layers, assets_dir)
}

fn build_config(layers: &LayeredIni, assets_dir: &Path) -> Result<Config> {
    let folders = parse_list(layers.require(PROJECT, "folders")?);
    let chapters = parse_list(layers.require(PROJECT, "chapters")?);
    let style = layers.require(PROJECT, "style")?;

    let templates = PathBuf::from(layers.require(PROJECT, "templates")?);
    let template_path = if templates.is_absolute() {
        templates
    } else {
        assets_dir.join(templates)
    };
    if !template_path.is_dir() {
        return Err(BeautiTexError::TemplateDirNotFound {
            path: template_path,
        });
    }

    let raw_size = layers.require(PROJECT, "size")?;
    let size = raw_size
        .parse::<u32>()
        .map_err(|e| BeautiTexError::ConfigParse {
            key: format!("{PROJECT}.size"),
            reason: format!("'{raw_size}' is not a valid integer ({e})"),
        })?;

    let document_class = layers.require(PROJECT, "clas")?;
    let packages = layers.section(PACKAGES);

    debug!(
        folders = folders.len(),
        chapters = chapters.len(),
        packages = packages.len(),
        template_path = %template_path.display(),
        "resolved configuration"
    );

    Ok(Config::new(
        folders,
        chapters,
        style,
        template_path,
        size,
        document_class,
        packages,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;

    const DEFAULTS: &str = "
[project]
folders = f1,f2
chapters = c1,c2
style = simple
templates = temp
size = 11
clas = report

[packages]
hyperref = colorlinks=True
";

    fn assets_with(defaults: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULTS_FILE), defaults).unwrap();
        fs::create_dir(dir.path().join("temp")).unwrap();
        dir
    }

    #[test]
    fn defaults_only() {
        let assets = assets_with(DEFAULTS);
        let config = resolve_config_from(assets.path(), None).unwrap();

        assert_eq!(config.folders(), ["f1", "f2"]);
        assert_eq!(config.chapters(), ["c1", "c2"]);
        assert_eq!(config.style(), "simple");
        assert_eq!(config.size(), 11);
        assert_eq!(config.document_class(), "report");
        assert_eq!(
            config.packages(),
            &BTreeMap::from([("hyperref".to_string(), "colorlinks=True".to_string())])
        );
        assert_eq!(config.template_path(), assets.path().join("temp"));
    }

    #[test]
    fn user_file_overrides_single_key() {
        let assets = assets_with(DEFAULTS);
        let user = assets.path().join("user.ini");
        fs::write(&user, "[project]\nsize = 12\n").unwrap();

        let defaults = resolve_config_from(assets.path(), None).unwrap();
        let layered = resolve_config_from(assets.path(), Some(&user)).unwrap();

        assert_eq!(layered.size(), 12);
        assert_eq!(layered.folders(), defaults.folders());
        assert_eq!(layered.chapters(), defaults.chapters());
        assert_eq!(layered.style(), defaults.style());
        assert_eq!(layered.document_class(), defaults.document_class());
        assert_eq!(layered.template_path(), defaults.template_path());
        assert_eq!(layered.packages(), defaults.packages());
    }

    #[test]
    fn user_packages_extend_defaults() {
        let assets = assets_with(DEFAULTS);
        let user = assets.path().join("user.ini");
        fs::write(&user, "[packages]\ngeometry = margin=1in\nbabel = english\n").unwrap();

        let config = resolve_config_from(assets.path(), Some(&user)).unwrap();
        assert_eq!(config.packages().len(), 3);
        assert_eq!(config.packages()["geometry"], "margin=1in");
        assert_eq!(config.packages()["hyperref"], "colorlinks=True");
    }

    #[test]
    fn missing_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, BeautiTexError::MissingDefaults { .. }));
    }

    #[test]
    fn empty_user_path_is_invalid() {
        let assets = assets_with(DEFAULTS);
        let err = resolve_config_from(assets.path(), Some(Path::new(""))).unwrap_err();
        assert!(matches!(err, BeautiTexError::InvalidArgument { .. }));
    }

    #[test]
    fn absent_user_file() {
        let assets = assets_with(DEFAULTS);
        let missing = assets.path().join("nope.ini");
        let err = resolve_config_from(assets.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, BeautiTexError::ConfigNotFound { path } if path == missing));
    }

    #[test]
    fn missing_template_dir() {
        let assets = assets_with(&DEFAULTS.replace("templates = temp", "templates = gone"));
        let err = resolve_config_from(assets.path(), None).unwrap_err();
        assert!(
            matches!(err, BeautiTexError::TemplateDirNotFound { path } if path == assets.path().join("gone"))
        );
    }

    #[test]
    fn absolute_template_dir_is_kept() {
        let elsewhere = tempfile::tempdir().unwrap();
        let defaults = DEFAULTS.replace(
            "templates = temp",
            &format!("templates = {}", elsewhere.path().display()),
        );
        let assets = assets_with(&defaults);

        let config = resolve_config_from(assets.path(), None).unwrap();
        assert_eq!(config.template_path(), elsewhere.path());
    }

    #[test]
    fn non_integer_size() {
        let assets = assets_with(&DEFAULTS.replace("size = 11", "size = eleven"));
        let err = resolve_config_from(assets.path(), None).unwrap_err();
        assert!(matches!(err, BeautiTexError::ConfigParse { ref key, .. } if key == "project.size"));
    }

    #[test]
    fn empty_lists_are_allowed() {
        let assets = assets_with(
            &DEFAULTS
                .replace("folders = f1,f2", "folders =")
                .replace("chapters = c1,c2", "chapters ="),
        );
        let config = resolve_config_from(assets.path(), None).unwrap();
        assert!(config.folders().is_empty());
        assert!(config.chapters().is_empty());
    }
}
