#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BeautiTexError {
    #[error("Default configuration not found at {path}")]
    #[diagnostic(help(
        "The installation is incomplete; reinstall beauti-tex or point BEAUTI_TEX_ASSETS at a directory containing default.ini"
    ))]
    MissingDefaults { path: PathBuf },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(help("Check the path passed to --config-path"))]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid value for '{key}': {reason}")]
    #[diagnostic(help("Check the [project] section of your configuration"))]
    ConfigParse { key: String, reason: String },

    #[error("Failed to parse {path}: {message}")]
    #[diagnostic(help("Check the INI syntax: [section] headers followed by key = value lines"))]
    IniSyntax { path: PathBuf, message: String },

    #[error("Template directory not found: {path}")]
    #[diagnostic(help(
        "Relative 'templates' values are resolved against the beauti-tex assets directory"
    ))]
    TemplateDirNotFound { path: PathBuf },

    #[error("Template file not found: {path}")]
    #[diagnostic(help("The template directory must contain main.tex and titlepage.tex"))]
    TemplateFileMissing { path: PathBuf },

    #[error("Template file is not valid UTF-8: {path}")]
    #[diagnostic(help("Re-save the template with UTF-8 encoding"))]
    TemplateEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Project directory already exists: {path}")]
    #[diagnostic(help("Choose another name or remove the existing directory"))]
    ProjectExists { path: PathBuf },

    #[error("No write permission in {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BeautiTexError>;
