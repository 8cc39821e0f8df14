use crate::config::Config;

pub const SIZE_PLACEHOLDER: &str = "<<SIZE>>";
pub const CLASS_PLACEHOLDER: &str = "<<CLAS>>";
pub const CHAPTERS_PLACEHOLDER: &str = "<<CHAPTERS>>";

pub const PLACEHOLDERS: [&str; 3] = [SIZE_PLACEHOLDER, CLASS_PLACEHOLDER, CHAPTERS_PLACEHOLDER];

pub const ABSTRACT_SKELETON: &str = "\\begin{abstract}\n\n\\end{abstract}";

/// Fill the three placeholders of the main template. Substitution is
/// literal; every occurrence of a token is replaced.
pub fn render_main(template: &str, config: &Config) -> String {
    template
        .replace(SIZE_PLACEHOLDER, &config.size().to_string())
        .replace(CLASS_PLACEHOLDER, config.document_class())
        .replace(CHAPTERS_PLACEHOLDER, &chapter_includes(config.chapters()))
}

/// One `\input{chapters/<id>}` line per chapter, in order.
pub fn chapter_includes(chapters: &[String]) -> String {
    chapters
        .iter()
        .map(|chapter| format!("\\input{{chapters/{chapter}}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of a freshly generated chapter file. The title is the id with its
/// first character upper-cased and the rest lower-cased.
pub fn chapter_heading(chapter: &str) -> String {
    format!("\\chapter{{{}}}", capitalize(chapter))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
