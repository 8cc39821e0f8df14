use std::path::PathBuf;

use beauti_tex::scaffold::FileKind;
use beauti_tex::MakeProjectOptions;
use console::style;
use miette::Result;

pub fn run(
    name: String,
    project_path: Option<String>,
    config_path: Option<String>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let options = MakeProjectOptions {
        name,
        project_dir: project_path.map(PathBuf::from),
        config_path: config_path.map(PathBuf::from),
        assets_dir: None,
    };

    let plan = beauti_tex::plan_project(options)?;

    if !dry_run {
        beauti_tex::execute_project(&plan)?;
        return Ok(());
    }

    let project = &plan.plan;
    println!(
        "\n{} Dry run \u{2014} project that would be created at {}:",
        style("==>").cyan().bold(),
        style(project.root.display()).cyan()
    );

    for dir in &project.directories {
        println!("  {} {}/", style("mkdir ").green(), dir.display());
    }

    for file in &project.files {
        let action = match file.kind {
            FileKind::Rendered => "create",
            FileKind::Copied => "copy  ",
            FileKind::Empty => "touch ",
        };
        println!("  {} {}", style(action).green(), file.relative_path.display());

        if verbose && !file.content.is_empty() {
            println!("  {}", style("──────").dim());
            let content = String::from_utf8_lossy(&file.content);
            for line in content.lines() {
                println!("  {}", line);
            }
            println!("  {}", style("──────").dim());
            println!();
        }
    }

    println!(
        "\nSummary: {} directories, {} rendered, {} copied, {} empty",
        project.directories.len(),
        project.count(FileKind::Rendered),
        project.count(FileKind::Copied),
        project.count(FileKind::Empty)
    );

    println!(
        "\n{} Dry run \u{2014} no files written.",
        style("\u{2139}").blue().bold()
    );

    Ok(())
}
