//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Utility function to generate the Man page for the main argument
/// structure and all dependent recursive subcommand pages to the output
/// directory if specified, else the current directory.
///
/// # Errors
///
/// Returns a [`Result`] with an [`anyhow::Error`] if the output directory
/// or a man page file could not be created.
pub fn generate_man_pages(cmd: clap::Command, output_dir: Option<PathBuf>) -> Result<()> {
    let output_dir: PathBuf = output_dir.unwrap_or(
        std::env::current_dir().context("Opening current directory")?,
    );

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let name = cmd.get_name().to_string();
    write_man_page(cmd, &output_dir, name)
}

/// Render one Man page and recurse over the command's subcommands, naming
/// each page after the `parent-child` chain.
fn write_man_page(cmd: clap::Command, output_dir: &Path, name: String) -> Result<()> {
    let subcommands: Vec<clap::Command> = cmd.get_subcommands().cloned().collect();

    // clap_mangen takes the page name from the Command, so rename to the
    // chained form before rendering. The leaked &'static str is fine here
    // since man page generation is a one-shot operation.
    let leaked_name: &'static str = Box::leak(name.clone().into_boxed_str());
    let man = clap_mangen::Man::new(cmd.name(leaked_name).disable_help_subcommand(true));

    let man_path = output_dir.join(format!("{name}.1"));
    let mut man_file = File::create(&man_path)
        .with_context(|| format!("failed to create {}", man_path.display()))?;
    man.render(&mut man_file)?;
    println!("Generated: {}", man_path.display());

    for subcmd in subcommands {
        let chained = format!("{}-{}", name, subcmd.get_name());
        write_man_page(subcmd, output_dir, chained)?;
    }

    Ok(())
}
