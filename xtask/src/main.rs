//! Development tasks: man pages and shell completions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for prosemetry", long_about = None)]
struct XtaskCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate man pages for the CLI and each subcommand
    Man(OutArgs),
    /// Generate shell completion scripts
    Completions(CompletionArgs),
}

#[derive(Args, Debug)]
struct OutArgs {
    /// Output directory
    #[arg(long, default_value = "target/dist/man")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct CompletionArgs {
    /// Output directory
    #[arg(long, default_value = "target/dist/completions")]
    out_dir: PathBuf,

    /// Shells to generate for (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',')]
    shells: Option<Vec<Shell>>,
}

fn main() -> Result<()> {
    match XtaskCli::parse().command {
        Commands::Man(args) => man(&args.out_dir),
        Commands::Completions(args) => {
            let shells = args
                .shells
                .unwrap_or_else(|| Shell::value_variants().to_vec());
            completions(&args.out_dir, &shells)
        }
    }
}

fn man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let cmd = prosemetry::command();
    let name = cmd.get_name().to_string();

    write_page(out_dir, &name, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        write_page(out_dir, &page, sub.clone())?;
    }
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))
}

fn completions(out_dir: &Path, shells: &[Shell]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut cmd = prosemetry::command();
    let name = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(*shell, &mut cmd, &name, out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
