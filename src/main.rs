use anyhow::Result;
use clap::{Parser, ValueEnum};
use linediff::areas::session::Session;
use linediff::artifacts::core::OutputTarget;
use linediff::commands::diff::{DiffOptions, Layout};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "This command compares two text files line by line using Myers' diff algorithm \
    and prints the differences in unified diff format, or as a full side by side listing.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    original: PathBuf,
    #[arg(index = 2, help = "The revised file")]
    revised: PathBuf,
    #[arg(
        short = 'U',
        long,
        default_value_t = 3,
        allow_negative_numbers = true,
        help = "Number of context lines around each change"
    )]
    unified: isize,
    #[arg(long, help = "Name printed for the original file")]
    org_label: Option<String>,
    #[arg(long, help = "Name printed for the revised file")]
    rev_label: Option<String>,
    #[arg(long, conflicts_with = "numbered", help = "Print every line of both files")]
    full: bool,
    #[arg(long, help = "Print every line of both files with line numbers")]
    numbered: bool,
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, help = "When to color the output")]
    color: ColorWhen,
    #[arg(long, help = "Never page the output")]
    no_pager: bool,
    #[arg(short, long, help = "Write the diff to a file instead of stdout")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = OutputTarget::select(cli.output.clone(), cli.no_pager);
    match cli.color {
        ColorWhen::Always => colored::control::set_override(true),
        ColorWhen::Never => colored::control::set_override(false),
        ColorWhen::Auto if !target.is_interactive() => colored::control::set_override(false),
        ColorWhen::Auto => {}
    }

    let layout = if cli.full {
        Layout::Full
    } else if cli.numbered {
        Layout::Numbered
    } else {
        Layout::Unified
    };
    let options = DiffOptions::new(cli.unified, layout, cli.org_label, cli.rev_label);

    let (writer, pager) = target.open()?;
    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), writer)?;

    session.diff(&cli.original, &cli.revised, &options)?;
    session.writer().flush()?;

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
