//! json2pdf CLI - JSON to PDF conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use json2pdf::{output_filename, ConvertOptions, LayoutOptions, DEFAULT_FONT_SIZE, DEFAULT_TITLE};

#[derive(Parser)]
#[command(name = "json2pdf")]
#[command(version)]
#[command(about = "Convert JSON documents to paginated PDF files", long_about = None)]
struct Cli {
    /// Input JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON file to PDF
    Convert {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (derived from the input name if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Title drawn at the top of the first page
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// Body font size in points
        #[arg(long, default_value_t = DEFAULT_FONT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
        font_size: u32,

        /// Omit object keys and array indices
        #[arg(long)]
        no_keys: bool,

        /// Page geometry
        #[arg(long, value_enum, default_value = "letter")]
        page_size: PageSize,
    },

    /// Show layout statistics without writing a PDF
    Info {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Omit object keys and array indices
        #[arg(long)]
        no_keys: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// US Letter (612 x 792 points)
    Letter,
    /// ISO A4 (595 x 842 points)
    A4,
}

impl PageSize {
    fn layout(self) -> LayoutOptions {
        match self {
            PageSize::Letter => LayoutOptions::new().letter(),
            PageSize::A4 => LayoutOptions::new().a4(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            title,
            font_size,
            no_keys,
            page_size,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            &title,
            font_size,
            no_keys,
            page_size,
        ),
        Some(Commands::Info { input, no_keys }) => cmd_info(&input, no_keys),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    DEFAULT_TITLE,
                    DEFAULT_FONT_SIZE,
                    false,
                    PageSize::Letter,
                )
            } else {
                println!("{}", "Usage: json2pdf <FILE> [OUTPUT]".yellow());
                println!("       json2pdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    title: &str,
    font_size: u32,
    no_keys: bool,
    page_size: PageSize,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = page_size
        .layout()
        .with_title(title)
        .with_font_size(font_size)
        .include_keys(!no_keys);
    let options = ConvertOptions::new().with_layout(layout);
    log::debug!("layout options: {:?}", options.layout);

    let output_path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| derive_output_path(input));

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading JSON...");
    let data = fs::read(input)?;
    pb.inc(1);

    pb.set_message("Laying out pages...");
    let result = json2pdf::convert_bytes(&data, &options)?;
    pb.inc(1);

    pb.set_message("Writing PDF...");
    fs::write(&output_path, &result.data)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} ({} lines, {} pages, {} bytes)",
        "Saved to".green().bold(),
        output_path.display(),
        result.line_count,
        result.page_count,
        result.len(),
    );

    Ok(())
}

/// Default output path: the input filename with its suffix rewritten.
fn derive_output_path(input: &Path) -> PathBuf {
    let name = match input.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return PathBuf::from("output.pdf"),
    };

    let renamed = output_filename(&name);
    if renamed == name {
        // no recognized suffix; append rather than overwrite the input
        input.with_file_name(format!("{name}.pdf"))
    } else {
        input.with_file_name(renamed)
    }
}

fn cmd_info(input: &Path, no_keys: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let value: serde_json::Value = serde_json::from_slice(&data)?;

    let layout = LayoutOptions::new().include_keys(!no_keys);
    let lines = json2pdf::format_value(&value, layout.include_keys);
    let pages = json2pdf::paginate(&lines, &layout);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Input bytes".bold(), data.len());
    println!("{}: {}", "Lines".bold(), lines.len());
    println!("{}: {}", "Pages".bold(), pages.len());

    let max_depth = lines.iter().map(|line| line.indent_level).max().unwrap_or(0);
    println!("{}: {}", "Max depth".bold(), max_depth);

    let widest = lines
        .iter()
        .map(|line| line.indented_text().chars().count())
        .max()
        .unwrap_or(0);
    println!("{}: {} chars", "Widest line".bold(), widest);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "json2pdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("JSON to PDF conversion tool");
    println!();
    println!("License: MIT");
}
