//! mdsite CLI - Markdown conversion and static site building

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdsite::{markdown_to_html, markdown_to_json, site, JsonFormat, Template};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "Convert Markdown to HTML and build static sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a site: clean the output dir, copy static assets, generate pages
    Build {
        /// Markdown content directory
        #[arg(long, value_name = "DIR", default_value = "content")]
        content: PathBuf,

        /// HTML template file with {{ Title }} and {{ Content }} placeholders
        #[arg(long, value_name = "FILE", default_value = "template.html")]
        template: PathBuf,

        /// Static asset directory
        #[arg(long = "static", value_name = "DIR", default_value = "static")]
        static_dir: PathBuf,

        /// Output directory (recreated from scratch)
        #[arg(short, long, value_name = "DIR", default_value = "docs")]
        output: PathBuf,

        /// Root URL path the site is served under (e.g. "/repo-name/")
        #[arg(long, default_value = "/")]
        base_path: String,
    },

    /// Convert a single Markdown file to HTML
    Html {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the JSON document tree of a Markdown file
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the title (first h1 heading) of a Markdown file
    Title {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mdsite::Result<()> {
    match cli.command {
        Commands::Build {
            content,
            template,
            static_dir,
            output,
            base_path,
        } => build(content, template, static_dir, output, base_path),
        Commands::Html { input, output } => {
            let markdown = fs::read_to_string(&input)?;
            let html = markdown_to_html(&markdown)?;
            write_output(output, &html)
        }
        Commands::Json { input, compact } => {
            let markdown = fs::read_to_string(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = markdown_to_json(&markdown, format)?;
            println!("{json}");
            Ok(())
        }
        Commands::Title { input } => {
            let markdown = fs::read_to_string(&input)?;
            println!("{}", site::extract_title(&markdown)?);
            Ok(())
        }
    }
}

fn build(
    content: PathBuf,
    template: PathBuf,
    static_dir: PathBuf,
    output: PathBuf,
    base_path: String,
) -> mdsite::Result<()> {
    if output.exists() {
        println!("{} cleaning {}", "→".cyan(), output.display());
        fs::remove_dir_all(&output)?;
    }

    println!("{} copying static files", "→".cyan());
    let copied = site::copy_recursive(&static_dir, &output)?;

    println!("{} generating pages", "→".cyan());
    let template = Template::from_file(&template)?;
    let pages = site::generate_pages_recursive(&content, &template, &output, &base_path)?;

    println!(
        "{} {} static files copied, {} pages generated",
        "done:".green().bold(),
        copied,
        pages
    );
    Ok(())
}

fn write_output(output: Option<PathBuf>, text: &str) -> mdsite::Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, text)?;
            println!("{} wrote {}", "done:".green().bold(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
