use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use meta_data::config::Config;
use meta_data::context::RequestContext;
use meta_data::logging::init_logging;
use meta_data::meta::MetaData;
use meta_data::plugins::PluginHost;
use meta_data::text;

#[derive(Parser)]
#[command(name = "meta-data")]
#[command(about = "Preview head output of the meta data and boilerplate plugins")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (TOML or JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the <head> fragment of every plugin
    Head {
        /// Request context JSON file
        #[arg(long)]
        context: PathBuf,
    },

    /// Render the fragment emitted before </body>
    Footer {
        /// Request context JSON file
        #[arg(long)]
        context: PathBuf,
    },

    /// Print only the resolved document title
    Title {
        /// Request context JSON file
        #[arg(long)]
        context: PathBuf,
    },

    /// Wrap the paragraphs of a text file in <p> tags
    Autop {
        file: PathBuf,

        /// Keep single newlines instead of converting them to <br/>
        #[arg(long)]
        no_br: bool,
    },

    /// Write an integer out in words
    Words {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Format a byte count
    Bytes {
        value: String,

        /// Decimal places
        #[arg(short, long, default_value_t = 2)]
        precision: usize,
    },

    /// Convert a hex color to rgb()/rgba()
    Rgb {
        hex: String,

        /// Alpha channel, clamped to 0..=1
        #[arg(short, long)]
        opacity: Option<f64>,
    },
}

fn load_context(path: &Path) -> Result<RequestContext> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file {}", path.display()))?;
    RequestContext::from_json(&json).context("Failed to parse request context")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config, cli.debug);

    match cli.command {
        Commands::Head { context } => {
            let ctx = load_context(&context)?;
            let host = PluginHost::from_config(&config);
            print!("{}", host.site_head(&ctx));
        }
        Commands::Footer { context } => {
            let ctx = load_context(&context)?;
            let host = PluginHost::from_config(&config);
            print!("{}", host.site_body_end(&ctx));
        }
        Commands::Title { context } => {
            let ctx = load_context(&context)?;
            let plugin = MetaData::new(config.meta.clone());
            println!("{}", plugin.title(&ctx));
        }
        Commands::Autop { file, no_br } => {
            let input = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            print!("{}", text::autop(&input, !no_br));
        }
        Commands::Words { number } => {
            println!("{}", text::number_to_words(number));
        }
        Commands::Bytes { value, precision } => match text::format_bytes_str(&value, precision) {
            Some(formatted) => println!("{}", formatted),
            None => anyhow::bail!("'{}' is not a valid byte count", value),
        },
        Commands::Rgb { hex, opacity } => match text::hex_to_rgb(&hex, opacity) {
            Some(css) => println!("{}", css),
            None => anyhow::bail!("'{}' is not a 3- or 6-digit hex color", hex),
        },
    }

    Ok(())
}
