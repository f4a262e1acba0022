//! Deathless CLI - generates item documentation from the game's XML configs.
//!
//! This is the main entry point for the `deathless` command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deathless::prelude::*;
use deathless::CONFIG_FILE_NAME;

/// Environment variable naming the game's config directory.
const CONFIG_PATH_ENV: &str = "DEATHLESS_CONFIG_PATH";

const LANGUAGE: Language = Language::Russian;

/// Deathless - item documentation generator
#[derive(Parser)]
#[command(name = "deathless")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown and wiki tables for relics, consumables and cards
    Generate {
        /// Directory containing config.xml and the locale file
        #[arg(env = CONFIG_PATH_ENV)]
        path: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Dump the documented records as JSON
    Dump {
        /// Directory containing config.xml
        #[arg(env = CONFIG_PATH_ENV)]
        path: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { path, output } => {
            cmd_generate(path.as_deref(), &output)?;
        }
        Commands::Dump { path, output } => {
            cmd_dump(path.as_deref(), output.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_generate(path: Option<&Path>, output: &Path) -> Result<()> {
    let folder = resolve_config_dir(path)?;
    let start = Instant::now();

    println!("Parsing {}...", CONFIG_FILE_NAME);
    let config = Config::open(folder.join(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?;

    println!(
        "Loaded {} relics, {} consumables, {} cards, {} units",
        config.relics().len(),
        config.consumables().len(),
        config.cards().len(),
        config.units().len()
    );

    let locale = load_locale(&folder)?;

    println!("Processing relics, consumables and cards...");
    let documents = Generator::new(&config, locale)
        .generate_all()
        .context("Failed to generate documents")?;

    write_documents(output, &documents)
        .with_context(|| format!("Failed to write documents to {}", output.display()))?;

    println!(
        "Wrote {} files to {} in {:?}",
        documents.len(),
        output.display(),
        start.elapsed()
    );

    Ok(())
}

fn cmd_dump(path: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let folder = resolve_config_dir(path)?;

    let config = Config::open(folder.join(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?;
    let json = deathless::data::export::to_json(&config).context("Failed to serialize records")?;

    match output {
        Some(file) => {
            fs::write(file, json).context("Failed to write output file")?;
            println!("Records written to {}", file.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Check that `path` is a directory holding the game's config.
fn resolve_config_dir(path: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = path else {
        bail!(
            "Could not find game config folder: pass it as an argument or set {}",
            CONFIG_PATH_ENV
        );
    };

    if !path.join(CONFIG_FILE_NAME).is_file() {
        bail!("Could not find {} in {}", CONFIG_FILE_NAME, path.display());
    }

    tracing::debug!(path = %path.display(), "using config folder");
    Ok(path.to_path_buf())
}

/// Built-in labels plus the game's locale table, if there is one.
fn load_locale(folder: &Path) -> Result<Locale> {
    let mut locale = Locale::with_base(LANGUAGE);
    let file_name = LANGUAGE.locale_file_name();
    let locale_path = folder.join(file_name);

    if locale_path.is_file() {
        println!("Parsing {}...", file_name);
        let count = locale
            .load_file(&locale_path)
            .with_context(|| format!("Failed to load {}", file_name))?;
        tracing::debug!(entries = count, "loaded locale");
    } else {
        tracing::warn!(
            path = %locale_path.display(),
            "locale file not found; names will show as raw keys"
        );
    }

    locale.add_default_rules();
    Ok(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["deathless", "generate", "/games/deathless", "-o", "docs"]).unwrap();
        match cli.command {
            Commands::Generate { path, output } => {
                assert_eq!(path, Some(PathBuf::from("/games/deathless")));
                assert_eq!(output, PathBuf::from("docs"));
            }
            Commands::Dump { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_resolve_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_config_dir(None).is_err());
        assert!(resolve_config_dir(Some(dir.path())).is_err());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "<config/>").unwrap();
        assert_eq!(resolve_config_dir(Some(dir.path())).unwrap(), dir.path());
    }

    #[test]
    fn test_generate_without_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"<config>
                <relic key="RELIC_AXE"><visual><name>AXE_NAME</name></visual><quality>1</quality></relic>
            </config>"#,
        )
        .unwrap();

        let output = dir.path().join("output");
        cmd_generate(Some(dir.path()), &output).unwrap();

        let relics = fs::read_to_string(output.join("relics.md")).unwrap();
        assert!(relics.contains("AXE_NAME"));
        assert!(relics.contains("RELIC_TYPE_1"));
    }

    #[test]
    fn test_generate_with_locale_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"<config>
                <relic key="RELIC_AXE"><visual><name>AXE_NAME</name></visual><quality>1</quality></relic>
            </config>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(LANGUAGE.locale_file_name()),
            r#"<locale><string key="AXE_NAME">Топор</string><string key="RELIC_TYPE_1">Необычная</string></locale>"#,
        )
        .unwrap();

        let output = dir.path().join("output");
        cmd_generate(Some(dir.path()), &output).unwrap();

        let relics = fs::read_to_string(output.join("relics.md")).unwrap();
        assert!(relics.contains("## Необычная"));
        assert!(relics.contains("| Топор    |"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"<config><unit key="HERO_X"><hp>many</hp></unit></config>"#,
        )
        .unwrap();

        let output = dir.path().join("output");
        assert!(cmd_generate(Some(dir.path()), &output).is_err());
        assert!(!output.exists());
    }
}
