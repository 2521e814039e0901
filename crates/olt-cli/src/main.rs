use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use olt_core::assemble::{ConvertOptions, assemble};
use olt_core::config::{self, CONFIG_FILE_NAME, OltConfig};
use olt_core::parse;
use olt_core::parse::spec::OpenApiSpec;

#[derive(Parser)]
#[command(name = "olt", about = "OpenAPI to llms.txt converter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OpenAPI document to llms.txt
    Convert {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to the output text file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep only operations carrying one of these tags
        #[arg(long, value_name = "TAG", num_args = 1..)]
        tags: Vec<String>,

        /// Skip operation detail and list reachable schemas only
        #[arg(long)]
        schemas_only: bool,
    },

    /// Validate an OpenAPI document
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new olt configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            tags,
            schemas_only,
        } => cmd_convert(input, output, tags, schemas_only),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "olt", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OltConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and parse the document, picking the format from the file
/// extension.
fn load_spec(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let spec = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(spec)
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    tags: Vec<String>,
    schemas_only: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();

    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let tags = if tags.is_empty() { cfg.tags } else { tags };
    let schemas_only = schemas_only || cfg.schemas_only;

    let spec = load_spec(&input)?;
    log::debug!(
        "loaded {}: {} paths, {} schemas",
        input.display(),
        spec.paths.len(),
        spec.schema_names().count()
    );

    let options = ConvertOptions {
        tags: if tags.is_empty() { None } else { Some(tags) },
        schemas_only,
    };
    let text = assemble(&spec, &options);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(&output, &text)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!("wrote {} ({} bytes)", output.display(), text.len());
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let spec = load_spec(&input)?;
    parse::check_version(&spec)?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        spec.openapi,
        olt_core::defaults::title(&spec.info)
    );
    if let Some(version) = spec.info.version.as_deref() {
        eprintln!("  Version: {version}");
    }
    eprintln!("  Paths: {}", spec.paths.len());
    eprintln!("  Schemas: {}", spec.schema_names().count());
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
