mod config;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mediaseed_generate::{GenerationEngine, GenerationError};
use mediaseed_publish::{
    BlobStore, LocalBlobStore, MemoryBlobStore, S3BlobStore, write_bytes_atomic,
};
use thiserror::Error;

use config::{Config, DEFAULT_CONFIG_PATH, StoreKind, load_config, render_config};
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("config render error: {0}")]
    ConfigRender(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "mediaseed", version, about = "Synthetic media data for a demo analytics lake")]
struct Cli {
    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate all datasets and publish them.
    Generate(GenerateArgs),
    /// Write the default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file (defaults to ./mediaseed.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Destination store.
    #[arg(long, value_enum)]
    store: Option<StoreKind>,
    /// Bucket for the s3 store.
    #[arg(long)]
    bucket: Option<String>,
    /// Root directory for the local store.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Fail before publishing when dataset checks report issues.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Write the run report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    /// Destination path.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    path: PathBuf,
    /// Replace an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::InitConfig(args) => run_init_config(args),
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    if config.store == StoreKind::S3 && config.bucket.trim().is_empty() {
        return Err(CliError::InvalidConfig(
            "bucket is required for the s3 store".to_string(),
        ));
    }

    let store: Box<dyn BlobStore> = match config.store {
        StoreKind::S3 => Box::new(S3BlobStore::from_env(config.bucket.clone()).await),
        StoreKind::Local => Box::new(LocalBlobStore::new(config.out_dir.clone())),
        StoreKind::Memory => Box::new(MemoryBlobStore::new()),
    };
    tracing::info!(event = "store_selected", store = store.kind());

    let engine = GenerationEngine::new(config.generate_options());
    let result = engine.run(store.as_ref()).await?;

    if let Some(path) = &args.report {
        write_bytes_atomic(path, &serde_json::to_vec_pretty(&result.report)?)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    println!("{}", result.message);
    Ok(())
}

/// Flags given on the command line replace file values. `--strict` can only
/// switch strict mode on.
fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(store) = args.store {
        config.store = store;
    }
    if let Some(bucket) = &args.bucket {
        config.bucket = bucket.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = out_dir.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.strict |= args.strict;
}

fn run_init_config(args: InitConfigArgs) -> Result<(), CliError> {
    if args.path.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists (use --force to replace it)",
            args.path.display()
        )));
    }

    let rendered = render_config(&Config::default())?;
    write_bytes_atomic(&args.path, rendered.as_bytes())?;
    tracing::info!(event = "config_written", path = %args.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        let name = format!("mediaseed_cli_{label}_{}.toml", uuid::Uuid::new_v4());
        std::env::temp_dir().join(name)
    }

    fn parse_generate(args: &[&str]) -> GenerateArgs {
        let argv = ["mediaseed", "generate"]
            .into_iter()
            .chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("parse arguments");
        match cli.command {
            Command::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    fn file_config() -> Config {
        config::parse_config(
            r#"
bucket = "file-bucket"
store = "local"
out_dir = "file-lake"
seed = 7
strict = true
"#,
        )
        .expect("parse config")
    }

    #[test]
    fn flags_replace_file_values() {
        let mut config = file_config();
        let args = parse_generate(&[
            "--store",
            "memory",
            "--bucket",
            "flag-bucket",
            "--out-dir",
            "flag-lake",
            "--seed",
            "42",
        ]);
        apply_overrides(&mut config, &args);

        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.bucket, "flag-bucket");
        assert_eq!(config.out_dir, PathBuf::from("flag-lake"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let mut config = file_config();
        apply_overrides(&mut config, &parse_generate(&[]));

        assert_eq!(config, file_config());
        assert!(config.strict);
    }

    #[test]
    fn strict_flag_enables_strict_mode() {
        let mut config = Config::default();
        assert!(!config.strict);
        apply_overrides(&mut config, &parse_generate(&["--strict"]));
        assert!(config.strict);
        assert!(config.generate_options().strict);
    }

    #[test]
    fn init_config_refuses_existing_file_without_force() {
        let path = temp_path("existing");
        std::fs::write(&path, "bucket = \"keep\"\n").expect("seed file");

        let result = run_init_config(InitConfigArgs {
            path: path.clone(),
            force: false,
        });
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
        let content = std::fs::read_to_string(&path).expect("read file");
        assert_eq!(content, "bucket = \"keep\"\n");

        run_init_config(InitConfigArgs {
            path: path.clone(),
            force: true,
        })
        .expect("overwrite with force");
        let content = std::fs::read_to_string(&path).expect("read file");
        let parsed = config::parse_config(&content).expect("parse written config");
        assert_eq!(parsed, Config::default());

        let _ = std::fs::remove_file(&path);
    }
}
