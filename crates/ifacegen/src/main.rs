use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use ifacegen::{IfacegenConfig, driver};
use ifacegen_emit::{ArtifactWriter, Emitter, FsWriter, MemoryWriter, ObjCEmitter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Generate platform bindings from interface definitions.
#[derive(Parser)]
#[command(name = "ifacegen", version, about)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate bindings for every interface in the project.
    Generate {
        /// Config file (defaults to ./ifacegen.toml if present).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory of interface definitions.
        #[arg(long)]
        interfaces: Option<PathBuf>,

        /// Output directory for headers.
        #[arg(long)]
        include_root: Option<PathBuf>,

        /// Output directory for implementations.
        #[arg(long)]
        src_root: Option<PathBuf>,

        /// Stop at the first interface that fails.
        #[arg(long)]
        fail_fast: bool,

        /// Generate without writing any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the generated files of one interface.
    Print {
        /// Interface definition (`<Name>.json`).
        file: PathBuf,

        /// Config file (defaults to ./ifacegen.toml if present).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Which file to print.
        #[arg(long, value_enum, default_value_t = Artifact::Both)]
        artifact: Artifact,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Artifact {
    Declaration,
    Implementation,
    Both,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<(IfacegenConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = IfacegenConfig::load_file(path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((config, root))
        }
        None => {
            let root = std::env::current_dir().context("failed to get current directory")?;
            Ok((IfacegenConfig::load(&root)?, root))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            config,
            interfaces,
            include_root,
            src_root,
            fail_fast,
            dry_run,
        } => {
            let (config, root) = load_config(config.as_deref())?;
            let mut paths = config.resolve_paths(&root);
            if let Some(dir) = interfaces {
                paths.interfaces = dir;
            }
            if let Some(dir) = include_root {
                paths.include_root = dir;
            }
            if let Some(dir) = src_root {
                paths.src_root = dir;
            }

            let emitter = ObjCEmitter::new(config.objc);
            let memory = MemoryWriter::new();
            let fs = FsWriter::new(&paths.include_root, &paths.src_root);
            let writer: &dyn ArtifactWriter = if dry_run { &memory } else { &fs };

            let summary = driver::run(&emitter, &paths.interfaces, writer, fail_fast)?;
            if dry_run {
                for name in memory.names() {
                    println!("{}", fs.declaration_path(&emitter, &name).display());
                    println!("{}", fs.implementation_path(&emitter, &name).display());
                }
            }
            eprintln!(
                "generated {} interface(s), {} failed",
                summary.generated.len(),
                summary.failed.len()
            );
            if !summary.is_success() {
                for (name, reason) in &summary.failed {
                    eprintln!("  {}: {}", name, reason);
                }
                bail!("{} interface(s) failed", summary.failed.len());
            }
            Ok(())
        }

        Command::Print {
            file,
            config,
            artifact,
        } => {
            let (config, _) = load_config(config.as_deref())?;
            let name = driver::interface_name(&file)
                .with_context(|| format!("invalid file name {}", file.display()))?;
            let model = driver::load_interface(&file)?;
            let emitter = ObjCEmitter::new(config.objc);

            if artifact != Artifact::Implementation {
                print!("{}", emitter.emit_declaration(name, &model)?);
            }
            if artifact == Artifact::Both {
                println!();
            }
            if artifact != Artifact::Declaration {
                print!("{}", emitter.emit_implementation(name, &model)?);
            }
            Ok(())
        }
    }
}
