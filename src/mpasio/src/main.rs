// mpasio/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use mpasio::cli::{dump_namelist, get_value, list_streams, read_attribute, resolve_path, ValueKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mpasio")]
#[command(about = "Inspect MPAS namelist and streams files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a namelist value
    Get {
        /// Namelist file
        #[arg(short, long, env = "MPASIO_NAMELIST")]
        namelist: PathBuf,
        /// Namelist key, e.g. config_dt
        key: String,
        /// Interpret the value as this type
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueKind::Str)]
        kind: ValueKind,
    },
    /// Print all namelist entries as JSON
    Dump {
        #[arg(short, long, env = "MPASIO_NAMELIST")]
        namelist: PathBuf,
    },
    /// Print a raw stream attribute
    Read {
        /// Streams XML file
        #[arg(short, long, env = "MPASIO_STREAMS")]
        streams: PathBuf,
        stream: String,
        attribute: String,
    },
    /// Print a stream attribute as an absolute glob pattern
    Path {
        #[arg(short, long, env = "MPASIO_STREAMS")]
        streams: PathBuf,
        stream: String,
        #[arg(default_value = "filename_template")]
        attribute: String,
    },
    /// List stream names
    List {
        #[arg(short, long, env = "MPASIO_STREAMS")]
        streams: PathBuf,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Get {
            namelist,
            key,
            kind,
        } => get_value(&namelist, &key, kind)?,
        Commands::Dump { namelist } => dump_namelist(&namelist)?,
        Commands::Read {
            streams,
            stream,
            attribute,
        } => read_attribute(&streams, &stream, &attribute)?,
        Commands::Path {
            streams,
            stream,
            attribute,
        } => resolve_path(&streams, &stream, &attribute)?,
        Commands::List { streams } => list_streams(&streams)?,
    };
    println!("{}", output);
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
