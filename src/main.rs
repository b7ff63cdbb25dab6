use clap::{Parser, Subcommand};
use edge_image_sizer::{config, edge, output, query::RawQueryString, rewrite};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "edge-image-sizer")]
#[command(about = "Rewrite image request URIs to embed the requested size")]
#[command(long_about = "\
Rewrite image request URIs to embed the requested size

Viewer requests for allow-listed image extensions carrying ?width= and/or
?height= are rewritten so the origin can serve a pre-sized variant:

  /img/photo.jpg?width=300&height=200  →  /img/photo_300x200.jpg
  /img/photo.jpg?width=99999           →  /img/photo_4096x.jpg
  /img/photo.jpg?height=50             →  /img/photo_x50.jpg
  /index.html?width=300                →  unchanged

This binary runs the same transform the edge function runs, for local
testing. Set RUST_LOG=debug to see why a request was passed through.

Run 'edge-image-sizer gen-config' to generate a documented sizer.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing sizer.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Handle a Lambda@Edge or CloudFront Functions event (JSON file or stdin)
    Invoke {
        /// Event file; reads stdin when omitted or "-"
        event: Option<PathBuf>,
    },
    /// Rewrite a single URI
    Rewrite {
        /// Request path, e.g. /img/photo.jpg
        uri: String,
        /// Raw query string, e.g. "width=300&height=200"
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Validate sizer.toml and print the effective config
    CheckConfig,
    /// Print a stock sizer.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Invoke { event } => {
            let config = config::load_config(&cli.config_dir)?;
            let raw = read_event(event)?;
            let event: serde_json::Value = serde_json::from_str(&raw)?;
            let request = edge::handle_event_json(event, &config)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Rewrite { uri, query } => {
            let config = config::load_config(&cli.config_dir)?;
            let outcome = rewrite::rewrite_uri(&uri, &RawQueryString::parse(&query), &config);
            output::print_rewrite(&uri, &outcome);
        }
        Command::CheckConfig => {
            let config = config::load_config(&cli.config_dir)?;
            output::print_config(&config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Read an event from a file, or from stdin for `None` / `-`.
fn read_event(path: Option<PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
