use clap::{Parser, Subcommand};
use mdexpand::MarkdownSmartSelect;
use mdexpand::config::{WorkspaceSettings, default_settings};
use mdexpand::document::Document;
use mdexpand::lsp::{MdExpand, SettingsEventKind, load_settings};
use std::path::PathBuf;
use tokio::io::{stdin, stdout};
use tokio_util::sync::CancellationToken;
use tower_lsp_server::ls_types::Position;
use tower_lsp_server::{LspService, Server};

/// Smart selection ranges for Markdown, served over LSP
#[derive(Parser)]
#[command(name = "mdexpand")]
#[command(version)]
#[command(about = "Smart selection ranges for Markdown, served over the Language Server Protocol")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the language server on stdin/stdout (default)
    Serve,
    /// Print the selection ranges for one position in a Markdown file
    Select {
        /// The Markdown file to analyze
        file: PathBuf,

        /// Zero-based line of the position
        #[arg(long)]
        line: u32,

        /// Zero-based UTF-16 character of the position
        #[arg(long, default_value_t = 0)]
        character: u32,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print a mdexpand.toml containing the default settings
    Init,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Select {
            file,
            line,
            character,
        }) => {
            let text = std::fs::read_to_string(&file).unwrap_or_else(|e| {
                eprintln!("Error: Could not read {}: {}", file.display(), e);
                std::process::exit(1);
            });

            let settings = cli_settings();
            let provider = MarkdownSmartSelect::from_settings(&settings);
            let document = Document::new(text);
            let position = Position::new(line, character);

            match provider
                .provide_selection_ranges(&document, &[position], &CancellationToken::new())
                .await
            {
                Ok(ranges) => match serde_json::to_string_pretty(&ranges) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Config {
            command: ConfigCommands::Init,
        }) => match toml::to_string_pretty(&default_settings()) {
            Ok(toml) => print!("{}", toml),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Serve) | None => {
            let stdin = stdin();
            let stdout = stdout();

            let (service, socket) = LspService::new(MdExpand::new);
            Server::new(stdin, stdout, socket).serve(service).await;
        }
    }
}

/// Settings for one-shot CLI runs: user config plus the current directory's project config
fn cli_settings() -> WorkspaceSettings {
    let cwd = std::env::current_dir().ok();
    let outcome = load_settings(cwd.as_deref(), None);
    for event in &outcome.events {
        match event.kind {
            SettingsEventKind::Info => log::info!("{}", event.message),
            SettingsEventKind::Warning => log::warn!("{}", event.message),
        }
    }
    outcome.settings.unwrap_or_default()
}
