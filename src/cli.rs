use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "lumi-kit",
    about = "AI-driven development toolkit with multi-platform support",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/lumi-kit/logs/lumi-kit.log"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize lumi-kit in a project
    Init {
        /// Target project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,

        /// AI platform to install for (prompts when omitted)
        #[arg(long)]
        platform: Option<String>,

        /// Install every platform in the registry
        #[arg(long)]
        all: bool,

        /// Module codes to install (repeatable; defaults to all)
        #[arg(long = "module")]
        modules: Vec<String>,

        /// Directory containing the modules/ source tree (defaults to
        /// the target project)
        #[arg(long)]
        modules_dir: Option<PathBuf>,
    },

    /// Check system requirements
    Check,

    /// List registry modules and platforms
    List {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
