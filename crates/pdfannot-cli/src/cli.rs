use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Turn PDF annotation comments into Markdown notes.
#[derive(Debug, Parser)]
#[command(name = "pdfannot", about, version)]
pub struct Cli {
    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract annotation comments into an "Annotations of <file>.md" note
    Extract {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory the note is written to
        #[arg(long, value_name = "DIR", env = "PDFANNOT_VAULT", default_value = ".")]
        vault: PathBuf,

        /// Vault folder the PDF is linked under in the note header. Empty means the vault root
        #[arg(long, value_name = "PATH", env = "PDFANNOT_ATTACHMENTS", default_value = "")]
        attachments: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Apply Unicode normalization to annotation text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,

        /// Refuse PDFs larger than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_input_bytes: Option<usize>,

        /// Overwrite an existing note
        #[arg(long)]
        force: bool,

        /// Print the note to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print annotation comments without writing a note
    Show {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Markdown)]
        format: ShowFormat,

        /// Apply Unicode normalization to annotation text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,

        /// Refuse PDFs larger than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_input_bytes: Option<usize>,
    },
}

/// Output format for the show subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum ShowFormat {
    /// The note body, as `extract` would write it
    Markdown,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

/// Unicode normalization form for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum UnicodeNormArg {
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the core library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(&self) -> pdfannot_core::UnicodeNorm {
        match self {
            UnicodeNormArg::Nfc => pdfannot_core::UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => pdfannot_core::UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => pdfannot_core::UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => pdfannot_core::UnicodeNorm::Nfkd,
        }
    }
}
