mod cli;
mod extract_cmd;
mod page_range;
mod shared;
mod show_cmd;
mod writer;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "pdfannot=debug,pdfannot_core=debug,pdfannot_parse=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            ref vault,
            ref attachments,
            ref pages,
            ref unicode_norm,
            ref password,
            max_input_bytes,
            force,
            stdout,
        } => extract_cmd::run(&extract_cmd::ExtractArgs {
            file,
            vault,
            attachments,
            pages: pages.as_deref(),
            unicode_norm: unicode_norm.as_ref(),
            password: password.as_deref(),
            max_input_bytes,
            force,
            stdout,
        }),
        cli::Commands::Show {
            ref file,
            ref pages,
            ref format,
            ref unicode_norm,
            ref password,
            max_input_bytes,
        } => show_cmd::run(
            file,
            pages.as_deref(),
            format,
            unicode_norm.as_ref(),
            password.as_deref(),
            max_input_bytes,
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
