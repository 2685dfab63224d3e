// ghbar: unread GitHub notification count for a status bar, and a popup
// listing them on demand.

mod app;
mod cache;
mod config;
mod error;
mod fetch;
mod github;
mod present;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{App, Mode};
use cache::Paths;
use error::{GhbarError, Result};
use present::CommandNotifier;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pass `notify` as the last argument to show a popup instead of the count
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_tracing() {
    // stdout belongs to the status bar, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mode = Mode::from_args(cli.args.as_slice());
    let paths = Paths::discover()?;
    tracing::debug!(base = %paths.base().display(), "resolved base directory");
    let app = App::load(&paths)?;
    let notifier = CommandNotifier::new(app.config().notifier.clone());

    if let Some(line) = app.run(mode, &notifier).await? {
        println!("{}", line);
    }
    Ok(())
}

/// The bar must never see a failing exit status: every path exits 0.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return;
        }
        Err(e) => {
            report(&GhbarError::Other(
                e.kind().as_str().unwrap_or("invalid arguments").to_string(),
            ));
            return;
        }
    };

    if let Err(e) = run(cli).await {
        report(&e);
    }
}

fn report(err: &GhbarError) {
    tracing::error!(error = %err, "ghbar failed");
    println!("{}", err.bar_line());
}
