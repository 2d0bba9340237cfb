use astrolex::{cli, config::Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "astrolex", version, about = "astrolex — astrology glossary browser")]
struct Cli {
    /// Write debug logs to /tmp/astrolex-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Run a single command and exit instead of starting the TUI.
    #[command(subcommand)]
    command: Option<cli::Command>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/astrolex-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("astrolex debug log started — tail -f /tmp/astrolex-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed, using defaults");
        Config::defaults()
    });

    match args.command {
        Some(command) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            cli::execute(&command, &config, &mut out)
        }
        None => astrolex_tui::run(config),
    }
}
