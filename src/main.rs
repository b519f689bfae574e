use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chirp", about = "chirp — render per-user message feeds")]
struct Cli {
    /// Follow-graph file: one `<user> follows <a>, <b>` line per user.
    users_file: PathBuf,
    /// Posts file: one `<user>> <text>` line per post.
    posts_file: PathBuf,
    /// Write debug logs to /tmp/chirp-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/chirp-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("chirp debug log started — tail -f /tmp/chirp-debug.log");
    }

    let config = chirp_core::config::Config::load()
        .unwrap_or_else(|_| chirp_core::config::Config::defaults());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    chirp::run(&cli.users_file, &cli.posts_file, &config, &mut out)?;
    Ok(())
}
