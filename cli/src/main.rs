//! ballotbox: record and tally votes for the two local polls.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ballotbox_dialog::DialogMode;
use ballotbox_kiosk::{Notifier, VoteKiosk};
use ballotbox_ledger::VoteLedger;
use ballotbox_results::ResultsBoard;
use ballotbox_store_lmdb::LmdbTallyStore;
use ballotbox_types::{PollId, Timestamp};

mod config;

use config::FileConfig;

#[derive(Parser)]
#[command(name = "ballotbox", about = "Local vote recording and results")]
struct Cli {
    /// Data directory for the tally store.
    #[arg(long, env = "BALLOTBOX_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOTBOX_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Cast a vote in a poll (asks for confirmation).
    Vote {
        /// Which poll: "first" or "second".
        #[arg(long)]
        poll: String,

        /// Candidate name as shown on the ballot. Omitting it records a
        /// placeholder vote.
        candidate: Option<String>,

        /// Skip the interactive confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Show aggregated results for both polls.
    Results,
    /// Clear all poll data (counts, voted flags, last-vote records).
    Reset {
        /// Skip the interactive confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Prints commit notifications to the terminal.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = cli
        .config
        .as_deref()
        .and_then(FileConfig::load)
        .unwrap_or_default();

    let data_dir = cli
        .data_dir
        .or(file_config.data_dir)
        .unwrap_or_else(|| PathBuf::from("./ballotbox_data"));
    let log_level = cli
        .log_level
        .or(file_config.log_level)
        .unwrap_or_else(|| "info".to_string());

    init_tracing(&log_level);

    let store = LmdbTallyStore::open(&data_dir)?;
    let ledger = Arc::new(VoteLedger::new(store));

    match cli.command {
        Command::Vote { poll, candidate, yes } => {
            let poll = parse_poll(&poll)?;
            let mut kiosk = VoteKiosk::new(Arc::clone(&ledger), StdoutNotifier);
            run_vote(&mut kiosk, poll, candidate.as_deref(), yes)?;
        }
        Command::Results => {
            let board = ResultsBoard::new(Arc::clone(&ledger));
            for summary in board.summaries() {
                print!("{}", ballotbox_results::render(&summary));
            }
        }
        Command::Reset { yes } => {
            if !yes && !prompt_yes("Clear all poll data? [y/N] ")? {
                println!("Cancelled.");
                return Ok(());
            }
            let board = ResultsBoard::new(Arc::clone(&ledger));
            for summary in board.reset_all_and_rerender()? {
                print!("{}", ballotbox_results::render(&summary));
            }
        }
    }

    Ok(())
}

/// Run the interactive vote protocol: open the dialog, show its content,
/// then confirm or cancel.
fn run_vote(
    kiosk: &mut VoteKiosk<LmdbTallyStore, StdoutNotifier>,
    poll: PollId,
    candidate: Option<&str>,
    yes: bool,
) -> anyhow::Result<()> {
    kiosk.trigger(poll, candidate);

    let Some(content) = kiosk.dialog_content() else {
        return Ok(());
    };
    println!("{content}");

    match content.mode {
        DialogMode::Info => {
            // Dismiss is the only action here.
            kiosk.cancel();
        }
        DialogMode::Confirm => {
            if yes || prompt_yes("Cast this vote? [y/N] ")? {
                kiosk.confirm(Timestamp::now())?;
                // A lost race reopens the dialog with the previous pick.
                if let Some(info) = kiosk.dialog_content() {
                    println!("{info}");
                    kiosk.cancel();
                }
            } else {
                kiosk.cancel();
                println!("Cancelled.");
            }
        }
    }
    Ok(())
}

fn prompt_yes(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn parse_poll(s: &str) -> anyhow::Result<PollId> {
    match s.to_lowercase().as_str() {
        "first" | "1" => Ok(PollId::First),
        "second" | "2" => Ok(PollId::Second),
        other => anyhow::bail!("unknown poll '{other}' (expected \"first\" or \"second\")"),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured
/// level when set.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
