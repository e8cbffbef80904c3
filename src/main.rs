use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vpnusers::cli::{handle_list_command, handle_passwd_command, prompt_password};
use vpnusers::config::logging::init_logging;
use vpnusers::config::settings::{Settings, DEFAULT_CAPACITY, DEFAULT_SECRETS_FILE};
use vpnusers::models::SystemClock;
use vpnusers::services::RecordTable;

#[derive(Parser)]
#[command(
    name = "vpnusers",
    version,
    about = "Manage VPN users in a PPP CHAP secrets file",
    long_about = "vpnusers edits the CHAP secrets file read by pppd and xl2tpd. \
                  Each entry carries an enrollment date and a validity period in \
                  months, kept in a trailing comment, from which an expiry date \
                  is shown."
)]
struct Cli {
    /// Path of the CHAP secrets file
    #[arg(
        short,
        long,
        global = true,
        env = "VPNUSERS_SECRETS_FILE",
        default_value = DEFAULT_SECRETS_FILE
    )]
    file: PathBuf,

    /// Maximum number of entries
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Overwrite the file in place instead of replacing it via a temp file
    #[arg(long, global = true)]
    no_atomic: bool,

    /// Append logs to this file
    #[arg(long, global = true, env = "VPNUSERS_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive editor (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the entries
    List {
        /// Only entries past their expiry date
        #[arg(short, long)]
        expired: bool,
    },

    /// Change a client's password
    Passwd {
        /// Client name
        client: String,
    },

    /// Show the effective settings
    Config,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            secrets_file: self.file.clone(),
            capacity: self.capacity,
            atomic_save: !self.no_atomic,
            log_file: self.log_file.clone(),
            ..Settings::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = cli.settings();
    settings.validate()?;
    init_logging(settings.log_file.as_deref())?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => vpnusers::tui::run_tui(&settings)?,
        Commands::List { expired } => {
            let table = load_table(&settings)?;
            handle_list_command(&table, expired);
        }
        Commands::Passwd { client } => {
            let mut table = load_table(&settings)?;
            handle_passwd_command(&mut table, &client, prompt_password)?;
        }
        Commands::Config => println!("{}", settings.to_json()?),
    }

    Ok(())
}

fn load_table(settings: &Settings) -> Result<RecordTable> {
    let table = RecordTable::load(settings.secrets(), settings.capacity, Box::new(SystemClock))?;
    Ok(table)
}
