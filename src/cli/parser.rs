use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftlog
/// CLI application to log daily work shifts with SQLite
#[derive(Parser)]
#[command(
    name = "rshiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily work shifts (location, job number, start/end) and compute net hours after lunch",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a new shift
    Add {
        /// Date of the shift (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Work location, e.g. "HDES-GTC"
        #[arg(long, short = 'l', default_value = "")]
        location: String,

        /// Job number, free text
        #[arg(long = "job", short = 'j', default_value = "")]
        job_number: String,

        /// Start time (HH:MM, default from config)
        #[arg(long = "start", visible_alias = "in")]
        start: Option<String>,

        /// End time (HH:MM, default from config)
        #[arg(long = "end", visible_alias = "out")]
        end: Option<String>,

        /// Optional description / notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Change an existing shift; omitted fields keep their stored value
    Edit {
        /// Entry id, as shown by `list`
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long, short = 'l')]
        location: Option<String>,

        #[arg(long = "job", short = 'j')]
        job_number: Option<String>,

        #[arg(long = "start", visible_alias = "in")]
        start: Option<String>,

        #[arg(long = "end", visible_alias = "out")]
        end: Option<String>,

        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,

        /// Remove the notes of the entry
        #[arg(long = "clear-notes")]
        clear_notes: bool,
    },

    /// List shifts, most recent first, with the total of net hours
    List {
        /// Case-insensitive text matched against location and job number
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only shifts on this day (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show one shift with its gross / lunch / net breakdown
    Show {
        /// Entry id, as shown by `list`
        id: i64,
    },

    /// Delete a shift by id, or by its position in a (filtered) list
    Del {
        /// Entry id to delete
        #[arg(required_unless_present = "index", conflicts_with = "index")]
        id: Option<i64>,

        /// 1-based position in the list produced with the same --search/--date
        #[arg(long)]
        index: Option<usize>,

        #[arg(long, short = 's', requires = "index")]
        search: Option<String>,

        #[arg(long, short = 'd', requires = "index")]
        date: Option<String>,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
