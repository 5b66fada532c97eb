use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;
use visadesk::model::{EntryKind, ServiceIcon};

#[derive(Parser, Debug)]
#[command(name = "visadesk")]
#[command(about = "Back-office console for The LUU Visa Consultant site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the JSON collections
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage visa service listings
    #[command(alias = "svc")]
    Services {
        #[command(subcommand)]
        command: ServiceCmd,
    },

    /// Manage client testimonials
    Testimonials {
        #[command(subcommand)]
        command: TestimonialCmd,
    },

    /// Manage hero carousel images
    Hero {
        #[command(subcommand)]
        command: HeroCmd,
    },

    /// Show or edit the about section
    About {
        #[command(subcommand)]
        command: AboutCmd,
    },

    /// Manage client records
    Clients {
        #[command(subcommand)]
        command: ClientCmd,
    },

    /// The credit/debit ledger
    Ledger {
        #[command(subcommand)]
        command: LedgerCmd,
    },

    /// Opening balances per client
    Balances {
        #[command(subcommand)]
        command: BalanceCmd,
    },

    /// Inbound contact messages
    Emails {
        #[command(subcommand)]
        command: EmailCmd,
    },

    /// Site settings and admin credentials
    Settings {
        #[command(subcommand)]
        command: SettingsCmd,
    },

    /// Show the activity log, newest first
    Logs {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Export or import a full backup
    Backup {
        #[command(subcommand)]
        command: BackupCmd,
    },

    /// Submit a contact-form message (as the public site would)
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Ask the AI assistant a visitor question
    Faq {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Seed an empty data directory
    Init,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCmd {
    /// List services
    #[command(alias = "ls")]
    List {
        /// Show trashed services instead of active ones
        #[arg(long)]
        trash: bool,

        /// Show everything regardless of status
        #[arg(long)]
        all: bool,

        /// Filter by search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a service
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        long_description: String,
        /// May be given multiple times
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "file-text")]
        icon: ServiceIcon,
    },

    /// Update fields of a service
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        long_description: Option<String>,
        /// Replaces the full list when given
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        icon: Option<ServiceIcon>,
    },

    /// Move a service to the trash
    Trash { id: Uuid },

    /// Restore a trashed service
    Restore { id: Uuid },

    /// Restore every trashed service
    RestoreAll,

    /// Permanently delete a service
    Purge {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TestimonialCmd {
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    Add {
        name: String,
        #[arg(long, default_value = "")]
        destination: String,
        #[arg(long, default_value = "")]
        quote: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        country: String,
    },

    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        destination: Option<String>,
        #[arg(long)]
        quote: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Delete permanently (testimonials have no trash)
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum HeroCmd {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        trash: bool,
        #[arg(long)]
        all: bool,
    },

    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
    },

    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },

    Trash { id: Uuid },
    Restore { id: Uuid },
    RestoreAll,
    Purge {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AboutCmd {
    Show,
    Set {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        paragraph1: Option<String>,
        #[arg(long)]
        paragraph2: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClientCmd {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        trash: bool,
        #[arg(long)]
        all: bool,
        #[arg(short, long)]
        search: Option<String>,
    },

    Add { name: String },

    /// Rename a client (updates cached names on ledger and balances)
    Rename { id: Uuid, name: String },

    Trash { id: Uuid },
    Restore { id: Uuid },
    RestoreAll,
    Purge {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LedgerCmd {
    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Scope to one client
        #[arg(long)]
        client: Option<Uuid>,

        /// Show only closed-out entries
        #[arg(long)]
        inactive: bool,

        /// Show entries regardless of status
        #[arg(long)]
        all: bool,
    },

    /// Record a credit or debit
    Add {
        #[arg(long)]
        client: Uuid,
        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        kind: EntryKind,
        /// Decimal amount, e.g. 150 or 150.25
        #[arg(long)]
        amount: String,
    },

    /// Credit/debit totals and balance over active entries
    Totals {
        #[arg(long)]
        client: Option<Uuid>,
    },

    /// Date-ordered running balance over active entries
    Series {
        #[arg(long)]
        client: Option<Uuid>,
    },

    /// Exclude one entry from the current balance
    Deactivate { id: Uuid },

    /// Bring one entry back into the current balance
    Activate { id: Uuid },

    /// Close the period: mark every active entry inactive
    CloseOut,

    /// Permanently delete every entry
    Flush {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BalanceCmd {
    #[command(alias = "ls")]
    List,

    /// Set (or replace) a client's opening balance
    Set {
        #[arg(long)]
        client: Uuid,
        #[arg(long)]
        kind: EntryKind,
        /// Decimal amount, e.g. 150 or 150.25
        #[arg(long)]
        amount: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmailCmd {
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        trash: bool,
        #[arg(long)]
        all: bool,
        #[arg(long)]
        unread: bool,
        #[arg(long)]
        favorites: bool,
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print one message in full (marks it read)
    Show { id: Uuid },

    Read { id: Uuid },

    /// Toggle the favorite flag
    Favorite { id: Uuid },

    Trash { id: Uuid },
    Restore { id: Uuid },
    RestoreAll,
    Purge {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    Show,
    Set {
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Check admin credentials
    Login { username: String, password: String },
}

#[derive(Subcommand, Debug)]
pub enum BackupCmd {
    /// Write the backup envelope to a file (or stdout)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore collections from a backup envelope
    Import { path: PathBuf },
}
