use crate::export::ExportFormat;
use crate::models::period::Period;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWeekReport
/// CLI application to file and review weekly work reports with SQLite
#[derive(Parser)]
#[command(
    name = "rweekreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly work reports: staff file per-theme work items, admins review them by period, employee and department",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Caller role (user or admin). Self-declared, not authenticated.
    #[arg(global = true, long = "role")]
    pub role: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `dashboard` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(
        long,
        short,
        value_enum,
        ignore_case = true,
        default_value = "all",
        help = "Time period: weekly, monthly, quarterly, half-yearly, yearly, all"
    )]
    pub period: Period,

    #[arg(
        long = "as-of",
        value_name = "YYYY-MM-DD",
        help = "Reference date for the period (default: today)"
    )]
    pub as_of: Option<String>,

    #[arg(long, help = "Only this employee (exact name, or All)")]
    pub employee: Option<String>,

    #[arg(long, help = "Only this department (exact name, or All)")]
    pub department: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the themes, employees and departments known to the tool
    Catalog,

    /// Submit (or replace) the weekly report of one employee
    Submit {
        #[arg(long, help = "Employee name")]
        employee: String,

        #[arg(long, help = "Department (default: config `default_department`)")]
        department: Option<String>,

        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Submission date (default: today)")]
        date: Option<String>,

        #[arg(
            long = "week-start",
            value_name = "YYYY-MM-DD",
            help = "First day of the week (default: last Monday)"
        )]
        week_start: Option<String>,

        #[arg(
            long = "week-end",
            value_name = "YYYY-MM-DD",
            help = "Last day of the week (default: last Sunday)"
        )]
        week_end: Option<String>,

        #[arg(
            long = "row",
            value_name = "THEME|WORK|PENDING|JUSTIFICATION",
            help = "One work item; THEME is a number 1-28, a theme name, or empty"
        )]
        rows: Vec<String>,

        #[arg(
            long = "from-file",
            value_name = "FILE",
            help = "JSON array of {theme, work, pending, justification} items"
        )]
        from_file: Option<String>,
    },

    /// Show the stored report of one employee for one week
    Show {
        #[arg(long, help = "Employee name")]
        employee: String,

        #[arg(long = "week-start", value_name = "YYYY-MM-DD")]
        week_start: Option<String>,

        #[arg(long = "week-end", value_name = "YYYY-MM-DD")]
        week_end: Option<String>,

        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
    },

    /// List every stored work item, most recent first (admin)
    List,

    /// Aggregated view of submitted reports (admin)
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "no-details", help = "Hide the detailed rows table")]
        no_details: bool,
    },

    /// Export the filtered work items (admin)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database (admin)
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table (admin)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

impl Commands {
    /// Commands reserved to the admin role.
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            Commands::Db { .. }
                | Commands::List
                | Commands::Dashboard { .. }
                | Commands::Export { .. }
                | Commands::Backup { .. }
                | Commands::Log { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Config { .. } => "config",
            Commands::Db { .. } => "db",
            Commands::Catalog => "catalog",
            Commands::Submit { .. } => "submit",
            Commands::Show { .. } => "show",
            Commands::List => "list",
            Commands::Dashboard { .. } => "dashboard",
            Commands::Export { .. } => "export",
            Commands::Backup { .. } => "backup",
            Commands::Log { .. } => "log",
        }
    }
}
