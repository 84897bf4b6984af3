use crate::export::ExportFormat;
use crate::models::{ServiceCategory, ServiceIcon};
use clap::{Parser, Subcommand};

/// Command-line interface definition for salonbook
#[derive(Parser)]
#[command(
    name = "salonbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A salon calendar: book appointments against business hours and staff schedules",
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

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Weekly business hours
    Hours {
        #[command(subcommand)]
        action: HoursAction,
    },

    /// Staff and their weekly schedules
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Offered services
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Closures and special opening hours for single dates
    Exception {
        #[command(subcommand)]
        action: ExceptionAction,
    },

    /// Book an appointment
    Add {
        /// Date of the appointment (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,

        #[arg(long, visible_alias = "client", help = "Client name shown on the calendar")]
        title: Option<String>,

        #[arg(
            long,
            default_value = "anyone",
            help = "Employee id, or 'anyone' for any available employee"
        )]
        stylist: String,

        #[arg(long, help = "Duration in minutes (45, 45m, 1h30)")]
        duration: Option<String>,

        #[arg(long, help = "Service id; sets the default duration")]
        service: Option<String>,

        #[arg(long = "walk-in", help = "Mark as walk-in")]
        walk_in: bool,

        #[arg(long, help = "Explicit appointment id (random when omitted)")]
        id: Option<String>,
    },

    /// Check whether an appointment could be booked, without booking it
    Check {
        date: String,
        time: String,

        #[arg(long, default_value = "anyone")]
        stylist: String,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        service: Option<String>,
    },

    /// Change an existing appointment
    Edit {
        /// Appointment id
        id: String,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long, visible_alias = "client")]
        title: Option<String>,

        #[arg(long)]
        stylist: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long, help = "Service id, or 'none' to clear it")]
        service: Option<String>,

        #[arg(long = "walk-in", help = "Set or clear the walk-in flag")]
        walk_in: Option<bool>,
    },

    /// Delete an appointment by id
    Del {
        id: String,
    },

    /// Show one day with overlap lanes and grid geometry
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Show the week (Monday to Sunday) containing a date
    Week {
        /// Any date of the week (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// List appointments
    List {
        #[arg(long, short, help = "Filter by year/month/day or a from:to range")]
        period: Option<String>,

        #[arg(long, help = "Only appointments of this employee id (or 'anyone')")]
        stylist: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export appointments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a from:to range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum HoursAction {
    /// Print the weekly schedule
    Show,

    /// Open a weekday with the given hours
    Set {
        weekday: String,

        #[arg(long)]
        open: String,

        #[arg(long)]
        close: String,
    },

    /// Close a weekday
    Close { weekday: String },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    Add {
        name: String,

        #[arg(long, default_value = "#6b7280", help = "Hex color, e.g. #e11d48")]
        color: String,

        #[arg(long)]
        id: Option<String>,
    },

    List,

    Del { id: String },

    /// Set one weekday of an employee's schedule
    Schedule {
        id: String,

        weekday: String,

        #[arg(long, conflicts_with = "off")]
        start: Option<String>,

        #[arg(long, conflicts_with = "off")]
        end: Option<String>,

        #[arg(long = "lunch-start", conflicts_with = "off", requires = "lunch_end")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", conflicts_with = "off", requires = "lunch_start")]
        lunch_end: Option<String>,

        #[arg(long, help = "Not working that day")]
        off: bool,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    Add {
        name: String,

        #[arg(long, value_enum)]
        icon: ServiceIcon,

        #[arg(long, help = "Duration in minutes (45, 45m, 1h30)")]
        duration: String,

        #[arg(long, default_value_t = 0.0)]
        price: f64,

        #[arg(long, value_enum)]
        category: ServiceCategory,

        #[arg(long)]
        id: Option<String>,
    },

    List,

    Del { id: String },
}

#[derive(Subcommand)]
pub enum ExceptionAction {
    Add {
        date: String,

        #[arg(long, help = "Closed all day")]
        off: bool,

        #[arg(long, requires = "close", conflicts_with = "off")]
        open: Option<String>,

        #[arg(long, requires = "open", conflicts_with = "off")]
        close: Option<String>,
    },

    List,

    Del { date: String },
}
