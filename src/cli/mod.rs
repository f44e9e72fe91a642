//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod admin;
pub mod args;
pub mod auth;
pub mod booking;
pub mod completions;
pub mod config;
pub mod context;
pub mod forms;
pub mod handlers;
pub mod nav;
pub mod review;
pub mod service;
pub mod status;
pub mod stylist;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Parlor - book and manage beauty-parlor appointments from the terminal
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "PARLOR_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "PARLOR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API host
    #[arg(long, global = true, env = "PARLOR_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PARLOR_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Phone number, 10-15 digits
        #[arg(long)]
        phone: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "PARLOR_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Register as an administrator
        #[arg(long)]
        admin: bool,
    },

    /// Sign in with phone and password
    Login {
        /// Phone number
        #[arg(long)]
        phone: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "PARLOR_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in customer's profile
    Whoami,

    /// Show configuration and stored session (no network)
    Status,

    /// Open a route and show what the guard decides
    #[command(after_help = "EXAMPLES:\n  \
        parlor nav /services        # public, always renders\n  \
        parlor nav /my-bookings     # sends you to /login when signed out\n  \
        parlor nav /admin/users     # sends non-admins to /services")]
    Nav {
        /// Route path, e.g. /payment/3
        path: String,
    },

    /// Browse and manage services
    #[command(subcommand)]
    Service(ServiceCommands),

    /// Browse and manage stylists
    #[command(subcommand)]
    Stylist(StylistCommands),

    /// Book appointments and list your bookings
    #[command(subcommand)]
    Booking(BookingCommands),

    /// Review a stylist
    #[command(subcommand)]
    Review(ReviewCommands),

    /// Pay for a booking via M-Pesa
    Pay {
        /// Booking to pay for
        booking_id: u64,

        /// Amount in shillings (rounded to a whole number)
        #[arg(long)]
        amount: f64,

        /// M-Pesa phone number (defaults to your account phone)
        #[arg(long)]
        phone: Option<String>,
    },

    /// Administrator views
    #[command(subcommand)]
    Admin(AdminCommands),

    /// View and edit the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   parlor completion bash > /etc/bash_completion.d/parlor
  zsh:    parlor completion zsh > \"${fpath[1]}/_parlor\"
  fish:   parlor completion fish > ~/.config/fish/completions/parlor.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Service subcommands
#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List all services
    #[command(visible_alias = "ls")]
    List,

    /// Show one service and the stylists offering it
    Get {
        /// Service ID
        id: u64,
    },

    /// Add a service (admin)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Price in shillings
        #[arg(long)]
        price: f64,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Change a service (admin)
    Update {
        /// Service ID
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,
    },

    /// Remove a service (admin)
    Delete {
        /// Service ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Stylist subcommands
#[derive(Subcommand, Debug)]
pub enum StylistCommands {
    /// List all stylists
    #[command(visible_alias = "ls")]
    List,

    /// Show one stylist and their services
    Get {
        /// Stylist ID
        id: u64,
    },

    /// Show a stylist's reviews
    Reviews {
        /// Stylist ID
        id: u64,
    },

    /// Add a stylist (admin)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        bio: String,

        /// Service IDs the stylist offers (comma-separated)
        #[arg(long = "service", value_delimiter = ',')]
        services: Vec<u64>,
    },

    /// Change a stylist (admin)
    Update {
        /// Stylist ID
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        /// Replace the offered services (comma-separated IDs)
        #[arg(long = "service", value_delimiter = ',')]
        services: Option<Vec<u64>>,
    },

    /// Remove a stylist (admin)
    Delete {
        /// Stylist ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Booking subcommands
#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// List your bookings
    #[command(visible_alias = "ls")]
    List,

    /// Book a service with a stylist
    Create {
        /// Service ID
        #[arg(long)]
        service: u64,

        /// Stylist ID
        #[arg(long)]
        stylist: u64,

        /// Appointment time, YYYY-MM-DDTHH:MM
        #[arg(long = "at")]
        appointment_time: String,
    },
}

/// Review subcommands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Rate a stylist from 1 to 5
    Create {
        /// Stylist ID
        #[arg(long)]
        stylist: u64,

        /// Rating, 1-5
        #[arg(long)]
        rating: u8,

        #[arg(long, default_value = "")]
        comment: String,
    },
}

/// Admin subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Totals and booking breakdowns
    Dashboard,

    /// All registered customers
    Users,

    /// All bookings across customers
    Bookings,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set the API host
    SetHost {
        /// Base URL, e.g. https://parlor.example.com
        host: String,
    },

    /// Set the default output format
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },
}
