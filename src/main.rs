//! Parlor CLI - book and manage beauty-parlor appointments from the terminal

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod routes;
mod session;

use cli::args::GlobalOptions;
use cli::{
    AdminCommands, BookingCommands, Cli, Commands, ConfigCommands, ReviewCommands,
    ServiceCommands, StylistCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("parlor", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register {
            name,
            phone,
            password,
            admin,
        } => cli::auth::register(&opts, &name, &phone, password, admin).await,
        Commands::Login { phone, password } => cli::auth::login(&opts, &phone, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Whoami => cli::auth::whoami(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Nav { path } => cli::nav::run(&opts, &path).await,
        Commands::Service(cmd) => match cmd {
            ServiceCommands::List => cli::service::list(&opts).await,
            ServiceCommands::Get { id } => cli::service::get(&opts, id).await,
            ServiceCommands::Create {
                title,
                description,
                price,
                image_url,
            } => cli::service::create(&opts, &title, &description, price, image_url).await,
            ServiceCommands::Update {
                id,
                title,
                description,
                price,
            } => cli::service::update(&opts, id, title, description, price).await,
            ServiceCommands::Delete { id, yes } => cli::service::delete(&opts, id, yes).await,
        },
        Commands::Stylist(cmd) => match cmd {
            StylistCommands::List => cli::stylist::list(&opts).await,
            StylistCommands::Get { id } => cli::stylist::get(&opts, id).await,
            StylistCommands::Reviews { id } => cli::stylist::reviews(&opts, id).await,
            StylistCommands::Create {
                name,
                bio,
                services,
            } => cli::stylist::create(&opts, &name, &bio, services).await,
            StylistCommands::Update {
                id,
                name,
                bio,
                services,
            } => cli::stylist::update(&opts, id, name, bio, services).await,
            StylistCommands::Delete { id, yes } => cli::stylist::delete(&opts, id, yes).await,
        },
        Commands::Booking(cmd) => match cmd {
            BookingCommands::List => cli::booking::list(&opts).await,
            BookingCommands::Create {
                service,
                stylist,
                appointment_time,
            } => cli::booking::create(&opts, service, stylist, &appointment_time).await,
        },
        Commands::Review(ReviewCommands::Create {
            stylist,
            rating,
            comment,
        }) => cli::review::create(&opts, stylist, rating, &comment).await,
        Commands::Pay {
            booking_id,
            amount,
            phone,
        } => cli::booking::pay(&opts, booking_id, amount, phone).await,
        Commands::Admin(cmd) => match cmd {
            AdminCommands::Dashboard => cli::admin::dashboard(&opts).await,
            AdminCommands::Users => cli::admin::users(&opts).await,
            AdminCommands::Bookings => cli::admin::bookings(&opts).await,
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetHost { host } => cli::config::set_host(&opts, &host),
            ConfigCommands::SetFormat { format } => cli::config::set_format(&opts, format),
        },
        Commands::Version => {
            println!("parlor version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::print(shell);
            Ok(())
        }
    }
}
