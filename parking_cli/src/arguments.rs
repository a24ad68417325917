use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the parking service (in-memory lot if absent)
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Total slots of the in-memory lot
    #[arg(short, long)]
    pub slots: Option<u32>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Operation(Operation),

    /// Read commands interactively until CTRL+D
    Repl,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Register the entry of a vehicle
    Entry { plate: String },

    /// Register the exit of a vehicle
    Exit { plate: String },

    /// Check whether a vehicle is parked
    Check { plate: String },

    /// Show how long a vehicle has been parked
    Time { plate: String },

    /// List the vehicles currently parked
    Active,

    /// Show the available slots
    Slots,

    /// Cancel the registration of a vehicle
    Cancel { plate: String },

    /// Attach free-form data to a parked vehicle
    Update {
        plate: String,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        data: Vec<String>,
    },

    /// Print the daily report as JSON
    Report,

    /// Manage the vehicle catalog (remote only)
    #[command(subcommand)]
    Catalog(CatalogOperation),
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum CatalogOperation {
    /// Add a vehicle to the catalog
    Add {
        plate: String,

        #[arg(short, long)]
        model: String,

        #[arg(short, long)]
        color: String,
    },

    /// List the catalog
    List,

    /// Remove a vehicle from the catalog by id
    Delete { id: String },
}
