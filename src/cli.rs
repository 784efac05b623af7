use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the profile store JSON file
    #[arg(short, long, default_value = "profiles.json")]
    pub store_file: String,

    /// Signed-in user id (falls back to the MEAL_MATCH_USER environment
    /// variable)
    #[arg(short, long)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default)]
pub enum Command {
    /// Run the meal preference wizard
    #[default]
    Wizard,
    /// List meals uploaded by all users
    Gallery,
    /// Print the saved preference list for the current user
    Show,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
