use clap::{Parser, Subcommand};
use anyhow::Result;
use colored::Colorize;

#[macro_use]
mod output;

mod api;
mod commands;
mod config;
mod login;
mod prompt;
mod toggle;
mod types;
mod view;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Only print results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print diagnostics (request failures, raw server answers)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Signup,

    /// Log in and store the access token
    Login {
        /// Echo the password while typing it
        #[arg(long)]
        show_password: bool,
    },

    /// Forget the stored access token
    Logout,

    /// Show the account the stored token belongs to
    Whoami,

    /// Print the stored access token to stdout
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    output::init(output::Verbosity::from_flags(cli.quiet, cli.verbose));

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            o_warn!("{}: failed to load .env: {}", "Warning".yellow(), e);
        }
    }

    let result = match &cli.command {
        Commands::Signup => commands::signup::handle_signup().await,
        Commands::Login { show_password } => commands::login::handle_login(*show_password).await,
        Commands::Logout => commands::logout::handle_logout().await,
        Commands::Whoami => commands::whoami::handle_whoami().await,
        Commands::Token => commands::token::handle_get_token().await,
    };

    if let Err(e) = result {
        o_error!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
