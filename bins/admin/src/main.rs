//! Account maintenance CLI.
//!
//! Usage:
//!   hris-admin hash-password <password>
//!   hris-admin set-password <email> [--password <pw>]
//!   hris-admin show-roles <email>
//!
//! Commands that touch accounts read `DATABASE_URL` from the environment or
//! `.env`.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use hris_core::auth::{generate_temporary_password, hash_password};
use hris_db::EmployeeRepository;

/// Length of generated temporary passwords.
const TEMP_PASSWORD_LEN: usize = 12;

#[derive(Parser)]
#[command(name = "hris-admin")]
#[command(about = "Account maintenance for the HRIS backend")]
#[command(version)]
struct Cli {
    /// Database connection URL.
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored hash of a password.
    HashPassword {
        /// Plaintext password.
        password: String,
    },

    /// Reset an account's password and mark it temporary.
    SetPassword {
        /// Work email of the account.
        email: String,
        /// New password; a random one is generated and printed when omitted.
        #[arg(long)]
        password: Option<String>,
    },

    /// List the roles an account logs in with.
    ShowRoles {
        /// Work email of the account.
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
        }
        Command::SetPassword { email, password } => {
            let repo = employees(cli.database_url.as_deref()).await?;
            let employee = repo
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No employee with email {email}"))?;

            let generated = password.is_none();
            let password =
                password.unwrap_or_else(|| generate_temporary_password(TEMP_PASSWORD_LEN));
            repo.set_password(employee.id, hash_password(&password)?, true)
                .await?;

            println!("Password reset for {} ({})", employee.work_email, employee.id);
            if generated {
                println!("Temporary password: {password}");
            }
        }
        Command::ShowRoles { email } => {
            let repo = employees(cli.database_url.as_deref()).await?;
            let employee = repo
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No employee with email {email}"))?;

            let roles = repo.roles_for(employee.id).await?;
            println!("{} ({})", employee.work_email, employee.id);
            if roles.is_empty() {
                println!("  (no active role assignment)");
            }
            for role in roles {
                println!("  {role}");
            }
        }
    }

    Ok(())
}

async fn employees(database_url: Option<&str>) -> anyhow::Result<EmployeeRepository> {
    let Some(url) = database_url else {
        bail!("DATABASE_URL or --database-url is required for this command");
    };
    let db = hris_db::connect(url)
        .await
        .context("Failed to connect to database")?;
    Ok(EmployeeRepository::new(db))
}
