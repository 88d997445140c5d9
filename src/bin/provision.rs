// Out-of-band administrator provisioning. There is deliberately no public
// registration endpoint; this binary is the only way an administrator record
// comes into existence.
use anyhow::Context;
use clap::Parser;

use portfolio_api::auth::password;
use portfolio_api::store::{Admin, PgStore, PortfolioStore};

#[derive(Parser, Debug)]
#[command(name = "provision", about = "Create or update the administrator account")]
struct Args {
    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    /// GitHub account used by the admin panel's repository import.
    #[arg(long)]
    github_username: Option<String>,

    /// Plaintext password; read from ADMIN_PASSWORD when the flag is omitted.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let url = std::env::var("DATABASE_URL").context("DATABASE_URL is required for provisioning")?;

    let store = PgStore::connect(&url, 1).await.context("connect to database")?;
    store.migrate().await.context("apply schema")?;

    let password_hash = password::hash_password(&args.password)?;
    let admin = store
        .upsert_admin(Admin::new(
            args.username,
            args.email,
            password_hash,
            args.github_username,
        ))
        .await?;

    println!("administrator {} ({}) provisioned", admin.username, admin.id);
    Ok(())
}
