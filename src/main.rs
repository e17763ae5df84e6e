mod cli;
mod config;
mod creds;
mod errors;
mod sheets;

use chrono::Utc;
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use errors::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    println!("🔍 Sheets preflight started at {}", Utc::now().to_rfc3339());

    let config = AppConfig::load(&cli.env_file)?;
    println!("✅ All required environment variables are present");
    println!("   (NODE_ENV={}, PORT={})", config.node_env, config.port);

    println!("Checking creds for: {}", config.google_service_account_email);
    let key = creds::service_account_key(
        &config.google_service_account_email,
        &config.google_private_key,
    );
    let auth = creds::build_authenticator(key).await?;
    println!("✅ Google credentials initialized");

    let client = sheets::build_client(auth)?;
    println!("✅ Connected to Google Sheets API");

    let rows = sheets::read_range(&client, &config.google_sheet_id, &cli.range).await?;
    if rows.is_empty() {
        println!("⚠️ Sheet accessible but empty");
    } else {
        println!("✅ Sheet read successful:");
        for row in &rows {
            println!("   {}", sheets::render_row(row));
        }
    }

    println!();
    println!("🎉 SUCCESS: {} keys are valid and working", cli.env_file);
    Ok(())
}
