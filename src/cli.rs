use clap::Parser;

#[derive(Parser)]
#[command(name = "sheets-preflight")]
#[command(about = "Validate the server env file and probe Google Sheets connectivity")]
pub struct Cli {
    /// Path to the env file the server boots from
    #[arg(long, default_value = "server/.env")]
    pub env_file: String,

    /// Cell range to probe
    #[arg(long, default_value = "A1:E5")]
    pub range: String,
}
