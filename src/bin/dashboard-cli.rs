use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(about = "Command-line client for the Portfolio Dashboard API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every site in the catalog
    Sites,
    /// Show one site by id
    Site { id: u64 },
    /// Fetch a URL through the server-side proxy
    Proxy { target: String },
    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Sites => client.get(format!("{}/api/sites", base)),
        Commands::Site { id } => client.get(format!("{}/api/sites/{}", base, id)),
        Commands::Proxy { target } => client
            .get(format!("{}/api/proxy", base))
            .query(&[("url", target)]),
        Commands::Health => client.get(format!("{}/api/health", base)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => {
            if !status.is_success() {
                eprintln!("Error: API returned status {}", status);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Err(_) => {
            eprintln!("Error: API returned status {}", status);
            eprintln!("Response: {}", text);
        }
    }
    Ok(())
}
