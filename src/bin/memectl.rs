use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "memectl", about = "CLI for the Memeforge backend", version)]
struct Cli {
    /// Backend base URL
    #[arg(global = true, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a coin image from an idea
    Generate {
        /// Idea text, e.g. "cool doge coin"
        #[arg(long)]
        idea: String,
        /// Art style key; see `memectl styles`
        #[arg(long)]
        style: Option<String>,
    },
    /// List style keys offered by the backend
    Styles,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Generate { idea, style } => {
            let mut body = json!({ "idea": idea });
            if let Some(style) = style {
                body["artStyle"] = Value::String(style);
            }
            let response = client
                .post(format!("{}/api/generate", server))
                .json(&body)
                .send()
                .await?;
            let status = response.status();
            let v: Value = response.json().await?;
            if !status.is_success() {
                eprintln!(
                    "Request failed ({}): {}",
                    status,
                    v.get("error").and_then(|e| e.as_str()).unwrap_or("unknown error")
                );
                std::process::exit(1);
            }
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
        Commands::Styles => {
            let v: Value = client
                .get(format!("{}/api/styles", server))
                .send()
                .await?
                .json()
                .await?;
            if let Some(arr) = v.get("styles").and_then(|s| s.as_array()) {
                for s in arr.iter().filter_map(|s| s.as_str()) {
                    println!("{}", s);
                }
            }
            if let Some(default) = v.get("default").and_then(|d| d.as_str()) {
                println!("default: {}", default);
            }
        }
    }
    Ok(())
}
