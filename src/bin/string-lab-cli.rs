use clap::{Parser, Subcommand};

use string_lab::client::{ClientError, StringLabClient};
use string_lab::http::api::{AnalyzeRequest, GenerateRequest};

#[derive(Parser)]
#[command(name = "string-lab-cli")]
#[command(about = "Command-line client for the string-lab API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is up
    Test,
    /// Generate a random string
    Generate {
        #[arg(short, default_value_t = 100)]
        n: i64,
        #[arg(short, long, default_value = "mixed")]
        pattern: String,
    },
    /// Convert text and report timing
    Analyze {
        #[arg(short, long)]
        text: String,
        #[arg(short, long, default_value = "iterative")]
        algorithm: String,
        #[arg(short, long, default_value = "mixed")]
        pattern: String,
        #[arg(short, long)]
        direction: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = StringLabClient::new(&cli.url);

    let result = match cli.command {
        Commands::Test => client.test().await.map(serde_json::to_value),
        Commands::Generate { n, pattern } => client
            .generate(&GenerateRequest {
                n: Some(n),
                pattern: Some(pattern),
            })
            .await
            .map(serde_json::to_value),
        Commands::Analyze {
            text,
            algorithm,
            pattern,
            direction,
        } => client
            .analyze(&AnalyzeRequest {
                text: Some(text),
                algorithm: Some(algorithm),
                pattern: Some(pattern),
                direction,
            })
            .await
            .map(serde_json::to_value),
    };

    match result {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value?)?),
        Err(ClientError::Api { status, message }) => {
            eprintln!("Error: API returned status {}", status);
            eprintln!("Response: {}", message);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
