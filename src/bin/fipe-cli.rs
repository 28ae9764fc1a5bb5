use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "fipe-cli")]
#[command(about = "Query CLI for the FIPE proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3456")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List reference months, or look one up by code
    Months {
        #[arg(short, long)]
        mes: Option<String>,
    },
    /// List vehicle types for a reference month
    Types { mes: String },
    /// List brands, or look one up by code
    Brands {
        mes: String,
        tipo: String,
        #[arg(short = 'c', long)]
        marca: Option<String>,
    },
    /// List models for a brand
    Models {
        mes: String,
        tipo: String,
        marca: String,
    },
    /// List model years for a model
    Years {
        mes: String,
        tipo: String,
        marca: String,
        modelo: String,
    },
    /// Fetch the final price quote
    Quote {
        mes: String,
        tipo: String,
        marca: String,
        modelo: String,
        ano: String,
        anomodelo: String,
        combustivel: String,
    },
}

impl Commands {
    /// Build the simplified API path for this command.
    fn path(&self) -> String {
        match self {
            Commands::Months { mes: None } => "/api/mes".to_string(),
            Commands::Months { mes: Some(mes) } => format!("/api/mes={}", mes),
            Commands::Types { mes } => format!("/api/mes={}&tipo", mes),
            Commands::Brands {
                mes,
                tipo,
                marca: None,
            } => format!("/api/mes={}&tipo={}/marca", mes, tipo),
            Commands::Brands {
                mes,
                tipo,
                marca: Some(marca),
            } => format!("/api/mes={}&tipo={}/marca={}", mes, tipo, marca),
            Commands::Models { mes, tipo, marca } => {
                format!("/api/mes={}&tipo={}/marca={}/modelo", mes, tipo, marca)
            }
            Commands::Years {
                mes,
                tipo,
                marca,
                modelo,
            } => format!(
                "/api/mes={}&tipo={}/marca={}/modelo={}/ano",
                mes, tipo, marca, modelo
            ),
            Commands::Quote {
                mes,
                tipo,
                marca,
                modelo,
                ano,
                anomodelo,
                combustivel,
            } => format!(
                "/api/mes={}&tipo={}/marca={}/modelo={}/ano={}/anomodelo={}/combustivel={}",
                mes, tipo, marca, modelo, ano, anomodelo, combustivel
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}{}", cli.url, cli.command.path()))
        .send()
        .await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
