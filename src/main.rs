use clap::Parser;
use vecstore::cli::commands::{parse_batch, parse_vector, Cli, Commands};
use vecstore::domain::values::distance::Distance;
use vecstore::VecStore;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let vs = match VecStore::new() {
        Ok(vs) => vs,
        Err(e) => {
            eprintln!("Error initializing vector store: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(vs, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vecstore=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_command(vs: VecStore, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Create {
            name,
            size,
            distance,
        } => {
            let distance: Distance = distance.parse()?;
            let created = vs.create_collection(&name, size, distance).await?;
            tracing::info!(collection = %name, size, %distance, created, "Collection created");
            println!("{}", serde_json::json!({ "result": created }));
        }
        Commands::Add { collection, json } => {
            let batch = parse_batch(&json)?;
            let ack = vs.add_vectors(&collection, &batch).await?;
            println!("{}", serde_json::to_string_pretty(&ack)?);
        }
        Commands::Search {
            collection,
            vector,
            limit,
        } => {
            let query = parse_vector(&vector)?;
            let payloads = vs.search_vectors(&collection, &query, Some(limit)).await?;
            println!("{}", serde_json::to_string_pretty(&payloads)?);
        }
    }
    Ok(())
}
