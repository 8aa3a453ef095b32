use clap::{Parser, Subcommand};
use mockvs::{Adapter, ClientOptions, Result};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(long)]
    host: Option<String>,

    #[clap(long)]
    port: Option<u16>,

    #[clap(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Set { key: String, value: String },

    Get { key: String },

    Del { key: String },

    Ping,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let adapter = Adapter::new();
    let options = ClientOptions {
        host: cli.host,
        port: cli.port,
    };
    let mut client = adapter.create_client(Some(options));

    match cli.commands {
        Commands::Set { key, value } => {
            client.set(&key, &value)?;
            println!("OK");
            Ok(())
        }
        Commands::Get { key } => match client.get(&key) {
            Ok(Some(result)) => {
                println!("{}", result);
                Ok(())
            }
            Ok(None) => {
                println!("{}", "nil");
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Del { key } => {
            println!("{}", client.del(&key)?);
            Ok(())
        }
        Commands::Ping => {
            println!("{}", client.ping()?);
            Ok(())
        }
    }
}
