use clap::Parser;

use tube_digest::cli::{Cli, Commands};
use tube_digest::{client, server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => server::run_server(host, port).await,
        Commands::Summarize {
            video_url,
            server_url,
        } => {
            if let Err(e) = client::run_client(&server_url, &video_url).await {
                log::debug!("Client run failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
