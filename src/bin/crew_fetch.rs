use crew_form::client::config::ClientConfig;
use crew_form::client::services::crew_service::CrewService;
use crew_form::common::models::pretty;
use crew_form::utils::logger;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

// Headless variant of the form: one address in, crew data (or an error line) out.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ClientConfig::from_env();
    logger::init(&cfg.log_level);
    let svc = CrewService::new(&cfg.endpoint)?;

    let address = match std::env::args().nth(1) {
        Some(a) => a,
        None => {
            let mut line = String::new();
            BufReader::new(stdin()).read_line(&mut line).await?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    match svc.fetch_crew(&address).await {
        Ok(data) => {
            println!("{}", pretty(&data));
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
