use facility_directory::{router, AppState, ServiceConfig};
use log::info;

fn usage() -> &'static str {
    "Usage: facility-directory [--config <path>] [--print-config]"
}

fn load_config(args: &[String]) -> Result<(ServiceConfig, bool), Box<dyn std::error::Error>> {
    let mut config = ServiceConfig::default();
    let mut print_config = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| format!("--config needs a path\n{}", usage()))?;
                config = ServiceConfig::from_file(path)?;
            }
            "--print-config" => print_config = true,
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument '{}'\n{}", other, usage()).into()),
        }
    }

    config.apply_env_overrides()?;
    Ok((config, print_config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let (config, print_config) = load_config(&args)?;

    if print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let state = AppState::from_config(&config);
    info!(
        "Seeded {} rooms ({} available); default anchor building point ({:.1}, {:.1})",
        state.rooms.len(),
        state.rooms.available_count(),
        config.default_building.x,
        config.default_building.z
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
