use shelfscout::app::App;
use shelfscout::config::Config;
use shelfscout::domain::DEFAULT_CREDENTIALS;
use shelfscout::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    logging::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Using catalog at {}", config.catalog_base_url);

    let mut app = match App::from_config(&config, DEFAULT_CREDENTIALS) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    if let Err(e) = app.run(stdin, &mut stdout).await {
        tracing::error!("Terminal session ended with error: {}", e);
        std::process::exit(1);
    }
}
