use std::env;
use std::process;
use tracing::error;

mod app;
mod config;

#[tokio::main]
async fn main() {
    // Install global log collector.
    tracing_subscriber::fmt::init();

    // Setup environment variables
    let config_path = env::var("CONFIG_PATH").expect("env variable CONFIG_PATH should be set");

    // Run the configured report against the live services.
    app::Builder::new(config_path.into())
        .build()
        .unwrap_or_else(|err| {
            error!("{:?}", err);
            process::exit(1);
        })
        .run()
        .await
        .unwrap_or_else(|err| {
            error!("{:?}", err);
            process::exit(1);
        });
}
