use std::io::{BufReader, stdin, stdout};

use innkeep::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FrontDeskConfig::from_env();
    config.install_tracing();
    eprintln!("using snapshot {}", config.snapshot_path.display());

    FrontDesk::from_config(config)
        .run(BufReader::new(stdin()), stdout())
        .await?;
    Ok(())
}
