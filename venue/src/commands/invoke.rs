use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use venue_api_function::FunctionEvent;
use venue_config::Config;

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

/// Handle a single event read from stdin and write the response to stdout.
pub async fn invoke(config: Config) -> anyhow::Result<()> {
    let mut input = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut input)
        .await
        .context("Failed to read event from stdin")?;
    let event = serde_json::from_slice::<FunctionEvent>(&input).context("Failed to parse event")?;

    let email = email::connect(&config.smtp)?;
    let router = Provider::new(ConfigProvider::new(&config), email)
        .rest_server()
        .router();

    let response = venue_api_function::invoke(router, event).await?;

    let mut output = serde_json::to_vec(&response)?;
    output.push(b'\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}
