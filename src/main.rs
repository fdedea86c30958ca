use anyhow::{anyhow, Error};
use influx2lp::config::{BUCKET_ENV_VAR, HOST_ENV_VAR, ORG_ENV_VAR};
use influx2lp::{write_lp_string, Config};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn validate_config(config: &Config) -> Result<(), Error> {
    // Validate the settings every write needs

    if config.host.is_empty() {
        return Err(anyhow!("{} environment variable is not defined", HOST_ENV_VAR));
    }
    if config.org.is_empty() {
        return Err(anyhow!("{} environment variable is not defined", ORG_ENV_VAR));
    }
    if config.bucket.is_empty() {
        return Err(anyhow!("{} environment variable is not defined", BUCKET_ENV_VAR));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    validate_config(&config)?;
    let client = config.http_client()?;

    // One request per line read from stdin
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut written: usize = 0;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match write_lp_string(&client, &config, line).await {
            Ok(response) => {
                written += 1;
                tracing::debug!(status = response.status, "wrote line {}", written);
            }
            Err(error) => {
                tracing::error!(status = error.status(), body = error.body(), "{}", error);
                return Err(error.into());
            }
        }
    }

    tracing::info!("{} lines written to {}", written, config.write_uri());
    Ok(())
}
