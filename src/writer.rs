use crate::config::Config;
use crate::error::{ConfigurationError, WriteError};
use crate::line_protocol_formatter::format_line_protocol;
use crate::metric::Metric;
use log::{debug, trace};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Instant;

pub const CONTENT_TYPE_LINE_PROTOCOL: &str = "text/plain; charset=utf-8";
pub const ACCEPT_JSON: &str = "application/json";

/// A successful write: the server answered `204 No Content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResponse {
    pub status: u16,
    pub body: String,
}

/// Formats `metric` and writes it in a single request.
///
/// Bucket and org must both be set; bucket is checked first. Nothing is sent
/// when either is missing.
#[tracing::instrument(skip_all, level = tracing::Level::TRACE)]
pub async fn write_lp(
    client: &Client,
    config: &Config,
    metric: &Metric,
) -> Result<WriteResponse, WriteError> {
    if config.bucket.is_empty() {
        return Err(ConfigurationError::MissingBucket.into());
    }
    if config.org.is_empty() {
        return Err(ConfigurationError::MissingOrg.into());
    }

    let line = format_line_protocol(metric);
    write_lp_string(client, config, &line).await
}

/// Writes an already formatted line protocol string in a single request.
///
/// Bucket and org are not checked here; the URI embeds whatever the config holds.
/// The client owns timeouts and connection reuse.
#[tracing::instrument(skip_all, level = tracing::Level::TRACE)]
pub async fn write_lp_string(
    client: &Client,
    config: &Config,
    line: &str,
) -> Result<WriteResponse, WriteError> {
    let function_start = Instant::now();
    let uri = config.write_uri();

    let mut request_builder = client
        .post(uri.as_str())
        .header(AUTHORIZATION, format!("Token {}", config.token))
        .header(CONTENT_TYPE, CONTENT_TYPE_LINE_PROTOCOL)
        .header(ACCEPT, ACCEPT_JSON)
        .body(line.to_owned());

    if !config.user_agent.is_empty() {
        request_builder = request_builder.header(USER_AGENT, config.user_agent.as_str());
    }

    let request = match request_builder.build() {
        Ok(request) => request,
        Err(source) => return Err(WriteError::RequestConstruction { uri, source }),
    };

    debug!("Writing line protocol to {}", uri);
    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(source) => return Err(WriteError::Transport { uri, source }),
    };

    let status = response.status();
    debug!("Write to {} returned status {}", uri, status);

    let result = if status == StatusCode::NO_CONTENT {
        Ok(WriteResponse {
            status: status.as_u16(),
            body: String::new(),
        })
    } else {
        // A body that cannot be read is reported as empty; the status is what matters.
        let body = response.text().await.unwrap_or_default();
        Err(WriteError::UnexpectedStatus {
            status: status.as_u16(),
            body,
            uri,
        })
    };

    trace!("write_lp_string duration: {:?}", function_start.elapsed());
    result
}
