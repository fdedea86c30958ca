use super::*;
use anyhow::Error;
use std::collections::HashMap;

#[test]
fn test_new_applies_defaults() {
    let config = Config::new();

    assert_eq!(config.path, "/api/v2/write");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert!(config.user_agent.starts_with("influx2lp-"));
    assert!(config.bucket.is_empty());
    assert!(config.org.is_empty());
    assert!(config.host.is_empty());
    assert!(config.token.is_empty());
    assert_eq!(Config::default(), config);
}

#[test]
fn test_default_user_agent_matches_hostname() {
    let expected = match hostname::get().map(|name| name.into_string()) {
        Ok(Ok(host)) if !host.is_empty() => format!("influx2lp-{}", host),
        _ => String::from("influx2lp-unknown-host"),
    };

    assert_eq!(default_user_agent(), expected);
}

#[test]
fn test_write_uri_concatenates_without_escaping() {
    let mut config = Config::new();
    config.host = String::from("http://localhost:8086");
    config.org = String::from("my org");
    config.bucket = String::from("a&b");

    assert_eq!(
        config.write_uri(),
        "http://localhost:8086/api/v2/write?&org=my org&bucket=a&b"
    );
}

#[test]
fn test_from_env_lookup_overrides_defaults() -> Result<(), Error> {
    let env = HashMap::from([
        (HOST_ENV_VAR, "http://influx:8086"),
        (ORG_ENV_VAR, "testorg"),
        (BUCKET_ENV_VAR, "testbucket"),
        (TOKEN_ENV_VAR, "secret"),
        (USER_AGENT_ENV_VAR, "custom-agent"),
        (TIMEOUT_ENV_VAR, "10"),
    ]);

    let config = Config::from_env_lookup(|name| env.get(name).map(|value| value.to_string()))?;

    assert_eq!(config.host, "http://influx:8086");
    assert_eq!(config.path, DEFAULT_PATH);
    assert_eq!(config.org, "testorg");
    assert_eq!(config.bucket, "testbucket");
    assert_eq!(config.token, "secret");
    assert_eq!(config.user_agent, "custom-agent");
    assert_eq!(config.timeout, Duration::from_secs(10));
    Ok(())
}

#[test]
fn test_from_env_lookup_empty_environment() -> Result<(), Error> {
    let config = Config::from_env_lookup(|_| None)?;

    assert_eq!(config, Config::new());
    Ok(())
}

#[test]
fn test_from_env_lookup_rejects_bad_timeout() {
    let result = Config::from_env_lookup(|name| {
        (name == TIMEOUT_ENV_VAR).then(|| String::from("three"))
    });

    let error = result.expect_err("Expected timeout parse failure");
    assert!(error.to_string().contains(TIMEOUT_ENV_VAR));
}

#[test]
fn test_deserialize_partial_config() -> Result<(), Error> {
    let config: Config = serde_json::from_str(
        r#"{"host": "http://localhost:8086", "org": "testorg", "bucket": "testbucket", "timeout_seconds": 1}"#,
    )?;

    assert_eq!(config.host, "http://localhost:8086");
    assert_eq!(config.org, "testorg");
    assert_eq!(config.bucket, "testbucket");
    assert_eq!(config.path, DEFAULT_PATH);
    assert_eq!(config.timeout, Duration::from_secs(1));
    assert!(config.user_agent.starts_with(USER_AGENT_PREFIX));
    Ok(())
}

#[test]
fn test_http_client_builds() -> Result<(), Error> {
    Config::new().http_client()?;
    Ok(())
}
