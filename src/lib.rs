//! Formats metrics as InfluxDB line protocol and writes them to a v2 write
//! endpoint over HTTP.
//!
//! ```no_run
//! use influx2lp::{write_lp, Config, Metric};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut config = Config::new();
//! config.host = "http://localhost:8086".to_string();
//! config.org = "my-org".to_string();
//! config.bucket = "my-bucket".to_string();
//! config.token = "my-token".to_string();
//!
//! let client = config.http_client()?;
//! let metric = Metric::new("cpu".to_string(), Vec::new(), Vec::new(), 1577836800000000000)
//!     .add_tag("host", "server01")
//!     .add_field("usage", 0.64);
//!
//! let response = write_lp(&client, &config, &metric).await?;
//! assert_eq!(response.status, 204);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod line_protocol_formatter;
pub mod metric;
pub mod writer;

pub use config::Config;
pub use error::{ConfigurationError, WriteError};
pub use line_protocol_formatter::format_line_protocol;
pub use metric::{FieldValue, Metric};
pub use writer::{write_lp, write_lp_string, WriteResponse};
