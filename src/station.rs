use crate::client::DsError::Configuration;
use crate::client::{TASK_CGI_PATH, TaskClient};
use anyhow::Result;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Entry point for a Download Station server
///
/// Holds the endpoint URL built from a host and port plus a configured HTTP
/// client. Authentication is out-of-band: obtain a session ID from a
/// `SYNO.API.Auth` login elsewhere and pass it to [`Self::connect`] to get a
/// [`TaskClient`] handle. Dropping the handle performs no remote logout.
pub struct DownloadStation {
    url: String,
    http: Client,
}

impl DownloadStation {
    /// Creates a new `DownloadStation` for the given host and port
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or is not a bare hostname or
    /// IP address.
    pub fn new(host: String, port: u16, timeout_ms: u64) -> Result<Self> {
        if host.is_empty() {
            return Err(Configuration("Host cannot be empty".into()).into());
        }

        // The scheme and path are fixed; callers supply only the authority.
        if host.contains("://") || host.contains('/') {
            return Err(Configuration(format!(
                "Host must be a bare hostname or IP address, got: {host}"
            ))
            .into());
        }

        debug!("host={host}, port={port}");

        let url = format!("http://{host}:{port}{TASK_CGI_PATH}");
        let http = Self::create_client(timeout_ms);

        Ok(Self { url, http })
    }

    /// Creates a configured HTTP client
    fn create_client(timeout: u64) -> Client {
        Client::builder()
            .timeout(Duration::from_millis(timeout))
            .build()
            .unwrap_or_default()
    }

    /// Creates a new `DownloadStation` with a builder pattern
    #[must_use]
    pub fn builder() -> DownloadStationBuilder {
        DownloadStationBuilder::default()
    }

    /// Creates a task client bound to the given session ID
    ///
    /// The sid is attached verbatim to every request the handle issues; it is
    /// not validated locally, so an expired or empty sid simply produces
    /// requests the server rejects.
    #[must_use]
    pub fn connect(&self, sid: impl Into<String>) -> TaskClient {
        let sid = sid.into();
        debug!("sid={sid}");

        TaskClient::new(self.url.clone(), self.http.clone(), sid)
    }
}

/// Builder for [`DownloadStation`]
#[derive(Default)]
pub struct DownloadStationBuilder {
    host: Option<String>,
    port: Option<u16>,
    timeout: Option<u64>,
}

impl DownloadStationBuilder {
    /// Sets the hostname or IP address
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port the Download Station web API listens on
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the request timeout in milliseconds
    #[must_use]
    pub fn timeout(mut self, timeout_millis: u64) -> Self {
        self.timeout = Some(timeout_millis);
        self
    }

    /// Builds the [`DownloadStation`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields (host, port) are not provided
    /// - Host is not a bare hostname or IP address
    pub fn build(self) -> Result<DownloadStation> {
        let host = self
            .host
            .ok_or_else(|| Configuration("Host is required".into()))?;
        let port = self
            .port
            .ok_or_else(|| Configuration("Port is required".into()))?;

        let timeout = self.timeout.unwrap_or(3000);

        DownloadStation::new(host, port, timeout)
    }
}
