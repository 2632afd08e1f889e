use crate::client::DsError::*;
use crate::entities::{ApiResponse, TaskActionResult, TaskInfo, Tasks};
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use thiserror::Error;

pub(crate) const TASK_CGI_PATH: &str = "/webapi/DownloadStation/task.cgi";

const API_NAME: &str = "SYNO.DownloadStation.Task";
const API_VERSION: &str = "1";

/// Field groups requested with every `list`/`getinfo` call
const ADDITIONAL_GROUPS: &str = "detail,transfer,file,tracker,peer";

/// Custom error types for the [`TaskClient`]
#[derive(Error, Debug)]
pub enum DsError {
    #[error("HTTP request failed with status {status} ({reason})")]
    Http { status: u16, reason: String },

    #[error("Download Station API error: code={code}, message={message}")]
    Api { code: i32, message: String },

    #[error("Network request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    InvalidResponse(String),

    #[error("Invalid input parameter: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Client for the legacy Download Station task API
///
/// Obtained from [`crate::station::DownloadStation::connect`] with a session
/// ID acquired out-of-band (`SYNO.API.Auth` login). Every method performs a
/// single GET round-trip against `task.cgi`.
pub struct TaskClient {
    url: String,
    sid: String,
    http: Client,
}

impl TaskClient {
    pub(crate) fn new(url: String, http: Client, sid: String) -> Self {
        Self { url, sid, http }
    }

    /// Session ID attached to every request
    #[must_use]
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// Lists download tasks, starting at `offset`
    ///
    /// A `limit` of -1 means no limit. Task records carry the
    /// detail/transfer/file/tracker/peer field groups when the server
    /// provides them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Server responds with a non-200 status
    /// - API reports an error code
    /// - Response cannot be parsed
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Tasks> {
        debug!("offset={offset}, limit={limit}");

        let offset = offset.to_string();
        let limit = limit.to_string();
        let params = [
            ("offset", offset.as_str()),
            ("limit", limit.as_str()),
            ("additional", ADDITIONAL_GROUPS),
        ];

        let response = self
            .api_get::<Tasks>("list", &params)
            .await
            .context("Failed to list tasks")?;

        if response.success {
            match response.data {
                Some(tasks) => Ok(tasks),
                None => Err(InvalidResponse("No data received".into()).into()),
            }
        } else if let Some(error) = response.error {
            Err(api_error(error.code).into())
        } else {
            Err(InvalidResponse("Failed to list tasks, unknown error".into()).into())
        }
    }

    /// Lists all download tasks
    ///
    /// # Errors
    ///
    /// See [`Self::list`]
    pub async fn list_all(&self) -> Result<Tasks> {
        self.list(0, -1).await
    }

    /// Gets detailed information about specific task(s)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - IDs slice is empty
    /// - Network request fails
    /// - API reports an error code
    /// - Response cannot be parsed
    pub async fn info(&self, ids: &[String]) -> Result<TaskInfo> {
        if ids.is_empty() {
            return Err(InvalidInput("Task IDs cannot be empty".into()).into());
        }

        let id = ids.join(",");
        debug!("tasks=[{id}]");

        let params = [("id", id.as_str()), ("additional", ADDITIONAL_GROUPS)];

        let response = self
            .api_get::<TaskInfo>("getinfo", &params)
            .await
            .context("Failed to get task details")?;

        if response.success {
            match response.data {
                Some(task_info) => Ok(task_info),
                None => Err(InvalidResponse("No data received".into()).into()),
            }
        } else if let Some(error) = response.error {
            Err(api_error(error.code).into())
        } else {
            Err(InvalidResponse("Failed to get task details, unknown error".into()).into())
        }
    }

    /// Creates a new download task from a URI (HTTP/HTTPS/FTP URL or magnet link)
    ///
    /// `destination` is a shared-folder path on the NAS; `None` uses the
    /// server's default destination. `unzip_password` applies when the
    /// download is an encrypted archive.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - URI is empty or carries an unsupported scheme
    /// - Network request fails
    /// - API reports an error code
    pub async fn create(
        &self,
        uri: &str,
        destination: Option<&str>,
        unzip_password: Option<&str>,
    ) -> Result<()> {
        if uri.is_empty() {
            return Err(InvalidInput("URI cannot be empty".into()).into());
        }

        let supported = ["http://", "https://", "ftp://", "magnet:"];
        if !supported.iter().any(|scheme| uri.starts_with(scheme)) {
            return Err(InvalidInput(format!(
                "URI must start with http://, https://, ftp://, or magnet:, got: {uri}"
            ))
            .into());
        }

        debug!("uri={uri}, destination={destination:?}");

        self.submit_create(("uri", uri), destination, unzip_password)
            .await
    }

    /// Creates a new download task from a task file already on the NAS
    ///
    /// `file` is the path of a torrent/NZB file within a shared folder,
    /// as accepted by the legacy API's `file` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File path is empty
    /// - Network request fails
    /// - API reports an error code
    pub async fn create_from_file(
        &self,
        file: &str,
        destination: Option<&str>,
        unzip_password: Option<&str>,
    ) -> Result<()> {
        if file.is_empty() {
            return Err(InvalidInput("File path cannot be empty".into()).into());
        }

        debug!("file={file}, destination={destination:?}");

        self.submit_create(("file", file), destination, unzip_password)
            .await
    }

    async fn submit_create(
        &self,
        source: (&str, &str),
        destination: Option<&str>,
        unzip_password: Option<&str>,
    ) -> Result<()> {
        let mut params = vec![source];
        if let Some(destination) = destination {
            params.push(("destination", destination));
        }
        if let Some(unzip_password) = unzip_password {
            params.push(("unzip_password", unzip_password));
        }

        let response = self
            .api_get::<()>("create", &params)
            .await
            .context("Failed to create download task")?;

        if response.success {
            debug!("Successfully created download task");
            Ok(())
        } else if let Some(error) = response.error {
            Err(api_error(error.code).into())
        } else {
            Err(InvalidResponse("Failed to create task, unknown error".into()).into())
        }
    }

    /// Deletes tasks
    ///
    /// With `force_complete` set, finished files are moved to the destination
    /// before the task is removed. Returns the per-task results the server
    /// reports; an entry with [`crate::entities::TaskErrorCode::None`] means
    /// that id was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - IDs slice is empty
    /// - Network request fails
    /// - API reports an error code
    /// - Response cannot be parsed
    pub async fn delete(
        &self,
        ids: &[String],
        force_complete: bool,
    ) -> Result<Vec<TaskActionResult>> {
        if ids.is_empty() {
            return Err(InvalidInput("Task IDs cannot be empty".into()).into());
        }

        let id = ids.join(",");
        debug!("tasks=[{id}], force_complete={force_complete}");

        let params = [
            ("id", id.as_str()),
            (
                "force_complete",
                if force_complete { "true" } else { "false" },
            ),
        ];

        self.task_action("delete", &params).await
    }

    /// Pauses tasks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - IDs slice is empty
    /// - Network request fails
    /// - API reports an error code
    /// - Response cannot be parsed
    pub async fn pause(&self, ids: &[String]) -> Result<Vec<TaskActionResult>> {
        if ids.is_empty() {
            return Err(InvalidInput("Task IDs cannot be empty".into()).into());
        }

        let id = ids.join(",");
        debug!("tasks=[{id}]");

        let params = [("id", id.as_str())];

        self.task_action("pause", &params).await
    }

    /// Resumes paused tasks, optionally redirecting them to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - IDs slice is empty
    /// - Network request fails
    /// - API reports an error code
    /// - Response cannot be parsed
    pub async fn resume(
        &self,
        ids: &[String],
        destination: Option<&str>,
    ) -> Result<Vec<TaskActionResult>> {
        if ids.is_empty() {
            return Err(InvalidInput("Task IDs cannot be empty".into()).into());
        }

        let id = ids.join(",");
        debug!("tasks=[{id}], destination={destination:?}");

        let mut params = vec![("id", id.as_str())];
        if let Some(destination) = destination {
            params.push(("destination", destination));
        }

        self.task_action("resume", &params).await
    }

    /// Issues a task operation returning per-task results
    async fn task_action(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<TaskActionResult>> {
        let response = self
            .api_get::<Vec<TaskActionResult>>(method, params)
            .await
            .with_context(|| format!("Failed to {method} tasks"))?;

        if response.success {
            Ok(response.data.unwrap_or_default())
        } else if let Some(error) = response.error {
            Err(api_error(error.code).into())
        } else {
            Err(InvalidResponse(format!("Failed to {method} tasks, unknown error")).into())
        }
    }

    /// Makes a GET API request with query parameters
    async fn api_get<D>(&self, method: &str, params: &[(&str, &str)]) -> Result<ApiResponse<D>>
    where
        D: for<'de> serde::Deserialize<'de>,
    {
        let mut query: Vec<(&str, &str)> = vec![
            ("api", API_NAME),
            ("version", API_VERSION),
            ("method", method),
        ];
        query.extend_from_slice(params);
        // Always attached; whether the sid is valid is the server's call.
        query.push(("_sid", &self.sid));

        debug!(
            "Making API request to: {} with method={} and {} parameters",
            self.url,
            method,
            query.len()
        );

        let response = self
            .http
            .get(&self.url)
            .query(&query)
            .send()
            .await
            .context("Failed to make API request")?;

        let status = response.status();
        debug!("API request status: {status}");

        if !status.is_success() {
            return Err(Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        response
            .json::<ApiResponse<D>>()
            .await
            .context("Failed to parse API response")
    }
}

fn api_error(code: i32) -> DsError {
    Api {
        code,
        message: describe_api_error(code).to_string(),
    }
}

/// Documented meanings of the legacy API's error codes
fn describe_api_error(code: i32) -> &'static str {
    match code {
        100 => "Unknown error",
        101 => "Invalid parameter",
        102 => "The requested API does not exist",
        103 => "The requested method does not exist",
        104 => "The requested version does not support the functionality",
        105 => "The logged in session does not have permission",
        106 => "Session timeout",
        107 => "Session interrupted by duplicate login",
        400 => "File upload failed",
        401 => "Max number of tasks reached",
        402 => "Destination denied",
        403 => "Destination does not exist",
        404 => "Invalid task id",
        405 => "Invalid task action",
        406 => "No default destination",
        407 => "Set destination failed",
        408 => "File does not exist",
        _ => "Unrecognized error code",
    }
}
