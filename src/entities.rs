use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Response envelope used by every Download Station API call
#[derive(Deserialize, Debug)]
pub struct ApiResponse<D> {
    pub success: bool,
    pub data: Option<D>,
    pub error: Option<ApiError>,
}

/// Error payload carried inside a 200 response when `success` is false
#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub code: i32,
}

/// Page of download tasks returned by `list`
#[derive(Deserialize, Debug)]
pub struct Tasks {
    pub offset: i64,
    pub tasks: Vec<Task>,
    pub total: i32,
}

/// Detailed information about specific tasks, returned by `getinfo`
#[derive(Deserialize, Debug)]
pub struct TaskInfo {
    pub tasks: Vec<Task>,
}

/// Individual download task
#[derive(Deserialize, Debug)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,
    pub username: String,
    /// Type of download task (e.g., "bt" for `BitTorrent`)
    #[serde(rename = "type")]
    pub task_type: String,
    /// Task title/name
    pub title: String,
    /// Total size in bytes
    pub size: u64,
    /// Current status of the task
    pub status: TaskStatus,
    /// Extra task details
    pub status_extra: Option<StatusExtra>,
    /// Requested additional field groups, when present
    pub additional: Option<AdditionalTaskInfo>,
}

/// Extra task details
#[derive(Deserialize, Debug)]
pub struct StatusExtra {
    pub error_detail: Option<String>,
    pub unzip_progress: Option<i32>,
}

/// Additional field groups attached to a task record
#[derive(Deserialize, Default, Debug)]
pub struct AdditionalTaskInfo {
    pub detail: Option<Detail>,
    pub file: Option<Vec<File>>,
    pub peer: Option<Vec<Peer>>,
    pub tracker: Option<Vec<Tracker>>,
    pub transfer: Option<Transfer>,
}

/// Detailed task information (the `detail` group)
#[derive(Deserialize, Debug)]
pub struct Detail {
    pub connected_leechers: u32,
    pub connected_peers: u32,
    pub connected_seeders: u32,
    #[serde(with = "ts_seconds")]
    pub create_time: DateTime<Utc>,
    pub destination: String,
    pub priority: String,
    pub total_peers: u32,
    pub unzip_password: Option<String>,
    pub uri: String,
    pub waiting_seconds: u32,
}

/// Information about a file within a download task
#[derive(Deserialize, Debug)]
pub struct File {
    pub filename: String,
    pub priority: String,
    pub size: u64,
    pub size_downloaded: u64,
}

/// Information about a connected peer
#[derive(Deserialize, Debug)]
pub struct Peer {
    pub address: String,
    pub agent: String,
    pub progress: f32,
    pub speed_download: u64,
    pub speed_upload: u64,
}

/// Information about a tracker
#[derive(Deserialize, Debug)]
pub struct Tracker {
    pub peers: i32,
    pub seeds: i32,
    pub status: String,
    pub update_timer: u32,
    pub url: String,
}

/// Transfer statistics (the `transfer` group)
#[derive(Deserialize, Default, Debug)]
pub struct Transfer {
    pub downloaded_pieces: u32,
    pub size_downloaded: u64,
    pub size_uploaded: u64,
    pub speed_download: u64,
    pub speed_upload: u64,
}

/// Download task status as reported by the v1 API
#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Waiting,
    Downloading,
    Paused,
    Finishing,
    Finished,
    HashChecking,
    Seeding,
    FilehostingWaiting,
    Extracting,
    Error,
    /// Status value not known to this client
    #[serde(other)]
    Unknown,
}

/// Per-task outcome of a `delete`, `pause`, or `resume` operation
#[derive(Deserialize, Debug)]
pub struct TaskActionResult {
    pub id: String,
    pub error: TaskErrorCode,
}

/// Task-specific error codes reported per id by task operations
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum TaskErrorCode {
    None = 0,
    FileUploadFailed = 400,
    MaxTasksReached = 401,
    DestinationDenied = 402,
    DestinationMissing = 403,
    InvalidTaskId = 404,
    InvalidTaskAction = 405,
    NoDefaultDestination = 406,
    SetDestinationFailed = 407,
    FileMissing = 408,
    #[serde(other)]
    Unknown = -1,
}
