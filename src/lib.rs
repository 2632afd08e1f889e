//!# Legacy Synology Download Station API Client
//!
//! A Rust client library for the legacy Synology Download Station task API
//! (`/webapi/DownloadStation/task.cgi`). Manage remote download tasks with a
//! strongly-typed interface over an externally authenticated session.
//!
//! ## Features
//!
//! - List download tasks with offset/limit paging
//! - Get detailed task information (status, transfer stats, files, trackers, peers)
//! - Create downloads from URLs/magnet links or from task files on the NAS
//! - Control tasks (pause, resume, delete)
//! - Typed API and task-level error codes
//! - Human-readable file sizes, progress calculation and ETA
//!
//! Authentication is deliberately out of scope: obtain a session ID through a
//! separate `SYNO.API.Auth` login and hand it to
//! [`station::DownloadStation::connect`].
//!
//! ## Usage example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use std::env;
//! use synology_download_station::station::DownloadStation;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let station = DownloadStation::builder()
//!         .host(env::var("SYNO_HOST")?)
//!         .port(5000)
//!         .build()?;
//!
//!     // Session ID obtained from a separate SYNO.API.Auth login
//!     let tasks_api = station.connect(env::var("SYNO_SID")?);
//!
//!     let tasks = tasks_api.list_all().await?;
//!     for task in tasks.tasks {
//!         println!(
//!             "task: {}, title: {}, status: {:?}",
//!             task.id, task.title, task.status
//!         );
//!     }
//!
//!     tasks_api.pause(&[String::from("dbid_001")]).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod entities;
pub mod station;
pub mod utils;
