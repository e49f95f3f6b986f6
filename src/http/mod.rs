//! HTTP download client with status classification and progress display.

mod client;
mod error;
mod progress;

pub use client::HttpClient;
pub use error::{DownloadError, classify_error};
pub use progress::{PROGRESS_ENV, ProgressMode};
