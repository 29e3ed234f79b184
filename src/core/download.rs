//! Blocking HTTP downloader that streams response bodies to disk.

use crate::error::{KomodoError, Result};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

/// Timeout applied to the whole transfer.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Copy buffer for streaming the response body to disk (64 KiB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Observes `(bytes downloaded so far, total bytes when known, else 0)`.
/// Reporting is advisory only; it never changes the transfer.
pub type ProgressCallback = Box<dyn Fn(u64, u64)>;

pub struct Downloader {
    client: Client,
    cleanup_partial: bool,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// `cleanup_partial` removes the destination file when a transfer fails
    /// partway; otherwise the partial file stays where the download stopped.
    pub fn with_options(cleanup_partial: bool) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            cleanup_partial,
        }
    }

    /// Downloads `url` into `dest`, returning the number of bytes written.
    pub fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.run(url, dest, None)
    }

    pub fn download_with_progress(
        &self,
        url: &str,
        dest: &Path,
        on_progress: ProgressCallback,
    ) -> Result<u64> {
        self.run(url, dest, Some(on_progress))
    }

    fn run(&self, url: &str, dest: &Path, progress: Option<ProgressCallback>) -> Result<u64> {
        let file = File::create(dest).map_err(|e| KomodoError::CreateFile {
            path: dest.to_path_buf(),
            source: e,
        })?;

        let result = self.stream_body(url, dest, file, progress);
        if result.is_err() && self.cleanup_partial {
            if std::fs::remove_file(dest).is_err() {
                log::warn!("could not remove partial file {}", dest.display());
            }
        }
        result
    }

    fn stream_body(
        &self,
        url: &str,
        dest: &Path,
        file: File,
        progress: Option<ProgressCallback>,
    ) -> Result<u64> {
        // Redirects are followed by the client's default policy.
        let mut response =
            self.client
                .get(url)
                .send()
                .map_err(|e| KomodoError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(KomodoError::Transport {
                url: url.to_string(),
                reason: format!("GET request failed with status {status}"),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        let mut writer = BufWriter::new(file);
        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut downloaded: u64 = 0;

        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| KomodoError::Transport {
                    url: url.to_string(),
                    reason: format!("read error: {e}"),
                })?;

            if bytes_read == 0 {
                break;
            }

            writer
                .write_all(&buffer[..bytes_read])
                .map_err(|e| KomodoError::WriteFile {
                    path: dest.to_path_buf(),
                    source: e,
                })?;

            downloaded += bytes_read as u64;

            if let Some(ref cb) = progress {
                cb(downloaded, total_size);
            }
        }

        writer.flush().map_err(|e| KomodoError::WriteFile {
            path: dest.to_path_buf(),
            source: e,
        })?;

        Ok(downloaded)
    }
}
