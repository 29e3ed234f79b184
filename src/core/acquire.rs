//! Download-then-extract pipeline for toolchain packages.

use crate::core::download::{Downloader, ProgressCallback};
use crate::core::extract;
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to do with a downloaded file, decided from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionPlan {
    /// Gzip-compressed tarball, unpacked relative to the current directory.
    TarGz,
    /// Zip archive, unpacked under its own stem.
    Zip { destination: PathBuf },
    /// Not an archive; the file is left as downloaded.
    None,
}

/// Picks the extraction path for a filename.
///
/// A `.tar.gz` match anywhere in the name wins; the zip check requires the
/// suffix. Names matching neither are left alone.
pub fn plan_for(filename: &str) -> ExtractionPlan {
    if filename.contains(".tar.gz") {
        ExtractionPlan::TarGz
    } else if filename.ends_with(".zip") {
        ExtractionPlan::Zip {
            destination: PathBuf::from(zip_destination(filename)),
        }
    } else {
        ExtractionPlan::None
    }
}

/// Directory a zip unpacks into: the archive name with its `.zip` suffix
/// stripped, or the name itself when the suffix is missing.
pub fn zip_destination(filename: &str) -> &str {
    filename.strip_suffix(".zip").unwrap_or(filename)
}

/// Downloads `url` to `filename` in the current directory and unpacks it
/// according to [`plan_for`]. A failed download leaves any partial file in
/// place (unless the downloader was built with cleanup) and never extracts.
pub fn acquire(downloader: &Downloader, url: &str, filename: &str) -> Result<()> {
    let dest = Path::new(filename);

    downloader.download_with_progress(url, dest, progress_printer())?;
    println!();
    println!("Download completed successfully.");

    match plan_for(filename) {
        ExtractionPlan::TarGz => extract::extract_tar_gz(dest, Path::new(".")),
        ExtractionPlan::Zip { destination } => extract::extract_zip(dest, &destination),
        ExtractionPlan::None => Ok(()),
    }
}

fn progress_printer() -> ProgressCallback {
    Box::new(|downloaded, total| {
        if total > 0 {
            print!(
                "\rDownloading: {:.0}%",
                downloaded as f64 / total as f64 * 100.0
            );
            let _ = std::io::stdout().flush();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::io::Read as _;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn failed_download_skips_extraction_and_leaves_the_file() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        });

        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("payload.zip");
        let filename = filename.to_str().unwrap();

        let err = acquire(&Downloader::new(), &format!("http://{addr}/payload.zip"), filename)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        // The partial file stays, and nothing was unpacked next to it.
        assert!(dir.path().join("payload.zip").exists());
        assert!(!dir.path().join("payload").exists());
    }

    #[test]
    fn tarballs_extract_relative_to_the_current_directory() {
        assert_eq!(plan_for("archive.tar.gz"), ExtractionPlan::TarGz);
        assert_eq!(plan_for("pawnc-3.10.10-linux.tar.gz"), ExtractionPlan::TarGz);
    }

    #[test]
    fn tar_gz_matches_anywhere_in_the_name() {
        assert_eq!(plan_for("backup.tar.gz.old"), ExtractionPlan::TarGz);
    }

    #[test]
    fn zips_extract_under_their_stem() {
        assert_eq!(
            plan_for("payload.zip"),
            ExtractionPlan::Zip {
                destination: PathBuf::from("payload")
            }
        );
        assert_eq!(
            plan_for("samp03DL_svr_R1_win32.zip"),
            ExtractionPlan::Zip {
                destination: PathBuf::from("samp03DL_svr_R1_win32")
            }
        );
    }

    #[test]
    fn other_files_are_left_alone() {
        assert_eq!(plan_for("README.md"), ExtractionPlan::None);
        assert_eq!(plan_for("server.tgz"), ExtractionPlan::None);
    }

    #[test]
    fn zip_destination_falls_back_to_the_name_verbatim() {
        assert_eq!(zip_destination("payload.zip"), "payload");
        assert_eq!(zip_destination("payload"), "payload");
    }
}
