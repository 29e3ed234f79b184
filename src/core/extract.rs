//! Archive extraction for the two release formats: gzip tarballs and zips.
//!
//! Both extractors tolerate broken entries: a failed entry is logged and
//! skipped so the rest of the archive still unpacks.

use crate::error::{KomodoError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

/// Unpacks a gzip-compressed tarball into `destination`.
pub fn extract_tar_gz(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| KomodoError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    let entries = archive.entries().map_err(|e| KomodoError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;

    for entry in entries {
        let mut entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // The stream is not usable past a bad header.
                log::warn!("unreadable entry in {}: {e}", archive_path.display());
                break;
            }
        };

        let entry_path = entry
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        if let Err(e) = entry.unpack_in(destination) {
            log::warn!("skipping {}: {e}", entry_path.display());
        }
    }

    Ok(())
}

/// Unpacks a zip archive, prefixing every entry path with `destination`.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| KomodoError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| KomodoError::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;

    std::fs::create_dir_all(destination)?;

    for index in 0..archive.len() {
        if let Err(e) = extract_zip_entry(&mut archive, index, destination) {
            log::warn!(
                "skipping entry {index} in {}: {e}",
                archive_path.display()
            );
        }
    }

    Ok(())
}

fn extract_zip_entry(
    archive: &mut ZipArchive<File>,
    index: usize,
    destination: &Path,
) -> io::Result<()> {
    let mut file = archive.by_index(index).map_err(io::Error::other)?;

    let outpath = match file.enclosed_name() {
        Some(path) => destination.join(path),
        // Entry path escapes the destination; refuse it.
        None => return Ok(()),
    };

    if file.name().ends_with('/') {
        std::fs::create_dir_all(&outpath)?;
    } else {
        if let Some(parent) = outpath.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut outfile = File::create(&outpath)?;
        io::copy(&mut file, &mut outfile)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = file.unix_mode() {
            std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write as _;

    fn write_tar_gz(path: &Path) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let data = b"main() {}\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "pawnc/gamemode.pwn", data.as_slice())
            .unwrap();

        builder.into_inner().unwrap().finish().unwrap();
    }

    fn write_zip(path: &Path) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        writer.add_directory("server/", options).unwrap();
        writer.start_file("server/server.cfg", options).unwrap();
        writer.write_all(b"port 7777\n").unwrap();

        writer.finish().unwrap();
    }

    #[test]
    fn tar_gz_unpacks_into_the_destination() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("pawnc.tar.gz");
        write_tar_gz(&archive);

        let dest = dir.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        extract_tar_gz(&archive, &dest).unwrap();

        let unpacked = dest.join("pawnc/gamemode.pwn");
        assert_eq!(std::fs::read(&unpacked).unwrap(), b"main() {}\n");
    }

    #[test]
    fn zip_unpacks_under_the_destination_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("server.zip");
        write_zip(&archive);

        let dest = dir.path().join("server");
        extract_zip(&archive, &dest).unwrap();

        let unpacked = dest.join("server/server.cfg");
        assert_eq!(std::fs::read(&unpacked).unwrap(), b"port 7777\n");
    }

    #[test]
    fn missing_tar_gz_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_tar_gz(&dir.path().join("absent.tar.gz"), dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Archive);
    }

    #[test]
    fn garbage_zip_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("broken.zip");
        std::fs::write(&archive, b"this is not a zip file").unwrap();

        let err = extract_zip(&archive, &dir.path().join("out")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Archive);
    }
}
