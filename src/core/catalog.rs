//! Static tables of downloadable toolchain packages.

use crate::error::KomodoError;
use std::fmt;
use std::str::FromStr;

/// Target platform for a package download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Maps the single-character selection protocol (`L`/`l`, `W`/`w`).
    pub fn from_selection(selection: char) -> Option<Platform> {
        match selection {
            'L' | 'l' => Some(Platform::Linux),
            'W' | 'w' => Some(Platform::Windows),
            _ => None,
        }
    }

    /// Release archives are tarballs on Linux and zips on Windows.
    pub fn archive_ext(self) -> &'static str {
        match self {
            Platform::Linux => "tar.gz",
            Platform::Windows => "zip",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = KomodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            _ => Err(KomodoError::InvalidSelection {
                input: s.to_string(),
            }),
        }
    }
}

/// A downloadable asset: where to get it and what to call it on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub url: String,
    pub filename: String,
}

/// PawnCC compiler releases, newest first. Selection letters `A`-`J`
/// (or lowercase) map to indices.
pub const PAWNCC_VERSIONS: [&str; 10] = [
    "3.10.10", "3.10.9", "3.10.8", "3.10.7", "3.10.6",
    "3.10.5", "3.10.4", "3.10.3", "3.10.2", "3.10.1",
];

/// Index into [`PAWNCC_VERSIONS`] for a selection character.
pub fn pawncc_index(selection: char) -> Option<usize> {
    match selection {
        'A'..='J' => Some(selection as usize - 'A' as usize),
        'a'..='j' => Some(selection as usize - 'a' as usize),
        _ => None,
    }
}

/// Release asset for one PawnCC version on one platform.
pub fn pawncc_package(version: &str, platform: Platform) -> Package {
    let ext = platform.archive_ext();
    Package {
        url: format!(
            "https://github.com/pawn-lang/compiler/releases/download/v{version}/pawnc-{version}-{platform}.{ext}"
        ),
        filename: format!("pawnc-{version}-{platform}.{ext}"),
    }
}

struct PackageSource {
    url: &'static str,
    filename: &'static str,
}

/// One downloadable game-server release with per-platform assets, keyed by
/// its selection letter (uppercase; the lowercase pairing also matches).
pub struct ServerRelease {
    pub key: char,
    pub name: &'static str,
    linux: PackageSource,
    windows: PackageSource,
}

impl ServerRelease {
    pub fn package(&self, platform: Platform) -> Package {
        let source = match platform {
            Platform::Linux => &self.linux,
            Platform::Windows => &self.windows,
        };
        Package {
            url: source.url.to_string(),
            filename: source.filename.to_string(),
        }
    }
}

pub const SERVER_RELEASES: [ServerRelease; 8] = [
    ServerRelease {
        key: 'A',
        name: "SA-MP 0.3.DL R1",
        linux: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp03DLsvr_R1.tar.gz",
            filename: "samp03DLsvr_R1.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp03DL_svr_R1_win32.zip",
            filename: "samp03DL_svr_R1_win32.zip",
        },
    },
    ServerRelease {
        key: 'B',
        name: "SA-MP 0.3.7 R3",
        linux: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037svr_R3.tar.gz",
            filename: "samp037svr_R3.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037_svr_R3_win32.zip",
            filename: "samp037_svr_R3_win32.zip",
        },
    },
    ServerRelease {
        key: 'C',
        name: "SA-MP 0.3.7 R2-2-1",
        linux: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037svr_R2-2-1.tar.gz",
            filename: "samp037svr_R2-2-1.tar.gz",
        },
        // Upstream ships the R2-1-1 zip under the R2-2-1 entry; kept as-is.
        windows: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037_svr_R2-1-1_win32.zip",
            filename: "samp037_svr_R2-2-1_win32.zip",
        },
    },
    ServerRelease {
        key: 'D',
        name: "SA-MP 0.3.7 R2-1-1",
        linux: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037svr_R2-1.tar.gz",
            filename: "samp037svr_R2-1.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/vilksons/files.sa-mp.com-Archive/raw/refs/heads/master/samp037_svr_R2-1-1_win32.zip",
            filename: "samp037_svr_R2-1-1_win32.zip",
        },
    },
    ServerRelease {
        key: 'E',
        name: "OpenMP v1.4.0.2779",
        linux: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.4.0.2779/open.mp-linux-x86.tar.gz",
            filename: "open.mp-linux-x86.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.4.0.2779/open.mp-win-x86.zip",
            filename: "open.mp-win-x86.zip",
        },
    },
    ServerRelease {
        key: 'F',
        name: "OpenMP v1.3.1.2748",
        linux: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.3.1.2748/open.mp-linux-x86.tar.gz",
            filename: "open.mp-linux-x86.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.3.1.2748/open.mp-win-x86.zip",
            filename: "open.mp-win-x86.zip",
        },
    },
    ServerRelease {
        key: 'G',
        name: "OpenMP v1.2.0.2670",
        linux: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.2.0.2670/open.mp-linux-x86.tar.gz",
            filename: "open.mp-linux-x86.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.2.0.2670/open.mp-win-x86.zip",
            filename: "open.mp-win-x86.zip",
        },
    },
    ServerRelease {
        key: 'H',
        name: "OpenMP v1.1.0.2612",
        linux: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.1.0.2612/open.mp-linux-x86.tar.gz",
            filename: "open.mp-linux-x86.tar.gz",
        },
        windows: PackageSource {
            url: "https://github.com/openmultiplayer/open.mp/releases/download/v1.1.0.2612/open.mp-win-x86.zip",
            filename: "open.mp-win-x86.zip",
        },
    },
];

/// Looks up a server release by its selection letter or the lowercase pairing.
pub fn server_release(selection: char) -> Option<&'static ServerRelease> {
    SERVER_RELEASES
        .iter()
        .find(|release| selection == release.key || selection == release.key.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selecting_a_on_linux_builds_the_exact_release_url() {
        for selection in ['A', 'a'] {
            let index = pawncc_index(selection).unwrap();
            let package = pawncc_package(PAWNCC_VERSIONS[index], Platform::Linux);
            assert_eq!(
                package.url,
                "https://github.com/pawn-lang/compiler/releases/download/v3.10.10/pawnc-3.10.10-linux.tar.gz"
            );
            assert_eq!(package.filename, "pawnc-3.10.10-linux.tar.gz");
        }
    }

    #[test]
    fn pawncc_windows_packages_are_zips() {
        let package = pawncc_package("3.10.4", Platform::Windows);
        assert_eq!(
            package.url,
            "https://github.com/pawn-lang/compiler/releases/download/v3.10.4/pawnc-3.10.4-windows.zip"
        );
        assert_eq!(package.filename, "pawnc-3.10.4-windows.zip");
    }

    #[test]
    fn version_selection_accepts_both_cases() {
        assert_eq!(pawncc_index('A'), Some(0));
        assert_eq!(pawncc_index('a'), Some(0));
        assert_eq!(pawncc_index('J'), Some(9));
        assert_eq!(pawncc_index('j'), Some(9));
        assert_eq!(pawncc_index('K'), None);
        assert_eq!(pawncc_index('1'), None);
    }

    #[test]
    fn platform_selection_characters() {
        assert_eq!(Platform::from_selection('L'), Some(Platform::Linux));
        assert_eq!(Platform::from_selection('w'), Some(Platform::Windows));
        assert_eq!(Platform::from_selection('x'), None);
    }

    #[test]
    fn server_release_lookup_matches_key_and_lowercase() {
        let upper = server_release('E').unwrap();
        let lower = server_release('e').unwrap();
        assert_eq!(upper.name, "OpenMP v1.4.0.2779");
        assert_eq!(lower.name, upper.name);
        assert!(server_release('Z').is_none());
    }

    #[test]
    fn server_packages_pick_the_platform_asset() {
        let release = server_release('a').unwrap();
        let linux = release.package(Platform::Linux);
        let windows = release.package(Platform::Windows);
        assert_eq!(linux.filename, "samp03DLsvr_R1.tar.gz");
        assert_eq!(windows.filename, "samp03DL_svr_R1_win32.zip");
    }

    #[test]
    fn platform_parses_from_full_names() {
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("darwin".parse::<Platform>().is_err());
    }
}
