//! Host platform detection and the supported-platform allow-list.

use std::fmt;

use crate::error::{MgrError, Result};

/// One of the three supported (system, machine) combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKey {
    LinuxX86_64,
    DarwinX86_64,
    DarwinArm64,
}

impl PlatformKey {
    /// Every supported platform.
    pub const ALL: [PlatformKey; 3] = [
        PlatformKey::LinuxX86_64,
        PlatformKey::DarwinX86_64,
        PlatformKey::DarwinArm64,
    ];

    /// Check a (system, machine) pair against the allow-list.
    ///
    /// Accepts uname spellings (`Linux`, `Darwin`, `arm64`) as well as Rust
    /// target spellings (`linux`, `macos`, `aarch64`).
    pub fn from_parts(system: &str, machine: &str) -> Result<Self> {
        let system_norm = match system {
            "Linux" | "linux" => "Linux",
            "Darwin" | "macos" => "Darwin",
            other => other,
        };
        let machine_norm = match machine {
            "aarch64" | "arm64" => "arm64",
            other => other,
        };

        match (system_norm, machine_norm) {
            ("Linux", "x86_64") => Ok(PlatformKey::LinuxX86_64),
            ("Darwin", "x86_64") => Ok(PlatformKey::DarwinX86_64),
            ("Darwin", "arm64") => Ok(PlatformKey::DarwinArm64),
            _ => Err(MgrError::UnsupportedPlatform {
                system: system_norm.to_string(),
                machine: machine.to_string(),
            }),
        }
    }

    /// Detect and validate the platform this binary is running on.
    pub fn detect() -> Result<Self> {
        Self::from_parts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Platform segment used in release archive names (`x86_64-linux`).
    pub fn archive_name(&self) -> &'static str {
        match self {
            PlatformKey::LinuxX86_64 => "x86_64-linux",
            PlatformKey::DarwinX86_64 => "x86_64-macos",
            PlatformKey::DarwinArm64 => "aarch64-macos",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlatformKey::LinuxX86_64 => "Linux_x86_64",
            PlatformKey::DarwinX86_64 => "Darwin_x86_64",
            PlatformKey::DarwinArm64 => "Darwin_arm64",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_supported_pairs() {
        assert_eq!(
            PlatformKey::from_parts("Linux", "x86_64").unwrap(),
            PlatformKey::LinuxX86_64
        );
        assert_eq!(
            PlatformKey::from_parts("Darwin", "x86_64").unwrap(),
            PlatformKey::DarwinX86_64
        );
        assert_eq!(
            PlatformKey::from_parts("Darwin", "arm64").unwrap(),
            PlatformKey::DarwinArm64
        );
    }

    #[test]
    fn accepts_rust_target_spellings() {
        assert_eq!(
            PlatformKey::from_parts("linux", "x86_64").unwrap(),
            PlatformKey::LinuxX86_64
        );
        assert_eq!(
            PlatformKey::from_parts("macos", "aarch64").unwrap(),
            PlatformKey::DarwinArm64
        );
    }

    #[test]
    fn rejects_everything_else() {
        let rejected = [
            ("Linux", "aarch64"),
            ("Linux", "arm64"),
            ("Linux", "i686"),
            ("Darwin", "i386"),
            ("Windows", "AMD64"),
            ("windows", "x86_64"),
            ("FreeBSD", "x86_64"),
            ("", ""),
        ];
        for (system, machine) in rejected {
            let err = PlatformKey::from_parts(system, machine).unwrap_err();
            assert!(
                matches!(err, MgrError::UnsupportedPlatform { .. }),
                "{system}_{machine} should be rejected"
            );
        }
    }

    #[test]
    fn rejection_keeps_uname_spelling() {
        let err = PlatformKey::from_parts("Linux", "riscv64").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unrecognized platform, aborting: Linux_riscv64"
        );
    }

    #[test]
    fn rejection_reports_target_os_in_uname_form() {
        let err = PlatformKey::from_parts("linux", "aarch64").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unrecognized platform, aborting: Linux_aarch64"
        );

        let err = PlatformKey::from_parts("macos", "powerpc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unrecognized platform, aborting: Darwin_powerpc"
        );
    }

    #[test]
    fn display_uses_uname_form() {
        assert_eq!(PlatformKey::LinuxX86_64.to_string(), "Linux_x86_64");
        assert_eq!(PlatformKey::DarwinX86_64.to_string(), "Darwin_x86_64");
        assert_eq!(PlatformKey::DarwinArm64.to_string(), "Darwin_arm64");
    }

    #[test]
    fn archive_names() {
        let names: Vec<_> = PlatformKey::ALL.iter().map(|p| p.archive_name()).collect();
        assert_eq!(names, ["x86_64-linux", "x86_64-macos", "aarch64-macos"]);
    }
}
