//! Operating system detection.
//!
//! Install instructions differ per OS, so sections branch on [`Os`].

use std::fmt;

/// Operating systems the tutorial has instructions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
    Unknown,
}

impl Os {
    /// Detect the OS this binary runs on
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to an [`Os`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Unknown,
        }
    }

    /// Whether the KVM driver is available
    pub fn supports_kvm(self) -> bool {
        self == Self::Linux
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Windows => "Windows",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Os::from_name("macos"), Os::MacOs);
        assert_eq!(Os::from_name("linux"), Os::Linux);
        assert_eq!(Os::from_name("windows"), Os::Windows);
        assert_eq!(Os::from_name("freebsd"), Os::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Os::MacOs.to_string(), "macOS");
        assert_eq!(Os::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_kvm_only_on_linux() {
        assert!(Os::Linux.supports_kvm());
        assert!(!Os::MacOs.supports_kvm());
        assert!(!Os::Windows.supports_kvm());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_detect_linux() {
        assert_eq!(Os::detect(), Os::Linux);
    }
}
