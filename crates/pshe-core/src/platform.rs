// Pshe Platform Flag
// Selects the Apple or generic punctuation variant of the layout

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Host platforms the layout knows about
///
/// Only the Apple / non-Apple distinction changes the layout: macOS puts
/// `ё` on the key left of `z` and moves the shifted number-row symbols around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Aix,
    Darwin,
    FreeBsd,
    Linux,
    OpenBsd,
    SunOs,
    Win32,
}

/// Errors from parsing a platform name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown platform: '{0}'")]
    Unknown(String),
}

impl Platform {
    /// Platform of the running binary, derived from the compile target.
    ///
    /// Targets outside the known set fall back to `Linux`, which uses the
    /// generic (non-Apple) symbols.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Darwin
        } else if cfg!(target_os = "windows") {
            Platform::Win32
        } else if cfg!(target_os = "freebsd") {
            Platform::FreeBsd
        } else if cfg!(target_os = "openbsd") {
            Platform::OpenBsd
        } else if cfg!(target_os = "solaris") || cfg!(target_os = "illumos") {
            Platform::SunOs
        } else if cfg!(target_os = "aix") {
            Platform::Aix
        } else {
            Platform::Linux
        }
    }

    /// Parse a platform name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, PlatformError> {
        match name.trim().to_lowercase().as_str() {
            "aix" => Ok(Platform::Aix),
            "darwin" | "macos" | "mac" => Ok(Platform::Darwin),
            "freebsd" => Ok(Platform::FreeBsd),
            "linux" => Ok(Platform::Linux),
            "openbsd" => Ok(Platform::OpenBsd),
            "sunos" | "solaris" => Ok(Platform::SunOs),
            "win32" | "windows" => Ok(Platform::Win32),
            _ => Err(PlatformError::Unknown(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether the Apple symbol variants apply
    pub fn is_apple(&self) -> bool {
        *self == Platform::Darwin
    }
}

impl std::str::FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for platform in Platform::iter() {
            assert_eq!(Platform::from_name(platform.as_str()), Ok(platform));
            assert_eq!(platform.to_string(), platform.as_str());
        }
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Platform::Darwin.as_str(), "darwin");
        assert_eq!(Platform::FreeBsd.as_str(), "freebsd");
        assert_eq!(Platform::SunOs.as_str(), "sunos");
        assert_eq!(Platform::Win32.as_str(), "win32");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Platform::from_name("macOS"), Ok(Platform::Darwin));
        assert_eq!(Platform::from_name(" Windows "), Ok(Platform::Win32));
        assert_eq!("LINUX".parse::<Platform>(), Ok(Platform::Linux));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            Platform::from_name("plan9"),
            Err(PlatformError::Unknown("plan9".to_string()))
        );
    }

    #[test]
    fn test_only_darwin_is_apple() {
        let apple: Vec<Platform> = Platform::iter().filter(|p| p.is_apple()).collect();
        assert_eq!(apple, vec![Platform::Darwin]);
    }

    #[test]
    fn test_current_matches_target() {
        assert_eq!(Platform::current().is_apple(), cfg!(target_os = "macos"));
    }
}
