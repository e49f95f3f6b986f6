//! Host platform detection.
//!
//! The artifact host lays binaries out as `<os>/<arch>/rw` using the names
//! `uname -s` and `uname -m` print, lowercased. Rust's own target names differ
//! on macOS, so detection maps them onto that convention.

/// Lowercased OS and architecture pair used to build download URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl AsRef<str>, arch: impl AsRef<str>) -> Self {
        Self {
            os: os.as_ref().to_lowercase(),
            arch: arch.as_ref().to_lowercase(),
        }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self::new(Self::detect_os(), Self::detect_arch())
    }

    fn detect_os() -> &'static str {
        #[cfg(target_os = "macos")]
        {
            "darwin"
        }
        #[cfg(not(target_os = "macos"))]
        {
            std::env::consts::OS
        }
    }

    fn detect_arch() -> &'static str {
        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        {
            "arm64"
        }
        #[cfg(target_arch = "x86")]
        {
            "i686"
        }
        #[cfg(not(any(all(target_os = "macos", target_arch = "aarch64"), target_arch = "x86")))]
        {
            std::env::consts::ARCH
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Platform;
}

/// Default platform detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> Platform {
        Platform::detect()
    }
}

/// Always reports the same platform. Used when the caller already knows the target.
pub struct FixedPlatform(pub Platform);

impl PlatformDetector for FixedPlatform {
    fn detect(&self) -> Platform {
        self.0.clone()
    }
}
