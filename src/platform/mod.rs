//! Host platform detection and install guidance for a missing `ssh-keygen`

#[cfg(windows)]
mod windows;

use tracing::debug;

/// Platforms with distinct remediation advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux with `apt-get` available
    DebianLinux,
    /// Any other Linux distribution
    Linux,
    /// Windows 10 or newer (OpenSSH client is an optional feature)
    Windows10,
    /// Windows older than 10
    LegacyWindows,
    MacOs,
    Other,
}

const APT_HINT: &str = "Run: `sudo apt-get update && sudo apt-get install openssh-client`";
const LINUX_HINT: &str = "Install OpenSSH client using your distro's package manager";
const WINDOWS_HINT: &str = "Use Windows 'Apps and Features' to install `OpenSSH Client` or run \
     `Add-WindowsCapability -Online -Name OpenSSH.Client*` from PowerShell";
const MACOS_HINT: &str = "Mac OS should already include `ssh-keygen` but it's not found.";
const FALLBACK_HINT: &str =
    "Install an OpenSSH client and pass its `ssh-keygen` with --ssh-keygen";

/// Remediation text shown when `ssh-keygen` cannot be found
pub fn install_hint(platform: Platform) -> &'static str {
    match platform {
        Platform::DebianLinux => APT_HINT,
        Platform::Linux => LINUX_HINT,
        Platform::Windows10 => WINDOWS_HINT,
        Platform::MacOs => MACOS_HINT,
        Platform::LegacyWindows | Platform::Other => FALLBACK_HINT,
    }
}

/// Detect the current platform
pub fn detect() -> Platform {
    let platform = detect_inner();
    debug!(?platform, "Detected platform");
    platform
}

#[cfg(target_os = "linux")]
fn detect_inner() -> Platform {
    // Every Debian-family distro ships apt-get
    if which::which("apt-get").is_ok() {
        Platform::DebianLinux
    } else {
        Platform::Linux
    }
}

#[cfg(target_os = "macos")]
fn detect_inner() -> Platform {
    Platform::MacOs
}

#[cfg(windows)]
fn detect_inner() -> Platform {
    match windows::major_version() {
        Some(major) if major >= 10 => Platform::Windows10,
        _ => Platform::LegacyWindows,
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn detect_inner() -> Platform {
    Platform::Other
}
