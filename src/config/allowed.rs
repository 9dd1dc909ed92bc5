//! Mount prefixes that count as external storage

use std::path::Path;

/// Linux and macOS mount points for removable media
const MOUNT_PREFIXES: &[&str] = &[
    // usually, in Linux, external drives are mounted in one of these
    "/mnt/",
    "/media/",
    // macOS
    "/Volumes/",
];

/// Ordered set of path prefixes a key may be written under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedPaths {
    prefixes: Vec<String>,
}

impl AllowedPaths {
    /// Create from an explicit prefix list
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Defaults for the current platform.
    ///
    /// On Windows every drive root except `C:\` is added after the mount
    /// prefixes.
    pub fn platform_default() -> Self {
        let mut allowed = Self::new(MOUNT_PREFIXES.iter().copied());
        if cfg!(windows) {
            allowed.extend(drive_roots());
        }
        allowed
    }

    /// Append extra prefixes after the existing ones
    pub fn extend<I, S>(&mut self, prefixes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
    }

    /// First prefix `path` starts with, if any.
    ///
    /// Plain string comparison; `path` is expected to be canonical already.
    pub fn matching_prefix(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| path.starts_with(prefix))
    }

    /// Prefixes in match order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

/// `A:\` .. `Z:\` in both cases, without the system drive
fn drive_roots() -> impl Iterator<Item = String> {
    ('a'..='z')
        .chain('A'..='Z')
        .filter(|d| !d.eq_ignore_ascii_case(&'c'))
        .map(|d| format!("{d}:\\"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mount_prefixes_in_order() {
        let allowed = AllowedPaths::platform_default();
        let first: Vec<&str> = allowed.iter().take(3).collect();
        assert_eq!(first, vec!["/mnt/", "/media/", "/Volumes/"]);
    }

    #[test]
    fn test_drive_roots_skip_c() {
        let roots: Vec<String> = drive_roots().collect();
        assert_eq!(roots.len(), 50);
        assert!(roots.contains(&"E:\\".to_string()));
        assert!(roots.contains(&"e:\\".to_string()));
        assert!(!roots.iter().any(|r| r.eq_ignore_ascii_case("c:\\")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_no_drive_roots_off_windows() {
        assert_eq!(AllowedPaths::platform_default().iter().count(), 3);
    }

    #[test]
    fn test_matching_prefix() {
        let allowed = AllowedPaths::platform_default();
        assert_eq!(
            allowed.matching_prefix(Path::new("/media/usb/deploy_key")),
            Some("/media/")
        );
        assert_eq!(allowed.matching_prefix(Path::new("/home/user/deploy_key")), None);
        // prefix needs the trailing separator
        assert_eq!(allowed.matching_prefix(Path::new("/mntx/key")), None);
    }

    #[test]
    fn test_first_match_wins() {
        let allowed = AllowedPaths::new(["/data/", "/data/usb/"]);
        assert_eq!(
            allowed.matching_prefix(Path::new("/data/usb/key")),
            Some("/data/")
        );
    }

    #[test]
    fn test_extend_keeps_defaults() {
        let mut allowed = AllowedPaths::platform_default();
        allowed.extend(["/run/media/"]);
        assert_eq!(
            allowed.matching_prefix(Path::new("/run/media/alice/SD/key")),
            Some("/run/media/")
        );
        assert_eq!(allowed.matching_prefix(Path::new("/mnt/sd/key")), Some("/mnt/"));
    }
}
