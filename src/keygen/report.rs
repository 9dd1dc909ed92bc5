//! Reading back the generated public key

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ssh_key::{HashAlg, PublicKey};
use tracing::debug;

use crate::config::PUBLIC_KEY_SUFFIX;
use crate::error::{DeployKeyError, Result};

/// The public half as written by `ssh-keygen`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// First line of the `.pub` file, without the line ending
    pub line: String,
    /// Algorithm name, when the line parses as an OpenSSH public key
    pub algorithm: Option<String>,
    /// `SHA256:` fingerprint, when the line parses
    pub fingerprint: Option<String>,
}

/// `<output>.pub`
pub fn public_key_path(output: &Path) -> PathBuf {
    let mut path = OsString::from(output.as_os_str());
    path.push(PUBLIC_KEY_SUFFIX);
    PathBuf::from(path)
}

/// Read the first line of the public key next to `output`
pub fn read_public_key(output: &Path) -> Result<PublicKeyInfo> {
    let path = public_key_path(output);

    let file = File::open(&path).map_err(|source| DeployKeyError::MissingOutput {
        path: path.clone(),
        source,
    })?;

    let line = match BufReader::new(file).lines().next() {
        Some(line) => line?,
        None => return Err(DeployKeyError::EmptyOutput { path }),
    };
    let line = line.trim_end_matches('\r').to_string();

    let (algorithm, fingerprint) = match PublicKey::from_openssh(&line) {
        Ok(key) => (
            Some(key.algorithm().to_string()),
            Some(key.fingerprint(HashAlg::Sha256).to_string()),
        ),
        Err(e) => {
            debug!(path = %path.display(), "Public key not parsed: {e}");
            (None, None)
        }
    };

    Ok(PublicKeyInfo {
        line,
        algorithm,
        fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssh_key::public::{Ed25519PublicKey, KeyData};

    #[test]
    fn test_public_key_path_appends_suffix() {
        assert_eq!(
            public_key_path(Path::new("/mnt/usb/deploy_key")),
            PathBuf::from("/mnt/usb/deploy_key.pub")
        );
        assert_eq!(
            public_key_path(Path::new("/mnt/usb/key.v1")),
            PathBuf::from("/mnt/usb/key.v1.pub")
        );
    }

    #[test]
    fn test_reads_only_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deploy_key");
        std::fs::write(public_key_path(&output), "ssh-rsa AAAA... test\nsecond line\n").unwrap();

        let info = read_public_key(&output).unwrap();
        assert_eq!(info.line, "ssh-rsa AAAA... test");
        assert_eq!(info.fingerprint, None);
        assert_eq!(info.algorithm, None);
    }

    #[test]
    fn test_fingerprint_for_valid_key() {
        let key = PublicKey::new(KeyData::Ed25519(Ed25519PublicKey([7u8; 32])), "");
        let line = key.to_openssh().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deploy_key");
        std::fs::write(public_key_path(&output), format!("{line}\n")).unwrap();

        let info = read_public_key(&output).unwrap();
        assert_eq!(info.line, line);
        assert_eq!(info.algorithm.as_deref(), Some("ssh-ed25519"));
        assert_eq!(
            info.fingerprint,
            Some(key.fingerprint(HashAlg::Sha256).to_string())
        );
    }

    #[test]
    fn test_missing_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deploy_key");

        match read_public_key(&output).unwrap_err() {
            DeployKeyError::MissingOutput { path, .. } => {
                assert_eq!(path, dir.path().join("deploy_key.pub"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deploy_key");
        std::fs::write(public_key_path(&output), "").unwrap();

        let err = read_public_key(&output).unwrap_err();
        assert!(matches!(err, DeployKeyError::EmptyOutput { .. }));
    }
}
