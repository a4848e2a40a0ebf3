//! Local artifact digest
//!
//! The digest is informational: it goes into the `Started` event so the
//! operator can tie a deploy back to a build. The transfer tool remains the
//! sole authority on whether the artifact exists, so an unreadable file
//! yields `None` instead of an error.

use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 of the file at `path`, formatted as `sha256:<64 hex digits>`
pub fn artifact_digest(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).ok()?;
    Some(format!("sha256:{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn digest_of_known_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artifact");
        fs::write(&path, b"hello").unwrap();

        let digest = artifact_digest(&path).unwrap();
        assert_eq!(
            digest,
            "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn digest_of_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(artifact_digest(&dir.path().join("missing")), None);
    }
}
