//! Target normalization and target file reading.
//!
//! Key functions:
//! - `normalize_target()` - Reduces a CIDR block to its network address
//! - `read_targets_from_file()` - Reads one target per line, skipping blanks and comments

use std::io::{BufRead, BufReader};
use std::path::Path;

use ipnetwork::IpNetwork;

use crate::config::COMMENT_PREFIX;
use crate::error_handling::FileReadError;

/// Normalizes a target for whois lookup.
///
/// A CIDR block (`address/prefix`) is reduced to its network address, so
/// `192.0.2.77/24` is looked up as `192.0.2.0`. Bare IP addresses, domains and
/// anything that does not parse as CIDR are returned unchanged.
///
/// # Examples
///
/// ```
/// use whoispf::normalize_target;
///
/// assert_eq!(normalize_target("10.1.2.3/8"), "10.0.0.0");
/// assert_eq!(normalize_target("example.com"), "example.com");
/// ```
pub fn normalize_target(target: &str) -> String {
    // ipnetwork accepts a bare address as a host prefix; only explicit blocks count as CIDR
    if !target.contains('/') {
        return target.to_string();
    }
    match target.parse::<IpNetwork>() {
        Ok(network) => network.network().to_string(),
        Err(_) => target.to_string(),
    }
}

/// Reads targets from a file, one per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Bytes that are not valid UTF-8 are replaced, never an error.
///
/// # Errors
///
/// Returns `FileReadError` if the file cannot be opened or read.
pub fn read_targets_from_file(path: &Path) -> Result<Vec<String>, FileReadError> {
    let to_error = |source| FileReadError {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(to_error)?;

    let mut targets = Vec::new();
    // Decode per line so a stray Latin-1 comment does not cost the whole file
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(to_error)?;
        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }
        targets.push(trimmed.to_string());
    }
    Ok(targets)
}

/// Returns true if `arg` names an existing regular file (as opposed to a literal target).
pub fn is_target_file(arg: &str) -> bool {
    Path::new(arg).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_ipv4_cidr_to_network_address() {
        assert_eq!(normalize_target("192.0.2.0/24"), "192.0.2.0");
        assert_eq!(normalize_target("192.0.2.77/24"), "192.0.2.0");
        assert_eq!(normalize_target("10.200.3.4/8"), "10.0.0.0");
        assert_eq!(normalize_target("198.51.100.7/32"), "198.51.100.7");
    }

    #[test]
    fn test_normalize_ipv6_cidr_to_network_address() {
        assert_eq!(normalize_target("2001:db8::1/32"), "2001:db8::");
        assert_eq!(normalize_target("2001:db8:abcd::/48"), "2001:db8:abcd::");
    }

    #[test]
    fn test_normalized_cidr_has_no_prefix_length() {
        for cidr in ["0.0.0.0/0", "172.16.5.4/12", "fe80::1/10"] {
            assert!(!normalize_target(cidr).contains('/'), "{cidr}");
        }
    }

    #[test]
    fn test_normalize_non_cidr_is_identity() {
        for target in [
            "8.8.8.8",
            "2001:0db8:0000::1",
            "example.com",
            "_spf.google.com",
            "192.0.2.0/33",
            "not/a/cidr",
            "",
        ] {
            assert_eq!(normalize_target(target), target);
        }
    }

    #[test]
    fn test_read_targets_skips_blanks_and_comments() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("targets.txt");
        std::fs::write(
            &path,
            "# office ranges\n192.0.2.1\n\n   \n  # indented comment\n  198.51.100.0/24  \nexample.com\n",
        )
        .expect("Failed to write test file");

        let targets = read_targets_from_file(&path).unwrap();
        assert_eq!(targets, vec!["192.0.2.1", "198.51.100.0/24", "example.com"]);
    }

    #[test]
    fn test_read_targets_tolerates_non_utf8_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("targets.txt");
        std::fs::write(&path, b"# B\xfcro ranges\r\n192.0.2.1\r\n198.51.100.2\n")
            .expect("Failed to write test file");

        let targets = read_targets_from_file(&path).unwrap();
        assert_eq!(targets, vec!["192.0.2.1", "198.51.100.2"]);
    }

    #[test]
    fn test_read_targets_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing.txt");

        let err = read_targets_from_file(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_error_after_open_is_reported() {
        // Opens fine, but the first read hits an unmapped page
        let path = Path::new("/proc/self/mem");
        let err = read_targets_from_file(path).unwrap_err();
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_is_target_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("targets.txt");
        std::fs::write(&path, "192.0.2.1\n").unwrap();

        assert!(is_target_file(path.to_str().unwrap()));
        assert!(!is_target_file(temp_dir.path().to_str().unwrap()));
        assert!(!is_target_file("192.0.2.1"));
    }
}
