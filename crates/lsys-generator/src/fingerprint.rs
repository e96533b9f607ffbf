//! Content fingerprint of a point graph.

use lsys_types::{PointGraph, Result};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Lower-case hex SHA-256 of the graph's canonical JSON.
///
/// Two graphs share a fingerprint exactly when they serialize identically,
/// which makes seeded runs easy to compare. Serialization errors are
/// returned rather than hashed.
pub fn fingerprint(graph: &PointGraph) -> Result<String> {
    let json = serde_json::to_vec(graph)?;
    let digest = Sha256::digest(&json);
    Ok(digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint(&PointGraph::with_root()).unwrap();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_sensitive_to_points() {
        let a = PointGraph::with_root();
        let mut b = PointGraph::with_root();
        b.points[0].x = 1;
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
        assert_eq!(
            fingerprint(&a).unwrap(),
            fingerprint(&PointGraph::with_root()).unwrap()
        );
    }
}
