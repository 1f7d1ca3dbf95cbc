//! Prefixed ID constants and generation.
//!
//! IDs look like `tsk-a3f8b2c1`: a three-letter entity prefix, a dash, and
//! 8 hex chars of OS entropy. Generated in-process (not by the database) so
//! entities can be constructed against any store implementation.

use anyhow::Context;

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_USER: &str = "usr";

/// Generate a prefixed ID, e.g. `"tsk-a3f8b2c1"`.
///
/// # Errors
///
/// Returns an error if the OS entropy source is unavailable.
pub fn generate(prefix: &str) -> anyhow::Result<String> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).context("failed to draw ID entropy")?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generate_has_prefix_and_hex_tail() {
        let id = generate(PREFIX_TASK).unwrap();
        assert!(id.starts_with("tsk-"), "ID should start with 'tsk-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");
        assert!(
            id[4..].chars().all(|c| c.is_ascii_hexdigit()),
            "random part should be hex: {id}"
        );
    }

    #[test]
    fn generate_is_unique_enough() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = generate(PREFIX_USER).unwrap();
            assert!(seen.insert(id.clone()), "duplicate ID generated: {id}");
        }
    }
}
