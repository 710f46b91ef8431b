//! Identifier formats used across the datasets.

use crate::error::{Error, Result};

pub const CONTENT_ID_PREFIX: &str = "CONT";
pub const USER_ID_PREFIX: &str = "USER";

/// Sequential catalog id, e.g. `CONT000042`.
pub fn content_id(index: u64) -> String {
    format!("{CONTENT_ID_PREFIX}{index:06}")
}

/// User id, e.g. `USER0001234`.
pub fn user_id(number: u32) -> String {
    format!("{USER_ID_PREFIX}{number:07}")
}

/// Episode-qualified content id, e.g. `CONT000042_S02E11`.
pub fn episode_content_id(base: &str, season: u32, episode: u32) -> String {
    format!("{base}_S{season:02}E{episode:02}")
}

/// Strip an episode suffix from a viewing's content id.
///
/// Bare ids are returned unchanged.
pub fn base_content_id(id: &str) -> Result<&str> {
    let base = match id.split_once('_') {
        Some((base, suffix)) => {
            if !is_episode_suffix(suffix) {
                return Err(Error::InvalidIdentifier(id.to_string()));
            }
            base
        }
        None => id,
    };

    let digits = base
        .strip_prefix(CONTENT_ID_PREFIX)
        .ok_or_else(|| Error::InvalidIdentifier(id.to_string()))?;
    if digits.len() < 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidIdentifier(id.to_string()));
    }
    Ok(base)
}

fn is_episode_suffix(suffix: &str) -> bool {
    let Some(rest) = suffix.strip_prefix('S') else {
        return false;
    };
    let Some((season, episode)) = rest.split_once('E') else {
        return false;
    };
    [season, episode]
        .iter()
        .all(|part| part.len() >= 2 && part.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_padded_ids() {
        assert_eq!(content_id(7), "CONT000007");
        assert_eq!(user_id(10_000), "USER0010000");
        assert_eq!(episode_content_id("CONT000007", 3, 12), "CONT000007_S03E12");
    }

    #[test]
    fn strips_episode_suffix() {
        assert_eq!(base_content_id("CONT000007_S03E12").ok(), Some("CONT000007"));
        assert_eq!(base_content_id("CONT000007").ok(), Some("CONT000007"));
    }

    #[test]
    fn rejects_malformed_ids() {
        for id in ["CONT7", "MOV000007", "CONT000007_X01", "CONT000007_S1E01"] {
            assert!(base_content_id(id).is_err(), "{id} should be rejected");
        }
    }
}
