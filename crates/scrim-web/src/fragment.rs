#![forbid(unsafe_code)]

//! The `#modal-N` URL fragment convention.
//!
//! Every history entry the session pushes carries its level both in the
//! state object (authoritative, read back from popstate) and in the URL
//! fragment (survives a page reload, where state objects do too but the
//! stack does not). On boot a host reads the fragment to learn how many
//! phantom modal entries the restored history contains.

use scrim_core::HistoryLevel;

/// Marker prefix for modal history fragments.
pub const FRAGMENT_PREFIX: &str = "#modal-";

/// Fragment for a level: `#modal-3`.
pub fn fragment_for(level: HistoryLevel) -> String {
    format!("{FRAGMENT_PREFIX}{}", level.get())
}

/// Parse a level out of a location hash, if one is present.
///
/// Tolerant the way the original convention is: the marker may sit
/// anywhere in the hash, digits end at the first non-digit. Returns
/// `None` for hashes without a well-formed marker.
pub fn parse_fragment(hash: &str) -> Option<HistoryLevel> {
    let start = hash.find(FRAGMENT_PREFIX)? + FRAGMENT_PREFIX.len();
    let rest = &hash[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u32>().ok().map(HistoryLevel::new)
}

/// Level from a location hash, defaulting to root when no marker parses.
pub fn level_from_hash(hash: &str) -> HistoryLevel {
    parse_fragment(hash).unwrap_or(HistoryLevel::ROOT)
}
