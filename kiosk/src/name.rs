//! Candidate-name normalization.

/// Placeholder used when the surrounding page yields no usable name.
/// Extraction failure never blocks the interaction.
pub const UNKNOWN_CANDIDATE: &str = "(unknown)";

/// Strip all whitespace from an extracted candidate name.
///
/// Returns `None` when nothing printable remains, so callers can fall back
/// to [`UNKNOWN_CANDIDATE`].
pub fn normalize_candidate(raw: &str) -> Option<String> {
    let name: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
