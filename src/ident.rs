use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Milliseconds since the Unix epoch. Also used for export file names.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Returns a fresh identifier of the form `id-<unix-millis>-<9 base36 chars>`.
/// The format is opaque to callers; collisions within one process are not a
/// modeled error.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("id-{}-{}", unix_millis(), suffix)
}
