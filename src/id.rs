//! Prefixed random identifiers for song rows

use rand::Rng;

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

const PREFIX: &str = "song-";
const TOKEN_LEN: usize = 16;

/// Generate a song id: the `song-` prefix followed by a 16-character
/// random token. 64^16 possible tokens; collision-resistant, not
/// cryptographic.
pub fn song_id() -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(PREFIX.len() + TOKEN_LEN);
    id.push_str(PREFIX);
    for _ in 0..TOKEN_LEN {
        id.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
    }
    id
}
