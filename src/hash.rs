use fastmurmur3::murmur3_x64_128;
use uuid::Uuid;

/// A utility struct for hashing strings using the Murmur3 algorithm.
///
/// This is used to fingerprint a whole game tree so that two builds of the same position can
/// be compared without walking both trees side by side.
pub struct MurMurHasher;

impl MurMurHasher {
    /// Hashes a given string slice and returns it as a hex string.
    pub fn hash(str: &str) -> String {
        let hash = murmur3_x64_128(str.as_bytes(), 0);
        let guid = Uuid::from_bytes(hash.to_le_bytes());
        guid.simple().to_string()
    }
}
