//! BLAKE3-derived keys for embedding memoization and stub feature hashing.

use blake3::Hasher;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Collisions are tolerable for memoization keys: with 64 bits the birthday
/// bound is ~4.3 billion distinct texts, far beyond one analysis.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Key for an embedding of `text` produced by `model`.
///
/// The model name is mixed in so that one cache never serves vectors from a
/// different model. Each field is length-prefixed, so no split of the same
/// bytes between `model` and `text` collides.
#[inline]
pub fn hash_embedding_key(model: &str, text: &str) -> u64 {
    let mut hasher = Hasher::new();
    for field in [model, text] {
        hasher.update(&(field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }

    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_to_u64_determinism() {
        let data = "разработка на Python".as_bytes();
        assert_eq!(hash_to_u64(data), hash_to_u64(data));
    }

    #[test]
    fn test_hash_to_u64_uniqueness() {
        let inputs = [
            b"python".as_slice(),
            b"Python".as_slice(),
            b"python ".as_slice(),
            b"docker".as_slice(),
        ];

        let hashes: HashSet<_> = inputs.iter().map(|i| hash_to_u64(i)).collect();
        assert_eq!(hashes.len(), inputs.len());
    }

    #[test]
    fn test_embedding_key_model_sensitivity() {
        let text = "maintain CI pipelines";
        assert_eq!(
            hash_embedding_key("model-a", text),
            hash_embedding_key("model-a", text)
        );
        assert_ne!(
            hash_embedding_key("model-a", text),
            hash_embedding_key("model-b", text)
        );
    }

    #[test]
    fn test_embedding_key_separator() {
        assert_ne!(hash_embedding_key("ab", "c"), hash_embedding_key("a", "bc"));
        assert_ne!(
            hash_embedding_key("a|b", "c"),
            hash_embedding_key("a", "b|c")
        );
        assert_ne!(hash_embedding_key("", "a|b"), hash_embedding_key("a", "b"));
    }
}
