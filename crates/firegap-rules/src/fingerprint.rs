use sha2::{Digest, Sha256};

/// Stable SHA-256 over catalog files.
///
/// Each file contributes `path`, a NUL, its text, and another NUL, in the
/// order given (callers pass sorted paths).
pub fn catalog_digest<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut hasher = Sha256::new();
    for (path, text) in files {
        hasher.update(path.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
