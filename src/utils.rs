use digest::Digest;

/// Hash bytes and encode the result as lowercase hex
pub fn hex_digest<D: Digest>(bytes: &[u8]) -> String {
    let mut hash = D::new();
    hash.update(bytes);
    hex::encode(hash.finalize())
}
