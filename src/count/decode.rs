//! Lossy UTF-8 decoding that drops invalid bytes.

/// Decode `bytes` as UTF-8, skipping invalid sequences entirely.
///
/// Unlike `String::from_utf8_lossy`, invalid input contributes nothing to
/// the output (no U+FFFD replacement), so character counts reflect only
/// bytes that actually decoded. A multi-byte sequence truncated at the end
/// of `bytes` is dropped too; callers decode each chunk independently.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                decoded.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    decoded.push_str(prefix);
                }
                match err.error_len() {
                    Some(skip) => rest = &invalid[skip..],
                    // Sequence cut off by the end of the chunk.
                    None => break,
                }
            }
        }
    }
    decoded
}
