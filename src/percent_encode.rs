use crate::compat::{String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Form component percent-encode set
/// Everything except ASCII alphanumerics and `-`, `_`, `.`
/// Space is in the set; `form_encode_into` rewrites it to `+`.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Form-encode a query key or value directly into buffer
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    // PercentEncode yields each escaped byte as its own "%XX" chunk
    for chunk in utf8_percent_encode(input, FORM_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-encoded query key or value.
/// `+` becomes a space, malformed `%` escapes are kept as-is and invalid
/// UTF-8 is replaced lossily.
pub fn form_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    if memchr::memchr2(b'+', b'%', bytes).is_none() {
        return String::from(input);
    }

    let plus_decoded: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_encoding::percent_decode(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
