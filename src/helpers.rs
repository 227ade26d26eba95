/// Prune fragment (#hash) from a URI string.
/// Returns (`uri_without_fragment`, `fragment_without_hash`).
/// The first `#` delimits; any later `#` stays in the fragment.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URI string that has no fragment left.
/// Returns (`uri_without_query`, `query_without_question_mark`).
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split at the first `/` into (authority, path).
/// The path keeps its leading slash; without a slash the path is empty.
pub fn split_path(input: &str) -> (&str, &str) {
    memchr::memchr(b'/', input.as_bytes())
        .map_or((input, ""), |pos| (&input[..pos], &input[pos..]))
}

/// Split `user[:pass]@host` at the first `@`.
/// Returns (`userinfo`, `host`), with no userinfo when there is no `@`.
pub fn split_userinfo(input: &str) -> (Option<&str>, &str) {
    memchr::memchr(b'@', input.as_bytes()).map_or((None, input), |pos| {
        (Some(&input[..pos]), &input[pos + 1..])
    })
}
