//! Cache key derivation.

/// Derive a deterministic cache key from a logical resource name and its
/// parameters.
///
/// The parameter slice carries the hierarchical order of the query, so the
/// same logical query always produces the same key no matter how the caller
/// assembled it. Format: `resource?k=v&k=v`, or bare `resource` with no
/// parameters.
pub fn cache_key(resource: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return resource.to_string();
    }

    let mut key = String::with_capacity(resource.len() + params.len() * 12);
    key.push_str(resource);
    for (i, (name, value)) in params.iter().enumerate() {
        key.push(if i == 0 { '?' } else { '&' });
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}
