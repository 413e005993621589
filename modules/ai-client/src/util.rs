/// Truncate a string to at most `max_bytes` bytes at a character boundary.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

/// Strip a markdown code fence wrapped around a model response.
///
/// Removes surrounding whitespace, one leading "```json" or "```" marker and
/// one trailing "```" marker. Only the outer fence is handled: fences embedded
/// in the middle of the text are left alone, and unfenced text passes through
/// trimmed but otherwise unchanged.
pub fn strip_code_blocks(response: &str) -> &str {
    let trimmed = response.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}
