// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Leading integer of a label, `parseInt`-style:
/// leading whitespace, optional sign, then digits up to the first non-digit.
/// "155 lbs" → Some(155), "Open weight" → None.
pub fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() { return None; }
    let v: i64 = digits.parse().ok()?;
    Some(if neg { -v } else { v })
}

/// Search needle/haystack folding: trimmed + lowercased.
pub fn fold_search(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Slugs are used as file stems and anchors: lowercase ascii, digits, '-'.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
