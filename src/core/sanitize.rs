// src/core/sanitize.rs

/// Collapse whitespace runs to single spaces and trim the ends.
/// Text nodes from the archive pages arrive with layout newlines and
/// indentation baked in.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize_ws("  Jane \n\t commented  "), "Jane commented");
        assert_eq!(normalize_ws("one two"), "one two");
        assert_eq!(normalize_ws("   \n "), "");
    }
}
