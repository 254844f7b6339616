//! AQL query construction
//!
//! The search endpoint accepts a textual query; the repository key is
//! interpolated into it, so quote and backslash characters must be
//! escaped first or a hostile key could alter the query semantics.

/// Escape backslash and double-quote characters for use inside a
/// double-quoted AQL string literal.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build the AQL expression selecting every item of one repository.
pub fn find_items_in_repo(repository_key: &str) -> String {
    format!(
        r#"items.find({{"repo": "{}"}})"#,
        escape_literal(repository_key)
    )
}
