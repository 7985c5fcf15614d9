//! URL segment joining.

/// Joins `relative` onto `base` with exactly one `/` at the join point.
///
/// If either side is empty the other is returned unchanged. Segments are
/// never re-encoded and nothing else is normalized.
///
/// # Examples
///
/// - `combine("https://gitlab.com/foo", "bar")` → `"https://gitlab.com/foo/bar"`
/// - `combine("https://gitlab.com/foo/", "/bar")` → `"https://gitlab.com/foo/bar"`
/// - `combine("https://gitlab.com/foo", "")` → `"https://gitlab.com/foo"`
pub fn combine(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    let mut out = String::with_capacity(base.len() + relative.len() + 1);
    out.push_str(base);
    out.push('/');
    out.push_str(relative);
    out
}

/// Removes leading and trailing `/` from a URL path.
pub(crate) fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}
