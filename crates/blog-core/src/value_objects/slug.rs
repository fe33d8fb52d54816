//! URL slugs derived from post titles

/// Turn a title into a URL slug
///
/// Lowercases, keeps ASCII letters and digits, and collapses every other run of
/// characters into a single `-`. Leading and trailing separators are trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
