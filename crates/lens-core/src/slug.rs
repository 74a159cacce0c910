//! Slug helpers.
//!
//! A slug doubles as the route segment (`/<slug>`) and the file stem
//! (`papers/<slug>.json`), so it is restricted to `[a-z0-9-]`.

/// Derive a slug from free text.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims leading/trailing dashes. Falls back to `paper` when
/// nothing is left.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        String::from("paper")
    } else {
        slug
    }
}

/// Whether `slug` is non-empty and only uses `[a-z0-9-]`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
