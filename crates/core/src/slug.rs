//! URL slug generation for project pages.

/// Turn a title into a URL slug: lowercase, alphanumeric runs joined by a
/// single `-`, no leading/trailing separator.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_with_hyphens() {
        assert_eq!(slugify("Palm Jumeirah Villa"), "palm-jumeirah-villa");
    }

    #[test]
    fn collapses_runs_of_separators() {
        assert_eq!(slugify("Office -- Fit-out (2024)"), "office-fit-out-2024");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
