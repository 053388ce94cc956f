/// Case-insensitive (ASCII) substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}

/// Byte offset of the first case-insensitive (ASCII) occurrence of `needle`.
///
/// ASCII lowercasing never changes byte lengths, so offsets into the
/// lowercased copy are valid offsets into `haystack`.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// Remove the first case-insensitive (ASCII) occurrence of `needle`.
///
/// Returns the input unchanged when `needle` does not occur.
pub fn remove_first_ignore_case(haystack: &str, needle: &str) -> String {
    match find_ignore_case(haystack, needle) {
        Some(start) => {
            let mut out = String::with_capacity(haystack.len() - needle.len());
            out.push_str(&haystack[..start]);
            out.push_str(&haystack[start + needle.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Mozilla (PLAYSTATION 3 4.50)", "PlayStation 3"));
        assert!(contains_ignore_case("Nintendo WiiU", "wiiu"));
        assert!(!contains_ignore_case("Nintendo Wii", "WiiU"));
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn test_remove_first_ignore_case() {
        assert_eq!(remove_first_ignore_case("Nokia; Lumia 920", "NOKIA; "), "Lumia 920");
        assert_eq!(remove_first_ignore_case("a; b; a; b", "A; "), "b; a; b");
        assert_eq!(remove_first_ignore_case("unchanged", "zzz"), "unchanged");
        assert_eq!(remove_first_ignore_case("", "x"), "");
    }

    #[test]
    fn test_find_ignore_case_offsets() {
        assert_eq!(find_ignore_case("IEMobile/10.0", "iemobile/"), Some(0));
        assert_eq!(find_ignore_case("x HTC; y", "htc; "), Some(2));
        assert_eq!(find_ignore_case("x", "y"), None);
    }
}
