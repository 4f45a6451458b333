//! Character sanitization for synthesized path segments.

/// Characters rejected by at least one common file system.
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\\'];

/// Replaces file-system-unsafe characters in a single path segment with `_`.
///
/// A segment that decodes to `.` or `..` comes back as `_`; those names
/// would otherwise re-route the directory walk.
pub(crate) fn sanitize_segment(segment: &str) -> String {
    if segment == "." || segment == ".." {
        return "_".to_string();
    }
    segment
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Like [`sanitize_segment`] but also replaces `/`, for text appended to the
/// file name after the directory structure is already fixed.
pub(crate) fn sanitize_appended(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c == '/' || UNSAFE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_unsafe_character() {
        assert_eq!(sanitize_segment(r#"a<b>c:d"e|f?g*h\i"#), "a_b_c_d_e_f_g_h_i");
    }

    #[test]
    fn keeps_ordinary_names() {
        assert_eq!(sanitize_segment("war-and-peace.epub"), "war-and-peace.epub");
        assert_eq!(sanitize_segment("with space"), "with space");
    }

    #[test]
    fn dot_segments_are_neutralized() {
        assert_eq!(sanitize_segment("."), "_");
        assert_eq!(sanitize_segment(".."), "_");
        assert_eq!(sanitize_segment("..."), "...");
    }

    #[test]
    fn appended_text_loses_slashes_too() {
        assert_eq!(sanitize_appended("path=/a/b"), "path=_a_b");
        assert_eq!(sanitize_appended("q=a:b"), "q=a_b");
    }
}
