//! Query-parameter appendage for synthesized paths.
//!
//! Qualifying parameters are folded into the file name so that URLs that
//! differ only in their query still map to distinct local paths.

use super::sanitize::sanitize_appended;

/// True when a query parameter participates in the file name. Parameters
/// carrying credentials (`username=`, `password=`) and parameters with an
/// empty value are skipped.
fn qualifies(param: &str) -> bool {
    !param.starts_with("username=") && !param.starts_with("password=") && !param.ends_with('=')
}

/// Appends each qualifying `&`-separated parameter of `query` to `body` as
/// `_<param>`, in the order the parameters appear.
pub(crate) fn append_params(body: &mut String, query: &str) {
    for param in query.split('&') {
        if qualifies(param) {
            body.push('_');
            body.push_str(&sanitize_appended(param));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appended(query: &str) -> String {
        let mut body = String::from("book");
        append_params(&mut body, query);
        body
    }

    #[test]
    fn params_appended_in_order() {
        assert_eq!(appended("id=42&lang=ru"), "book_id=42_lang=ru");
    }

    #[test]
    fn credentials_never_appear() {
        let out = appended("username=bob&id=42&password=hunter2");
        assert_eq!(out, "book_id=42");
        assert!(!out.contains("username="));
        assert!(!out.contains("password="));
    }

    #[test]
    fn empty_values_are_dropped() {
        assert_eq!(appended("token=&id=7"), "book_id=7");
    }

    #[test]
    fn valueless_params_are_kept() {
        assert_eq!(appended("draft&id=7"), "book_draft_id=7");
    }

    #[test]
    fn unsafe_characters_in_values_are_replaced() {
        assert_eq!(appended("path=/a/b"), "book_path=_a_b");
        assert_eq!(appended("q=a*b?c"), "book_q=a_b_c");
    }

    #[test]
    fn duplicate_params_are_not_deduplicated() {
        assert_eq!(appended("id=1&id=1"), "book_id=1_id=1");
    }
}
