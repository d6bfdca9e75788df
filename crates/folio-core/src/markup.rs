//! The lightweight emphasis markup allowed inside author lines.

/// Tags that may appear verbatim in an author line.
pub const EMPHASIS_TAGS: &[&str] = &["<strong>", "</strong>", "<em>", "</em>"];

/// Remove every allowed emphasis tag, leaving the plain text.
pub fn strip_emphasis(s: &str) -> String {
    let mut out = s.to_string();
    for tag in EMPHASIS_TAGS {
        out = out.replace(tag, "");
    }
    out
}

/// Text wrapped in any emphasis tag, in order of appearance.
///
/// Used to find the highlighted author (normally the site owner).
pub fn emphasized_spans(s: &str) -> Vec<String> {
    let mut spans = Vec::new();
    let mut rest = s;
    loop {
        let start = match (rest.find("<strong>"), rest.find("<em>")) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => break,
        };
        let after = &rest[start..];
        let (open, close) = if after.starts_with("<strong>") {
            ("<strong>", "</strong>")
        } else {
            ("<em>", "</em>")
        };
        let inner_start = start + open.len();
        match rest[inner_start..].find(close) {
            Some(len) => {
                let text = strip_emphasis(&rest[inner_start..inner_start + len]);
                if !text.trim().is_empty() {
                    spans.push(text.trim().to_string());
                }
                rest = &rest[inner_start + len + close.len()..];
            }
            None => break,
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_nested_emphasis() {
        let s = "A. One, <strong><em>B. Two</em></strong>, C. Three";
        assert_eq!(strip_emphasis(s), "A. One, B. Two, C. Three");
    }

    #[test]
    fn strip_leaves_plain_text_alone() {
        assert_eq!(strip_emphasis("Plain & simple"), "Plain & simple");
    }

    #[test]
    fn emphasized_spans_finds_owner() {
        let s = "A. One, <strong><em>B. Two</em></strong>, C. Three";
        assert_eq!(emphasized_spans(s), vec!["B. Two".to_string()]);
    }

    #[test]
    fn emphasized_spans_ignores_unclosed_tag() {
        assert!(emphasized_spans("A. One, <em>B. Two").is_empty());
    }
}
