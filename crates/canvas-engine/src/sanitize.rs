//! Code-fence removal for model replies.

/// The delimiter models use to wrap code and structured blocks.
pub const FENCE_MARKER: &str = "```";

/// Strips an optional markdown code fence wrapping `raw`.
///
/// Text that does not start with [`FENCE_MARKER`] after trimming is returned
/// trimmed and otherwise untouched. For fenced text the opening line (with any
/// language tag) and a closing fence line are dropped; everything between them
/// is kept verbatim. A lone opening fence yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE_MARKER) {
        return trimmed.to_string();
    }

    let mut lines = split_lines(trimmed);
    if lines.first().is_some_and(|l| l.starts_with(FENCE_MARKER)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.starts_with(FENCE_MARKER)) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

/// Splits on every line boundary a model reply may use.
///
/// Besides `\n` and `\r\n` this includes a lone `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators. A trailing boundary does not produce an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(sanitize("  {\"a\": 1}\n\n"), "{\"a\": 1}");
        assert_eq!(sanitize("not json at all"), "not json at all");
        assert_eq!(sanitize("inner ``` stays"), "inner ``` stays");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(" \n\t "), "");
    }

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = "```json\n{\"Problem\": [\"a\", \"b\", \"c\"]}\n```";
        assert_eq!(sanitize(raw), "{\"Problem\": [\"a\", \"b\", \"c\"]}");
    }

    #[test]
    fn strips_bare_fence_and_surrounding_whitespace() {
        let raw = "\n  ```\n  {\"x\": 1}  \n```  \n";
        assert_eq!(sanitize(raw), "{\"x\": 1}");
    }

    #[test]
    fn keeps_body_lines_verbatim() {
        let raw = "```json\n{\n  \"a\": 1,\n  \"b\": \"```\"\n}\n```";
        assert_eq!(sanitize(raw), "{\n  \"a\": 1,\n  \"b\": \"```\"\n}");
    }

    #[test]
    fn missing_closing_fence_drops_only_opening_line() {
        assert_eq!(sanitize("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn lone_opening_fence_yields_empty() {
        assert_eq!(sanitize("```json"), "");
        assert_eq!(sanitize("```"), "");
    }

    #[test]
    fn fence_pair_without_body_yields_empty() {
        assert_eq!(sanitize("```\n```"), "");
    }

    #[test]
    fn trailing_text_after_closing_fence_is_kept() {
        assert_eq!(sanitize("```json\n{}\n```\nHope this helps"), "{}\n```\nHope this helps");
    }

    #[test]
    fn handles_crlf_line_endings() {
        assert_eq!(sanitize("```json\r\n{\"a\": 1}\r\n```"), "{\"a\": 1}");
    }

    #[test]
    fn handles_cr_only_line_endings() {
        assert_eq!(sanitize("```json\r{\"a\": 1}\r```"), "{\"a\": 1}");
        assert_eq!(sanitize("```json\r{\r  \"a\": 1\r}\r```"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn handles_unicode_line_separators() {
        assert_eq!(sanitize("```json\u{2028}{}\u{2029}```"), "{}");
        assert_eq!(sanitize("```json\u{85}{}\u{85}```"), "{}");
        assert_eq!(sanitize("```json\u{0c}{}\u{0b}```"), "{}");
    }

    #[test]
    fn split_lines_treats_crlf_as_one_boundary() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "",
            "plain text",
            "  {\"a\": 1}  ",
            "```json\n{\"a\": 1}\n```",
            "```json",
            "```json\n{}\n```\ntrailing",
            "```python\nprint('hi')",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
