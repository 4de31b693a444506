#[cfg(test)]
mod tests {
    use super::super::list_item::*;

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("Fix typo", 10), "Fix typo");

        let title = "Add a contributing guide for first time contributors";
        assert_eq!(truncate_message(title, 20), "Add a contributin...");

        // Newlines are flattened before measuring
        assert_eq!(truncate_message("Steps:\n1. clone", 20), "Steps: 1. clone");
    }

    #[test]
    fn test_truncate_to_tiny_width() {
        assert_eq!(truncate_message("abcdef", 3), "abc");
        assert_eq!(truncate_message("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let title = "ドキュメントの誤字を修正する作業";
        assert_eq!(truncate_message(title, 10), "ドキュメントの...");
    }

    #[test]
    fn test_wrap_text() {
        let wrapped = wrap_text("Good first issue for new contributors", 12);
        assert_eq!(wrapped, vec!["Good first", "issue for", "new", "contributors"]);

        assert_eq!(wrap_text("Short", 10), vec!["Short"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("Hello", 0), Vec::<String>::new());

        // Long words are never split
        assert_eq!(
            wrap_text("internationalization", 10),
            vec!["internationalization"]
        );

        // Runs of whitespace collapse
        assert_eq!(wrap_text("a   b\n\nc", 20), vec!["a b c"]);
    }
}
