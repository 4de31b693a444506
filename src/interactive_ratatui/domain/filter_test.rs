#[cfg(test)]
mod tests {
    use super::super::filter::*;

    #[test]
    fn test_blank_values_mean_no_constraint() {
        let filter = Filter::new(Some("  ".to_string()), Some(String::new()));
        assert!(filter.is_empty());
        assert_eq!(filter, Filter::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let filter = Filter::new(Some(" Go ".to_string()), Some(" parser ".to_string()));
        assert_eq!(filter.language(), Some("Go"));
        assert_eq!(filter.text(), Some("parser"));
        assert_eq!(filter, Filter::new(Some("Go".to_string()), Some("parser".to_string())));
    }

    #[test]
    fn test_equality_considers_both_dimensions() {
        let go = Filter::new(Some("Go".to_string()), None);
        let go_cli = go.with_text(Some("cli".to_string()));
        let rust_cli = go_cli.with_language(Some("Rust".to_string()));

        assert_ne!(go, go_cli);
        assert_ne!(go_cli, rust_cli);
        assert_eq!(rust_cli.text(), Some("cli"));
    }

    #[test]
    fn test_toggle_language_selects_then_clears() {
        let filter = Filter::default().with_text(Some("docs".to_string()));

        let selected = filter.toggle_language("Rust");
        assert_eq!(selected.language(), Some("Rust"));
        assert_eq!(selected.text(), Some("docs"));

        let switched = selected.toggle_language("Go");
        assert_eq!(switched.language(), Some("Go"));

        let cleared = switched.toggle_language("Go");
        assert_eq!(cleared.language(), None);
        assert_eq!(cleared.text(), Some("docs"));
    }

    #[test]
    fn test_cleared_only_touches_one_dimension() {
        let filter = Filter::new(Some("Go".to_string()), Some("cli".to_string()));

        let no_language = filter.cleared(FilterKind::Language);
        assert_eq!(no_language.language(), None);
        assert_eq!(no_language.text(), Some("cli"));

        let no_text = filter.cleared(FilterKind::Text);
        assert_eq!(no_text.language(), Some("Go"));
        assert_eq!(no_text.text(), None);
    }
}
