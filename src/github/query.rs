/// Qualifiers every search carries.
pub const BASE_QUALIFIERS: &str = "is:issue is:open label:\"good first issue\"";

/// Build the `q` parameter for `GET /search/issues`.
///
/// Languages containing spaces or symbols are quoted so `C#` and `C++`
/// survive the search syntax.
pub fn build_search_query(language: Option<&str>, text: Option<&str>) -> String {
    let mut query = String::from(BASE_QUALIFIERS);

    if let Some(language) = language.map(str::trim).filter(|l| !l.is_empty()) {
        query.push_str(" language:");
        if language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            query.push_str(language);
        } else {
            query.push('"');
            query.push_str(language);
            query.push('"');
        }
    }

    if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
        query.push(' ');
        query.push_str(text);
    }

    query
}
