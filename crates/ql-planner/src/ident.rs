/// Wraps an identifier in backticks, doubling any embedded backtick.
pub fn quote_identifier(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Renders a filter key as a SQL expression.
///
/// `name` becomes `` `name` ``; a composite key `first+last` becomes
/// `` concat(`first`,`last`) ``.
pub fn field_expr(key: &str) -> String {
    if !key.contains('+') {
        return quote_identifier(key);
    }

    let parts = key
        .split('+')
        .map(quote_identifier)
        .collect::<Vec<_>>()
        .join(",");
    format!("concat({parts})")
}

/// Single-quoted SQL string literal for text embedded in the query itself
/// (JSON paths).
pub fn quote_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// `?,?,?` for `count` bind parameters.
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(",")
}

/// Number of `?` bind parameters in `sql`, ignoring any inside `'...'` string
/// literals or `` `...` `` identifiers. Doubled quotes toggle twice and stay
/// inside the literal.
pub fn count_placeholders(sql: &str) -> usize {
    let mut quote = None;
    let mut count = 0;

    for c in sql.chars() {
        match (quote, c) {
            (None, '\'' | '`') => quote = Some(c),
            (None, '?') => count += 1,
            (Some(open), _) if c == open => quote = None,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("`a` in (?,?,?)"), 3);
        assert_eq!(count_placeholders("json_contains_path(`a`,'all','$.x?') = ?"), 1);
        assert_eq!(count_placeholders("`we?ird` = ? and `b` like ?"), 2);
        assert_eq!(count_placeholders("json_extract(`a`,'$.it''s?') = ?"), 1);
        assert_eq!(count_placeholders(""), 0);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("name"), "`name`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_field_expr_composite() {
        assert_eq!(field_expr("age"), "`age`");
        assert_eq!(field_expr("first+last"), "concat(`first`,`last`)");
        assert_eq!(field_expr("a+b+c"), "concat(`a`,`b`,`c`)");
    }

    #[test]
    fn test_quote_str() {
        assert_eq!(quote_str("$.a"), "'$.a'");
        assert_eq!(quote_str("$.it's"), "'$.it''s'");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?,?,?");
    }
}
