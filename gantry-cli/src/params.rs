//! `key=value` argument parsing

/// Parse a stackable `key=value` job parameter argument
///
/// The first `=` splits the pair, so the value may itself contain `=`.
/// Used as a clap value parser.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!(
            "could not parse '{raw}', please use key=value format"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_pair() {
        assert_eq!(
            parse_param("color=purple"),
            Ok(("color".to_string(), "purple".to_string()))
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(
            parse_param("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_empty_value_is_allowed() {
        assert_eq!(parse_param("flag="), Ok(("flag".to_string(), String::new())));
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        assert!(parse_param("color").is_err());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(parse_param("=purple").is_err());
    }
}
