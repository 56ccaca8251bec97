//! Comma-delimited field splitting
//!
//! RFC4180-style: a field may be wrapped in double quotes, an embedded quote
//! is escaped by doubling it, and commas inside quotes are literal content.

/// Split one line into its fields
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_row() {
        assert_eq!(parse_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_sample_training_row() {
        let fields = parse_record(
            "4,1467811594,Mon Apr 06 22:20:03 PDT 2009,NO_QUERY,peruna_pony,\"Beat TCU\"",
        );
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], "4");
        assert_eq!(fields[5], "Beat TCU");
    }

    #[test]
    fn test_quoted_field_keeps_comma() {
        assert_eq!(
            parse_record("0,\"hello, world\",x"),
            vec!["0", "hello, world", "x"]
        );
    }

    #[test]
    fn test_doubled_quote_escape() {
        assert_eq!(
            parse_record("4,\"she said \"\"hi\"\"\""),
            vec!["4", "she said \"hi\""]
        );
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(parse_record(""), vec![""]);
        assert_eq!(parse_record("a,,c"), vec!["a", "", "c"]);
        assert_eq!(parse_record("a,b,"), vec!["a", "b", ""]);
    }
}
