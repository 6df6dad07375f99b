use pest::Parser;
use pest_derive::Parser;

use crate::token::{Property, Section, Token};

#[derive(Parser)]
#[grammar = "ini.pest"]
struct LineParser;

/// Classify one raw line into a token.
///
/// Precedence is section header, then property, then comment; anything the
/// grammar rejects becomes an [`Token::Error`] carrying the raw line.
/// Classification never fails.
pub fn classify(line: &str) -> Token {
    let mut pairs = match LineParser::parse(Rule::line, line) {
        Ok(pairs) => pairs,
        Err(_) => return Token::Error(line.to_string()),
    };

    let Some(pair) = pairs.next() else {
        return Token::Error(line.to_string());
    };

    match pair.as_rule() {
        Rule::section => {
            let name = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Token::Section(Section::new(name))
        }

        Rule::property => {
            let mut inner = pair.into_inner();
            let key = inner.next().map(|p| p.as_str()).unwrap_or("").trim();
            let value = inner.next().map(|p| p.as_str()).unwrap_or("").trim();
            Token::Property(unquote(key, value))
        }

        Rule::comment => {
            // The grammar strips leading whitespace and the marker; trailing
            // whitespace goes here so `" ; x "` stores " x".
            let text = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Token::Comment(text.trim_end().to_string())
        }

        Rule::blank => Token::Comment(String::new()),

        _ => Token::Error(line.to_string()),
    }
}

/// Strip exactly one pair of surrounding double quotes, marking the property
/// quoted. A value shorter than two characters cannot carry a pair.
fn unquote(key: &str, value: &str) -> Property {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Property::new(key, &value[1..value.len() - 1], true)
    } else {
        Property::new(key, value, false)
    }
}

/// Parse full document text into its top-level token sequence
pub fn parse(input: &str) -> Vec<Token> {
    let lines: Vec<&str> = input.lines().collect();
    build(&lines)
}

/// Consume an ordered line array into the top-level token sequence.
///
/// An explicit cursor threads through the array: each call to [`next_token`]
/// parses one top-level token, and a section absorbs following lines as
/// children until the next section header or end of input.
pub fn build(lines: &[&str]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    while cursor < lines.len() {
        tokens.push(next_token(lines, &mut cursor));
    }
    tokens
}

fn next_token(lines: &[&str], cursor: &mut usize) -> Token {
    let token = classify(lines[*cursor]);
    *cursor += 1;

    let Token::Section(mut section) = token else {
        return token;
    };

    while *cursor < lines.len() {
        let child = classify(lines[*cursor]);
        if matches!(child, Token::Section(_)) {
            // A new header ends this section and stays at the cursor as the
            // start of the next top-level token.
            break;
        }
        *cursor += 1;
        section.push(child);
    }

    Token::Section(section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_section() {
        let token = classify("[General]");
        match token {
            Token::Section(section) => assert_eq!(section.name(), "General"),
            other => panic!("expected section, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_property_splits_on_first_equals() {
        match classify("a = b = c") {
            Token::Property(property) => {
                assert_eq!(property.name(), "a");
                assert_eq!(property.raw_value(), "b = c");
                assert!(!property.is_quoted());
            }
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_quoted_property() {
        match classify(r#"name = "Alice""#) {
            Token::Property(property) => {
                assert_eq!(property.raw_value(), "Alice");
                assert!(property.is_quoted());
            }
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_comment_and_blank() {
        assert_eq!(classify("; a comment"), Token::Comment(" a comment".to_string()));
        assert_eq!(classify("  ;x"), Token::Comment("x".to_string()));
        assert_eq!(classify(""), Token::Comment(String::new()));
        assert_eq!(classify("   \t"), Token::Comment(String::new()));
    }

    #[test]
    fn test_classify_error() {
        assert_eq!(
            classify("not_a_valid_line_at_all"),
            Token::Error("not_a_valid_line_at_all".to_string())
        );
    }

    #[test]
    fn test_classify_bracket_edge_cases() {
        // too short for a header
        assert_eq!(classify("[]"), Token::Error("[]".to_string()));
        // header with a single-space name
        assert!(matches!(classify("[ ]"), Token::Section(_)));
        // inner brackets belong to the name
        match classify("[a]b]") {
            Token::Section(section) => assert_eq!(section.name(), "a]b"),
            other => panic!("expected section, got {:?}", other),
        }
        // headers win over properties
        match classify("[a=b]") {
            Token::Section(section) => assert_eq!(section.name(), "a=b"),
            other => panic!("expected section, got {:?}", other),
        }
        // an unterminated header with an equals sign is a property
        match classify("[a=b") {
            Token::Property(property) => assert_eq!(property.name(), "[a"),
            other => panic!("expected property, got {:?}", other),
        }
        // trailing text after the bracket disqualifies the header
        assert_eq!(classify("[a] "), Token::Error("[a] ".to_string()));
    }

    #[test]
    fn test_classify_empty_halves() {
        match classify("key=") {
            Token::Property(property) => {
                assert_eq!(property.name(), "key");
                assert_eq!(property.raw_value(), "");
            }
            other => panic!("expected property, got {:?}", other),
        }
        match classify("=value") {
            Token::Property(property) => {
                assert_eq!(property.name(), "");
                assert_eq!(property.raw_value(), "value");
            }
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_lone_quote_stays_unquoted() {
        match classify(r#"k = ""#) {
            Token::Property(property) => {
                assert_eq!(property.raw_value(), "\"");
                assert!(!property.is_quoted());
            }
            other => panic!("expected property, got {:?}", other),
        }
    }

    #[test]
    fn test_build_absorbs_children() {
        let lines = ["[S]", "a = 1", "; note", "junk!", "[T]", "b = 2"];
        let tokens = build(&lines);
        assert_eq!(tokens.len(), 2);

        let s = tokens[0].as_section().unwrap();
        assert_eq!(s.name(), "S");
        assert_eq!(s.children().len(), 3);
        assert!(matches!(&s.children()[1], Token::Comment(text) if text == " note"));
        assert!(matches!(&s.children()[2], Token::Error(raw) if raw == "junk!"));

        let t = tokens[1].as_section().unwrap();
        assert_eq!(t.name(), "T");
        assert_eq!(t.children().len(), 1);
    }

    #[test]
    fn test_build_empty_section() {
        let tokens = build(&["[A]", "[B]"]);
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].as_section().unwrap().children().is_empty());
        assert!(tokens[1].as_section().unwrap().children().is_empty());
    }

    #[test]
    fn test_build_section_at_end_of_input() {
        let tokens = build(&["k = 1", "[A]"]);
        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0], Token::Property(_)));
        assert!(tokens[1].as_section().unwrap().children().is_empty());
    }

    #[test]
    fn test_top_level_tokens_outside_sections() {
        let tokens = parse("x = 1\n; top comment\n[S]\ny = 2\n");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], Token::Property(_)));
        assert!(matches!(&tokens[1], Token::Comment(_)));
        assert!(matches!(&tokens[2], Token::Section(_)));
    }
}
