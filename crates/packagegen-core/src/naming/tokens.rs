//! Tokenization of identifier fragments into word and number runs

/// Split an identifier fragment into word and number tokens.
///
/// A token is either a run of ASCII digits or a letter followed by a run of
/// lowercase letters. Separators (`-`, `_`, `.`, and anything else that is
/// neither a letter nor a digit) produce no token of their own and only mark
/// a boundary. An uppercase letter always starts a new token, which is what
/// splits camelCase and PascalCase input.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if chars[i].is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else {
            // Separator: no token, just a boundary
            i += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<String> {
        tokenize(input)
    }

    #[test]
    fn test_single_word() {
        assert_eq!(tokens("bar"), vec!["bar"]);
    }

    #[test]
    fn test_dash_separated_words() {
        assert_eq!(tokens("bar-baz"), vec!["bar", "baz"]);
    }

    #[test]
    fn test_numbers_split_words() {
        assert_eq!(tokens("bar99baz"), vec!["bar", "99", "baz"]);
    }

    #[test]
    fn test_mixed_separators_and_numbers() {
        assert_eq!(
            tokens("bar-1.2baz__33baw"),
            vec!["bar", "1", "2", "baz", "33", "baw"]
        );
    }

    #[test]
    fn test_camel_case_boundaries() {
        assert_eq!(tokens("superFeature"), vec!["super", "Feature"]);
        assert_eq!(tokens("SuperFeature"), vec!["Super", "Feature"]);
    }

    #[test]
    fn test_consecutive_uppercase_letters() {
        // Each capital opens its own token, so acronyms split letter by letter
        assert_eq!(tokens("XYPlot"), vec!["X", "Y", "Plot"]);
    }

    #[test]
    fn test_separators_only() {
        assert!(tokens("-_.").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
    }
}
