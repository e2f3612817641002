// Pshe Argument Tokenizer
// Splits a command line into arguments with simple single/double quoting

/// Tokenizer errors (only reported in strict mode)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("unterminated {quote} quote starting at char {position}")]
    UnterminatedQuote { quote: char, position: usize },
}

/// Result of splitting a command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitArgs {
    /// Arguments in left-to-right order
    pub tokens: Vec<String>,
    /// Quote that was still open at end of input, with the char index where
    /// it was opened
    pub open_quote: Option<(char, usize)>,
}

impl SplitArgs {
    /// Tokens, or an error if a quote was left open
    pub fn strict(self) -> Result<Vec<String>, TokenizeError> {
        match self.open_quote {
            Some((quote, position)) => Err(TokenizeError::UnterminatedQuote { quote, position }),
            None => Ok(self.tokens),
        }
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens
    Normal,
    /// Inside a token, outside quotes
    InToken,
    InSingleQuote,
    InDoubleQuote,
}

/// Split `input` into arguments.
///
/// - Runs of chars other than whitespace and quotes are token text.
/// - `'...'` and `"..."` contribute their content without the quotes; the
///   other quote char is literal inside them.
/// - Quoted regions and bare text with no whitespace between them form a
///   single token: `a"b c"d` gives `ab cd`. A lone `""` gives an empty token.
/// - Whitespace outside quotes separates tokens.
///
/// A quote still open at end of input is closed there. Its content is kept
/// and the open quote is reported in [`SplitArgs::open_quote`].
pub fn split_args(input: &str) -> SplitArgs {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Normal;
    let mut quote_start = 0;

    for (index, c) in input.chars().enumerate() {
        state = match state {
            State::Normal | State::InToken => match c {
                '\'' => {
                    quote_start = index;
                    State::InSingleQuote
                }
                '"' => {
                    quote_start = index;
                    State::InDoubleQuote
                }
                c if c.is_whitespace() => {
                    if state == State::InToken {
                        tokens.push(std::mem::take(&mut current));
                    }
                    State::Normal
                }
                c => {
                    current.push(c);
                    State::InToken
                }
            },
            State::InSingleQuote if c == '\'' => State::InToken,
            State::InDoubleQuote if c == '"' => State::InToken,
            quoted => {
                current.push(c);
                quoted
            }
        };
    }

    let open_quote = match state {
        State::Normal => None,
        State::InToken => {
            tokens.push(current);
            None
        }
        State::InSingleQuote | State::InDoubleQuote => {
            let quote = if state == State::InSingleQuote { '\'' } else { '"' };
            tokens.push(current);
            Some((quote, quote_start))
        }
    };

    SplitArgs { tokens, open_quote }
}

/// Split `input` into arguments, closing any unterminated quote at the end
pub fn tokenize(input: &str) -> Vec<String> {
    split_args(input).into_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(input: &str) -> Vec<String> {
        tokenize(input)
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(toks("foo bar"), vec!["foo", "bar"]);
        assert_eq!(toks("  foo \t bar\n"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }

    #[test]
    fn test_double_quoted_argument() {
        assert_eq!(toks(r#"foo "bar baz""#), vec!["foo", "bar baz"]);
    }

    #[test]
    fn test_commit_message() {
        assert_eq!(
            toks(r#"git commit -m "fix bug""#),
            vec!["git", "commit", "-m", "fix bug"]
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(toks("log --format='%h %s'"), vec!["log", "--format=%h %s"]);
    }

    #[test]
    fn test_adjacent_quotes_concatenate() {
        assert_eq!(toks(r#"a"b c"d"#), vec!["ab cd"]);
        assert_eq!(toks(r#"foo"bar baz"qux"#), vec!["foobar bazqux"]);
        assert_eq!(toks(r#""bar baz"qux"#), vec!["bar bazqux"]);
        assert_eq!(toks(r#"'a b'"c d""#), vec!["a bc d"]);
    }

    #[test]
    fn test_other_quote_is_literal_inside() {
        assert_eq!(toks(r#""it's""#), vec!["it's"]);
        assert_eq!(toks(r#"'say "hi"'"#), vec![r#"say "hi""#]);
    }

    #[test]
    fn test_empty_quotes_make_empty_token() {
        assert_eq!(toks(r#"commit -m """#), vec!["commit", "-m", ""]);
        assert_eq!(toks("''"), vec![""]);
    }

    #[test]
    fn test_unicode_tokens() {
        assert_eq!(toks("пше «ёж» 🦀"), vec!["пше", "«ёж»", "🦀"]);
    }

    #[test]
    fn test_well_formed_has_no_open_quote() {
        let split = split_args(r#"a "b" 'c'"#);
        assert_eq!(split.open_quote, None);
        assert_eq!(split.strict(), Ok(vec!["a".into(), "b".into(), "c".into()]));
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let split = split_args(r#"commit -m "fix bug"#);
        assert_eq!(split.tokens, vec!["commit", "-m", "fix bug"]);
        assert_eq!(split.open_quote, Some(('"', 10)));
    }

    #[test]
    fn test_unterminated_quote_strict_error() {
        let err = split_args("a 'b").strict().unwrap_err();
        assert_eq!(
            err,
            TokenizeError::UnterminatedQuote {
                quote: '\'',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "unterminated ' quote starting at char 2");
    }

    #[test]
    fn test_lone_quote() {
        let split = split_args("\"");
        assert_eq!(split.tokens, vec![""]);
        assert_eq!(split.open_quote, Some(('"', 0)));
    }
}
