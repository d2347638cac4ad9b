const BACKGROUND_MARKER: &str = "&";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub args: Vec<String>,
    pub background: bool,
}

impl Tokens {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Splits `line` on runs of spaces. A lone `&` marks the command for
/// background execution instead of becoming an argument. Scanning stops
/// once `max_args` arguments are held.
pub fn tokenize(line: &str, max_args: usize) -> Tokens {
    let mut tokens = Tokens::default();

    for word in line.split(' ').filter(|w| !w.is_empty()) {
        if tokens.args.len() >= max_args {
            break;
        }
        if word == BACKGROUND_MARKER {
            tokens.background = true;
        } else {
            tokens.args.push(word.to_string());
        }
    }

    tokens
}
