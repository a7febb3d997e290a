/// How a single command-line token is interpreted outside verbatim mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name` or `--name=value`. The value is split at the first `=`.
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    /// `-abc`: a group of one-letter names, without the dash.
    Short(&'a str),
    /// Anything else, including a bare `-`.
    Extra,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn classify(arg: &'a str) -> Self {
        if let Some(body) = arg.strip_prefix("--") {
            return match body.split_once('=') {
                Some((name, value)) => Token::Long {
                    name,
                    value: Some(value),
                },
                None => Token::Long {
                    name: body,
                    value: None,
                },
            };
        }

        match arg.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => Token::Short(cluster),
            _ => Token::Extra,
        }
    }
}
