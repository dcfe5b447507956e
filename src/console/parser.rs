//! Command line parser
//!
//! Whitespace split: a command and at most two arguments; extra tokens are
//! ignored.

/// Maximum number of arguments kept per line
pub const MAX_ARGS: usize = 2;

/// Parsed command line borrowing from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The command name (first token), empty for a blank line
    pub command: &'a str,
    pub args: [Option<&'a str>; MAX_ARGS],
}

impl<'a> ParsedCommand<'a> {
    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied().flatten()
    }

    /// Number of arguments present
    pub fn arg_count(&self) -> usize {
        self.args.iter().flatten().count()
    }

    /// True for a blank line
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Parse a command line into command and arguments
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or("");

    let mut args = [None; MAX_ARGS];
    for (slot, token) in args.iter_mut().zip(tokens) {
        *slot = Some(token);
    }

    ParsedCommand { command, args }
}
