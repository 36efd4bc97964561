use std::fmt;

/// A script compile error.
///
/// Every variant aborts the whole compile; no operations are produced.
/// `line` is the 1-based source line where the error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A line with no fields (empty or whitespace only).
    EmptyLine { line: usize },
    /// First field is not a known command.
    UnknownCommand { line: usize, name: String },
    /// An argument field is not a finite decimal number.
    InvalidArgument { line: usize, token: String },
    /// A known command with fewer arguments than it requires.
    MissingArguments {
        line: usize,
        command: &'static str,
        required: usize,
        got: usize,
    },
}

impl CompileError {
    pub fn line(&self) -> usize {
        match self {
            CompileError::EmptyLine { line }
            | CompileError::UnknownCommand { line, .. }
            | CompileError::InvalidArgument { line, .. }
            | CompileError::MissingArguments { line, .. } => *line,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::EmptyLine { line } => write!(f, "line {line}: line is empty"),
            CompileError::UnknownCommand { line, name } => {
                write!(f, "line {line}: unknown command '{name}'")
            }
            CompileError::InvalidArgument { line, token } => {
                write!(f, "line {line}: argument '{token}' is not a number")
            }
            CompileError::MissingArguments { line, command, required, got } => write!(
                f,
                "line {line}: '{command}' needs {required} arguments, got {got}"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
