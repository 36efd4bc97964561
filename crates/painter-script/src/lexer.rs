use crate::error::CompileError;

/// One non-empty script line split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'s> {
    /// 1-based line number.
    pub number: usize,
    pub command: &'s str,
    pub args: Vec<&'s str>,
}

/// Splits a script into [`Line`]s.
///
/// Lines end at `\n` (a preceding `\r` is dropped); a trailing newline does
/// not start another line. Fields are separated by runs of whitespace. A line
/// without fields is an error.
pub struct Lexer<'s> {
    lines: std::iter::Enumerate<std::str::Lines<'s>>,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { lines: src.lines().enumerate() }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Line<'s>, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, text) = self.lines.next()?;
        let number = index + 1;
        let mut fields = text.split_whitespace();

        let Some(command) = fields.next() else {
            return Some(Err(CompileError::EmptyLine { line: number }));
        };

        Some(Ok(Line { number, command, args: fields.collect() }))
    }
}
