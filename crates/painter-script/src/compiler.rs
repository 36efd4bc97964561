use log::*;

use painter_engine::coords::{Point, Rect, SurfaceSize};
use painter_engine::op::{Figure, Operation};

use crate::error::CompileError;
use crate::lexer::{Lexer, Line};

// ── Config ────────────────────────────────────────────────────────────────

/// Compiler settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Surface units per 1.0 of a script coordinate.
    pub edge_length: u32,
}

impl CompilerConfig {
    pub const fn new(edge_length: u32) -> Self {
        Self { edge_length }
    }

    /// Scales coordinates to the width of a surface of `size`.
    pub const fn for_surface(size: SurfaceSize) -> Self {
        Self::new(size.width)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::for_surface(SurfaceSize::default())
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

/// The script vocabulary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    White,
    Green,
    Update,
    BgRect,
    Figure,
    Move,
    Reset,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "white" => Command::White,
            "green" => Command::Green,
            "update" => Command::Update,
            "bgrect" => Command::BgRect,
            "figure" => Command::Figure,
            "move" => Command::Move,
            "reset" => Command::Reset,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::White => "white",
            Command::Green => "green",
            Command::Update => "update",
            Command::BgRect => "bgrect",
            Command::Figure => "figure",
            Command::Move => "move",
            Command::Reset => "reset",
        }
    }

    /// Required argument count. Extra arguments are ignored.
    pub fn arity(self) -> usize {
        match self {
            Command::BgRect => 4,
            Command::Figure | Command::Move => 2,
            Command::White | Command::Green | Command::Update | Command::Reset => 0,
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────

/// Consolidated state of one compile pass.
struct CompileState {
    background: Operation,
    background_rect: Option<Rect>,
    figures: Vec<Figure>,
    moves: Vec<Operation>,
    publish: bool,
}

impl Default for CompileState {
    fn default() -> Self {
        Self {
            background: Operation::Reset,
            background_rect: None,
            figures: Vec::new(),
            moves: Vec::new(),
            publish: false,
        }
    }
}

impl CompileState {
    /// Emission order: background, background rect, moves, figures, publish.
    fn finish(self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(3 + self.moves.len() + self.figures.len());

        ops.push(self.background);
        ops.extend(self.background_rect.map(Operation::FillBackgroundRect));
        ops.extend(self.moves);
        ops.extend(self.figures.into_iter().map(Operation::AddFigure));
        if self.publish {
            ops.push(Operation::Publish);
        }

        ops
    }
}

// ── Compiler ──────────────────────────────────────────────────────────────

/// Compiles drawing scripts into operation lists.
///
/// Each call starts from fresh state, so a `Compiler` can be shared freely
/// between threads. Within one script, lines are consolidated:
///
/// - `white`/`green`/`reset` pick the single background fill (default reset)
/// - the last `bgrect` wins
/// - every `move` references the figures declared *before* it
/// - `update` appends a publish at the end
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> CompilerConfig {
        self.config
    }

    /// Compiles `script` into an ordered operation list.
    ///
    /// Stops at the first bad line; nothing is returned in that case.
    pub fn compile(&self, script: &str) -> Result<Vec<Operation>, CompileError> {
        let mut state = CompileState::default();
        let mut lines = 0;

        for line in Lexer::new(script) {
            let line = line.inspect_err(|e| debug!("compile failed: {e}"))?;
            self.apply_line(&mut state, line)
                .inspect_err(|e| debug!("compile failed: {e}"))?;
            lines += 1;
        }

        let ops = state.finish();
        trace!("compiled {} lines into {} operations", lines, ops.len());
        Ok(ops)
    }

    /// Like [`compile`](Self::compile), wrapped in a single batch operation.
    pub fn compile_batch(&self, script: &str) -> Result<Operation, CompileError> {
        self.compile(script).map(Operation::Batch)
    }

    fn apply_line(&self, state: &mut CompileState, line: Line<'_>) -> Result<(), CompileError> {
        let command = Command::from_name(line.command).ok_or_else(|| {
            CompileError::UnknownCommand {
                line: line.number,
                name: line.command.to_string(),
            }
        })?;

        let args = line
            .args
            .iter()
            .map(|token| self.scale(line.number, token))
            .collect::<Result<Vec<i32>, _>>()?;

        if args.len() < command.arity() {
            return Err(CompileError::MissingArguments {
                line: line.number,
                command: command.name(),
                required: command.arity(),
                got: args.len(),
            });
        }

        match command {
            Command::White => state.background = Operation::white(),
            Command::Green => state.background = Operation::green(),
            Command::Update => state.publish = true,
            Command::BgRect => {
                state.background_rect = Some(Rect::new(args[0], args[1], args[2], args[3]));
            }
            Command::Figure => {
                state.figures.push(Figure::new(Point::new(args[0], args[1])));
            }
            Command::Move => state.moves.push(Operation::MoveFigures {
                delta: Point::new(args[0], args[1]),
                figures: state.figures.clone(),
            }),
            Command::Reset => *state = CompileState::default(),
        }

        Ok(())
    }

    /// Converts a fractional coordinate to surface units, truncating toward zero.
    fn scale(&self, line: usize, token: &str) -> Result<i32, CompileError> {
        let invalid = || CompileError::InvalidArgument {
            line,
            token: token.to_string(),
        };

        let value: f64 = token.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok((value * f64::from(self.config.edge_length)) as i32)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

/// Compiles `script` with the default configuration.
pub fn compile(script: &str) -> Result<Vec<Operation>, CompileError> {
    Compiler::default().compile(script)
}
