//! Compiler for the **painter script** language.
//!
//! A script is newline-delimited text with one command per line and
//! whitespace-separated fields. Coordinates are fractions of the surface edge
//! (`0.5` is the middle) and are truncated to whole surface units.
//!
//! | Command | Args | Effect |
//! |---------|------|--------|
//! | `white` / `green` | 0 | background fill |
//! | `bgrect x1 y1 x2 y2` | 4 | black background rectangle (last one wins) |
//! | `figure x y` | 2 | new T figure |
//! | `move dx dy` | 2 | shifts every figure declared so far |
//! | `update` | 0 | publish the frame |
//! | `reset` | 0 | discard everything above; black background |
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `CompileError` |
//! | [`lexer`] | `Lexer`, `Line` |
//! | [`compiler`] | `Compiler`, `CompilerConfig`, `compile` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use painter_engine::op::Operation;
//! use painter_script::{Compiler, CompilerConfig};
//!
//! let compiler = Compiler::new(CompilerConfig::new(800));
//! let ops = compiler.compile("green\nfigure 0.5 0.5\nupdate").unwrap();
//!
//! assert_eq!(ops.len(), 3);
//! assert!(matches!(ops.last(), Some(Operation::Publish)));
//! ```

pub mod compiler;
pub mod error;
pub mod lexer;

pub use compiler::{compile, Command, Compiler, CompilerConfig};
pub use error::CompileError;

#[cfg(test)]
mod compile_tests {
    use super::*;
    use painter_engine::coords::{Point, Rect, SurfaceSize};
    use painter_engine::op::Operation;
    use painter_engine::paint::Color;
    use painter_engine::surface::CpuSurface;

    fn compile800(src: &str) -> Vec<Operation> {
        Compiler::new(CompilerConfig::new(800)).compile(src).unwrap()
    }

    fn err(src: &str) -> CompileError {
        Compiler::new(CompilerConfig::new(800)).compile(src).unwrap_err()
    }

    fn names(ops: &[Operation]) -> Vec<&'static str> {
        ops.iter().map(Operation::name).collect()
    }

    fn figure_positions(ops: &[Operation]) -> Vec<Point> {
        ops.iter()
            .filter_map(|op| match op {
                Operation::AddFigure(f) => Some(f.position()),
                _ => None,
            })
            .collect()
    }

    // ── vocabulary ────────────────────────────────────────────────────────

    #[test] fn empty_script_is_just_reset() {
        assert_eq!(names(&compile800("")), vec!["reset"]);
    }

    #[test] fn white_replaces_default() {
        let ops = compile800("white");
        assert!(matches!(ops[..], [Operation::Fill(Color::WHITE)]));
    }

    #[test] fn last_color_wins() {
        let ops = compile800("white\ngreen");
        assert!(matches!(ops[..], [Operation::Fill(Color::GREEN)]));
    }

    #[test] fn update_appends_single_publish() {
        assert_eq!(names(&compile800("update\nupdate")), vec!["reset", "publish"]);
    }

    #[test] fn bgrect_scales_and_truncates() {
        let ops = compile800("bgrect 0.25 0.25 0.75 0.75");
        assert!(matches!(ops[0], Operation::Reset));
        assert!(matches!(ops[1], Operation::FillBackgroundRect(r) if r == Rect::new(200, 200, 600, 600)));
        assert_eq!(ops.len(), 2);
    }

    #[test] fn truncates_toward_zero() {
        let ops = compile800("figure 0.0019 -0.0019");
        assert_eq!(figure_positions(&ops), vec![Point::new(1, -1)]);
    }

    #[test] fn out_of_range_coordinates_saturate() {
        let ops = compile800("figure 1e10 -1e10\nmove 1e9 0");
        assert_eq!(figure_positions(&ops), vec![Point::new(i32::MAX, i32::MIN)]);
        assert!(ops.iter().any(|op| matches!(
            op, Operation::MoveFigures { delta, .. } if *delta == Point::new(i32::MAX, 0)
        )));
    }

    #[test] fn repeated_huge_moves_stick_at_the_edge() {
        let ops = compile800("figure 0 0\nmove 1e9 0\nmove 1e9 0");
        let mut s = CpuSurface::new(SurfaceSize::square(800));
        for op in &ops {
            op.apply(&mut s);
        }
        assert_eq!(figure_positions(&ops), vec![Point::new(i32::MAX, 0)]);
    }

    #[test] fn last_bgrect_wins() {
        let ops = compile800("bgrect 0 0 1 1\nbgrect 0.5 0.5 1 1");
        let rects: Vec<Rect> = ops.iter()
            .filter_map(|op| match op { Operation::FillBackgroundRect(r) => Some(*r), _ => None })
            .collect();
        assert_eq!(rects, vec![Rect::new(400, 400, 800, 800)]);
    }

    #[test] fn inverted_bgrect_passes_through() {
        let ops = compile800("bgrect 0.75 0.75 0.25 0.25");
        assert!(matches!(ops[1], Operation::FillBackgroundRect(r) if r == Rect::new(600, 600, 200, 200)));
    }

    #[test] fn figure_at_center() {
        assert_eq!(figure_positions(&compile800("figure 0.5 0.5")), vec![Point::new(400, 400)]);
    }

    #[test] fn extra_arguments_are_ignored() {
        assert_eq!(figure_positions(&compile800("figure 0.5 0.5 0.9")), vec![Point::new(400, 400)]);
        assert_eq!(names(&compile800("update 1")), vec!["reset", "publish"]);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test] fn emission_order() {
        let ops = compile800("update\nfigure 0.1 0.1\nmove 0.1 0.1\nbgrect 0 0 0.5 0.5\ngreen\nmove 0 0.1");
        assert_eq!(names(&ops), vec!["fill", "bgrect", "move", "move", "figure", "publish"]);
    }

    #[test] fn move_references_only_earlier_figures() {
        let ops = compile800("figure 0.1 0.1\nmove 0.1 0.1\nfigure 0.2 0.2");
        assert_eq!(names(&ops), vec!["reset", "move", "figure", "figure"]);

        let Operation::MoveFigures { delta, figures } = &ops[1] else { panic!() };
        assert_eq!(*delta, Point::new(80, 80));
        assert_eq!(figures.len(), 1);
        let Operation::AddFigure(first) = &ops[2] else { panic!() };
        assert!(figures[0].same_as(first));

        assert_eq!(figure_positions(&ops), vec![Point::new(80, 80), Point::new(160, 160)]);
    }

    #[test] fn moves_apply_before_figures_are_drawn() {
        let ops = compile800("figure 0.1 0.1\nmove 0.1 0.1\nfigure 0.2 0.2");
        let mut surface = painter_engine::surface::CpuSurface::new(
            painter_engine::coords::SurfaceSize::square(800),
        );
        for op in &ops {
            op.apply(&mut surface);
        }
        // The first figure was displaced onto the second one's position.
        assert_eq!(figure_positions(&ops), vec![Point::new(160, 160), Point::new(160, 160)]);
    }

    #[test] fn each_move_sees_its_own_prefix() {
        let ops = compile800("figure 0 0\nmove 0.1 0\nfigure 0 0\nmove 0.1 0");
        for op in &ops {
            op.apply(&mut painter_engine::surface::CpuSurface::new(
                painter_engine::coords::SurfaceSize::square(8),
            ));
        }
        assert_eq!(figure_positions(&ops), vec![Point::new(160, 0), Point::new(80, 0)]);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test] fn reset_clears_everything() {
        let ops = compile800("white\nbgrect 0 0 1 1\nfigure 0.5 0.5\nmove 0.1 0\nupdate\nreset");
        assert_eq!(names(&ops), vec!["reset"]);
    }

    #[test] fn reset_is_idempotent() {
        let once = compile800("green\nfigure 0.5 0.5\nreset\nfigure 0.2 0.2\nupdate");
        let twice = compile800("green\nfigure 0.5 0.5\nreset\nreset\nfigure 0.2 0.2\nupdate");
        assert_eq!(names(&once), names(&twice));
        assert_eq!(figure_positions(&once), figure_positions(&twice));
    }

    #[test] fn state_after_reset_is_fresh() {
        let ops = compile800("figure 0.1 0.1\nreset\nwhite\nmove 0.1 0.1");
        let Operation::MoveFigures { figures, .. } = &ops[1] else { panic!() };
        assert!(figures.is_empty());
        assert!(matches!(ops[0], Operation::Fill(Color::WHITE)));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test] fn err_unknown_command() {
        assert_eq!(err("invalidcommand"), CompileError::UnknownCommand {
            line: 1, name: "invalidcommand".into(),
        });
    }

    #[test] fn err_commands_are_case_sensitive() {
        assert!(matches!(err("White"), CompileError::UnknownCommand { .. }));
    }

    #[test] fn err_empty_line() {
        assert_eq!(err("white\n\nupdate"), CompileError::EmptyLine { line: 2 });
        assert_eq!(err("   "), CompileError::EmptyLine { line: 1 });
    }

    #[test] fn err_non_numeric_argument() {
        assert_eq!(err("figure 0.5 abc"), CompileError::InvalidArgument {
            line: 1, token: "abc".into(),
        });
        assert!(matches!(err("figure nan 0.5"), CompileError::InvalidArgument { .. }));
        assert!(matches!(err("move inf 0"), CompileError::InvalidArgument { .. }));
    }

    #[test] fn err_argument_checked_even_when_unused() {
        assert!(matches!(err("white x"), CompileError::InvalidArgument { .. }));
    }

    #[test] fn err_missing_arguments() {
        assert_eq!(err("white\nbgrect 0 0 1"), CompileError::MissingArguments {
            line: 2, command: "bgrect", required: 4, got: 3,
        });
        assert!(matches!(err("figure 0.5"), CompileError::MissingArguments { required: 2, got: 1, .. }));
        assert!(matches!(err("move"), CompileError::MissingArguments { required: 2, got: 0, .. }));
    }

    #[test] fn err_aborts_whole_script() {
        let e = err("white\nfigure 0.5 0.5\nupdate\nbogus");
        assert_eq!(e.line(), 4);
        assert_eq!(e.to_string(), "line 4: unknown command 'bogus'");
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test] fn default_scale_matches_default_surface() {
        let ops = compile("figure 0.5 0.25").unwrap();
        assert_eq!(figure_positions(&ops), vec![Point::new(200, 100)]);
    }

    #[test] fn batch_wraps_in_order() {
        let op = Compiler::default().compile_batch("white\nupdate").unwrap();
        let Operation::Batch(ops) = op else { panic!() };
        assert_eq!(names(&ops), vec!["fill", "publish"]);
    }
}
