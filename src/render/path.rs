//! Writer for the restricted SVG path mini-language produced by the geometry
//! builders.
//!
//! Commands are emitted as space-delimited tokens (`M x y`, `L x y`, `H x`,
//! `V y`, `C x1 y1 x2 y2 x y`, `A rx ry 0 large sweep x y`, `Z`) so consumers
//! can splice the string into a vector-graphics element verbatim.

use std::fmt::Write as _;

/// Fractional digits kept when printing coordinates.
const PATH_DECIMALS: f64 = 1_000_000.0;

/// Magnitude above which rounding to `PATH_DECIMALS` would overflow or lose
/// nothing; such values are printed as-is.
const PATH_ROUNDING_LIMIT: f64 = 1e15;

/// Formats a coordinate as plain decimal text.
///
/// Values are rounded to six fractional digits, trailing zeros are dropped
/// (`40.0` prints as `40`) and negative zero prints as `0`. Rust's `Display`
/// for `f64` never switches to scientific notation. Non-finite input prints as
/// `0` so a bad sample cannot corrupt the whole path.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }

    let mut rounded = if value.abs() < PATH_ROUNDING_LIMIT {
        (value * PATH_DECIMALS).round() / PATH_DECIMALS
    } else {
        value
    };
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{rounded}")
}

/// Incremental path string builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    out: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the buffer for roughly `commands` commands.
    #[must_use]
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            out: String::with_capacity(commands.saturating_mul(24)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command('M');
        self.number(x).number(y)
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command('L');
        self.number(x).number(y)
    }

    pub fn horizontal_to(&mut self, x: f64) -> &mut Self {
        self.command('H');
        self.number(x)
    }

    pub fn vertical_to(&mut self, y: f64) -> &mut Self {
        self.command('V');
        self.number(y)
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.command('C');
        self.number(x1)
            .number(y1)
            .number(x2)
            .number(y2)
            .number(x)
            .number(y)
    }

    /// Elliptical arc with a fixed x-axis rotation of `0`.
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.command('A');
        self.number(rx).number(ry);
        self.out.push_str(" 0");
        self.flag(large_arc).flag(sweep);
        self.number(x).number(y)
    }

    pub fn close(&mut self) -> &mut Self {
        self.command('Z');
        self
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn command(&mut self, cmd: char) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(cmd);
    }

    fn number(&mut self, value: f64) -> &mut Self {
        let _ = write!(self.out, " {}", format_number(value));
        self
    }

    fn flag(&mut self, on: bool) -> &mut Self {
        self.out.push_str(if on { " 1" } else { " 0" });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{PathBuilder, format_number};

    #[test]
    fn numbers_print_as_plain_trimmed_decimals() {
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1e-9), "0");
        assert_eq!(format_number(12.345_678_9), "12.345679");
        assert_eq!(format_number(f64::NAN), "0");
        assert!(!format_number(1e20).contains('e'));
    }

    #[test]
    fn builder_joins_commands_with_single_spaces() {
        let mut path = PathBuilder::new();
        path.move_to(50.0, 50.0)
            .line_to(90.0, 50.0)
            .arc_to(40.0, 40.0, false, true, 50.0, 90.0)
            .close();
        assert_eq!(path.finish(), "M 50 50 L 90 50 A 40 40 0 0 1 50 90 Z");
    }

    #[test]
    fn builder_emits_axis_aligned_and_cubic_commands() {
        let mut path = PathBuilder::with_capacity(3);
        path.move_to(0.0, 0.0)
            .horizontal_to(5.0)
            .vertical_to(2.5)
            .cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(path.finish(), "M 0 0 H 5 V 2.5 C 1 2 3 4 5 6");
    }
}
