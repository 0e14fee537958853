//! Points and vector paths in a chart's virtual canvas.
//!
//! Paths format as SVG path data, e.g. `M 0 200 L 200 110 Z`.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;
use serde::Serializer;

/// A coordinate in the virtual canvas. The y axis points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Self { x, y }
    }

    /// Returns the point on the circle around `center` at `angle` degrees,
    /// measured clockwise from the positive x axis.
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
        let radians = angle.to_radians();

        Self {
            x: center.x + radius * radians.cos(),
            y: center.y + radius * radians.sin(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", Num(self.x), Num(self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Command::MoveTo(p) => write!(f, "M {p}"),
            Command::LineTo(p) => write!(f, "L {p}"),
            Command::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {r} {r} 0 {large} {sweep} {to}",
                r = Num(radius),
                large = u8::from(large_arc),
                sweep = u8::from(sweep),
            ),
            Command::Close => f.write_str("Z"),
        }
    }
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<Command>,
}

impl PathData {
    pub fn new() -> PathData {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> PathData {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(mut self, p: Point) -> PathData {
        self.commands.push(Command::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> PathData {
        self.commands.push(Command::LineTo(p));
        self
    }

    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> PathData {
        self.commands.push(Command::Arc {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> PathData {
        self.commands.push(Command::Close);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|c| match *c {
            Command::MoveTo(p) | Command::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
            Command::Arc { radius, to, .. } => {
                radius.is_finite() && to.x.is_finite() && to.y.is_finite()
            }
            Command::Close => true,
        })
    }
}

impl Display for PathData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut commands = self.commands.iter();

        if let Some(first) = commands.next() {
            write!(f, "{first}")?;
        }

        for command in commands {
            write!(f, " {command}")?;
        }

        Ok(())
    }
}

impl Serialize for PathData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Formats a number the way it reads in SVG attributes: integral values
/// without a fraction and negative zero as zero.
pub struct Num(pub f64);

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            Display::fmt(&self.0, f)
        }
    }
}
