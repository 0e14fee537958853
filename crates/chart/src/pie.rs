//! Pie chart geometry.
//!
//! Each data point becomes a wedge of a circle with radius 80 centred at
//! (100, 100). Wedges follow one another clockwise, starting at the
//! positive x axis, in the order of the data points.

use serde::Serialize;
use tracing::debug;

use crate::data::Color;
use crate::data::DataPoint;
use crate::data::check_finite;
use crate::error::InvalidInput;
use crate::error::Result;
use crate::format::percentage_label;
use crate::geometry::PathData;
use crate::geometry::Point;

pub const SIZE: f64 = 200.0;
pub const CENTER: Point = Point::new(100.0, 100.0);
pub const RADIUS: f64 = 80.0;
pub const DEFAULT_PALETTE: [&str; 5] = ["#2563eb", "#7c3aed", "#dc2626", "#ea580c", "#059669"];

const FULL_TURN: f64 = 360.0;
const ANGLE_TOLERANCE: f64 = 1e-9;

/// One slice of the pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub path: PathData,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_full_circle(&self) -> bool {
        is_full_turn(self.sweep())
    }
}

// A share within the tolerance of the whole pie is drawn as the full disc.
fn is_full_turn(sweep: f64) -> bool {
    sweep >= FULL_TURN - ANGLE_TOLERANCE
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
    pub value: f64,
    pub percentage: f64,
}

impl LegendEntry {
    /// The share rounded to one decimal place, e.g. `33.3%`.
    pub fn percentage_label(&self) -> String {
        percentage_label(self.percentage)
    }
}

/// The geometry of a rendered pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// The sum of the values. Infinite when the sum overflows.
    pub total: f64,
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    pub fn legend(&self) -> impl Iterator<Item = LegendEntry> + '_ {
        self.wedges.iter().map(|w| LegendEntry {
            color: w.color.clone(),
            label: w.label.clone(),
            value: w.value,
            percentage: w.percentage,
        })
    }
}

/// Builds pie charts from labelled shares.
#[derive(Debug, Clone)]
pub struct RadialShare {
    title: String,
    palette: Vec<Color>,
}

impl RadialShare {
    pub fn new(title: impl Into<String>) -> RadialShare {
        Self {
            title: title.into(),
            palette: default_palette(),
        }
    }

    /// Sets the wedge colors, cycled by index. An empty palette keeps the default one.
    pub fn palette(mut self, palette: Vec<Color>) -> RadialShare {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    pub fn render(&self, points: &[DataPoint]) -> Result<PieChart> {
        if points.is_empty() {
            return Err(InvalidInput::Empty.into());
        }

        check_finite(points)?;

        if let Some(index) = points.iter().position(|p| p.value < 0.0) {
            return Err(InvalidInput::NegativeValue { index }.into());
        }

        let total: f64 = points.iter().map(|p| p.value).sum();
        if total <= 0.0 {
            return Err(InvalidInput::NonPositiveTotal.into());
        }

        // Shares are taken relative to the largest value when the sum overflows.
        let unit = if total.is_finite() {
            1.0
        } else {
            points.iter().fold(0.0, |largest: f64, p| largest.max(p.value))
        };
        let scaled_total: f64 = points.iter().map(|p| p.value / unit).sum();

        let mut cumulative_percentage = 0.0;
        let mut wedges = Vec::with_capacity(points.len());

        for (i, point) in points.iter().enumerate() {
            let percentage = point.value / unit / scaled_total * 100.0;
            let start_angle = cumulative_percentage / 100.0 * FULL_TURN;
            let end_angle = (cumulative_percentage + percentage) / 100.0 * FULL_TURN;
            cumulative_percentage += percentage;

            let large_arc = percentage > 50.0;
            let start = Point::on_circle(CENTER, RADIUS, start_angle);
            let end = Point::on_circle(CENTER, RADIUS, end_angle);

            let path = if is_full_turn(end_angle - start_angle) {
                debug!(title = %self.title, label = %point.label, "wedge covers the full circle");
                full_circle(start_angle)
            } else {
                PathData::with_capacity(4)
                    .move_to(CENTER)
                    .line_to(start)
                    .arc_to(RADIUS, large_arc, true, end)
                    .close()
            };

            wedges.push(Wedge {
                label: point.label.clone(),
                value: point.value,
                percentage,
                start_angle,
                end_angle,
                large_arc,
                start,
                end,
                color: self.palette[i % self.palette.len()].clone(),
                path,
            });
        }

        Ok(PieChart {
            title: self.title.clone(),
            total,
            wedges,
        })
    }
}

pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.iter().map(|&c| Color::from(c)).collect()
}

// An arc whose end point equals its start point draws nothing, so a full
// turn is split into two half turns through the opposite point.
fn full_circle(start_angle: f64) -> PathData {
    let start = Point::on_circle(CENTER, RADIUS, start_angle);
    let opposite = Point::on_circle(CENTER, RADIUS, start_angle + FULL_TURN / 2.0);

    PathData::with_capacity(5)
        .move_to(CENTER)
        .line_to(start)
        .arc_to(RADIUS, true, true, opposite)
        .arc_to(RADIUS, true, true, start)
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::geometry::Command;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn render_two_halves() -> Result<()> {
        let data = vec![DataPoint::new("A", 50.0), DataPoint::new("B", 50.0)];

        let chart = RadialShare::new("Halves").render(&data)?;

        let angles: Vec<(f64, f64)> = chart
            .wedges
            .iter()
            .map(|w| (w.start_angle, w.end_angle))
            .collect();
        assert_eq!(vec![(0.0, 180.0), (180.0, 360.0)], angles);
        assert!(chart.wedges.iter().all(|w| w.percentage == 50.0));
        assert!(chart.wedges.iter().all(|w| !w.large_arc));

        let labels: Vec<String> = chart.legend().map(|e| e.percentage_label()).collect();
        assert_eq!(vec!["50.0%", "50.0%"], labels);

        Ok(())
    }

    #[test]
    fn wedge_path_follows_the_arc() -> Result<()> {
        let data = vec![DataPoint::new("A", 1.0), DataPoint::new("B", 3.0)];

        let chart = RadialShare::new("Quarter").render(&data)?;

        let first = &chart.wedges[0];
        assert!(close(first.end.x, 100.0));
        assert!(close(first.end.y, 180.0));
        assert_eq!(
            &[
                Command::MoveTo(CENTER),
                Command::LineTo(Point::new(180.0, 100.0)),
                Command::Arc {
                    radius: RADIUS,
                    large_arc: false,
                    sweep: true,
                    to: first.end,
                },
                Command::Close,
            ],
            first.path.commands()
        );
        assert!(chart.wedges[1].large_arc);

        Ok(())
    }

    #[test]
    fn zero_share_keeps_its_legend_entry() -> Result<()> {
        let data = vec![DataPoint::new("X", 0.0), DataPoint::new("Y", 10.0)];

        let chart = RadialShare::new("Zero").render(&data)?;

        let x = &chart.wedges[0];
        assert_eq!(0.0, x.sweep());
        assert_eq!(x.start, x.end);
        assert!(x.path.is_finite());

        let y = &chart.wedges[1];
        assert!(y.is_full_circle());
        assert!(y.large_arc);

        let legend: Vec<(String, String)> = chart
            .legend()
            .map(|e| (e.label.clone(), e.percentage_label()))
            .collect();
        assert_eq!(
            vec![
                (String::from("X"), String::from("0.0%")),
                (String::from("Y"), String::from("100.0%")),
            ],
            legend
        );

        Ok(())
    }

    #[test]
    fn single_category_draws_a_full_disc() -> Result<()> {
        let chart = RadialShare::new("All").render(&[DataPoint::new("only", 7.0)])?;

        let wedge = &chart.wedges[0];
        assert!(wedge.large_arc);
        assert_eq!(0.0, wedge.start_angle);
        assert_eq!(360.0, wedge.end_angle);
        assert_eq!("100.0%", percentage_label(wedge.percentage));

        let arcs: Vec<Point> = wedge
            .path
            .commands()
            .iter()
            .filter_map(|c| match *c {
                Command::Arc { to, .. } => Some(to),
                _ => None,
            })
            .collect();
        assert_eq!(2, arcs.len());
        assert!(close(arcs[0].x, 20.0));
        assert!(close(arcs[1].x, 180.0));
        assert!(close(arcs[1].y, 100.0));

        Ok(())
    }

    #[test]
    fn percentages_add_up_to_one_hundred() -> Result<()> {
        let data: Vec<DataPoint> = [245000.0, 189000.0, 156000.0, 89000.0, 334000.0, 0.5, 1e-3]
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(format!("c{i}"), v))
            .collect();

        let chart = RadialShare::new("Spend").render(&data)?;

        let sum: f64 = chart.wedges.iter().map(|w| w.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6);
        assert!(close(chart.wedges.last().map_or(0.0, |w| w.end_angle), 360.0));

        for pair in chart.wedges.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }

        Ok(())
    }

    #[test]
    fn near_whole_share_is_drawn_as_a_disc() -> Result<()> {
        let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 1e-12)];

        let chart = RadialShare::new("Sliver").render(&data)?;

        let a = &chart.wedges[0];
        assert!(a.is_full_circle());
        let arcs = a.path.commands().iter().filter(|c| matches!(c, Command::Arc { .. }));
        assert_eq!(2, arcs.count());
        assert!(!chart.wedges[1].is_full_circle());
        assert!(chart.wedges[1].path.is_finite());

        Ok(())
    }

    #[test]
    fn huge_shares_are_split_evenly() -> Result<()> {
        let data = vec![DataPoint::new("a", 1e308), DataPoint::new("b", 1e308)];

        let chart = RadialShare::new("Huge").render(&data)?;

        assert!(chart.total.is_infinite());
        assert!(chart.wedges.iter().all(|w| w.percentage == 50.0));
        assert!(chart.wedges.iter().all(|w| w.path.is_finite()));
        assert_eq!(180.0, chart.wedges[0].end_angle);
        assert_eq!(360.0, chart.wedges[1].end_angle);

        Ok(())
    }

    #[test]
    fn palette_cycles_by_index() -> Result<()> {
        let data: Vec<DataPoint> = (1..=4).map(|i| DataPoint::new(i.to_string(), 1.0)).collect();
        let palette = vec![Color::from("#111111"), Color::from("#222222")];

        let chart = RadialShare::new("Cycle").palette(palette).render(&data)?;

        let colors: Vec<&str> = chart.wedges.iter().map(|w| w.color.as_str()).collect();
        assert_eq!(vec!["#111111", "#222222", "#111111", "#222222"], colors);

        Ok(())
    }

    #[test]
    fn empty_palette_keeps_default() -> Result<()> {
        let chart = RadialShare::new("Default")
            .palette(Vec::new())
            .render(&[DataPoint::new("a", 1.0)])?;

        assert_eq!(DEFAULT_PALETTE[0], chart.wedges[0].color.as_str());

        Ok(())
    }

    #[test]
    fn invalid_totals_are_rejected() {
        let cases = [
            (Vec::new(), InvalidInput::Empty),
            (
                vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)],
                InvalidInput::NonPositiveTotal,
            ),
            (
                vec![DataPoint::new("a", 5.0), DataPoint::new("b", -1.0)],
                InvalidInput::NegativeValue { index: 1 },
            ),
            (
                vec![DataPoint::new("a", f64::INFINITY)],
                InvalidInput::NonFiniteValue { index: 0 },
            ),
        ];

        for (data, expected) in cases {
            let error = RadialShare::new("bad").render(&data).unwrap_err();
            assert_eq!(ChartError::InvalidInput(expected), error);
        }
    }
}
