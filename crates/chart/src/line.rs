//! Line series geometry.
//!
//! Points are spread evenly over a 400 x 200 canvas. Values are mapped onto
//! the lower 180 units, so the highest value sits 20 units below the top edge.

use serde::Serialize;
use tracing::debug;

use crate::data::Color;
use crate::data::DataPoint;
use crate::data::check_finite;
use crate::error::InvalidInput;
use crate::error::Result;
use crate::geometry::PathData;
use crate::geometry::Point;

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 200.0;
pub const DRAWING_RANGE: f64 = 180.0;
pub const MARKER_RADIUS: f64 = 4.0;
pub const GRID_LINES: [f64; 5] = [0.0, 50.0, 100.0, 150.0, 200.0];
pub const DEFAULT_COLOR: &str = "#2563eb";

/// Where every point lands when all values are equal.
pub const FLAT_Y: f64 = HEIGHT - DRAWING_RANGE / 2.0;

const MIN_POINTS: usize = 2;

/// Maps values onto the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    Linear { min: f64, max: f64 },
    /// All values are equal, so there is no range to scale by.
    Flat,
}

impl Scale {
    fn fit(points: &[DataPoint]) -> Scale {
        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p.value), max.max(p.value))
            });

        if max > min {
            Scale::Linear { min, max }
        } else {
            Scale::Flat
        }
    }

    pub fn y(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { min, max } => HEIGHT - fraction(value, min, max) * DRAWING_RANGE,
            Scale::Flat => FLAT_Y,
        }
    }
}

// Where `value` lies between `min` and `max`, from 0 to 1. Finite bounds can
// still be too far apart to subtract, in which case everything is halved first.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;

    if range.is_finite() {
        (value - min) / range
    } else {
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

/// The geometry of a rendered line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub color: Color,
    pub scale: Scale,
    pub grid: Vec<GridLine>,
    pub vertices: Vec<Point>,
    pub line: PathData,
    pub area: PathData,
    pub markers: Vec<Marker>,
    pub labels: Vec<String>,
}

impl LineChart {
    pub fn is_flat(&self) -> bool {
        self.scale == Scale::Flat
    }
}

/// Builds line charts from ordered data points.
#[derive(Debug, Clone)]
pub struct LineSeries {
    title: String,
    color: Color,
}

impl LineSeries {
    pub fn new(title: impl Into<String>) -> LineSeries {
        Self {
            title: title.into(),
            color: Color::from(DEFAULT_COLOR),
        }
    }

    pub fn color(mut self, color: Color) -> LineSeries {
        self.color = color;
        self
    }

    pub fn render(&self, points: &[DataPoint]) -> Result<LineChart> {
        if points.len() < MIN_POINTS {
            return Err(InvalidInput::TooFewPoints {
                required: MIN_POINTS,
                actual: points.len(),
            }
            .into());
        }

        check_finite(points)?;

        let scale = Scale::fit(points);
        if scale == Scale::Flat {
            debug!(
                title = %self.title,
                points = points.len(),
                "all values are equal, drawing a flat line"
            );
        }

        let last = (points.len() - 1) as f64;
        let vertices: Vec<Point> = points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new((i as f64 / last) * WIDTH, scale.y(p.value)))
            .collect();

        let line = polyline(&vertices);
        let area = line
            .clone()
            .line_to(Point::new(WIDTH, HEIGHT))
            .line_to(Point::new(0.0, HEIGHT))
            .close();

        let grid = GRID_LINES
            .iter()
            .map(|&y| GridLine {
                from: Point::new(0.0, y),
                to: Point::new(WIDTH, y),
            })
            .collect();

        let markers = vertices
            .iter()
            .map(|&center| Marker {
                center,
                radius: MARKER_RADIUS,
            })
            .collect();

        let labels = points.iter().map(|p| p.label.clone()).collect();

        Ok(LineChart {
            title: self.title.clone(),
            color: self.color.clone(),
            scale,
            grid,
            vertices,
            line,
            area,
            markers,
            labels,
        })
    }
}

fn polyline(vertices: &[Point]) -> PathData {
    let mut vertices = vertices.iter();
    let mut path = PathData::with_capacity(vertices.len() + 3);

    if let Some(&first) = vertices.next() {
        path = path.move_to(first);
    }

    vertices.fold(path, |path, &p| path.line_to(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    fn points(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(format!("p{i}"), v))
            .collect()
    }

    #[test]
    fn render_monthly_revenue() -> Result<()> {
        let data = vec![
            DataPoint::new("Jan", 100.0),
            DataPoint::new("Feb", 200.0),
            DataPoint::new("Mar", 300.0),
        ];

        let chart = LineSeries::new("Revenue").render(&data)?;

        assert_eq!(
            vec![
                Point::new(0.0, 200.0),
                Point::new(200.0, 110.0),
                Point::new(400.0, 20.0),
            ],
            chart.vertices
        );
        assert_eq!(Scale::Linear { min: 100.0, max: 300.0 }, chart.scale);
        assert_eq!("M 0 200 L 200 110 L 400 20", chart.line.to_string());
        assert_eq!(
            "M 0 200 L 200 110 L 400 20 L 400 200 L 0 200 Z",
            chart.area.to_string()
        );
        assert_eq!(vec!["Jan", "Feb", "Mar"], chart.labels);
        assert_eq!(Color::from(DEFAULT_COLOR), chart.color);

        Ok(())
    }

    #[test]
    fn one_marker_per_point_spanning_the_width() -> Result<()> {
        for n in 2..12 {
            let values: Vec<f64> = (0..n).map(|i| ((i * 37) % 11) as f64).collect();
            let chart = LineSeries::new("n").render(&points(&values))?;

            assert_eq!(n, chart.markers.len());
            assert_eq!(n, chart.vertices.len());
            assert_eq!(n, chart.line.commands().len());
            assert_eq!(0.0, chart.vertices[0].x);
            assert_eq!(WIDTH, chart.vertices[n - 1].x);
            assert!(chart.markers.iter().all(|m| m.radius == MARKER_RADIUS));
        }

        Ok(())
    }

    #[test]
    fn higher_values_are_drawn_higher() -> Result<()> {
        let data = points(&[5.0, -3.0, 12.5, 0.0, 7.25, 100.0]);
        let chart = LineSeries::new("monotonic").render(&data)?;

        let mut pairs: Vec<(f64, f64)> = data
            .iter()
            .zip(&chart.vertices)
            .map(|(p, v)| (p.value, v.y))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        for window in pairs.windows(2) {
            assert!(window[1].1 < window[0].1);
        }

        Ok(())
    }

    #[test]
    fn equal_values_draw_a_flat_line() -> Result<()> {
        let chart = LineSeries::new("flat").render(&points(&[42.0, 42.0, 42.0]))?;

        assert!(chart.is_flat());
        assert!(chart.vertices.iter().all(|v| v.y == FLAT_Y));
        assert!(chart.line.is_finite());
        assert!(chart.area.is_finite());
        assert_eq!("M 0 110 L 200 110 L 400 110", chart.line.to_string());

        Ok(())
    }

    #[test]
    fn extreme_values_stay_finite() -> Result<()> {
        let chart = LineSeries::new("extreme").render(&points(&[-1e308, 0.0, 1e308]))?;

        assert!(chart.line.is_finite());
        assert!(chart.area.is_finite());
        assert_eq!(
            vec![HEIGHT, HEIGHT - DRAWING_RANGE / 2.0, HEIGHT - DRAWING_RANGE],
            chart.vertices.iter().map(|v| v.y).collect::<Vec<_>>()
        );

        Ok(())
    }

    #[test]
    fn grid_has_five_horizontal_lines() -> Result<()> {
        let chart = LineSeries::new("grid").render(&points(&[1.0, 2.0]))?;

        let ys: Vec<f64> = chart.grid.iter().map(|g| g.from.y).collect();
        assert_eq!(GRID_LINES.to_vec(), ys);
        assert!(chart.grid.iter().all(|g| g.from.x == 0.0 && g.to.x == WIDTH));

        Ok(())
    }

    #[test]
    fn custom_color_is_kept() -> Result<()> {
        let chart = LineSeries::new("c")
            .color(Color::from("#dc2626"))
            .render(&points(&[1.0, 2.0]))?;

        assert_eq!("#dc2626", chart.color.as_str());

        Ok(())
    }

    #[test]
    fn too_few_points_are_rejected() {
        for n in 0..2 {
            let error = LineSeries::new("short")
                .render(&points(&vec![1.0; n]))
                .unwrap_err();

            assert_eq!(
                ChartError::InvalidInput(InvalidInput::TooFewPoints {
                    required: 2,
                    actual: n
                }),
                error
            );
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let error = LineSeries::new("nan")
            .render(&points(&[1.0, f64::NAN, 3.0]))
            .unwrap_err();

        assert_eq!(
            ChartError::InvalidInput(InvalidInput::NonFiniteValue { index: 1 }),
            error
        );
    }
}
