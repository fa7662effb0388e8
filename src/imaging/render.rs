use crate::{error::RenderError, imaging::chart::Chart, vars::*};
use itertools::Itertools;
use log::{debug, trace};
use std::{fs, path::Path};
use svg::{
    node::{
        element::{Circle, Group, Line, Path as SvgPath, Rectangle, Text},
        Text as Content,
    },
    Document,
};

/* # axes */

/// pads a data range so the outermost points do not sit on the frame
fn padded(low: f64, high: f64) -> (f64, f64) {
    let span = high - low;
    if span > 0.0 {
        (low - span * PLOT_PADDING, high + span * PLOT_PADDING)
    } else if low == 0.0 {
        (-1.0, 1.0)
    } else {
        let pad = low.abs() * PLOT_PADDING;
        (low - pad, high + pad)
    }
}

/// step between roughly `count` ticks, always 1, 2 or 5 times a power of ten;
/// none when the range is too narrow or too wide for a normal float step
fn tick_step(low: f64, high: f64, count: f64) -> Option<f64> {
    let raw = (high - low) / count;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normal = raw / magnitude;
    let step = magnitude
        * if normal <= 1.0 {
            1.0
        } else if normal <= 2.0 {
            2.0
        } else if normal <= 5.0 {
            5.0
        } else {
            10.0
        };
    Some(step).filter(|step| step.is_normal())
}

/// evenly spaced round values inside the range, or its midpoint when no step fits
pub fn ticks(low: f64, high: f64, count: f64) -> Vec<f64> {
    let midpoint = || vec![low / 2.0 + high / 2.0];
    let step = match tick_step(low, high, count) {
        Some(step) => step,
        None => return midpoint(),
    };
    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    if last < first || (last - first) as f64 > count * 10.0 {
        return midpoint();
    }
    (first..=last).map(|jndex| jndex as f64 * step).collect()
}

fn tick_label(value: f64, step: Option<f64>) -> String {
    match step {
        Some(step) if step >= 1.0 => format!("{:.0}", value),
        Some(step) if -step.log10() <= LABEL_MAX_DECIMALS as f64 => {
            format!("{:.*}", (-step.log10()).ceil() as usize, value)
        }
        _ => format!("{:.3e}", value),
    }
}

/// sampled speeds as given, cut to a few decimals and without trailing zeros
fn speed_label(speed: f64) -> String {
    let label = format!("{:.*}", SPEED_LABEL_DECIMALS, speed);
    label
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/* # frame */

/// maps data values onto the figure's view box
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub speed: (f64, f64),
    pub wetness: (f64, f64),
}

impl Frame {
    pub fn new(chart: &Chart) -> Self {
        let (speed_low, speed_high) = chart.speed_bounds();
        let (wetness_low, wetness_high) = chart.wetness_bounds();
        Self {
            speed: padded(speed_low, speed_high),
            wetness: padded(wetness_low, wetness_high),
        }
    }

    pub fn width() -> f64 {
        FIGURE_WIDTH * FIGURE_DPI
    }

    pub fn height() -> f64 {
        FIGURE_HEIGHT * FIGURE_DPI
    }

    fn left() -> f64 {
        PLOT_MARGIN_LEFT
    }

    fn right() -> f64 {
        Self::width() - PLOT_MARGIN_RIGHT
    }

    fn top() -> f64 {
        PLOT_MARGIN_TOP
    }

    fn bottom() -> f64 {
        Self::height() - PLOT_MARGIN_BOTTOM
    }

    pub fn x(&self, speed: f64) -> f64 {
        let (low, high) = self.speed;
        Self::left() + (speed - low) / (high - low) * (Self::right() - Self::left())
    }

    /// the view box grows downwards, wetness grows upwards
    pub fn y(&self, wetness: f64) -> f64 {
        let (low, high) = self.wetness;
        Self::bottom() - (wetness - low) / (high - low) * (Self::bottom() - Self::top())
    }
}

/* # chart to svg */

fn text(content: &str, x: f64, y: f64, anchor: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .add(Content::new(content))
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", GRID_COLOUR)
        .set("stroke-width", 0.8)
}

fn polyline_to_svg(frame: &Frame, chart: &Chart) -> String {
    format!(
        "M{}",
        chart
            .points()
            .map(|(speed, wetness)| format!("{} {}", frame.x(speed), frame.y(wetness)))
            .join("L")
    )
}

fn speed_axis(frame: &Frame, chart: &Chart) -> Group {
    // one tick per sampled speed, never auto spaced
    chart
        .speeds()
        .iter()
        .fold(Group::new().set("class", "x-axis"), |axis, &speed| {
            let x = frame.x(speed);
            axis.add(
                Group::new()
                    .set("class", "x-tick")
                    .add(grid_line(x, Frame::top(), x, Frame::bottom()))
                    .add(
                        text(&speed_label(speed), x, Frame::bottom() + 18.0, "middle")
                            .set("font-size", 12),
                    ),
            )
        })
        .add(
            text(
                CHART_X_LABEL,
                (Frame::left() + Frame::right()) / 2.0,
                Frame::height() - 16.0,
                "middle",
            )
            .set("font-size", 14),
        )
}

fn wetness_axis(frame: &Frame) -> Group {
    let (low, high) = frame.wetness;
    let step = tick_step(low, high, Y_TICKS);
    let centre = (Frame::top() + Frame::bottom()) / 2.0;
    ticks(low, high, Y_TICKS)
        .into_iter()
        .fold(Group::new().set("class", "y-axis"), |axis, wetness| {
            let y = frame.y(wetness);
            axis.add(
                Group::new()
                    .set("class", "y-tick")
                    .add(grid_line(Frame::left(), y, Frame::right(), y))
                    .add(
                        text(&tick_label(wetness, step), Frame::left() - 6.0, y + 4.0, "end")
                            .set("font-size", 12),
                    ),
            )
        })
        .add(
            text(CHART_Y_LABEL, 18.0, centre, "middle")
                .set("font-size", 14)
                .set("transform", format!("rotate(-90 18 {})", centre)),
        )
}

pub trait Renderable {
    fn document(&self) -> Document;

    /// writes the document as an svg file, creating missing directories on the way
    fn render(&self, path: &Path) -> Result<(), RenderError> {
        let unavailable = |source| RenderError::Unavailable {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }
        svg::save(path, &self.document()).map_err(unavailable)?;
        debug!("chart written to {}", path.display());
        Ok(())
    }
}

impl Renderable for Chart {
    fn document(&self) -> Document {
        trace!("drawing {} points", self.len());
        let frame = Frame::new(self);

        let markers = self.points().fold(
            Group::new().set("class", "markers"),
            |group, (speed, wetness)| {
                group.add(
                    Circle::new()
                        .set("cx", frame.x(speed))
                        .set("cy", frame.y(wetness))
                        .set("r", MARKER_RADIUS)
                        .set("fill", LINE_COLOUR),
                )
            },
        );

        Document::new()
            .set("viewBox", (0.0, 0.0, Frame::width(), Frame::height()))
            .set("width", format!("{}in", FIGURE_WIDTH))
            .set("height", format!("{}in", FIGURE_HEIGHT))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            )
            .add(speed_axis(&frame, self))
            .add(wetness_axis(&frame))
            .add(
                Rectangle::new()
                    .set("x", Frame::left())
                    .set("y", Frame::top())
                    .set("width", Frame::right() - Frame::left())
                    .set("height", Frame::bottom() - Frame::top())
                    .set("fill", "none")
                    .set("stroke", "black"),
            )
            .add(
                SvgPath::new()
                    .set("d", polyline_to_svg(&frame, self))
                    .set("fill", "none")
                    .set("stroke", LINE_COLOUR)
                    .set("stroke-width", 1.5),
            )
            .add(markers)
            .add(
                text(CHART_TITLE, Frame::width() / 2.0, Frame::top() - 16.0, "middle")
                    .set("font-size", 16),
            )
    }
}
