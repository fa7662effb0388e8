/* # body */

// a person seen as two plates, all lengths in feet
pub const BODY_HEIGHT: f64 = 70.0 / 12.0; // 5 ft 10 in
pub const BODY_WIDTH: f64 = 20.0 / 12.0; // 20 in, shoulder to shoulder
pub const BODY_DEPTH: f64 = 12.0 / 12.0; // 12 in, chest to back

/* # rain */

pub const DEFAULT_RAIN_DENSITY: f64 = 1000.0; // drops per square foot per second

/* # demonstration */

pub const DEMO_SPEEDS: [f64; 4] = [3.3, 5.5, 8.8, 13.2]; // stroll, walk, jog, run
pub const DEMO_DISTANCE: f64 = 328.0; // roughly a hundred meters
pub const DEMO_OUTPUT: &str = "bounce/wetness-vs-speed.svg";

/* # chart */

pub const CHART_TITLE: &str = "Wetness vs. Speed in Rain";
pub const CHART_X_LABEL: &str = "Speed (feet per second)";
pub const CHART_Y_LABEL: &str = "Total Raindrops Hit";

pub const FIGURE_WIDTH: f64 = 8.0; // inches
pub const FIGURE_HEIGHT: f64 = 5.0; // inches
pub const FIGURE_DPI: f64 = 100.0; // view box units per inch

pub const PLOT_MARGIN_LEFT: f64 = 96.0;
pub const PLOT_MARGIN_RIGHT: f64 = 24.0;
pub const PLOT_MARGIN_TOP: f64 = 44.0;
pub const PLOT_MARGIN_BOTTOM: f64 = 60.0;
pub const PLOT_PADDING: f64 = 0.05; // share of the data span left free on each side
pub const Y_TICKS: f64 = 6.0; // rough number of ticks on the wetness axis

pub const LINE_COLOUR: &str = "blue";
pub const GRID_COLOUR: &str = "#b0b0b0";
pub const MARKER_RADIUS: f64 = 4.0;
pub const LABEL_MAX_DECIMALS: usize = 17; // finer wetness ticks switch to exponent notation
pub const SPEED_LABEL_DECIMALS: usize = 3;
