//! SVG markup for ruler ticks.

use super::{Axis, RulerConfig, Tick, util::Num};

// Label placement relative to the tick, in pixels.
const HORIZONTAL_LABEL_DX: f64 = 2.0;
const HORIZONTAL_LABEL_Y: f64 = 13.0;
const VERTICAL_LABEL_X: f64 = 5.0;
const VERTICAL_LABEL_DY: f64 = -3.0;

/// Path command for one tick: a segment across the ruler ending at `step_padding`.
pub fn tick_command(axis: Axis, tick: &Tick, step_padding: f64) -> String {
    let pos = Num(tick.pos);
    let start = Num(tick.level.start());
    let end = Num(step_padding);
    match axis {
        Axis::Horizontal => format!("M {pos} {start} L {pos} {end}"),
        Axis::Vertical => format!("M {start} {pos} L {end} {pos}"),
    }
}

/// Text label for a major tick, showing its logical coordinate.
///
/// Vertical labels are rotated a quarter turn around the tick position so
/// they read along the ruler.
pub fn tick_label(axis: Axis, tick: &Tick, config: &RulerConfig) -> String {
    let value = tick.value;
    let fill = &config.color;
    let size = Num(config.font_size);
    match axis {
        Axis::Horizontal => format!(
            r#"<text x="{}" y="{}" fill="{fill}" style="font-size: {size}px">{value}</text>"#,
            Num(tick.pos + HORIZONTAL_LABEL_DX),
            Num(HORIZONTAL_LABEL_Y),
        ),
        Axis::Vertical => format!(
            r#"<text y="{}" x="{}" fill="{fill}" style="font-size: {size}px" transform="rotate(90 0 {})">{value}</text>"#,
            Num(tick.pos + VERTICAL_LABEL_DY),
            Num(VERTICAL_LABEL_X),
            Num(tick.pos),
        ),
    }
}

/// Joins the tick commands into one path element and appends the labels.
pub fn assemble(commands: &[String], labels: &[String]) -> String {
    format!(r#"<path d="{}" />{}"#, commands.join(" "), labels.join(" "))
}
