//! Canvas Renderer
//!
//! Time-scaled line chart drawn straight onto an HTML5 canvas. Redrawing
//! replaces the pixels in place; the canvas element is never recreated.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::IndicatorSeries;

/// Series line color (dashboard accent).
const SERIES_COLOR: &str = "#FF9800";

/// Draw one indicator series, replacing whatever the canvas showed before.
pub fn draw_series(canvas: &HtmlCanvasElement, series: &IndicatorSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(
            "No data for selected indicator",
            width / 2.0 - 100.0,
            height / 2.0,
        );
        return;
    }

    let (value_min, value_max) = value_bounds(series);
    let (time_min, time_max) = time_bounds(series);
    let value_span = value_max - value_min;
    let time_span = (time_max - time_min).max(1) as f64;

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = value_max - (i as f64 / 5.0) * value_span;
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Series polyline
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, (timestamp, value)) in series.iter().enumerate() {
        let x = margin_left + ((timestamp - time_min) as f64 / time_span) * chart_width;
        // Canvas y grows downward
        let y = margin_top + ((value_max - value) / value_span) * chart_height;

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&SERIES_COLOR.into());
    for (timestamp, value) in series {
        let x = margin_left + ((timestamp - time_min) as f64 / time_span) * chart_width;
        let y = margin_top + ((value_max - value) / value_span) * chart_height;

        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let num_labels = 5;
    for i in 0..=num_labels {
        let timestamp = time_min + i * (time_max - time_min) / num_labels;
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;

        let label = chrono::DateTime::from_timestamp_millis(timestamp)
            .map(|dt| dt.format("%m/%d").to_string())
            .unwrap_or_default();

        let _ = ctx.fill_text(&label, x - 15.0, height - 10.0);
    }
}

/// Value range of the series, padded so the line never hugs the border.
fn value_bounds(series: &IndicatorSeries) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for (_, value) in series {
        min = min.min(*value);
        max = max.max(*value);
    }

    let span = max - min;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Time range covered by the series.
fn time_bounds(series: &IndicatorSeries) -> (i64, i64) {
    let mut min = i64::MAX;
    let mut max = i64::MIN;

    for (timestamp, _) in series {
        min = min.min(*timestamp);
        max = max.max(*timestamp);
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bounds_pad_the_range() {
        let series = vec![(0, 10.0), (1, 20.0)];
        let (min, max) = value_bounds(&series);

        assert!(min < 10.0);
        assert!(max > 20.0);
        assert!((max - min - 12.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_still_gets_a_nonzero_range() {
        let series = vec![(0, 5.0), (1, 5.0)];
        let (min, max) = value_bounds(&series);

        assert_eq!(min, 4.0);
        assert_eq!(max, 6.0);
    }

    #[test]
    fn time_bounds_cover_the_series() {
        let series = vec![(100, 1.0), (50, 2.0), (300, 3.0)];
        assert_eq!(time_bounds(&series), (50, 300));
    }
}
