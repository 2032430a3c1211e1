//! Inline SVG bar and pie charts for the aggregated distributions.
//!
//! Both components render nothing at all for an empty frequency table; the
//! page never shows a placeholder chart.

use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use crate::core::aggregate::FrequencyTable;
use crate::core::format;

const PALETTE: &[&str] = &[
    "#667eea", "#764ba2", "#4facfe", "#43e97b", "#fa709a", "#fee140", "#30cfd0", "#f093fb",
    "#ff9a9e", "#a8edea",
];

const BAR_VIEW_W: f64 = 720.0;
const BAR_VIEW_H: f64 = 340.0;
const BAR_MARGIN_LEFT: f64 = 24.0;
const BAR_MARGIN_RIGHT: f64 = 16.0;
const BAR_MARGIN_TOP: f64 = 28.0;
const BAR_MARGIN_BOTTOM: f64 = 64.0;

const PIE_VIEW: f64 = 340.0;
const PIE_RADIUS: f64 = 150.0;

const LABEL_MAX_CHARS: usize = 14;

#[component]
pub fn BarChart(
    title: String,
    value_label: String,
    count_label: String,
    data: FrequencyTable,
) -> Element {
    if data.is_empty() {
        return rsx! {};
    }

    let plot_w = BAR_VIEW_W - BAR_MARGIN_LEFT - BAR_MARGIN_RIGHT;
    let plot_h = BAR_VIEW_H - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let baseline = BAR_MARGIN_TOP + plot_h;
    let entries = data.entries();
    let max_count = entries
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1);

    let slot = plot_w / entries.len() as f64;
    let bar_w = (slot * 0.62).min(64.0);
    let axis_end = BAR_MARGIN_LEFT + plot_w;

    struct BarGeom {
        x: String,
        y: String,
        w: String,
        h: String,
        count_x: String,
        count_y: String,
        label_x: String,
        label_y: String,
        count: usize,
        label: String,
        color: &'static str,
    }

    let bars: Vec<BarGeom> = entries
        .iter()
        .enumerate()
        .map(|(index, (label, count))| {
            let height = scaled_height(*count, max_count, plot_h);
            let x = BAR_MARGIN_LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
            let y = baseline - height;
            let center = x + bar_w / 2.0;
            BarGeom {
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                w: format!("{bar_w:.1}"),
                h: format!("{height:.1}"),
                count_x: format!("{center:.1}"),
                count_y: format!("{:.1}", y - 6.0),
                label_x: format!("{center:.1}"),
                label_y: format!("{:.1}", baseline + 18.0),
                count: *count,
                label: truncate_label(label, LABEL_MAX_CHARS),
                color: PALETTE[index % PALETTE.len()],
            }
        })
        .collect();

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "{title}" }
                span { class: "dashboard-card__meta", "{value_label} · {count_label}" }
            }

            svg {
                class: "dashboard-chart__svg",
                view_box: "0 0 {BAR_VIEW_W} {BAR_VIEW_H}",

                line {
                    x1: "{BAR_MARGIN_LEFT}",
                    y1: "{baseline}",
                    x2: "{axis_end}",
                    y2: "{baseline}",
                    class: "dashboard-chart__axis",
                }

                for bar in bars.iter() {
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.w}",
                        height: "{bar.h}",
                        rx: "3",
                        fill: "{bar.color}",
                    }
                    text {
                        x: "{bar.count_x}",
                        y: "{bar.count_y}",
                        text_anchor: "middle",
                        class: "dashboard-chart__count",
                        "{bar.count}"
                    }
                    text {
                        x: "{bar.label_x}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        class: "dashboard-chart__label",
                        "{bar.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PieChart(
    title: String,
    value_label: String,
    count_label: String,
    data: FrequencyTable,
) -> Element {
    if data.is_empty() {
        return rsx! {};
    }

    let total = data.total();
    let center = PIE_VIEW / 2.0;

    struct Slice {
        path: String,
        color: &'static str,
        label: String,
        count: usize,
        share: String,
    }

    let mut start = 0.0f64;
    let slices: Vec<Slice> = data
        .entries()
        .iter()
        .enumerate()
        .map(|(index, (label, count))| {
            let fraction = *count as f64 / total as f64;
            let end = start + fraction;
            let slice = Slice {
                path: arc_path(center, center, PIE_RADIUS, start, end),
                color: PALETTE[index % PALETTE.len()],
                label: label.clone(),
                count: *count,
                share: format::format_share(*count, total),
            };
            start = end;
            slice
        })
        .collect();

    let single_slice = slices.len() == 1;
    let first_color = slices[0].color;

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "{title}" }
                span { class: "dashboard-card__meta", "{value_label} · {count_label}" }
            }

            div { class: "dashboard-chart__pie-layout",
                svg {
                    class: "dashboard-chart__svg dashboard-chart__svg--pie",
                    view_box: "0 0 {PIE_VIEW} {PIE_VIEW}",

                    if single_slice {
                        // A full-circle arc degenerates, so draw it directly.
                        circle {
                            cx: "{center}",
                            cy: "{center}",
                            r: "{PIE_RADIUS}",
                            fill: "{first_color}",
                        }
                    } else {
                        for slice in slices.iter() {
                            path { d: "{slice.path}", fill: "{slice.color}" }
                        }
                    }
                }

                ul { class: "dashboard-chart__legend",
                    for slice in slices.iter() {
                        li { class: "dashboard-chart__legend-item",
                            span {
                                class: "dashboard-chart__legend-swatch",
                                style: "background: {slice.color}",
                            }
                            span { class: "dashboard-chart__legend-label", "{slice.label}" }
                            span { class: "dashboard-chart__legend-count",
                                "{slice.count} ({slice.share})"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn scaled_height(count: usize, max_count: usize, plot_h: f64) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    plot_h * count as f64 / max_count as f64
}

/// Wedge from `start` to `end` (fractions of a full turn, clockwise from 12
/// o'clock).
fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (sx, sy) = point_on_circle(cx, cy, r, start);
    let (ex, ey) = point_on_circle(cx, cy, r, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z")
}

fn point_on_circle(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
