//! Inline SVG charts for the dashboard views. Geometry lives in plain
//! helpers so the math is testable without rendering anything.

use dioxus::prelude::*;

use crate::{
    core::{
        format,
        views::{PerCapitaSeries, PieBreakdown, ScatterPlot, TrendSeries},
    },
    dashboard::{continent_color, selection_meta, year_color},
};

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 320.0;
const MARGIN: f64 = 36.0;

const PIE_SIZE: f64 = 320.0;
const PIE_COLORS: [&str; 10] = [
    "#60a5fa", "#f87171", "#34d399", "#fbbf24", "#c084fc", "#f472b6", "#38bdf8", "#fb923c",
    "#a3e635", "#2dd4bf",
];

#[component]
pub fn TrendChart(series: TrendSeries) -> Element {
    let count = series.countries.len();
    let max = max_value(series.lines.iter().flat_map(|line| line.values.iter().copied()));

    let polylines: Vec<(String, &'static str, String)> = series
        .lines
        .iter()
        .map(|line| {
            (
                line.year.label().to_string(),
                year_color(line.year),
                polyline_points(&line.values, max),
            )
        })
        .collect();

    let first_country = series.countries.first().cloned().unwrap_or_default();
    let last_country = series.countries.last().cloned().unwrap_or_default();
    let baseline = PLOT_HEIGHT - MARGIN;
    let right_edge = PLOT_WIDTH - MARGIN;
    let label_y = PLOT_HEIGHT - 8.0;

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Consumption trend in {series.continent}" }
                span { class: "dashboard-card__meta", "2018–2022 · millions of servings" }
            }

            if count == 0 {
                p { class: "dashboard-card__placeholder", "Nothing to plot for this continent." }
            } else {
                svg {
                    class: "dashboard-chart__canvas",
                    view_box: "0 0 {PLOT_WIDTH} {PLOT_HEIGHT}",
                    preserve_aspect_ratio: "xMidYMid meet",
                    line {
                        x1: "{MARGIN}", y1: "{baseline}",
                        x2: "{right_edge}", y2: "{baseline}",
                        class: "dashboard-chart__axis",
                    }
                    for (label, color, points) in polylines.iter() {
                        polyline {
                            points: "{points}",
                            fill: "none",
                            stroke: "{color}",
                            stroke_width: "2",
                            title { "{label}" }
                        }
                    }
                    text {
                        x: "{MARGIN}", y: "{label_y}",
                        class: "dashboard-chart__label",
                        "{first_country}"
                    }
                    text {
                        x: "{right_edge}", y: "{label_y}",
                        text_anchor: "end",
                        class: "dashboard-chart__label",
                        "{last_country}"
                    }
                }
                div { class: "chart-legend",
                    for (label, color, _) in polylines.iter() {
                        span { class: "chart-legend__item",
                            span { class: "chart-legend__swatch", style: "background:{color}" }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PerCapitaChart(series: PerCapitaSeries) -> Element {
    let meta = selection_meta(&series.continent, series.year);
    let max = max_value(series.bars.iter().map(|bar| bar.value));
    let count = series.bars.len();
    let excluded_note = (!series.excluded.is_empty())
        .then(|| format!("Per-capita undefined for: {}", series.excluded.join(", ")));
    let baseline = PLOT_HEIGHT - MARGIN;
    let right_edge = PLOT_WIDTH - MARGIN;

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Per-capita consumption in {series.continent}" }
                span { class: "dashboard-card__meta", "{meta} · servings per person" }
            }

            if count == 0 {
                p { class: "dashboard-card__placeholder",
                    "No per-capita values available for this selection."
                }
            } else {
                svg {
                    class: "dashboard-chart__canvas",
                    view_box: "0 0 {PLOT_WIDTH} {PLOT_HEIGHT}",
                    preserve_aspect_ratio: "xMidYMid meet",
                    line {
                        x1: "{MARGIN}", y1: "{baseline}",
                        x2: "{right_edge}", y2: "{baseline}",
                        class: "dashboard-chart__axis",
                    }
                    for (index, bar) in series.bars.iter().enumerate() {
                        {
                            let (x, width) = bar_geometry(index, count);
                            let top = y_position(bar.value, max);
                            let height = baseline - top;
                            let tooltip = format!(
                                "{}: {}",
                                bar.country_region,
                                format::format_per_capita(bar.value)
                            );
                            rsx! {
                                rect {
                                    x: "{x:.1}", y: "{top:.1}",
                                    width: "{width:.1}", height: "{height:.1}",
                                    fill: "#34d399",
                                    opacity: "0.85",
                                    title { "{tooltip}" }
                                }
                            }
                        }
                    }
                }
                if let Some(note) = excluded_note {
                    p { class: "dashboard-card__meta dashboard-card__meta--warning", "{note}" }
                }
            }
        }
    }
}

#[component]
pub fn PieChart(pie: PieBreakdown) -> Element {
    let total: f64 = pie.slices.iter().map(|slice| slice.servings).sum();
    let center = PIE_SIZE / 2.0;
    let radius = PIE_SIZE / 2.0 - 10.0;

    let mut cursor = 0.0_f64;
    let mut wedges: Vec<(String, &'static str, String, String)> = Vec::new();
    for (index, slice) in pie.slices.iter().enumerate() {
        let fraction = if total > 0.0 {
            slice.servings / total
        } else {
            0.0
        };
        let path = pie_arc_path(center, center, radius, cursor, cursor + fraction);
        wedges.push((
            slice.country_region.clone(),
            PIE_COLORS[index % PIE_COLORS.len()],
            path,
            format!("{:.1}%", fraction * 100.0),
        ));
        cursor += fraction;
    }

    rsx! {
        section { class: "dashboard-card dashboard-chart dashboard-pie",
            div { class: "dashboard-card__header",
                h2 { "Global top {pie.slices.len()} share in {pie.year}" }
                span { class: "dashboard-card__meta", "All continents" }
            }

            if pie.slices.is_empty() {
                p { class: "dashboard-card__placeholder", "No consumption recorded for this year." }
            } else {
                div { class: "dashboard-pie__layout",
                    svg {
                        class: "dashboard-chart__canvas dashboard-pie__canvas",
                        view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                        preserve_aspect_ratio: "xMidYMid meet",
                        if let [(_, color, _, _)] = wedges.as_slice() {
                            circle { cx: "{center}", cy: "{center}", r: "{radius}", fill: "{color}" }
                        } else {
                            for (name, color, path, _) in wedges.iter() {
                                path { d: "{path}", fill: "{color}",
                                    title { "{name}" }
                                }
                            }
                        }
                    }
                    ul { class: "chart-legend chart-legend--stacked",
                        for (name, color, _, share) in wedges.iter() {
                            li { class: "chart-legend__item",
                                span { class: "chart-legend__swatch", style: "background:{color}" }
                                "{name} · {share}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScatterChart(plot: ScatterPlot) -> Element {
    let max_population = max_value(plot.points.iter().map(|point| point.population_2022 as f64));
    let max_servings = max_value(plot.points.iter().map(|point| point.servings));

    let mut continents: Vec<(String, &'static str)> = Vec::new();
    for point in &plot.points {
        if !continents.iter().any(|(name, _)| name == &point.continent) {
            continents.push((point.continent.clone(), continent_color(&point.continent)));
        }
    }

    let baseline = PLOT_HEIGHT - MARGIN;
    let right_edge = PLOT_WIDTH - MARGIN;

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Population vs. consumption in {plot.year}" }
                span { class: "dashboard-card__meta", "Every country, colored by continent" }
            }

            if plot.points.is_empty() {
                p { class: "dashboard-card__placeholder", "No records loaded." }
            } else {
                svg {
                    class: "dashboard-chart__canvas",
                    view_box: "0 0 {PLOT_WIDTH} {PLOT_HEIGHT}",
                    preserve_aspect_ratio: "xMidYMid meet",
                    line {
                        x1: "{MARGIN}", y1: "{baseline}",
                        x2: "{right_edge}", y2: "{baseline}",
                        class: "dashboard-chart__axis",
                    }
                    line {
                        x1: "{MARGIN}", y1: "{MARGIN}",
                        x2: "{MARGIN}", y2: "{baseline}",
                        class: "dashboard-chart__axis",
                    }
                    for point in plot.points.iter() {
                        {
                            let x = x_position_scaled(point.population_2022 as f64, max_population);
                            let y = y_position(point.servings, max_servings);
                            let color = continent_color(&point.continent);
                            let tooltip = format!(
                                "{}: {} people, {}",
                                point.country_region,
                                format::format_population(point.population_2022),
                                format::format_servings(point.servings)
                            );
                            rsx! {
                                circle {
                                    cx: "{x:.1}", cy: "{y:.1}", r: "5",
                                    fill: "{color}",
                                    opacity: "0.8",
                                    title { "{tooltip}" }
                                }
                            }
                        }
                    }
                }
                div { class: "chart-legend",
                    for (name, color) in continents.iter() {
                        span { class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background:{color}",
                            }
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// Largest finite value, clamped to at least 1 so scales stay defined for
/// all-zero data.
fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|value| value.is_finite())
        .fold(1.0_f64, f64::max)
}

/// Evenly spaced x coordinate for categorical axes. A single category lands
/// in the middle of the plot.
fn x_position(index: usize, count: usize) -> f64 {
    let span = PLOT_WIDTH - 2.0 * MARGIN;
    if count <= 1 {
        return MARGIN + span / 2.0;
    }
    MARGIN + span * index as f64 / (count - 1) as f64
}

/// Linear x coordinate for numeric axes.
fn x_position_scaled(value: f64, max: f64) -> f64 {
    let span = PLOT_WIDTH - 2.0 * MARGIN;
    MARGIN + span * (value / max).clamp(0.0, 1.0)
}

/// Inverted y coordinate: zero sits on the baseline, `max` at the top margin.
fn y_position(value: f64, max: f64) -> f64 {
    let span = PLOT_HEIGHT - 2.0 * MARGIN;
    (PLOT_HEIGHT - MARGIN) - span * (value / max).clamp(0.0, 1.0)
}

fn polyline_points(values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            format!(
                "{:.1},{:.1}",
                x_position(index, values.len()),
                y_position(value, max)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar slot for `index` of `count`, with a small gap between bars.
fn bar_geometry(index: usize, count: usize) -> (f64, f64) {
    let span = PLOT_WIDTH - 2.0 * MARGIN;
    let slot = span / count as f64;
    let width = (slot * 0.7).max(1.0);
    let x = MARGIN + slot * index as f64 + (slot - width) / 2.0;
    (x, width)
}

/// Filled wedge from `start` to `end`, both fractions of a full turn
/// starting at twelve o'clock.
fn pie_arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    use std::f64::consts::TAU;

    let to_point = |turn: f64| {
        let angle = turn * TAU - TAU / 4.0;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let (x0, y0) = to_point(start);
    let (x1, y1) = to_point(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };

    format!("M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {r:.1} {r:.1} 0 {large_arc} 1 {x1:.1} {y1:.1} Z")
}
