// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout demos for the Lamina core: a streamgraph and a Voronoi bubble map.
//!
//! This binary stands in for the external rendering layer. It consumes layout
//! output only — stacked `y0`/`y1` offsets, the synthesized boundary, clipped
//! cells — and styles it with the shared opacity policy.

mod svg;

use kurbo::{Point, Rect};
use lamina_core::{
    BASE_FILL_OPACITY, DIMMED_FILL_OPACITY, DataPoint, Series, SeriesKey, SiteKey, StackedPoint,
    WeightedSite, fill_opacity, max_radius,
};
use lamina_transforms::{StackOrder, stream_layout};
use lamina_voronoi::tessellate;
use peniko::color::palette::css;

fn main() {
    let stream = stream_demo();
    std::fs::write("lamina_stream_demo.svg", stream).expect("write lamina_stream_demo.svg");
    println!("wrote lamina_stream_demo.svg");

    let map = voronoi_demo();
    std::fs::write("lamina_voronoi_demo.svg", map).expect("write lamina_voronoi_demo.svg");
    println!("wrote lamina_voronoi_demo.svg");
}

fn stream_demo() -> String {
    let palette = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
    ];
    let rows: [&[f64]; 4] = [
        &[2.0, 2.5, 3.5, 3.0, 2.0, 1.5, 2.0, 3.0, 4.0, 3.5, 2.5, 2.0],
        &[1.0, 1.5, 1.0, 2.0, 3.0, 3.5, 2.5, 1.5, 1.0, 1.5, 2.0, 2.5],
        &[0.5, 1.0, 2.0, 2.5, 2.0, 1.0, 0.5, 1.0, 1.5, 2.0, 1.0, 0.5],
        &[1.5, 1.0, 0.5, 1.0, 1.5, 2.0, 3.0, 2.0, 1.0, 0.5, 1.0, 1.5],
    ];

    let mut series: Vec<Series> = rows
        .iter()
        .enumerate()
        .map(|(i, values)| {
            Series::new(SeriesKey::Data(i as u64), i)
                .with_color(palette[i])
                .with_selected(i == 1)
                .with_values(values.iter().enumerate().map(|(k, &v)| (k as f64, v)))
        })
        .collect();
    // A gap in one series, to show drawing-continuity flags flowing through.
    series[2].points[6] = DataPoint::gap(6.0);

    let layout = stream_layout(&series, &StackOrder::DrawOrder).expect("stream layout");

    let view = Rect::new(0.0, 0.0, 480.0, 240.0);
    let plot = view.inset(-12.0);
    let max_total = layout
        .bands
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.y1))
        .fold(0.0_f64, f64::max);
    let last_x = (rows[0].len() - 1) as f64;
    let x_scale = |x: f64| plot.x0 + x / last_x * plot.width();
    let y_scale = |y: f64| plot.y1 - y / max_total * plot.height();

    let has_selection = series.iter().any(|s| s.selected);
    let mut doc = svg::SvgDoc::new(view);
    doc.rect(view, css::WHITE);

    for band in &layout.bands {
        let opacity = fill_opacity(
            1.0,
            band.selected,
            has_selection,
            BASE_FILL_OPACITY,
            DIMMED_FILL_OPACITY,
        );
        for run in defined_runs(&band.points) {
            let mut vertices: Vec<Point> = run
                .iter()
                .map(|p| Point::new(x_scale(p.x), y_scale(p.y1)))
                .collect();
            vertices.extend(run.iter().rev().map(|p| Point::new(x_scale(p.x), y_scale(p.y0))));
            doc.polygon(&vertices, band.color, opacity, None);
        }
    }

    // The boundary is a line-only series tracing the lower silhouette.
    for run in defined_runs(&layout.boundary.points) {
        let line: Vec<Point> = run
            .iter()
            .map(|p| Point::new(x_scale(p.x), y_scale(p.y1)))
            .collect();
        doc.polyline(&line, layout.boundary.color, 2.0, 1.0);
    }

    doc.finish()
}

fn voronoi_demo() -> String {
    let view = Rect::new(0.0, 0.0, 480.0, 300.0);
    let palette = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];
    let markers = [
        (70.0, 60.0, 26.0),
        (180.0, 120.0, 40.0),
        (320.0, 70.0, 18.0),
        (420.0, 150.0, 32.0),
        (110.0, 220.0, 22.0),
        (250.0, 250.0, 36.0),
        (390.0, 260.0, 14.0),
        (300.0, 170.0, 28.0),
    ];

    let sites: Vec<WeightedSite> = markers
        .iter()
        .enumerate()
        .map(|(i, &(x, y, radius))| {
            WeightedSite::new(SiteKey(i as u64), (x, y), radius)
                .with_color(palette[i % palette.len()])
                .with_selected(i == 5)
        })
        .collect();

    let cells = tessellate(&sites, view).expect("tessellate");
    let max = max_radius(&sites).unwrap_or(1.0);
    let has_selection = sites.iter().any(|s| s.selected);

    let mut doc = svg::SvgDoc::new(view);
    doc.rect(view, css::WHITE);

    for cell in &cells {
        let site = &sites[cell.site];
        let opacity = fill_opacity(
            site.radius / max,
            site.selected,
            has_selection,
            BASE_FILL_OPACITY,
            DIMMED_FILL_OPACITY,
        );
        doc.polygon(&cell.vertices, site.color, opacity, Some((site.color, 2.0)));
    }

    for site in &sites {
        let opacity = fill_opacity(
            1.0,
            site.selected,
            has_selection,
            BASE_FILL_OPACITY,
            DIMMED_FILL_OPACITY,
        );
        doc.circle(site.pos, site.radius / 2.0, site.color, opacity);
    }

    doc.finish()
}

/// Splits points into maximal runs of defined points, for line breaking.
fn defined_runs(points: &[StackedPoint]) -> Vec<&[StackedPoint]> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, p) in points.iter().enumerate() {
        match (p.defined, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(&points[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(&points[s..]);
    }
    runs
}
