// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `lamina_demo`.

use kurbo::{Point, Rect};
use peniko::Color;

#[derive(Debug)]
pub(crate) struct SvgDoc {
    out: String,
}

impl SvgDoc {
    pub(crate) fn new(view: Rect) -> Self {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            view.width(),
            view.height()
        ));
        out.push('\n');
        Self { out }
    }

    pub(crate) fn rect(&mut self, rect: Rect, fill: Color) {
        self.out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(fill)
        ));
        self.out.push('\n');
    }

    pub(crate) fn polygon(
        &mut self,
        vertices: &[Point],
        fill: Color,
        fill_opacity: f64,
        stroke: Option<(Color, f64)>,
    ) {
        if vertices.is_empty() {
            return;
        }
        self.out.push_str(r#"<polygon points=""#);
        for (i, v) in vertices.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(&format!("{},{}", v.x, v.y));
        }
        self.out
            .push_str(&format!(r#"" fill="{}" fill-opacity="{fill_opacity}""#, hex(fill)));
        if let Some((color, width)) = stroke {
            self.out
                .push_str(&format!(r#" stroke="{}" stroke-width="{width}""#, hex(color)));
        }
        self.out.push_str("/>\n");
    }

    pub(crate) fn polyline(
        &mut self,
        points: &[Point],
        stroke: Color,
        width: f64,
        stroke_opacity: f64,
    ) {
        if points.len() < 2 {
            return;
        }
        self.out.push_str(r#"<polyline points=""#);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(&format!("{},{}", p.x, p.y));
        }
        self.out.push_str(&format!(
            r#"" fill="none" stroke="{}" stroke-width="{width}" stroke-opacity="{stroke_opacity}"/>"#,
            hex(stroke)
        ));
        self.out.push('\n');
    }

    pub(crate) fn circle(&mut self, center: Point, r: f64, fill: Color, fill_opacity: f64) {
        self.out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{r}" fill="{}" fill-opacity="{fill_opacity}"/>"#,
            center.x,
            center.y,
            hex(fill)
        ));
        self.out.push('\n');
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
