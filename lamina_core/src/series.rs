// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series and point types consumed and produced by the stacking transforms.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

/// Stable identity for a series, treated as an opaque comparable token.
///
/// Renderers join on keys to diff-update visuals across data updates; the
/// layout core never reads a key beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesKey {
    /// A caller-supplied data series.
    Data(u64),
    /// A synthesized boundary series, derived from its source series' key.
    ///
    /// `Boundary` keys can never collide with `Data` keys, which lets a
    /// renderer exclude boundary series from legends and fill interactions.
    Boundary(u64),
}

impl SeriesKey {
    /// Returns the boundary key derived from this key.
    ///
    /// The derivation is idempotent: a boundary key maps to itself, so
    /// repeated layouts over the same identities stay identity-stable.
    pub fn to_boundary(self) -> Self {
        match self {
            Self::Data(raw) | Self::Boundary(raw) => Self::Boundary(raw),
        }
    }

    /// Returns `true` for synthesized boundary keys.
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary(_))
    }
}

/// One input point of a series, aligned by index across the series set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    /// X position (a category index or a numeric value).
    pub x: f64,
    /// Raw (unstacked) height.
    pub value: f64,
    /// Whether the point is defined for drawing-continuity purposes.
    ///
    /// Undefined points stack as zero height but keep their slot; the flag is
    /// passed through unchanged so the renderer decides whether to break the
    /// line there.
    pub defined: bool,
}

impl DataPoint {
    /// Creates a defined point.
    pub fn new(x: f64, value: f64) -> Self {
        Self {
            x,
            value,
            defined: true,
        }
    }

    /// Creates an undefined (gap) point at `x`.
    pub fn gap(x: f64) -> Self {
        Self {
            x,
            value: 0.0,
            defined: false,
        }
    }
}

/// One labeled sequence of data points, drawn as one band or line.
///
/// All series passed to a single stack call must have equal-length,
/// index-aligned point sequences; `points[k]` refers to the same category
/// across every series in the set.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Stable identity, unique across the series set.
    pub key: SeriesKey,
    /// Draw order index among the series set.
    pub draw_order: usize,
    /// Series color, carried through untouched for the renderer.
    pub color: Color,
    /// Whether this series is currently selected.
    pub selected: bool,
    /// Ordered points, index-aligned with every other series in the set.
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Creates an empty series with a black color and no selection.
    pub fn new(key: SeriesKey, draw_order: usize) -> Self {
        Self {
            key,
            draw_order,
            color: Color::BLACK,
            selected: false,
            points: Vec::new(),
        }
    }

    /// Sets the series color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the selection flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the points from `(x, value)` pairs, all defined.
    pub fn with_values(mut self, values: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.points = values
            .into_iter()
            .map(|(x, value)| DataPoint::new(x, value))
            .collect();
        self
    }

    /// Sets the points.
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }
}

/// One stacked output point.
///
/// Stacking never mutates its input; the raw `value` is copied next to the
/// derived offsets so a renderer picks the field it needs (`y1` for band
/// tops, `y0` for band bottoms, `value` for labels and tooltips).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedPoint {
    /// X position, copied from the input point.
    pub x: f64,
    /// Raw (unstacked) height, copied from the input point.
    pub value: f64,
    /// Cumulative height of everything stacked below, at this x.
    pub y0: f64,
    /// `y0` plus this point's height (the band top).
    pub y1: f64,
    /// Defined flag, copied unchanged from the input point.
    pub defined: bool,
}

/// A series with stacked offsets.
///
/// Produced bottom-to-top in stack order; identity, color, selection and draw
/// order are copied from the input series untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    /// Stable identity, copied from the input series.
    pub key: SeriesKey,
    /// Draw order index, copied from the input series.
    pub draw_order: usize,
    /// Series color, copied from the input series.
    pub color: Color,
    /// Selection flag, copied from the input series.
    pub selected: bool,
    /// Stacked points, index-aligned with the input points.
    pub points: Vec<StackedPoint>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn boundary_keys_never_collide_with_data_keys() {
        let data = SeriesKey::Data(7);
        let boundary = data.to_boundary();
        assert_ne!(data, boundary);
        assert!(boundary.is_boundary());
        assert!(!data.is_boundary());
    }

    #[test]
    fn boundary_derivation_is_idempotent() {
        let key = SeriesKey::Data(42);
        assert_eq!(key.to_boundary(), key.to_boundary().to_boundary());
    }
}
