// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weighted marker sites consumed by the Voronoi tessellation.

use kurbo::Point;
use peniko::Color;

/// Stable identity for a site marker, treated as an opaque comparable token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteKey(pub u64);

/// A weighted point marker competing for a region of the viewport.
///
/// The radius weights styling only (see [`crate::fill_opacity`]); the
/// geometric partition treats every site as a bare location. Coincident
/// positions are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedSite {
    /// Marker location in viewport coordinates.
    pub pos: Point,
    /// Positive marker radius, in the same units as `pos`.
    pub radius: f64,
    /// Stable identity.
    pub key: SiteKey,
    /// Marker color, carried through untouched for the renderer.
    pub color: Color,
    /// Whether this marker is currently selected.
    pub selected: bool,
}

impl WeightedSite {
    /// Creates a site with a black color and no selection.
    pub fn new(key: SiteKey, pos: impl Into<Point>, radius: f64) -> Self {
        Self {
            pos: pos.into(),
            radius,
            key,
            color: Color::BLACK,
            selected: false,
        }
    }

    /// Sets the marker color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the selection flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Returns the largest finite radius in `sites`, or `None` if there is none.
///
/// Callers normalize per-site weight ratios (`radius / max_radius`) over the
/// full current site set before invoking [`crate::fill_opacity`] per marker.
pub fn max_radius(sites: &[WeightedSite]) -> Option<f64> {
    let mut max = f64::NEG_INFINITY;
    for site in sites {
        if site.radius.is_finite() {
            max = max.max(site.radius);
        }
    }
    max.is_finite().then_some(max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn max_radius_picks_largest_finite() {
        let sites = [
            WeightedSite::new(SiteKey(1), (0.0, 0.0), 4.0),
            WeightedSite::new(SiteKey(2), (1.0, 1.0), f64::NAN),
            WeightedSite::new(SiteKey(3), (2.0, 2.0), 9.0),
        ];
        assert_eq!(max_radius(&sites), Some(9.0));
    }

    #[test]
    fn max_radius_of_empty_set_is_none() {
        assert_eq!(max_radius(&[]), None);
    }
}
