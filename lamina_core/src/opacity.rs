// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fill-opacity policy shared by chart and map renderers.
//!
//! Both contexts style fills the same way: a per-element weight ratio scaled
//! by a base opacity, with unselected elements dimmed while any selection is
//! active. The policy is a pure function so renderers apply it per element
//! without the layout core holding styling state.

/// Default fill opacity when nothing is selected, or for selected elements.
pub const BASE_FILL_OPACITY: f64 = 1.0;
/// Default fill opacity for unselected elements while a selection is active.
pub const DIMMED_FILL_OPACITY: f64 = 0.4;

/// Maps a weight ratio and selection state to a fill opacity in `[0, 1]`.
///
/// `ratio` is a normalized weight in `[0, 1]`: `radius / max_radius` for map
/// markers (see [`crate::max_radius`]) and `1.0` for chart series, which have
/// no radius concept. While any selection is active, elements outside the
/// selection get `ratio * dimmed`; everything else gets `ratio * base`. The
/// result is clamped to `[0, 1]`.
pub fn fill_opacity(
    ratio: f64,
    selected: bool,
    has_selection: bool,
    base: f64,
    dimmed: f64,
) -> f64 {
    let scale = if has_selection && !selected {
        dimmed
    } else {
        base
    };
    (ratio * scale).clamp(0.0, 1.0)
}
