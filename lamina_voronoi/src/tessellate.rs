// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-plane Voronoi construction.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use lamina_core::{Cell, WeightedSite};

/// Errors returned by [`tessellate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TessellationError {
    /// The clip rectangle has a non-positive width or height.
    InvalidViewport {
        /// Clip width as given.
        width: f64,
        /// Clip height as given.
        height: f64,
    },
}

/// Vertex scratch for half-plane clipping. Voronoi cells rarely exceed a few
/// edges, so clipping usually stays on the stack.
type Polygon = SmallVec<[Point; 8]>;

/// Partitions `clip` into one clipped Voronoi cell per site.
///
/// `cells[i]` belongs to `sites[i]` by position; site keys are carried on the
/// input for downstream use only and never consulted here. Each cell is the
/// intersection of the clip rectangle with the perpendicular-bisector
/// half-plane against every other distinct site, so cells are convex, their
/// interiors are disjoint, and together they cover the clip rectangle.
///
/// Exactly coincident sites (numerically equal positions) resolve first-wins
/// by input order: the first site at a location keeps its full cell and later
/// duplicates get empty cells without contributing bisectors.
///
/// This is the classic O(P²) half-plane fallback rather than an O(P log P)
/// sweep construction; the marker sets this layout serves are small enough
/// that robustness wins over asymptotics.
///
/// An empty site slice tessellates to an empty cell list. A clip rectangle
/// with non-positive width or height fails with
/// [`TessellationError::InvalidViewport`].
pub fn tessellate(sites: &[WeightedSite], clip: Rect) -> Result<Vec<Cell>, TessellationError> {
    if !(clip.width() > 0.0 && clip.height() > 0.0) {
        return Err(TessellationError::InvalidViewport {
            width: clip.width(),
            height: clip.height(),
        });
    }
    if sites.is_empty() {
        return Ok(Vec::new());
    }

    // The first site at each exact location wins; later duplicates own no
    // region and contribute no bisector.
    let mut first_at: HashMap<(u64, u64), usize> = HashMap::with_capacity(sites.len());
    let mut owner: Vec<usize> = Vec::with_capacity(sites.len());
    for (i, site) in sites.iter().enumerate() {
        owner.push(*first_at.entry(position_bits(site.pos)).or_insert(i));
    }

    let corners = [
        Point::new(clip.x0, clip.y0),
        Point::new(clip.x1, clip.y0),
        Point::new(clip.x1, clip.y1),
        Point::new(clip.x0, clip.y1),
    ];

    let mut cells = Vec::with_capacity(sites.len());
    for (i, site) in sites.iter().enumerate() {
        if owner[i] != i {
            cells.push(Cell::empty(i));
            continue;
        }

        let mut polygon = Polygon::from_slice(&corners);
        for (j, other) in sites.iter().enumerate() {
            if j == i || owner[j] != j {
                continue;
            }
            polygon = clip_closer_half(&polygon, site.pos, other.pos);
            if polygon.is_empty() {
                break;
            }
        }
        cells.push(Cell::new(i, polygon.into_vec()));
    }

    Ok(cells)
}

/// Clips `polygon` to the half-plane of points at least as close to `site` as
/// to `other` (the site side of their perpendicular bisector).
fn clip_closer_half(polygon: &[Point], site: Point, other: Point) -> Polygon {
    // Signed surrogate along the site->other direction: zero on the
    // bisector, negative strictly on the site side.
    let mid = site.midpoint(other);
    let dx = other.x - site.x;
    let dy = other.y - site.y;
    let side = |p: Point| (p.x - mid.x) * dx + (p.y - mid.y) * dy;

    let mut out = Polygon::new();
    let n = polygon.len();
    for idx in 0..n {
        let a = polygon[idx];
        let b = polygon[(idx + 1) % n];
        let side_a = side(a);
        let side_b = side(b);
        if side_a <= 0.0 {
            out.push(a);
        }
        if (side_a < 0.0 && side_b > 0.0) || (side_a > 0.0 && side_b < 0.0) {
            let t = side_a / (side_a - side_b);
            out.push(Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)));
        }
    }
    out
}

/// Position key collapsing `-0.0` onto `0.0` so numerically equal positions
/// compare equal.
fn position_bits(pos: Point) -> (u64, u64) {
    let bits = |v: f64| if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() };
    (bits(pos.x), bits(pos.y))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use lamina_core::SiteKey;

    use super::*;

    fn site(key: u64, x: f64, y: f64) -> WeightedSite {
        WeightedSite::new(SiteKey(key), (x, y), 1.0)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn two_sites_split_along_the_vertical_bisector() {
        let sites = [site(1, 0.0, 0.0), site(2, 10.0, 0.0)];
        let clip = Rect::new(0.0, 0.0, 10.0, 10.0);
        let cells = tessellate(&sites, clip).unwrap();

        assert_eq!(cells.len(), 2);
        assert_close(cells[0].area(), 50.0);
        assert_close(cells[1].area(), 50.0);
        for v in &cells[0].vertices {
            assert!(v.x <= 5.0 + 1e-9, "left cell vertex {v:?} past bisector");
        }
        for v in &cells[1].vertices {
            assert!(v.x >= 5.0 - 1e-9, "right cell vertex {v:?} past bisector");
        }
    }

    #[test]
    fn single_site_owns_the_whole_viewport() {
        let clip = Rect::new(0.0, 0.0, 8.0, 4.0);
        let cells = tessellate(&[site(1, 2.0, 2.0)], clip).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].vertices.len(), 4);
        assert_close(cells[0].area(), 32.0);
    }

    #[test]
    fn coincident_sites_resolve_first_wins() {
        let clip = Rect::new(0.0, 0.0, 10.0, 10.0);
        let cells = tessellate(&[site(1, 3.0, 3.0), site(2, 3.0, 3.0)], clip).unwrap();

        assert_close(cells[0].area(), 100.0);
        assert!(cells[1].is_empty());
    }

    #[test]
    fn negative_zero_positions_count_as_coincident() {
        let clip = Rect::new(0.0, 0.0, 10.0, 10.0);
        let cells = tessellate(&[site(1, 0.0, 0.0), site(2, -0.0, 0.0)], clip).unwrap();
        assert_close(cells[0].area(), 100.0);
        assert!(cells[1].is_empty());
    }

    #[test]
    fn cells_cover_the_clip_rectangle() {
        let sites = [
            site(1, 1.0, 1.0),
            site(2, 9.0, 2.0),
            site(3, 4.0, 7.0),
            site(4, 8.0, 8.0),
            site(5, 2.0, 5.0),
        ];
        let clip = Rect::new(0.0, 0.0, 10.0, 10.0);
        let cells = tessellate(&sites, clip).unwrap();

        let total: f64 = cells.iter().map(Cell::area).sum();
        assert_close(total, 100.0);
    }

    #[test]
    fn cells_are_convex() {
        let sites = [
            site(1, 2.0, 3.0),
            site(2, 7.0, 1.0),
            site(3, 5.0, 8.0),
            site(4, 9.0, 6.0),
        ];
        let cells = tessellate(&sites, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        for cell in &cells {
            let v = &cell.vertices;
            let n = v.len();
            assert!(n >= 3, "cell {} unexpectedly degenerate", cell.site);
            // All cross products of consecutive edges must share a sign.
            let mut sign = 0.0_f64;
            for i in 0..n {
                let a = v[i];
                let b = v[(i + 1) % n];
                let c = v[(i + 2) % n];
                let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
                if cross.abs() < 1e-9 {
                    continue;
                }
                if sign == 0.0 {
                    sign = cross.signum();
                } else {
                    assert_eq!(cross.signum(), sign, "cell {} is not convex", cell.site);
                }
            }
        }
    }

    #[test]
    fn cells_pair_positionally_with_sites() {
        let sites = [site(5, 1.0, 1.0), site(9, 6.0, 6.0)];
        let cells = tessellate(&sites, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        let indices: Vec<usize> = cells.iter().map(|c| c.site).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn empty_site_set_is_not_an_error() {
        let cells = tessellate(&[], Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn non_positive_viewport_is_rejected() {
        let sites = [site(1, 0.0, 0.0)];
        for clip in [
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 0.0),
            Rect::new(10.0, 10.0, 0.0, 0.0),
        ] {
            assert!(matches!(
                tessellate(&sites, clip),
                Err(TessellationError::InvalidViewport { .. })
            ));
        }
    }
}
