// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cumulative stacking of index-aligned series.

extern crate alloc;

use alloc::vec::Vec;

use lamina_core::{Series, StackedPoint, StackedSeries};

/// Errors returned by [`stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Input series have misaligned point counts.
    ShapeMismatch {
        /// Point count of the first series.
        expected: usize,
        /// Conflicting point count.
        got: usize,
    },
    /// An explicit stack order is not a permutation of the input indices.
    InvalidOrder,
}

/// Bottom-to-top stacking order over a series set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOrder {
    /// Stack in input slice order (the default).
    Input,
    /// Stack by ascending draw order, ties resolved by input position.
    DrawOrder,
    /// Stack by an explicit bottom-to-top permutation of input indices.
    Explicit(Vec<usize>),
}

impl StackOrder {
    /// Resolves this order into bottom-to-top input indices.
    fn resolve(&self, series: &[Series]) -> Result<Vec<usize>, StackError> {
        match self {
            Self::Input => Ok((0..series.len()).collect()),
            Self::DrawOrder => {
                let mut order: Vec<usize> = (0..series.len()).collect();
                order.sort_by_key(|&i| series[i].draw_order);
                Ok(order)
            }
            Self::Explicit(order) => {
                if order.len() != series.len() {
                    return Err(StackError::InvalidOrder);
                }
                let mut seen = alloc::vec![false; series.len()];
                for &i in order {
                    if i >= series.len() || seen[i] {
                        return Err(StackError::InvalidOrder);
                    }
                    seen[i] = true;
                }
                Ok(order.clone())
            }
        }
    }
}

/// Stacks `series` cumulatively, returning one stacked series per input
/// series, ordered bottom-to-top in `order`.
///
/// For each x-index independently, band bottoms (`y0`) accumulate the heights
/// of every series stacked beneath and band tops are `y1 = y0 + height`.
/// Undefined or non-finite values stack as zero height but keep their slot;
/// the `defined` flag is copied through unchanged. Identity, color, selection
/// and draw order are copied untouched.
///
/// An empty slice stacks to an empty output. On error no partial result is
/// produced. Complexity is O(S * N) for S series of N points.
pub fn stack(series: &[Series], order: &StackOrder) -> Result<Vec<StackedSeries>, StackError> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };

    let expected = first.points.len();
    for s in series {
        if s.points.len() != expected {
            return Err(StackError::ShapeMismatch {
                expected,
                got: s.points.len(),
            });
        }
    }

    let mut out: Vec<StackedSeries> = order
        .resolve(series)?
        .into_iter()
        .map(|i| {
            let s = &series[i];
            StackedSeries {
                key: s.key,
                draw_order: s.draw_order,
                color: s.color,
                selected: s.selected,
                points: s
                    .points
                    .iter()
                    .map(|p| StackedPoint {
                        x: p.x,
                        value: p.value,
                        y0: 0.0,
                        y1: 0.0,
                        defined: p.defined,
                    })
                    .collect(),
            }
        })
        .collect();

    for k in 0..expected {
        let mut offset = 0.0;
        for s in &mut out {
            let p = &mut s.points[k];
            let height = if p.defined && p.value.is_finite() {
                p.value
            } else {
                0.0
            };
            p.y0 = offset;
            p.y1 = offset + height;
            offset = p.y1;
        }
    }

    Ok(out)
}
