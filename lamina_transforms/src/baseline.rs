// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary series synthesis for closed stacked silhouettes.

extern crate alloc;

use lamina_core::{StackedPoint, StackedSeries};

/// Errors returned by [`synthesize_baseline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineError {
    /// There are no stacked series to synthesize from.
    EmptyInput,
}

/// Synthesizes the boundary series that closes a stacked layout.
///
/// The source is the series with the minimal total `y0` over its points — the
/// band sitting lowest in the stack on average — with ties resolved in favor
/// of the first such series in stack order. The boundary copies the source's
/// x positions and `defined` flags, with `value`, `y0` and `y1` all set to
/// the source's `y0`: the lower envelope of the lowest band.
///
/// The boundary carries a [`lamina_core::SeriesKey::Boundary`] key derived
/// from the source key and a draw order one past the highest input draw
/// order, so a renderer appends it after the filled bands and draws it as a
/// line only. Rerunning the synthesis on identical input yields an identical
/// result.
pub fn synthesize_baseline(stacked: &[StackedSeries]) -> Result<StackedSeries, BaselineError> {
    let Some(first) = stacked.first() else {
        return Err(BaselineError::EmptyInput);
    };

    let mut source = first;
    let mut best = below_total(first);
    for s in &stacked[1..] {
        let total = below_total(s);
        if total < best {
            best = total;
            source = s;
        }
    }

    let draw_order = 1 + stacked.iter().map(|s| s.draw_order).max().unwrap_or(0);

    Ok(StackedSeries {
        key: source.key.to_boundary(),
        draw_order,
        color: source.color,
        selected: source.selected,
        points: source
            .points
            .iter()
            .map(|p| StackedPoint {
                x: p.x,
                value: p.y0,
                y0: p.y0,
                y1: p.y0,
                defined: p.defined,
            })
            .collect(),
    })
}

fn below_total(series: &StackedSeries) -> f64 {
    series.points.iter().map(|p| p.y0).sum()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use lamina_core::{Series, SeriesKey};

    use crate::stack::{StackOrder, stack};

    use super::*;

    fn stacked_pair() -> Vec<StackedSeries> {
        let input = vec![
            Series::new(SeriesKey::Data(1), 0).with_values([(0.0, 1.0), (1.0, 2.0)]),
            Series::new(SeriesKey::Data(2), 1).with_values([(0.0, 3.0), (1.0, 4.0)]),
        ];
        stack(&input, &StackOrder::Input).unwrap()
    }

    #[test]
    fn boundary_traces_the_lowest_band() {
        let boundary = synthesize_baseline(&stacked_pair()).unwrap();
        assert_eq!(boundary.key, SeriesKey::Boundary(1));
        let values: Vec<f64> = boundary.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 0.0]);
        for p in &boundary.points {
            assert_eq!(p.y0, p.value);
            assert_eq!(p.y1, p.value);
        }
    }

    #[test]
    fn boundary_draw_order_follows_every_band() {
        let boundary = synthesize_baseline(&stacked_pair()).unwrap();
        assert_eq!(boundary.draw_order, 2);
    }

    #[test]
    fn ties_pick_the_first_series_in_stack_order() {
        // Both series sit on the baseline at every x in a single-series-high
        // stack of zeros, so their y0 totals tie at 0.
        let input = vec![
            Series::new(SeriesKey::Data(7), 0).with_values([(0.0, 0.0)]),
            Series::new(SeriesKey::Data(8), 1).with_values([(0.0, 0.0)]),
        ];
        let stacked = stack(&input, &StackOrder::Input).unwrap();
        let boundary = synthesize_baseline(&stacked).unwrap();
        assert_eq!(boundary.key, SeriesKey::Boundary(7));
    }

    #[test]
    fn synthesis_is_idempotent() {
        let stacked = stacked_pair();
        assert_eq!(
            synthesize_baseline(&stacked).unwrap(),
            synthesize_baseline(&stacked).unwrap()
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(synthesize_baseline(&[]), Err(BaselineError::EmptyInput));
    }
}
