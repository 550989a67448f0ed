//! Rebuild reading order from positioned fragments.
//!
//! Fragments belong to the same visual line only when their `y` values are
//! bit-for-bit equal (with `-0.0 == 0.0`). No tolerance is applied.

use crate::model::{Line, Page, TextFragment};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Fragments bucketed by exact `y`.
pub type LineBuckets = BTreeMap<OrderedFloat<f64>, Vec<TextFragment>>;

/// Group fragments into buckets keyed by their `y` coordinate.
pub fn group_lines(fragments: impl IntoIterator<Item = TextFragment>) -> LineBuckets {
    let mut buckets = LineBuckets::new();
    for fragment in fragments {
        buckets
            .entry(OrderedFloat(fragment.y))
            .or_default()
            .push(fragment);
    }
    buckets
}

/// Order buckets top to bottom (descending `y`) and each bucket left to right.
///
/// The sort within a line is stable, so fragments sharing an `x` keep their
/// extraction order.
pub fn sort_lines(buckets: LineBuckets) -> Page {
    let lines = buckets
        .into_iter()
        .rev()
        .map(|(y, mut fragments)| {
            fragments.sort_by_key(|f| OrderedFloat(f.x));
            if has_duplicate_x(&fragments) {
                tracing::debug!(y = y.0, "line has fragments sharing an x position");
            }
            Line { y: y.0, fragments }
        })
        .collect();
    Page { lines }
}

/// Group and sort in one step.
pub fn build_page(fragments: impl IntoIterator<Item = TextFragment>) -> Page {
    sort_lines(group_lines(fragments))
}

fn has_duplicate_x(sorted: &[TextFragment]) -> bool {
    sorted.windows(2).any(|w| w[0].x == w[1].x)
}
