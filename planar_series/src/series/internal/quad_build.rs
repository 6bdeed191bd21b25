//! In-memory quadtree build phase and compression into the flat serialized layout. The live tree
//! only exists while a series is constructed; queries run against the compressed bytes.

use super::varint::write_uvarint;
use crate::core::{math::Rect, traits::Real};
use crate::series::SeriesSource;

/// Maximum number of items a node holds before it splits. Items that straddle a split midline
/// stay at the node regardless.
pub const QUAD_MAX_ITEMS: usize = 12;

/// Maximum tree depth. Nodes at this depth never split and accumulate all arriving items.
pub const QUAD_MAX_DEPTH: usize = 64;

/// Quadrant numbering with mid-x `mx` and mid-y `my`: 0 = NW (`x < mx, y >= my`), 1 = NE
/// (`x >= mx, y >= my`), 2 = SW (`x < mx, y < my`), 3 = SE (`x >= mx, y < my`).
///
/// Returns the unique quadrant of `bounds` fully containing `rect`, or `None` if `rect` straddles
/// a midline and must stay at the current node.
pub fn choose_quad<T>(bounds: Rect<T>, rect: Rect<T>) -> Option<usize>
where
    T: Real,
{
    let mid_x = (bounds.min.x + bounds.max.x) / T::two();
    let mid_y = (bounds.min.y + bounds.max.y) / T::two();
    if rect.max.x < mid_x {
        if rect.max.y < mid_y {
            return Some(2);
        }
        if rect.min.y < mid_y {
            return None;
        }
        return Some(0);
    }
    if rect.min.x < mid_x {
        return None;
    }
    if rect.max.y < mid_y {
        return Some(3);
    }
    if rect.min.y < mid_y {
        return None;
    }
    Some(1)
}

/// Sub-rectangle of `bounds` for quadrant `q` (see [choose_quad] for the numbering).
pub fn quad_bounds<T>(mut bounds: Rect<T>, q: usize) -> Rect<T>
where
    T: Real,
{
    let center_x = (bounds.min.x + bounds.max.x) / T::two();
    let center_y = (bounds.min.y + bounds.max.y) / T::two();
    match q {
        0 => {
            bounds.min.y = center_y;
            bounds.max.x = center_x;
        }
        1 => {
            bounds.min.x = center_x;
            bounds.min.y = center_y;
        }
        2 => {
            bounds.max.x = center_x;
            bounds.max.y = center_y;
        }
        _ => {
            bounds.min.x = center_x;
            bounds.max.y = center_y;
        }
    }
    bounds
}

/// Build phase quadtree node.
#[derive(Debug, Default)]
pub struct QuadNode {
    split: bool,
    items: Vec<usize>,
    quads: [Option<Box<QuadNode>>; 4],
}

impl QuadNode {
    /// Insert segment `item` with bounding rectangle `rect` into this node covering `bounds` at
    /// `depth`. Splitting is triggered by the arrival of the item past [QUAD_MAX_ITEMS];
    /// existing items are redistributed under the same quadrant choice rule and then insertion
    /// retries.
    pub fn insert<S>(
        &mut self,
        series: &S,
        bounds: Rect<S::Num>,
        rect: Rect<S::Num>,
        item: usize,
        depth: usize,
    ) where
        S: SeriesSource + ?Sized,
    {
        if depth == QUAD_MAX_DEPTH {
            self.items.push(item);
        } else if self.split {
            match choose_quad(bounds, rect) {
                None => self.items.push(item),
                Some(q) => {
                    let qbounds = quad_bounds(bounds, q);
                    self.quads[q]
                        .get_or_insert_with(Default::default)
                        .insert(series, qbounds, rect, item, depth + 1);
                }
            }
        } else if self.items.len() == QUAD_MAX_ITEMS {
            self.split = true;
            let existing = std::mem::take(&mut self.items);
            for existing_item in existing {
                let existing_rect = series.segment_at(existing_item).bounding_rect();
                match choose_quad(bounds, existing_rect) {
                    None => self.items.push(existing_item),
                    Some(q) => {
                        let qbounds = quad_bounds(bounds, q);
                        self.quads[q]
                            .get_or_insert_with(Default::default)
                            .insert(series, qbounds, existing_rect, existing_item, depth + 1);
                    }
                }
            }
            self.insert(series, bounds, rect, item, depth);
        } else {
            self.items.push(item);
        }
    }

    /// Serialize this node and its children in pre-order onto `dst`: item count, delta-coded
    /// ascending item list, split byte, and for split nodes four size-prefixed child bodies
    /// (size 0 marks an empty quadrant). The size prefix is what lets readers skip a sibling
    /// subtree without decoding it.
    pub fn compress(&mut self, dst: &mut Vec<u8>) {
        self.items.sort_unstable();
        write_uvarint(dst, self.items.len() as u64);
        let mut last = 0;
        for &item in &self.items {
            write_uvarint(dst, (item - last) as u64);
            last = item;
        }
        if !self.split {
            dst.push(0);
        } else {
            dst.push(1);
            for quad in self.quads.iter_mut() {
                match quad {
                    Some(child) => {
                        let mut body = Vec::new();
                        child.compress(&mut body);
                        write_uvarint(dst, body.len() as u64);
                        dst.extend_from_slice(&body);
                    }
                    None => dst.push(0),
                }
            }
        }
    }
}
