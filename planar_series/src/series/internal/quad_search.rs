//! Query paths over the serialized segment index. Both searches operate directly on the
//! compressed bytes; nodes are never reconstructed. All reads are bounds checked and corrupt
//! blobs surface [IndexError] instead of panicking.

use super::dist_queue::{DistEntry, DistQueue, EntryKind};
use super::quad_build::quad_bounds;
use super::varint::read_uvarint;
use crate::core::{
    math::{Rect, Segment},
    traits::ControlFlow,
};
use crate::series::{IndexError, IndexKind, NearestSegment, SeriesSource, INDEX_HEADER_LEN};

/// Validate the 5 byte header of a non-empty index blob: recognized kind byte and a little-endian
/// u32 length matching the blob length.
pub fn validate_header(data: &[u8]) -> Result<(), IndexError> {
    if data.len() < INDEX_HEADER_LEN {
        return Err(IndexError::Truncated);
    }
    if data[0] != IndexKind::QuadTree.as_byte() {
        return Err(IndexError::UnknownKind(data[0]));
    }
    let stated = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as usize;
    if stated != data.len() {
        return Err(IndexError::LengthMismatch {
            stated,
            actual: data.len(),
        });
    }
    Ok(())
}

#[inline]
fn decode_item(last: u64, delta: u64, segment_count: u64) -> Result<u64, IndexError> {
    let item = last.saturating_add(delta);
    if item >= segment_count {
        return Err(IndexError::SegmentOutOfRange(item as usize));
    }
    Ok(item)
}

/// Recursive descent search for segments whose bounding rectangle intersects `query`, starting at
/// the node at byte offset `addr` covering `bounds`. Items at a node are visited in ascending
/// segment order before its children; children are visited in quadrant order 0 to 3. Quadrants
/// whose bounds miss `query` are skipped in O(1) via their size prefix.
pub fn search_compressed<S, C, F>(
    data: &[u8],
    addr: usize,
    series: &S,
    bounds: Rect<S::Num>,
    query: Rect<S::Num>,
    visitor: &mut F,
) -> Result<C, IndexError>
where
    S: SeriesSource + ?Sized,
    C: ControlFlow,
    F: FnMut(Segment<S::Num>, usize) -> C,
{
    let segment_count = series.segment_count() as u64;
    let (nitems, mut addr) = read_uvarint(data, addr)?;
    let mut last = 0;
    for _ in 0..nitems {
        let (delta, next) = read_uvarint(data, addr)?;
        addr = next;
        let item = decode_item(last, delta, segment_count)?;
        let seg = series.segment_at(item as usize);
        if seg.bounding_rect().intersects(query) {
            let c = visitor(seg, item as usize);
            if c.should_break() {
                return Ok(c);
            }
        }
        last = item;
    }
    let split = *data.get(addr).ok_or(IndexError::Truncated)?;
    addr += 1;
    if split == 1 {
        for q in 0..4 {
            let (qsize, next) = read_uvarint(data, addr)?;
            addr = next;
            if qsize == 0 {
                // empty quadrant
                continue;
            }
            let qsize = qsize as usize;
            if qsize > data.len() - addr {
                return Err(IndexError::Truncated);
            }
            let qbounds = quad_bounds(bounds, q);
            if qbounds.intersects(query) {
                let c = search_compressed(data, addr, series, qbounds, query, visitor)?;
                if c.should_break() {
                    return Ok(c);
                }
            }
            addr += qsize;
        }
    }
    Ok(C::continuing())
}

/// Best-first traversal returning the segment minimizing `dist_to_segment`, using
/// `dist_to_rect` as the lower bound for unexpanded quadrants. Only the nearest segment of each
/// decoded node is queued; a closer segment elsewhere always sits behind a rectangle entry with a
/// lower-or-equal bound, and rectangle entries win ties, so the first popped segment is the
/// answer.
pub fn nearest_compressed<S, DR, DS>(
    data: &[u8],
    mut addr: usize,
    series: &S,
    mut bounds: Rect<S::Num>,
    dist_to_rect: &DR,
    dist_to_segment: &DS,
) -> Result<Option<NearestSegment<S::Num>>, IndexError>
where
    S: SeriesSource + ?Sized,
    DR: Fn(Rect<S::Num>) -> S::Num,
    DS: Fn(Segment<S::Num>) -> S::Num,
{
    let segment_count = series.segment_count() as u64;
    let mut queue = DistQueue::with_capacity(64);
    loop {
        let (nitems, mut cursor) = read_uvarint(data, addr)?;
        let mut last = 0;
        let mut nearest: Option<DistEntry<S::Num>> = None;
        for _ in 0..nitems {
            let (delta, next) = read_uvarint(data, cursor)?;
            cursor = next;
            let item = decode_item(last, delta, segment_count)?;
            let seg = series.segment_at(item as usize);
            let dist = dist_to_segment(seg);
            if nearest.map_or(true, |near| dist < near.dist) {
                nearest = Some(DistEntry {
                    dist,
                    kind: EntryKind::Segment,
                    pos: item as usize,
                    a: seg.a,
                    b: seg.b,
                });
            }
            last = item;
        }
        if let Some(entry) = nearest {
            queue.push(entry);
        }
        let split = *data.get(cursor).ok_or(IndexError::Truncated)?;
        cursor += 1;
        if split == 1 {
            for q in 0..4 {
                let (qsize, next) = read_uvarint(data, cursor)?;
                cursor = next;
                if qsize == 0 {
                    // empty quadrant
                    continue;
                }
                let qsize = qsize as usize;
                if qsize > data.len() - cursor {
                    return Err(IndexError::Truncated);
                }
                let qbounds = quad_bounds(bounds, q);
                queue.push(DistEntry {
                    dist: dist_to_rect(qbounds),
                    kind: EntryKind::Rect,
                    pos: cursor,
                    a: qbounds.min,
                    b: qbounds.max,
                });
                cursor += qsize;
            }
        }
        match queue.pop() {
            None => return Ok(None),
            Some(entry) => match entry.kind {
                EntryKind::Segment => {
                    return Ok(Some(NearestSegment {
                        segment: Segment::new(entry.a, entry.b),
                        index: entry.pos,
                        distance: entry.dist,
                    }));
                }
                EntryKind::Rect => {
                    addr = entry.pos;
                    bounds = Rect::new(entry.a, entry.b);
                }
            },
        }
    }
}
