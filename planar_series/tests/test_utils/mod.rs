#![allow(dead_code)]

use planar_series::core::math::{point, Point, Rect};
use planar_series::series::internal::quad_build::quad_bounds;
use planar_series::series::internal::varint::read_uvarint;
use planar_series::series::{
    IndexKind, IndexOptions, Series, SeriesSource, INDEX_HEADER_LEN,
};

/// Octagon fixture with an explicit closing point (the wrap segment is suppressed, leaving 8
/// segments).
pub fn octagon() -> Vec<Point> {
    vec![
        point(0.0, 3.0),
        point(3.0, 0.0),
        point(7.0, 0.0),
        point(10.0, 3.0),
        point(10.0, 7.0),
        point(7.0, 10.0),
        point(3.0, 10.0),
        point(0.0, 7.0),
        point(0.0, 3.0),
    ]
}

/// Closed ring of `n` points on a circle, counter clockwise.
pub fn ring(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            point(50.0 + 40.0 * angle.cos(), 50.0 + 40.0 * angle.sin())
        })
        .collect()
}

/// Open spiral of `n` points winding outward from the origin.
pub fn spiral(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.35;
            point(t.cos() * (2.0 + t), t.sin() * (2.0 + t))
        })
        .collect()
}

/// Deterministic pseudo-random points on a coarse 0.1 grid (coincident coordinates exercise
/// midline straddling and explicit closure).
pub fn scattered(seed: u64, n: usize) -> Vec<Point> {
    let mut state = seed | 1;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 1000) as f64 / 10.0
    };
    (0..n).map(|_| point(next(), next())).collect()
}

pub fn indexed(points: Vec<Point>, is_closed: bool) -> Series {
    Series::new(
        points,
        is_closed,
        &IndexOptions::new(IndexKind::QuadTree, 1),
    )
}

pub fn unindexed(points: Vec<Point>, is_closed: bool) -> Series {
    Series::new(points, is_closed, &IndexOptions::no_indexing())
}

/// All segment indexes whose bounding rectangle intersects `query`, by brute force scan.
pub fn brute_search(series: &Series, query: Rect) -> Vec<usize> {
    (0..series.segment_count())
        .filter(|&i| series.segment_at(i).bounding_rect().intersects(query))
        .collect()
}

/// Segment indexes delivered by [SeriesSource::search] in delivery order.
pub fn collect_search(series: &Series, query: Rect) -> Vec<usize> {
    let mut found = Vec::new();
    series
        .search(query, &mut |_seg, index| {
            found.push(index);
            true
        })
        .unwrap();
    found
}

/// Brute force nearest segment to `q` by Euclidean distance, lowest index winning ties.
pub fn brute_nearest(series: &Series, q: Point) -> Option<(usize, f64)> {
    let mut nearest: Option<(usize, f64)> = None;
    for i in 0..series.segment_count() {
        let dist = series.segment_at(i).distance_to_point(q);
        if nearest.map_or(true, |(_, best)| dist < best) {
            nearest = Some((i, dist));
        }
    }
    nearest
}

/// Decode the series' compressed index, asserting the structural invariants along the way:
/// valid header, strictly ascending item lists, every item's segment rectangle contained in its
/// node's bounds, child bodies exactly matching their size prefixes, and the blob fully
/// consumed. Returns all stored segment indexes in traversal order.
pub fn walk_index(series: &Series) -> Vec<usize> {
    let data = series.index_bytes();
    assert!(!data.is_empty(), "series has no index");
    assert_eq!(data[0], 1);
    let stated = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as usize;
    assert_eq!(stated, data.len());
    let mut items = Vec::new();
    let end = walk_node(
        data,
        INDEX_HEADER_LEN,
        series,
        series.bounding_rect(),
        &mut items,
    );
    assert_eq!(end, data.len());
    items
}

fn walk_node(
    data: &[u8],
    addr: usize,
    series: &Series,
    bounds: Rect,
    out: &mut Vec<usize>,
) -> usize {
    let (nitems, mut addr) = read_uvarint(data, addr).unwrap();
    let mut last = 0u64;
    let mut prev: Option<u64> = None;
    for _ in 0..nitems {
        let (delta, next) = read_uvarint(data, addr).unwrap();
        addr = next;
        let item = last + delta;
        if let Some(prev) = prev {
            assert!(item > prev, "node item list not strictly ascending");
        }
        let seg_rect = series.segment_at(item as usize).bounding_rect();
        assert!(
            bounds.contains_rect(seg_rect),
            "segment {item} rect {seg_rect:?} escapes node bounds {bounds:?}"
        );
        out.push(item as usize);
        prev = Some(item);
        last = item;
    }
    let split = data[addr];
    addr += 1;
    if split == 0 {
        return addr;
    }
    assert_eq!(split, 1);
    for q in 0..4 {
        let (qsize, next) = read_uvarint(data, addr).unwrap();
        addr = next;
        if qsize == 0 {
            continue;
        }
        let child_bounds = quad_bounds(bounds, q);
        let end = walk_node(data, addr, series, child_bounds, out);
        assert_eq!(end, addr + qsize as usize, "child body size prefix mismatch");
        addr = end;
    }
    addr
}
