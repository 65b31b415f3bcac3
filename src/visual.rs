use super::distance::*;
use super::graph::*;
use super::location::*;
use itertools::Itertools;

/// Consumer of distance labels, e.g. a renderer tinting floor by distance
/// from the player.
pub trait DistanceVisualizer {
    fn paint(&mut self, cell: Cell, normalized: f32);
}

/// Feed every labeled cell to `visualizer` with its distance scaled to
/// `0.0..=1.0`, in sorted cell order.
pub fn render_distances(map: &DistanceMap, visualizer: &mut dyn DistanceVisualizer) {
    for (cell, _) in map.iter().sorted() {
        if let Some(t) = map.normalized(cell) {
            visualizer.paint(cell, t);
        }
    }
}

/// Text dump of a distance map over the floor's bounding box. `S` marks the
/// start, digits are distance mod 10, `?` is unreachable floor.
pub fn render_ascii(graph: &SpatialGraph, map: &DistanceMap) -> String {
    let (min, max) = graph.bounds();

    (min.y..=max.y)
        .map(|y| {
            (min.x..=max.x)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    if cell == map.start() {
                        'S'
                    } else if !graph.contains(cell) {
                        ' '
                    } else {
                        match map.get(cell) {
                            Some(d) => char::from_digit(d % 10, 10).unwrap_or('?'),
                            None => '?',
                        }
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}
