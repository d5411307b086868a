//! Counting future crossings of hailstone paths, ignoring the Z axis

use rayon::prelude::*;

use common::structs::{Area, WorldLine};

/// Number of unordered pairs whose XY paths cross inside `area` at a time
/// both hailstones have yet to reach
pub fn count_crossings(lines: &[WorldLine], area: Area) -> usize {
    (0..lines.len())
        .into_par_iter()
        .map(|i| {
            lines[i + 1..]
                .iter()
                .filter(|&&other| crosses_inside(lines[i], other, area))
                .count()
        })
        .sum()
}

fn crosses_inside(a: WorldLine, b: WorldLine, area: Area) -> bool {
    let Some(crossing) = a.crossing_xy(b) else {
        log::trace!("{a} and {b} are parallel");
        return false;
    };
    let (x, y) = crossing.approx();
    let hit = crossing.in_future() && crossing.within(area);
    log::trace!(
        "{a} and {b} cross at ({x:.3}, {y:.3}), future: {}, counted: {hit}",
        crossing.in_future()
    );
    hit
}
