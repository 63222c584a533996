//! Randomized depth-first backtracker
//!
//! Carves a perfect maze: every cell reachable from every other through
//! exactly one path. Traversal uses an explicit stack of frames instead
//! of native recursion, so depth is bounded by the heap rather than the
//! call stack even for very large grids.

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Direction, Grid};

/// A cell being expanded: its shuffled candidate directions and how many
/// of them have been tried so far.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: usize,
    z: usize,
    order: [Direction; 4],
    cursor: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(x: usize, z: usize, rng: &mut R) -> Self {
        let mut order = Direction::ALL;
        order.shuffle(rng);
        Self {
            x,
            z,
            order,
            cursor: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let dir = self.order.get(self.cursor).copied();
        self.cursor += 1;
        dir
    }
}

/// Carve a maze into a freshly allocated, fully walled grid.
///
/// Starts at the origin cell `(0, 0)`. Each cell visits its four
/// neighbours in a uniformly shuffled order and descends into the first
/// unvisited one before trying the rest, removing the shared wall on both
/// sides. The only observable effect is on the wall flags (and the
/// generation-time visited flags).
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.mark_visited(0, 0);
    let mut stack = Vec::with_capacity(grid.len());
    stack.push(Frame::new(0, 0, rng));

    while let Some(frame) = stack.last_mut() {
        let Some(dir) = frame.next_direction() else {
            stack.pop();
            continue;
        };
        let (x, z) = (frame.x, frame.z);

        let Some((nx, nz)) = grid.neighbor(x, z, dir) else {
            continue;
        };
        if grid.is_visited(nx, nz) {
            continue;
        }

        grid.mark_visited(nx, nz);
        grid.carve(x, z, dir);
        stack.push(Frame::new(nx, nz, rng));
    }

    log::info!(
        "Carved {}x{} maze with {} open edges",
        grid.width(),
        grid.height(),
        grid.open_edge_count()
    );
}
