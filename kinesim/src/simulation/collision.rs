//! Pairwise collision resolution for the bouncing-ball set
//!
//! Equal-mass elastic response: the two bodies swap the velocity components
//! along the contact normal and keep their tangential components, then get
//! pushed apart along the normal so they no longer overlap

use tracing::trace;

use crate::simulation::geometry::{from_normal_frame, to_normal_frame};
use crate::simulation::states::{Body, NVec2};

/// Resolve all overlaps in `bodies` once, returning how many pair
/// resolutions were applied.
///
/// Every ordered pair (i, j), i != j, is visited, so an unordered pair is
/// checked twice per call and the second check sees the state written by
/// the first.
pub fn resolve_collisions(bodies: &mut [Body], padding: f64) -> usize {
    let n = bodies.len();
    let mut resolved = 0;

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if resolve_pair(bodies, i, j, padding) {
                resolved += 1;
            }
        }
    }

    if resolved > 0 {
        trace!(resolved, "collision pass");
    }
    resolved
}

/// Resolve a single pair if the two circles overlap. Returns whether they did.
/// A self-pair or an index past the end is never an overlap.
pub fn resolve_pair(bodies: &mut [Body], i: usize, j: usize, padding: f64) -> bool {
    if i == j || i >= bodies.len() || j >= bodies.len() {
        return false;
    }
    let (b1, b2) = pair_mut(bodies, i, j);

    // d points from body i to body j
    let d = b2.x - b1.x;
    let distance = d.norm();
    let reach = b1.radius + b2.radius;
    if distance >= reach {
        return false;
    }

    // atan2(0, 0) = 0, so coincident centers separate along +x
    let angle = d.y.atan2(d.x);
    let (sin, cos) = angle.sin_cos();

    // velocities in the normal frame: x = normal, y = tangential
    let u1 = to_normal_frame(b1.v, cos, sin);
    let u2 = to_normal_frame(b2.v, cos, sin);

    // exchange normal components
    let u1_final = NVec2::new(u2.x, u1.y);
    let u2_final = NVec2::new(u1.x, u2.y);

    b1.v = from_normal_frame(u1_final, cos, sin);
    b2.v = from_normal_frame(u2_final, cos, sin);

    // half of the padded penetration each, in opposite directions
    let overlap = 0.5 * (reach - distance + padding);
    let normal = NVec2::new(cos, sin);
    b1.x -= normal * overlap;
    b2.x += normal * overlap;

    true
}

/// Two distinct mutable borrows out of one slice, `i != j`, both in range
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
