use super::types::{AntAssignment, Path};

/// Spread `ants` ants over the path set so the longest completion time is
/// minimal.
///
/// Each path starts at a cost equal to its step count; every ant joins the
/// currently cheapest path and raises its cost by one. Ties go to the lower
/// path index, which after the length sort means the shorter or earlier
/// discovered path. The greedy fill is exact for this objective: the last ant
/// on path `i` finishes at turn `steps_i + load_i - 1`, and levelling the
/// costs levels exactly those finish times.
pub fn assign(paths: &[Path], ants: usize) -> AntAssignment {
    let mut cost: Vec<usize> = paths.iter().map(Path::steps).collect();
    let mut load = vec![0usize; paths.len()];
    let mut path_of = Vec::with_capacity(ants);

    for _ in 0..ants {
        let mut cheapest = 0;
        for (index, &c) in cost.iter().enumerate() {
            if c < cost[cheapest] {
                cheapest = index;
            }
        }
        path_of.push(cheapest);
        load[cheapest] += 1;
        cost[cheapest] += 1;
    }

    AntAssignment { path_of, load }
}
