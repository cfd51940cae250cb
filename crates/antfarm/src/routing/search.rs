use std::collections::{HashSet, VecDeque};

use super::network::FlowNetwork;
use super::types::{Path, RouteError};
use crate::farm::Farm;

/// Find a maximum set of internally vertex-disjoint source-to-sink paths.
///
/// Runs Edmonds-Karp on the node-split residual network: each round a
/// breadth-first search finds a shortest augmenting path and saturates it by
/// one unit, until none remains. The unit internal capacity of interior rooms
/// makes the resulting path count the Menger number, the true ceiling on
/// parallel ants per turn. A shorter-paths-first heuristic can do worse: two
/// short paths sharing a bottleneck room block each other, where the flow
/// reroutes one of them through residual arcs.
///
/// Paths come out sorted by length ascending; equal lengths keep discovery
/// order, which follows farm neighbour order.
///
/// Fails with [`RouteError::NoPath`] when the sink is unreachable.
pub fn find_disjoint_paths(farm: &Farm) -> Result<Vec<Path>, RouteError> {
    let mut net = FlowNetwork::build(farm);

    let mut lanes = 0usize;
    while augment_shortest(&mut net, farm) {
        lanes += 1;
    }
    if lanes == 0 {
        return Err(RouteError::NoPath);
    }

    let mut paths = decompose(&mut net, farm)?;
    if paths.len() != lanes {
        return Err(RouteError::Invariant(format!(
            "flow decomposed into {} paths, expected {}",
            paths.len(),
            lanes
        )));
    }
    paths.sort_by_key(|path| path.rooms.len());
    validate(farm, &paths)?;
    Ok(paths)
}

/// One Edmonds-Karp round: breadth-first over positive-residual arcs from the
/// source, saturating the discovered path by one unit. Returns false when the
/// sink is no longer reachable.
fn augment_shortest(net: &mut FlowNetwork, farm: &Farm) -> bool {
    const NONE: usize = usize::MAX;
    let start = FlowNetwork::node_in(farm.source());
    let goal = FlowNetwork::node_out(farm.sink());

    let mut parent_arc = vec![NONE; net.node_count()];
    let mut visited = vec![false; net.node_count()];
    visited[start] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);
    'bfs: while let Some(node) = queue.pop_front() {
        for &arc in net.arcs_from(node) {
            let to = net.arc(arc).to;
            if net.arc(arc).cap == 0 || visited[to] {
                continue;
            }
            visited[to] = true;
            parent_arc[to] = arc;
            if to == goal {
                break 'bfs;
            }
            queue.push_back(to);
        }
    }

    if !visited[goal] {
        return false;
    }
    let mut node = goal;
    while node != start {
        let arc = parent_arc[node];
        net.push_unit(arc);
        node = net.arc_from(arc);
    }
    true
}

/// Split the final integral flow into one path per unit leaving the source.
///
/// Interior rooms carry at most one unit, so from any `out` node the
/// continuation is unique; walks consume flow as they go so each unit is
/// used exactly once.
fn decompose(net: &mut FlowNetwork, farm: &Farm) -> Result<Vec<Path>, RouteError> {
    let source_out = FlowNetwork::node_out(farm.source());
    let mut paths = Vec::new();

    let first_arcs = net.arcs_from(source_out).to_vec();
    for first in first_arcs {
        if net.is_forward(first) && net.flow(first) > 0 {
            net.consume_unit(first);
            let mut rooms = vec![farm.source()];
            let mut node = net.arc(first).to;
            loop {
                let room = FlowNetwork::room_of(node);
                rooms.push(room);
                if room == farm.sink() {
                    break;
                }
                // Cross the room through its internal arc, then leave it.
                let internal = net.first_flow_arc(node).ok_or_else(|| {
                    RouteError::Invariant(format!(
                        "flow dead-ends entering room '{}'",
                        farm.name_of(room)
                    ))
                })?;
                net.consume_unit(internal);
                let outgoing = net
                    .first_flow_arc(FlowNetwork::node_out(room))
                    .ok_or_else(|| {
                        RouteError::Invariant(format!(
                            "flow dead-ends leaving room '{}'",
                            farm.name_of(room)
                        ))
                    })?;
                net.consume_unit(outgoing);
                node = net.arc(outgoing).to;
            }
            paths.push(Path { rooms });
        }
    }
    Ok(paths)
}

/// Post-condition check on the decomposed path set: every path is a simple
/// source-to-sink walk over real tunnels, and interior rooms are not shared
/// between paths. A violation here is a programming error, not bad input.
fn validate(farm: &Farm, paths: &[Path]) -> Result<(), RouteError> {
    let mut claimed: HashSet<usize> = HashSet::new();
    for path in paths {
        let rooms = &path.rooms;
        if rooms.len() < 2 || rooms[0] != farm.source() || rooms.last() != Some(&farm.sink()) {
            return Err(RouteError::Invariant(
                "path does not run from source to sink".to_string(),
            ));
        }
        for pair in rooms.windows(2) {
            if !farm.adjacent(pair[0], pair[1]) {
                return Err(RouteError::Invariant(format!(
                    "path uses missing tunnel '{}-{}'",
                    farm.name_of(pair[0]),
                    farm.name_of(pair[1])
                )));
            }
        }
        let mut seen_on_path: HashSet<usize> = HashSet::new();
        for &room in rooms {
            if !seen_on_path.insert(room) {
                return Err(RouteError::Invariant(format!(
                    "path revisits room '{}'",
                    farm.name_of(room)
                )));
            }
        }
        for &room in &rooms[1..rooms.len() - 1] {
            if !claimed.insert(room) {
                return Err(RouteError::Invariant(format!(
                    "room '{}' shared between paths",
                    farm.name_of(room)
                )));
            }
        }
    }
    Ok(())
}
