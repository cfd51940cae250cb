
use std::collections::HashSet;

use super::plan;
use super::serialize::schedule_to_string;
use super::types::Plan;
use crate::farm::Farm;
use crate::parser::parse;

/// Build a farm description from its pieces. `##start`/`##end` directives are
/// inserted before the matching room line.
fn farm_input(
    ants: usize,
    source: &str,
    sink: &str,
    rooms: &[(&str, i64, i64)],
    tunnels: &[(&str, &str)],
) -> String {
    let mut out = format!("{ants}\n");
    for (name, x, y) in rooms {
        if *name == source {
            out.push_str("##start\n");
        }
        if *name == sink {
            out.push_str("##end\n");
        }
        out.push_str(&format!("{name} {x} {y}\n"));
    }
    for (a, b) in tunnels {
        out.push_str(&format!("{a}-{b}\n"));
    }
    out
}

/// Parse a description that is expected to be valid.
fn farm(input: &str) -> Farm {
    parse(input).expect("input should parse")
}

/// Parse and route a description that is expected to be routable.
fn planned(input: &str) -> (Farm, Plan) {
    let farm = farm(input);
    let plan = plan(&farm).expect("farm should be routable");
    (farm, plan)
}

/// The movement log for a description.
fn log_of(input: &str) -> String {
    let (farm, plan) = planned(input);
    schedule_to_string(&farm, &plan.schedule)
}

/// Path room names, in path-set order.
fn path_names(farm: &Farm, plan: &Plan) -> Vec<Vec<String>> {
    plan.paths
        .iter()
        .map(|path| {
            path.rooms
                .iter()
                .map(|&id| farm.name_of(id).to_string())
                .collect()
        })
        .collect()
}

/// Replay a schedule and assert every correctness property: paths are valid
/// and disjoint, every ant walks its assigned path to the sink, interior
/// rooms hold at most one ant at any turn boundary, no directed tunnel is
/// crossed twice in a turn, moves come in ascending ant id, and the turn
/// count matches the queueing formula for the assignment.
fn assert_schedule_valid(farm: &Farm, plan: &Plan) {
    let ants = farm.ant_count();
    assert_eq!(plan.assignment.path_of.len(), ants);

    // Paths: source to sink, real tunnels, no repeats, pairwise disjoint.
    let mut interior_claimed: HashSet<usize> = HashSet::new();
    for path in &plan.paths {
        assert_eq!(path.rooms.first(), Some(&farm.source()), "path must start at source");
        assert_eq!(path.rooms.last(), Some(&farm.sink()), "path must end at sink");
        for pair in path.rooms.windows(2) {
            assert!(
                farm.adjacent(pair[0], pair[1]),
                "path uses missing tunnel {}-{}",
                farm.name_of(pair[0]),
                farm.name_of(pair[1])
            );
        }
        let unique: HashSet<usize> = path.rooms.iter().copied().collect();
        assert_eq!(unique.len(), path.rooms.len(), "path revisits a room");
        for &room in &path.rooms[1..path.rooms.len() - 1] {
            assert!(
                interior_claimed.insert(room),
                "room {} shared between paths",
                farm.name_of(room)
            );
        }
    }

    // Replay every turn.
    let mut position = vec![0usize; ants];
    for (turn_index, turn) in plan.schedule.turns.iter().enumerate() {
        assert!(!turn.is_empty(), "empty turn {} emitted", turn_index + 1);
        let mut destinations: HashSet<usize> = HashSet::new();
        let mut tunnels_used: HashSet<(usize, usize)> = HashSet::new();
        let mut previous_ant = 0;
        for mv in turn {
            assert!(mv.ant > previous_ant, "moves out of ant order in turn {}", turn_index + 1);
            previous_ant = mv.ant;
            assert!(mv.ant >= 1 && mv.ant <= ants, "unknown ant {}", mv.ant);

            let path = &plan.paths[plan.assignment.path_of[mv.ant - 1]];
            let pos = position[mv.ant - 1];
            assert!(pos < path.steps(), "ant {} moved past its path end", mv.ant);
            let cur = path.rooms[pos];
            assert_eq!(path.rooms[pos + 1], mv.room, "ant {} left its path", mv.ant);
            assert!(
                tunnels_used.insert((cur, mv.room)),
                "tunnel {}-{} crossed twice in turn {}",
                farm.name_of(cur),
                farm.name_of(mv.room),
                turn_index + 1
            );
            if mv.room != farm.sink() {
                assert!(
                    destinations.insert(mv.room),
                    "room {} entered twice in turn {}",
                    farm.name_of(mv.room),
                    turn_index + 1
                );
            }
            position[mv.ant - 1] = pos + 1;
        }

        // Turn-boundary occupancy: one ant per interior room.
        let mut occupied: HashSet<usize> = HashSet::new();
        for ant in 0..ants {
            let path = &plan.paths[plan.assignment.path_of[ant]];
            let room = path.rooms[position[ant]];
            if room != farm.source() && room != farm.sink() {
                assert!(
                    occupied.insert(room),
                    "room {} holds two ants after turn {}",
                    farm.name_of(room),
                    turn_index + 1
                );
            }
        }
    }

    // Every ant reached the sink, having made exactly steps() moves.
    for ant in 0..ants {
        let path = &plan.paths[plan.assignment.path_of[ant]];
        assert_eq!(
            position[ant],
            path.steps(),
            "ant {} finished short of the sink",
            ant + 1
        );
    }

    // Schedule length matches the queueing formula over used paths.
    let expected = plan
        .paths
        .iter()
        .zip(&plan.assignment.load)
        .filter(|&(_, &load)| load > 0)
        .map(|(path, &load)| path.steps() + load - 1)
        .max()
        .expect("at least one path carries ants");
    assert_eq!(plan.schedule.turn_count(), expected, "schedule length is not optimal for the assignment");
}
