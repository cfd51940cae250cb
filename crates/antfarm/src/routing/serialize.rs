use serde::Serialize;

use super::types::{Plan, Schedule};
use crate::farm::Farm;

/// Render the movement log.
///
/// One line per turn, tokens `L<id>-<room>` separated by single spaces, in
/// ascending ant id. No trailing newline and no blank lines.
pub fn schedule_to_string(farm: &Farm, schedule: &Schedule) -> String {
    let mut lines = Vec::with_capacity(schedule.turns.len());
    for turn in &schedule.turns {
        let tokens: Vec<String> = turn
            .iter()
            .map(|mv| format!("L{}-{}", mv.ant, farm.name_of(mv.room)))
            .collect();
        lines.push(tokens.join(" "));
    }
    lines.join("\n")
}

/// Machine-readable form of a routing plan, for visualisers.
///
/// Everything is keyed by room name; ids never leak. Rooms, tunnels, paths
/// and turns all keep their deterministic in-memory order.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDump {
    pub ants: usize,
    pub rooms: Vec<RoomDump>,
    pub tunnels: Vec<TunnelDump>,
    pub paths: Vec<Vec<String>>,
    /// For each ant 1..=N in order, the index of its path.
    pub assignment: Vec<usize>,
    pub turns: Vec<Vec<MoveDump>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomDump {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub source: bool,
    pub sink: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TunnelDump {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveDump {
    pub ant: usize,
    pub room: String,
}

/// Flatten a plan into its dump form.
pub fn plan_dump(farm: &Farm, plan: &Plan) -> PlanDump {
    let rooms = farm
        .rooms()
        .iter()
        .map(|room| RoomDump {
            name: room.name.clone(),
            x: room.x,
            y: room.y,
            source: room.is_source,
            sink: room.is_sink,
        })
        .collect();

    let mut tunnels = Vec::with_capacity(farm.tunnel_count());
    for room in 0..farm.room_count() {
        for &next in farm.neighbours(room) {
            if room < next {
                tunnels.push(TunnelDump {
                    from: farm.name_of(room).to_string(),
                    to: farm.name_of(next).to_string(),
                });
            }
        }
    }

    let paths = plan
        .paths
        .iter()
        .map(|path| {
            path.rooms
                .iter()
                .map(|&id| farm.name_of(id).to_string())
                .collect()
        })
        .collect();

    let turns = plan
        .schedule
        .turns
        .iter()
        .map(|turn| {
            turn.iter()
                .map(|mv| MoveDump {
                    ant: mv.ant,
                    room: farm.name_of(mv.room).to_string(),
                })
                .collect()
        })
        .collect();

    PlanDump {
        ants: farm.ant_count(),
        rooms,
        tunnels,
        paths,
        assignment: plan.assignment.path_of.clone(),
        turns,
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::parser::parse;
    use crate::routing::plan;

    #[test]
    fn log_tokens_join_with_single_spaces() {
        let farm = parse("2\n##start\nS 0 0\na 1 0\nb 1 1\n##end\nT 2 0\nS-a\na-T\nS-b\nb-T")
            .unwrap();
        let plan = plan(&farm).unwrap();
        let log = schedule_to_string(&farm, &plan.schedule);
        for line in log.lines() {
            assert!(!line.contains("  "), "double space in '{line}'");
            for token in line.split(' ') {
                assert!(token.starts_with('L'), "bad token '{token}'");
                assert!(token.contains('-'), "bad token '{token}'");
            }
        }
    }

    #[test]
    fn log_has_no_trailing_newline() {
        let farm = parse("1\n##start\nA 0 0\n##end\nB 1 0\nA-B").unwrap();
        let plan = plan(&farm).unwrap();
        let log = schedule_to_string(&farm, &plan.schedule);
        assert_eq!(log, "L1-B");
        assert!(!log.ends_with('\n'));
    }

    #[test]
    fn dump_uses_room_names_and_keeps_order() {
        let farm = parse("3\n##start\nS 0 0\nmid 1 0\n##end\nT 2 0\nS-mid\nmid-T").unwrap();
        let routed = plan(&farm).unwrap();
        let dump = plan_dump(&farm, &routed);
        assert_eq!(dump.ants, 3);
        let names: Vec<&str> = dump.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["S", "mid", "T"]);
        assert_eq!(dump.paths, vec![vec!["S", "mid", "T"]]);
        assert_eq!(dump.assignment, vec![0, 0, 0]);
        assert_eq!(dump.tunnels.len(), 2);
    }
}
