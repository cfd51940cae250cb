use std::collections::HashSet;

use super::types::{AntAssignment, Move, Path, RouteError, Schedule};
use crate::farm::{Farm, RoomId};

/// Replay the assignment turn by turn and record every move.
///
/// Per turn, ants are swept in ascending id. An ant advances to the next room
/// on its path iff that room is the sink or has not been claimed as a
/// destination this turn, and the directed tunnel it crosses is unused this
/// turn. Occupancy is a snapshot of this turn's destinations: a room vacated
/// earlier in the same sweep stays claimable only from the next turn on, and
/// source and sink are never marked.
///
/// The loop ends on the first turn without a move; that turn is not emitted.
/// A moveless turn with ants still short of the sink is a scheduling bug and
/// surfaces as [`RouteError::Invariant`].
pub fn run(
    farm: &Farm,
    paths: &[Path],
    assignment: &AntAssignment,
) -> Result<Schedule, RouteError> {
    let ants = assignment.ant_count();
    let mut position = vec![0usize; ants];
    let mut turns: Vec<Vec<Move>> = Vec::new();

    loop {
        let mut occupied = vec![false; farm.room_count()];
        let mut used_tunnels: HashSet<(RoomId, RoomId)> = HashSet::new();
        let mut moves: Vec<Move> = Vec::new();
        let mut finished = 0usize;

        for ant in 0..ants {
            let path = &paths[assignment.path_of[ant]];
            let pos = position[ant];
            if pos == path.steps() {
                finished += 1;
                continue;
            }
            let cur = path.rooms[pos];
            let nxt = path.rooms[pos + 1];
            let room_free = nxt == farm.sink() || !occupied[nxt];
            if room_free && !used_tunnels.contains(&(cur, nxt)) {
                position[ant] = pos + 1;
                if nxt != farm.sink() {
                    occupied[nxt] = true;
                }
                used_tunnels.insert((cur, nxt));
                moves.push(Move { ant: ant + 1, room: nxt });
            }
        }

        if moves.is_empty() {
            if finished < ants {
                return Err(RouteError::Invariant(format!(
                    "{} ants stalled short of the sink",
                    ants - finished
                )));
            }
            break;
        }
        turns.push(moves);
    }

    Ok(Schedule { turns })
}
