use thiserror::Error;

use crate::farm::RoomId;

/// A source-to-sink path: room ids in travel order, no repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub rooms: Vec<RoomId>,
}

impl Path {
    /// Number of tunnel traversals on this path.
    pub fn steps(&self) -> usize {
        self.rooms.len() - 1
    }
}

/// Which path each ant walks.
///
/// Ants are numbered 1..=N; `path_of[ant - 1]` is an index into the path set.
/// Assignment order is ant 1 first, so ants sharing a path enter the farm in
/// ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntAssignment {
    pub path_of: Vec<usize>,
    /// Ants assigned per path, same indexing as the path set.
    pub load: Vec<usize>,
}

impl AntAssignment {
    pub fn ant_count(&self) -> usize {
        self.path_of.len()
    }
}

/// One ant stepping into a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// 1-based ant id.
    pub ant: usize,
    pub room: RoomId,
}

/// The movement log: one entry per turn, moves in ascending ant id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub turns: Vec<Vec<Move>>,
}

impl Schedule {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// Everything the router decided for one farm: the disjoint paths, the ant
/// assignment, and the simulated schedule.
#[derive(Debug, Clone)]
pub struct Plan {
    pub paths: Vec<Path>,
    pub assignment: AntAssignment,
    pub schedule: Schedule,
}

/// Routing failures.
///
/// `NoPath` is a property of the input; `Invariant` is a bug indicator and
/// never occurs on a farm that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no path between source and sink")]
    NoPath,
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}
