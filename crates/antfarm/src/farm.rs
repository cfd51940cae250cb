use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Index of a room within its [`Farm`], assigned in insertion order.
pub type RoomId = usize;

/// A named room with display coordinates.
///
/// Coordinates are carried verbatim from the input. The router never reads
/// them; they exist so visualisers consuming the plan dump can place rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub is_source: bool,
    pub is_sink: bool,
}

/// Structural violations detected while assembling a [`Farm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
    #[error("duplicate room '{0}'")]
    DuplicateRoom(String),
    #[error("tunnel references unknown room '{0}'")]
    UnknownRoom(String),
    #[error("tunnel from '{0}' to itself")]
    SelfTunnel(String),
    #[error("duplicate tunnel '{0}-{1}'")]
    DuplicateTunnel(String, String),
    #[error("multiple source rooms ('{0}' and '{1}')")]
    MultipleSources(String, String),
    #[error("multiple sink rooms ('{0}' and '{1}')")]
    MultipleSinks(String, String),
    #[error("source and sink must be distinct rooms")]
    SourceIsSink,
    #[error("missing source room")]
    MissingSource,
    #[error("missing sink room")]
    MissingSink,
}

/// The ant farm: rooms, tunnels and the ant population, frozen after parse.
///
/// Rooms are interned as [`RoomId`] indices in insertion order, and each
/// adjacency list keeps tunnel insertion order. Every iteration the router
/// performs runs over these vectors, never over hash-map order, so the whole
/// pipeline is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Farm {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    adjacency: Vec<Vec<RoomId>>,
    tunnel_count: usize,
    ant_count: usize,
    source: RoomId,
    sink: RoomId,
}

impl Farm {
    /// Neighbours of a room, in tunnel insertion order.
    pub fn neighbours(&self, room: RoomId) -> &[RoomId] {
        &self.adjacency[room]
    }

    pub fn source(&self) -> RoomId {
        self.source
    }

    pub fn sink(&self) -> RoomId {
        self.sink
    }

    pub fn ant_count(&self) -> usize {
        self.ant_count
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn name_of(&self, id: RoomId) -> &str {
        &self.rooms[id].name
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnel_count
    }

    /// Whether two rooms are joined by a tunnel.
    pub fn adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.adjacency[a].contains(&b)
    }
}

/// Incremental assembly of a [`Farm`].
///
/// The parser feeds rooms and tunnels in file order; `finish` checks the
/// remaining invariants and freezes the result. After that point nothing can
/// mutate the farm.
#[derive(Debug, Default)]
pub struct FarmBuilder {
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    adjacency: Vec<Vec<RoomId>>,
    tunnels: HashSet<(RoomId, RoomId)>,
    source: Option<RoomId>,
    sink: Option<RoomId>,
}

impl FarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. Rejects duplicate names and second source/sink markings.
    pub fn add_room(
        &mut self,
        name: &str,
        x: i64,
        y: i64,
        is_source: bool,
        is_sink: bool,
    ) -> Result<RoomId, FarmError> {
        if self.by_name.contains_key(name) {
            return Err(FarmError::DuplicateRoom(name.to_string()));
        }
        if is_source && is_sink {
            return Err(FarmError::SourceIsSink);
        }
        if is_source {
            if let Some(existing) = self.source {
                return Err(FarmError::MultipleSources(
                    self.rooms[existing].name.clone(),
                    name.to_string(),
                ));
            }
        }
        if is_sink {
            if let Some(existing) = self.sink {
                return Err(FarmError::MultipleSinks(
                    self.rooms[existing].name.clone(),
                    name.to_string(),
                ));
            }
        }

        let id = self.rooms.len();
        self.rooms.push(Room {
            name: name.to_string(),
            x,
            y,
            is_source,
            is_sink,
        });
        self.by_name.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        if is_source {
            self.source = Some(id);
        }
        if is_sink {
            self.sink = Some(id);
        }
        Ok(id)
    }

    /// Add an undirected tunnel between two existing rooms.
    ///
    /// Rejects self tunnels and duplicates in either orientation. Both
    /// endpoints receive the other in their adjacency list, preserving file
    /// order.
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> Result<(), FarmError> {
        let ia = self
            .by_name
            .get(a)
            .copied()
            .ok_or_else(|| FarmError::UnknownRoom(a.to_string()))?;
        let ib = self
            .by_name
            .get(b)
            .copied()
            .ok_or_else(|| FarmError::UnknownRoom(b.to_string()))?;
        if ia == ib {
            return Err(FarmError::SelfTunnel(a.to_string()));
        }
        let key = (ia.min(ib), ia.max(ib));
        if !self.tunnels.insert(key) {
            return Err(FarmError::DuplicateTunnel(a.to_string(), b.to_string()));
        }
        self.adjacency[ia].push(ib);
        self.adjacency[ib].push(ia);
        Ok(())
    }

    /// Freeze into an immutable [`Farm`].
    pub fn finish(self, ant_count: usize) -> Result<Farm, FarmError> {
        let source = self.source.ok_or(FarmError::MissingSource)?;
        let sink = self.sink.ok_or(FarmError::MissingSink)?;
        if source == sink {
            return Err(FarmError::SourceIsSink);
        }
        Ok(Farm {
            rooms: self.rooms,
            by_name: self.by_name,
            adjacency: self.adjacency,
            tunnel_count: self.tunnels.len(),
            ant_count,
            source,
            sink,
        })
    }
}
