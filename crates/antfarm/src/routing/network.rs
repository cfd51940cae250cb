use crate::farm::{Farm, RoomId};

/// Capacity of the source and sink internal arcs. Never exhausted: augmenting
/// only ever subtracts one unit at a time.
const UNBOUNDED: u32 = u32::MAX;

/// One directed arc of the residual network.
///
/// Arcs are stored in forward/reverse pairs: the reverse of arc `i` is
/// `i ^ 1`. Forward arcs are created with `base > 0`; reverse arcs start at
/// zero capacity and gain it as flow is pushed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Arc {
    pub to: usize,
    pub cap: u32,
    pub base: u32,
}

/// Node-split residual network over a [`Farm`].
///
/// Each room `v` becomes two nodes, `in(v)` and `out(v)`, joined by an
/// internal arc whose unit capacity enforces "one ant per interior room per
/// turn" at the routing layer. Source and sink keep unbounded internal
/// capacity. Each tunnel (u,v) becomes the unit arcs `out(u) -> in(v)` and
/// `out(v) -> in(u)`, created in farm neighbour order so breadth-first
/// tie-breaks follow the input.
#[derive(Debug)]
pub(crate) struct FlowNetwork {
    arcs: Vec<Arc>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn node_in(room: RoomId) -> usize {
        room * 2
    }

    pub fn node_out(room: RoomId) -> usize {
        room * 2 + 1
    }

    pub fn room_of(node: usize) -> RoomId {
        node / 2
    }

    pub fn build(farm: &Farm) -> Self {
        let mut net = Self {
            arcs: Vec::new(),
            adjacency: vec![Vec::new(); farm.room_count() * 2],
        };
        for room in 0..farm.room_count() {
            let internal = if room == farm.source() || room == farm.sink() {
                UNBOUNDED
            } else {
                1
            };
            net.add_arc(Self::node_in(room), Self::node_out(room), internal);
        }
        for room in 0..farm.room_count() {
            for &next in farm.neighbours(room) {
                net.add_arc(Self::node_out(room), Self::node_in(next), 1);
            }
        }
        net
    }

    fn add_arc(&mut self, from: usize, to: usize, cap: u32) {
        let id = self.arcs.len();
        self.arcs.push(Arc { to, cap, base: cap });
        self.adjacency[from].push(id);
        self.arcs.push(Arc {
            to: from,
            cap: 0,
            base: 0,
        });
        self.adjacency[to].push(id + 1);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Arc ids leaving a node, in creation order.
    pub fn arcs_from(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn arc(&self, id: usize) -> &Arc {
        &self.arcs[id]
    }

    /// Origin of an arc, recovered through its paired reverse.
    pub fn arc_from(&self, id: usize) -> usize {
        self.arcs[id ^ 1].to
    }

    pub fn is_forward(&self, id: usize) -> bool {
        self.arcs[id].base > 0
    }

    /// Units of flow currently routed through a forward arc.
    pub fn flow(&self, id: usize) -> u32 {
        self.arcs[id].base - self.arcs[id].cap
    }

    /// Send one unit along an arc, opening its reverse.
    pub fn push_unit(&mut self, id: usize) {
        self.arcs[id].cap -= 1;
        self.arcs[id ^ 1].cap += 1;
    }

    /// Remove one unit of flow from a forward arc while decomposing.
    pub fn consume_unit(&mut self, id: usize) {
        self.arcs[id].cap += 1;
        self.arcs[id ^ 1].cap -= 1;
    }

    /// First arc out of `node` still carrying flow, in creation order.
    pub fn first_flow_arc(&self, node: usize) -> Option<usize> {
        self.adjacency[node]
            .iter()
            .copied()
            .find(|&id| self.is_forward(id) && self.flow(id) > 0)
    }
}
