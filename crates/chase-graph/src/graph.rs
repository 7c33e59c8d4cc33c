//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adj_to[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Edges carry no payload — movement cost between adjacent waypoints is the
//! planar Manhattan distance of their positions, computed on demand — so a
//! neighbor query is a plain contiguous slice borrow.
//!
//! The declared enumeration order (`add_node` call order) is load-bearing:
//! transition-matrix rows and belief-vector entries are indexed by it, and
//! it is never reordered after `build()`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over planar `(x, z)` maps a continuous position
//! to the nearest waypoint.  Used at mission setup to snap an agent's first
//! telemetry pose to its starting node.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use chase_core::{NodeId, Point3};

use crate::{GraphError, GraphResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the snap index: a planar `[x, z]` point with the
/// associated `NodeId`.
#[derive(Clone, Debug)]
struct WaypointEntry {
    point: [f64; 2], // [x, z]
    id: NodeId,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    /// Squared Euclidean distance on the horizontal plane.  Nearest-by-
    /// Euclidean and nearest-by-Manhattan agree closely enough for start-
    /// node snapping, and the R-tree requires a Euclidean-compatible metric.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// Immutable waypoint topology: positions, CSR adjacency, visibility sets,
/// and a planar snap index.
///
/// Do not construct directly; use [`WaypointGraphBuilder`], which enforces
/// the no-isolated-nodes invariant every downstream component relies on.
#[derive(Debug)]
pub struct WaypointGraph {
    /// World position of each node.  Indexed by `NodeId`.
    node_pos: Vec<Point3>,

    /// CSR row pointer.  Neighbors of node `n` are
    /// `adj_to[adj_start[n] .. adj_start[n+1]]`.  Length = `node_count + 1`.
    adj_start: Vec<u32>,

    /// Neighbor lists, concatenated in source-node order.
    adj_to: Vec<NodeId>,

    /// Advisory visibility metadata: nodes from which an observer could
    /// plausibly detect an occupant of the keyed node.  Not consulted by
    /// the tick-to-tick machinery; retained for sensor modelling (the
    /// observation-operator constructors are its intended consumer).
    visible: Vec<Vec<NodeId>>,

    /// Optional label → id lookup populated by `add_labeled_node`.
    labels: FxHashMap<String, NodeId>,

    /// Planar nearest-waypoint index.
    snap_idx: RTree<WaypointEntry>,
}

impl WaypointGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` exists in this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// All `NodeId`s in declared enumeration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len() as u32).map(NodeId)
    }

    // ── Topology queries ──────────────────────────────────────────────────

    /// The neighbors of `node` as a contiguous slice — no allocation.
    pub fn neighbors(&self, node: NodeId) -> GraphResult<&[NodeId]> {
        self.check(node)?;
        let start = self.adj_start[node.index()] as usize;
        let end = self.adj_start[node.index() + 1] as usize;
        Ok(&self.adj_to[start..end])
    }

    /// Out-degree of `node` (number of outgoing edges).
    pub fn out_degree(&self, node: NodeId) -> GraphResult<usize> {
        Ok(self.neighbors(node)?.len())
    }

    pub fn position(&self, node: NodeId) -> GraphResult<Point3> {
        self.check(node)?;
        Ok(self.node_pos[node.index()])
    }

    /// Planar Manhattan distance between two nodes, matching the
    /// environment's movement cost model.
    pub fn distance(&self, a: NodeId, b: NodeId) -> GraphResult<f64> {
        Ok(self.position(a)?.planar_distance(self.position(b)?))
    }

    /// Nodes with advisory line-of-sight onto `node`.
    pub fn visible_from(&self, node: NodeId) -> GraphResult<&[NodeId]> {
        self.check(node)?;
        Ok(&self.visible[node.index()])
    }

    // ── Lookup & spatial queries ──────────────────────────────────────────

    /// Resolve a node label assigned at build time.
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// The waypoint nearest to `pos` on the horizontal plane.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn nearest_waypoint(&self, pos: Point3) -> Option<NodeId> {
        self.snap_idx
            .nearest_neighbor(&[pos.x, pos.z])
            .map(|e| e.id)
    }

    #[inline]
    fn check(&self, node: NodeId) -> GraphResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(node))
        }
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// Nodes and edges may be added in any order.  `build()` sorts edges into
/// CSR form, bulk-loads the snap index, and validates:
///
/// - every edge endpoint names a known node,
/// - labels are unique,
/// - every node has at least one outgoing edge ([`GraphError::IsolatedNode`]).
///
/// Self-edges are dropped with a warning — dwell probability is owned by
/// the transition model's diagonal, and a literal self-edge would distort it.
///
/// # Example
///
/// ```
/// use chase_core::Point3;
/// use chase_graph::WaypointGraphBuilder;
///
/// let mut b = WaypointGraphBuilder::new();
/// let gate = b.add_node(Point3::new(0.0, 5.0, 0.0));
/// let well = b.add_node(Point3::new(8.0, 5.0, 4.0));
/// b.add_edge(gate, well); // undirected
/// let graph = b.build().unwrap();
/// assert_eq!(graph.neighbors(gate).unwrap(), &[well]);
/// ```
pub struct WaypointGraphBuilder {
    nodes: Vec<Point3>,
    labels: Vec<Option<String>>,
    visible: Vec<Vec<NodeId>>,
    raw_edges: Vec<(NodeId, NodeId)>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            labels: Vec::new(),
            visible: Vec::new(),
            raw_edges: Vec::new(),
        }
    }

    /// Add a waypoint and return its `NodeId` (sequential from 0 — this is
    /// the declared enumeration order).
    pub fn add_node(&mut self, pos: Point3) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.labels.push(None);
        self.visible.push(Vec::new());
        id
    }

    /// Add a waypoint with a human-readable label (e.g. `"fountain"`).
    /// Label uniqueness is checked at `build()`.
    pub fn add_labeled_node(&mut self, pos: Point3, label: impl Into<String>) -> NodeId {
        let id = self.add_node(pos);
        self.labels[id.index()] = Some(label.into());
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) {
        self.raw_edges.push((from, to));
    }

    /// Convenience: add edges in **both directions** (the common case for
    /// waypoint corridors).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    /// Declare that `observers` have advisory line-of-sight onto `node`.
    /// Extends any previously declared set.
    pub fn add_visibility(&mut self, node: NodeId, observers: &[NodeId]) {
        if let Some(set) = self.visible.get_mut(node.index()) {
            set.extend_from_slice(observers);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a validated [`WaypointGraph`].
    pub fn build(self) -> GraphResult<WaypointGraph> {
        let node_count = self.nodes.len();
        let in_bounds = |n: NodeId| (n.index() < node_count).then_some(()).ok_or(GraphError::NodeNotFound(n));

        // Validate endpoints, drop self-edges, dedupe repeats so a doubly-
        // declared corridor cannot double its transition weight.
        let mut edges: Vec<(NodeId, NodeId)> = Vec::with_capacity(self.raw_edges.len());
        for (from, to) in self.raw_edges {
            in_bounds(from)?;
            in_bounds(to)?;
            if from == to {
                log::warn!("ignoring self-edge on {from}");
                continue;
            }
            edges.push((from, to));
        }
        edges.sort_unstable_by_key(|&(f, t)| (f.0, t.0));
        edges.dedup();

        // Build the CSR row pointer.
        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &edges {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        let adj_to: Vec<NodeId> = edges.iter().map(|&(_, to)| to).collect();
        debug_assert_eq!(adj_start[node_count] as usize, adj_to.len());

        // Reject isolated nodes — a row of the transition matrix would have
        // nowhere to put its probability mass.
        for n in 0..node_count {
            if adj_start[n] == adj_start[n + 1] {
                return Err(GraphError::IsolatedNode(NodeId(n as u32)));
            }
        }

        // Validate visibility references and labels.
        let mut visible = self.visible;
        for set in &mut visible {
            for &observer in set.iter() {
                in_bounds(observer)?;
            }
            set.sort_unstable();
            set.dedup();
        }
        let mut labels = FxHashMap::default();
        for (i, label) in self.labels.into_iter().enumerate() {
            if let Some(label) = label {
                if labels.insert(label.clone(), NodeId(i as u32)).is_some() {
                    return Err(GraphError::DuplicateLabel(label));
                }
            }
        }

        // Bulk-load the R-tree (O(N log N), faster than N inserts).
        let entries: Vec<WaypointEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| WaypointEntry {
                point: [pos.x, pos.z],
                id: NodeId(i as u32),
            })
            .collect();
        let snap_idx = RTree::bulk_load(entries);

        Ok(WaypointGraph {
            node_pos: self.nodes,
            adj_start,
            adj_to,
            visible,
            labels,
            snap_idx,
        })
    }
}

impl Default for WaypointGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
