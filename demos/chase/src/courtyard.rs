//! Shared courtyard waypoint graph definition.
//!
//! An 8-node synthetic courtyard: a 4-corner outer ring, two mid-wall
//! gates, a central fountain, and a dead-end alcove.  Small enough to
//! follow a chase by eye in the printed belief summaries.

use chase_core::{NodeId, Point3};
use chase_graph::{GraphResult, WaypointGraph, WaypointGraphBuilder};

/// Build the courtyard.
///
/// Returns `(graph, [nw, ne, sw, se, west_gate, east_gate, fountain,
/// alcove])`.
pub fn build_courtyard() -> GraphResult<(WaypointGraph, [NodeId; 8])> {
    let mut b = WaypointGraphBuilder::new();

    let nw        = b.add_labeled_node(Point3::new(0.0, 4.0, 40.0), "nw-corner");
    let ne        = b.add_labeled_node(Point3::new(40.0, 4.0, 40.0), "ne-corner");
    let sw        = b.add_labeled_node(Point3::new(0.0, 4.0, 0.0), "sw-corner");
    let se        = b.add_labeled_node(Point3::new(40.0, 4.0, 0.0), "se-corner");
    let west_gate = b.add_labeled_node(Point3::new(0.0, 4.0, 20.0), "west-gate");
    let east_gate = b.add_labeled_node(Point3::new(40.0, 4.0, 20.0), "east-gate");
    let fountain  = b.add_labeled_node(Point3::new(20.0, 4.0, 20.0), "fountain");
    let alcove    = b.add_labeled_node(Point3::new(52.0, 4.0, 20.0), "alcove");

    // Outer ring through the gates.
    b.add_edge(nw, ne);
    b.add_edge(nw, west_gate);
    b.add_edge(west_gate, sw);
    b.add_edge(sw, se);
    b.add_edge(se, east_gate);
    b.add_edge(east_gate, ne);

    // The fountain opens onto both gates and both southern corners.
    b.add_edge(fountain, west_gate);
    b.add_edge(fountain, east_gate);
    b.add_edge(fountain, sw);
    b.add_edge(fountain, se);

    // Dead-end alcove off the east gate.
    b.add_edge(east_gate, alcove);

    // Sight lines: the fountain sees both gates and vice versa; the alcove
    // is visible only from the east gate.
    b.add_visibility(fountain, &[west_gate, east_gate]);
    b.add_visibility(west_gate, &[fountain]);
    b.add_visibility(east_gate, &[fountain]);
    b.add_visibility(alcove, &[east_gate]);

    let graph = b.build()?;
    Ok((graph, [nw, ne, sw, se, west_gate, east_gate, fountain, alcove]))
}
