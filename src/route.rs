//! An auxiliary legality oracle over committed board state.
//!
//! This answers "can these two termini still be joined?" without touching the
//! incremental drawing engine, e.g. to pre-validate a level or drive a hint.
//! It reproduces the engine's adjacency and its do-not-cross-other-colors rule.

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

use crate::board::Board;
use crate::cell::Cell;
use crate::location::Location;
use crate::shape::BoardShape;

/// Decide whether any route joins the termini `from` and `to` without crossing a cell
/// claimed by another affiliation's committed path.
///
/// `from` and `to` must be the two termini of one affiliation; anything else returns `false`.
/// A cell may be routed through if it is blank, or already claimed by the *same* affiliation,
/// or is the target itself. The search is a breadth-first walk over the graph of routable
/// cells, expanding one step per direction of `Sh` within the board bounds.
pub fn route_exists<Sh>(board: &Board<Sh>, from: Location, to: Location) -> bool
where
    Sh: BoardShape,
{
    let (Some(&Cell::Terminus { affiliation, .. }), Some(&Cell::Terminus { affiliation: other, .. })) =
        (board.cell(from), board.cell(to))
    else {
        return false;
    };

    if affiliation != other || from == to {
        return false;
    }

    let passable = |location: Location| -> bool {
        if location == from || location == to {
            return true;
        }

        match board.cell(location) {
            Some(Cell::Empty) => true,
            Some(Cell::Path { affiliation: claimed }) => *claimed == affiliation,
            _ => false,
        }
    };

    let mut graph: UnGraphMap<Location, ()> = UnGraphMap::new();
    let passable_locations = board.locations().filter(|location| passable(*location)).collect_vec();
    for &location in &passable_locations {
        graph.add_node(location);
        // every adjacency appears as exactly one forward edge out of its lower-indexed cell
        for direction in Sh::FORWARD_VARIANTS {
            let neighbor = direction.attempt_from(location);
            if passable(neighbor) && board.cell(neighbor).is_some() {
                graph.add_edge(location, neighbor, ());
            }
        }
    }

    let mut search = Bfs::new(&graph, from);
    while let Some(location) = search.next(&graph) {
        if location == to {
            return true;
        }
    }

    false
}
