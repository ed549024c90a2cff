#![warn(missing_docs)]

//! # `meander`
//!
//! An interactive path-drawing engine for [Numberlink](https://en.wikipedia.org/wiki/Numberlink) boards and variants as posited in the mobile game Flow Free.
//! Begin by building a board object using a builder such as [`SquareBoardBuilder`](builder::SquareBoardBuilder) in the [`builder`] module.
//! Wrap the board in a [`PathEngine`] and feed it cell-selection events as the player drags:
//! [`start_path`](PathEngine::start_path) on a colored terminus, [`continue_path`](PathEngine::continue_path) for every cell the pointer enters,
//! and [`end_path`](PathEngine::end_path) when the pointer is released.
//! Every operation reports a [`DrawOutcome`] telling the caller whether to redraw and whether the board is now solved.
//!
//! `meander` can operate on generic board shapes, as encoded by the `Sh` type parameter.
//! These shapes must implement [`Step`](crate::shape::Step) and will automatically have [`BoardShape`](crate::shape::BoardShape) `impl`'d as well.
//!
//! # Internals
//! The engine is a two-state machine: idle, or drawing exactly one active path.
//! Legal extensions commit their segment to the board immediately, so a finished gesture has nothing left to flush,
//! and an abandoned one rolls back whatever it had committed.
//! Moving back onto an earlier cell of the active path retracts the tail to it.
//! Landing on a cell claimed by another affiliation's committed path tears that whole path down, exactly as flows displace each other in-game.
//! Illegal input (non-adjacent cells, foreign termini, blank starting cells) is deliberately ignored rather than raised:
//! drawing must never be interrupted by a stray pointer event.
//!
//! Completion is a pure scan of the board ([`Board::is_solved`]): every affiliation present must have both termini connected.
//! The separate oracle [`route_exists`](route::route_exists) answers reachability questions over committed state
//! ("can these termini still be joined without crossing another color?") with a breadth-first search over the same adjacency the engine enforces.

pub use affiliation::AffiliationID;
pub use board::Board;
pub use builder::Builder;
pub use engine::{ActivePath, DrawOutcome, PathEngine};
pub use location::Location;

pub(crate) mod board;
pub(crate) mod affiliation;
pub(crate) mod location;
pub(crate) mod cell;
pub(crate) mod engine;
pub mod builder;
pub mod route;
pub mod shape;
