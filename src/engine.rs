use tracing::debug;
use unordered_pair::UnorderedPair;

use crate::affiliation::AffiliationID;
use crate::board::Board;
use crate::cell::Cell;
use crate::location::Location;
use crate::shape::BoardShape;

/// The single in-progress path being drawn on a board.
///
/// `cells()[0]` is the terminus the path started from; the path grows and shrinks only at its head.
/// At most one of these exists per engine, and none while the engine is idle.
#[derive(Clone, Debug)]
pub struct ActivePath {
    affiliation: AffiliationID,
    cells: Vec<Location>,
}

impl ActivePath {
    /// The affiliation whose termini this path is joining.
    pub fn affiliation(&self) -> AffiliationID {
        self.affiliation
    }

    /// Every cell on the path in drawn order, starting terminus first.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// The cell the path currently ends on.
    pub fn head(&self) -> Location {
        // an ActivePath is created with one cell and never truncated below that
        *self.cells.last().unwrap()
    }

    fn start(&self) -> Location {
        self.cells[0]
    }
}

/// The observable result of one engine operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawOutcome {
    /// The input was ignored; nothing changed.
    Ignored,
    /// Board or active-path state changed; a renderer should redraw.
    Changed,
    /// The active path reached its second terminus and the gesture ended.
    Completed {
        /// The completion check over the whole board: `true` when every affiliation is connected.
        solved: bool,
    },
}

/// The path-drawing state machine over one [`Board`].
///
/// The engine owns its board and is the sole mutator of it.
/// It accepts discrete cell-selection events, maintains at most one [`ActivePath`],
/// commits each legal extension to the board immediately, and reports completion after every finished path.
/// Illegal input never raises an error; it comes back as [`DrawOutcome::Ignored`] so a stray pointer event can never interrupt drawing.
pub struct PathEngine<Sh>
where
    Sh: BoardShape,
{
    board: Board<Sh>,
    active: Option<ActivePath>,
}

impl<Sh> PathEngine<Sh>
where
    Sh: BoardShape,
{
    /// Wrap `board`, ready to draw. The engine starts idle.
    pub fn new(board: Board<Sh>) -> Self {
        Self { board, active: None }
    }

    /// The board this engine draws on.
    pub fn board(&self) -> &Board<Sh> {
        &self.board
    }

    /// The in-progress path, if a drawing gesture is underway.
    pub fn active_path(&self) -> Option<&ActivePath> {
        self.active.as_ref()
    }

    /// Consume the engine, yielding its board.
    pub fn into_board(self) -> Board<Sh> {
        self.board
    }

    /// Begin drawing from the terminus at `location`.
    ///
    /// Touching anything that is not a terminus is ignored.
    /// Otherwise this always (re)initiates drawing: any path still being drawn is discarded as if
    /// [`cancel_path`](Self::cancel_path) had been called, and any committed path of the touched
    /// affiliation is cleared before the new gesture begins.
    pub fn start_path(&mut self, location: Location) -> DrawOutcome {
        let Some(Cell::Terminus { affiliation, .. }) = self.board.cell(location).copied() else {
            return DrawOutcome::Ignored;
        };

        if let Some(previous) = self.active.take() {
            self.board.clear_path(previous.affiliation);
        }
        // re-starting a color always clears that color's committed path first
        self.board.clear_path(affiliation);

        self.board.set_connected(location, true);
        self.active = Some(ActivePath { affiliation, cells: vec![location] });
        debug!(affiliation, %location, "path started");

        DrawOutcome::Changed
    }

    /// Extend the active path onto `location`.
    ///
    /// Without an active path, or when `location` is out of bounds, not one step from the head,
    /// the head itself, or a foreign terminus, nothing happens.
    /// Moving back onto an earlier cell of the active path retracts the tail to it.
    /// Landing on a cell claimed by another affiliation's committed path tears that whole path down first.
    /// Reaching the second terminus of the active affiliation completes the path and ends the gesture.
    pub fn continue_path(&mut self, location: Location) -> DrawOutcome {
        let Some(active) = &self.active else {
            return DrawOutcome::Ignored;
        };
        let affiliation = active.affiliation;
        let head = active.head();
        let start = active.start();
        let found = active.cells.iter().position(|cell| *cell == location);
        let length = active.cells.len();

        if self.board.cell(location).is_none() || Sh::direction_to(head, location).is_none() {
            return DrawOutcome::Ignored;
        }

        // moving back over an already-drawn cell retracts the tail to it
        if let Some(index) = found {
            return match index + 1 == length {
                true => DrawOutcome::Ignored,
                false => self.backtrack_to(index),
            };
        }

        if let Some(Cell::Path { affiliation: other }) = self.board.cell(location).copied() {
            // cells claimed by the active affiliation are on the active path and were handled above
            if other != affiliation {
                debug!(affiliation = other, %location, "crossing: tearing down claimed path");
                self.board.clear_path(other);
            }
        }

        match self.board.cell(location).copied() {
            Some(Cell::Empty) => {
                self.board.push_segment(affiliation, UnorderedPair::from((head, location)));
                self.board.claim(location, affiliation);
                if let Some(active) = &mut self.active {
                    active.cells.push(location);
                }
                debug!(affiliation, %location, "path extended");

                DrawOutcome::Changed
            }
            Some(Cell::Terminus { affiliation: other, .. }) if other == affiliation && location != start => {
                self.complete(location)
            }
            _ => DrawOutcome::Ignored,
        }
    }

    /// End the drawing gesture, e.g. on pointer release.
    ///
    /// A path finishes successfully only when released on the second terminus of its own
    /// affiliation, adjacent to the head; `end_path` then behaves exactly like the completing
    /// [`continue_path`](Self::continue_path). Releasing anywhere else, or nowhere
    /// ([`None`]), cancels the whole in-progress path.
    pub fn end_path(&mut self, location: Option<Location>) -> DrawOutcome {
        let Some(active) = &self.active else {
            return DrawOutcome::Ignored;
        };

        if let Some(location) = location {
            let finishes = Sh::direction_to(active.head(), location).is_some()
                && location != active.start()
                && matches!(
                    self.board.cell(location),
                    Some(Cell::Terminus { affiliation, .. }) if *affiliation == active.affiliation
                );

            if finishes {
                return self.complete(location);
            }
        }

        // released anywhere else: the whole gesture is abandoned
        self.cancel_path()
    }

    /// Abandon the active path, removing every segment it committed and resetting its
    /// affiliation's `connected` flags. Idle engines ignore this.
    pub fn cancel_path(&mut self) -> DrawOutcome {
        let Some(active) = self.active.take() else {
            return DrawOutcome::Ignored;
        };

        debug!(affiliation = active.affiliation, "path cancelled");
        self.board.clear_path(active.affiliation);

        DrawOutcome::Changed
    }

    fn backtrack_to(&mut self, index: usize) -> DrawOutcome {
        let Some(active) = &mut self.active else {
            return DrawOutcome::Ignored;
        };
        let affiliation = active.affiliation;

        let dropped = active.cells.split_off(index + 1);
        for cell in dropped {
            self.board.unclaim(cell);
        }
        // each accepted extension committed exactly one segment, so `index` of them survive
        self.board.truncate_segments(affiliation, index);
        debug!(affiliation, retained = index + 1, "path backtracked");

        DrawOutcome::Changed
    }

    fn complete(&mut self, location: Location) -> DrawOutcome {
        let Some(active) = self.active.take() else {
            return DrawOutcome::Ignored;
        };
        let affiliation = active.affiliation;

        self.board.push_segment(affiliation, UnorderedPair::from((active.head(), location)));
        self.board.set_connected(active.start(), true);
        self.board.set_connected(location, true);

        let solved = self.board.is_solved();
        debug!(affiliation, %location, solved, "path completed");

        DrawOutcome::Completed { solved }
    }
}
