use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use itertools::Itertools;
use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::affiliation::AffiliationID;
use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::shape::BoardShape;

/// A board object using cells organized as specified by `Sh`, carrying the committed paths drawn so far.
///
/// [`Board`]s should be built using a [`Builder`](crate::builder::Builder) such as [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder),
/// then handed to a [`PathEngine`](crate::PathEngine), which is the only thing that mutates them.
/// Collaborators such as renderers read boards between engine operations through the accessors here.
pub struct Board<Sh>
where
    Sh: BoardShape,
{
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) cells: Array2<Cell>,
    pub(crate) affiliation_displays: Vec<char>,
    // committed segments in drawn order, keyed by the affiliation whose path they form
    pub(crate) paths: HashMap<AffiliationID, Vec<UnorderedPair<Location>>>,
    shape: PhantomData<Sh>,
}

impl<Sh> Board<Sh>
where
    Sh: BoardShape,
{
    pub(crate) fn new(dims: (Dimension, Dimension), cells: Array2<Cell>, affiliation_displays: Vec<char>) -> Self {
        Self {
            dims,
            cells,
            affiliation_displays,
            paths: HashMap::new(),
            shape: PhantomData,
        }
    }

    /// The dimensions of this board, in `(x, y)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    pub(crate) fn cell(&self, location: Location) -> Option<&Cell> {
        self.cells.get(location.as_index())
    }

    /// The affiliation present on `location`, whether as a terminus or a claimed path cell.
    /// [`None`] for blank cells and out-of-bounds locations.
    pub fn affiliation_at(&self, location: Location) -> Option<AffiliationID> {
        self.cell(location).and_then(Cell::affiliation)
    }

    /// The display character registered for `affiliation`, if it exists on this board.
    pub fn display_of(&self, affiliation: AffiliationID) -> Option<char> {
        self.affiliation_displays.get(affiliation).copied()
    }

    /// Whether a committed path currently ends on the terminus at `location`.
    /// `false` for anything that is not a terminus.
    pub fn is_connected(&self, location: Location) -> bool {
        matches!(self.cell(location), Some(Cell::Terminus { connected: true, .. }))
    }

    /// The two termini carrying `affiliation`, if it is present on this board.
    pub fn termini_of(&self, affiliation: AffiliationID) -> Option<UnorderedPair<Location>> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| matches!(cell, Cell::Terminus { affiliation: owner, .. } if *owner == affiliation))
            .map(|(index, _)| Location::from(index))
            .collect_tuple::<(_, _)>()
            .map(UnorderedPair::from)
    }

    /// The committed segments of `affiliation`'s path, in the order they were drawn.
    /// Empty if the affiliation has no committed path.
    pub fn segments_of(&self, affiliation: AffiliationID) -> &[UnorderedPair<Location>] {
        self.paths.get(&affiliation).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every affiliation which currently has at least one committed segment.
    pub fn drawn_affiliations(&self) -> impl Iterator<Item = AffiliationID> + '_ {
        self.paths.keys().copied()
    }

    /// Whether this board is complete: every affiliation present has exactly two termini and both are connected by committed paths.
    ///
    /// This is a pure scan; a board with no termini at all is vacuously solved.
    pub fn is_solved(&self) -> bool {
        let mut pairs: HashMap<AffiliationID, (usize, bool)> = HashMap::new();
        for cell in self.cells.iter() {
            if let Cell::Terminus { affiliation, connected } = cell {
                let entry = pairs.entry(*affiliation).or_insert((0, true));
                entry.0 += 1;
                entry.1 &= connected;
            }
        }

        pairs.values().all(|(count, connected)| *count == 2 && *connected)
    }

    pub(crate) fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.indexed_iter().map(|(index, _)| Location::from(index))
    }

    pub(crate) fn set_connected(&mut self, location: Location, connected: bool) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            if let Cell::Terminus { affiliation, .. } = *cell {
                *cell = Cell::Terminus { affiliation, connected };
            }
        }
    }

    pub(crate) fn claim(&mut self, location: Location, affiliation: AffiliationID) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            if matches!(*cell, Cell::Empty) {
                *cell = Cell::Path { affiliation };
            }
        }
    }

    pub(crate) fn unclaim(&mut self, location: Location) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            if matches!(*cell, Cell::Path { .. }) {
                *cell = Cell::Empty;
            }
        }
    }

    pub(crate) fn push_segment(&mut self, affiliation: AffiliationID, segment: UnorderedPair<Location>) {
        self.paths.entry(affiliation).or_default().push(segment);
    }

    pub(crate) fn truncate_segments(&mut self, affiliation: AffiliationID, keep: usize) {
        if keep == 0 {
            self.paths.remove(&affiliation);
            return;
        }

        if let Some(segments) = self.paths.get_mut(&affiliation) {
            segments.truncate(keep);
        }
    }

    pub(crate) fn clear_path(&mut self, affiliation: AffiliationID) {
        self.paths.remove(&affiliation);
        self.cells.map_inplace(|cell| match *cell {
            Cell::Path { affiliation: claimed } if claimed == affiliation => *cell = Cell::Empty,
            Cell::Terminus { affiliation: owner, connected: true } if owner == affiliation => {
                *cell = Cell::Terminus { affiliation: owner, connected: false }
            }
            _ => {}
        });
    }
}

impl<Sh: BoardShape> Display for Board<Sh> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Sh::print(self.cells.map(|cell| match cell {
            Cell::Terminus { affiliation, .. } => self.affiliation_displays.get(*affiliation).unwrap().to_ascii_uppercase(),
            Cell::Path { affiliation } => self.affiliation_displays.get(*affiliation).unwrap().to_ascii_lowercase(),
            Cell::Empty => '.',
        })))
    }
}
