/// Identifies one color of flow on a board.
///
/// Affiliations are compared by value, never by any rendering of the color.
/// `0` is reserved for "unaffiliated" and indexes the empty display character;
/// real affiliations start at 1, in the order their termini were added to a
/// builder.
pub type AffiliationID = usize;
