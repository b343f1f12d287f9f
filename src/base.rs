/// Identifier attached to a scored item
pub type ItemId = u64;

/// Score of an item
pub type Score = f32;
