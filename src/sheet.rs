// src/sheet.rs
//
// Folds the grids of one query into a single exportable table, and groups
// named query results into an insertion-ordered sheet set.

use indexmap::IndexMap;

use crate::core::grid::{Grid, grid_width};

/// Sheet name → combined grid, in first-seen query order. Export walks this
/// in iteration order, one spreadsheet sheet per entry.
pub type SheetSet = IndexMap<String, Grid>;

/// Concatenate grids in order with one blank row between consecutive grids.
/// The separator is sized to the grid just emitted, not the combined width,
/// matching the blank spacer row exported result sheets have always carried.
pub fn assemble(grids: &[Grid]) -> Grid {
    let mut out: Grid = Vec::new();
    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            let w = grid_width(&grids[i - 1]);
            out.push(vec![s!(); w]);
        }
        out.extend(grid.iter().cloned());
    }
    out
}

/// Group `(name, grids)` results into a SheetSet. Names keep first-seen
/// order; repeated names append; a name that never contributed a grid is
/// absent rather than present-but-empty. No cross-sheet merging.
pub fn assemble_named<I>(results: I) -> SheetSet
where
    I: IntoIterator<Item = (String, Vec<Grid>)>,
{
    let mut grouped: IndexMap<String, Vec<Grid>> = IndexMap::new();
    for (name, grids) in results {
        if grids.is_empty() {
            continue;
        }
        grouped.entry(name).or_default().extend(grids);
    }

    grouped
        .into_iter()
        .map(|(name, grids)| {
            let combined = assemble(&grids);
            (name, combined)
        })
        .collect()
}
