// src/core/grid.rs
//
// Rowspan/colspan resolution: one source table's cell stream in, one dense
// rectangular Vec<Vec<String>> out. Spanned values are resolved lazily via a
// per-call pending map keyed by absolute (row, col); no fixed-capacity row
// buffers, so table width is unbounded.

use std::collections::HashMap;

/// One source table cell in document order. Spans below 1 are treated as 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub row_span: usize,
    pub col_span: usize,
}

impl Cell {
    pub fn new<S: Into<String>>(text: S, row_span: usize, col_span: usize) -> Self {
        Self { text: text.into(), row_span, col_span }
    }

    /// 1x1 cell.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, 1, 1)
    }
}

pub type Grid = Vec<Vec<String>>;

/// Column count of a grid. Finished grids are rectangular, but this takes the
/// max so it also answers for in-flight row sets.
pub fn grid_width(grid: &Grid) -> usize {
    grid.iter().map(Vec::len).max().unwrap_or(0)
}

/// Resolve one table's rows into a dense rectangular grid.
///
/// Scan each row left to right with a column cursor. Before placing a cell,
/// consume any pending span values queued at the cursor (each consumed exactly
/// once); then place the cell's own text at its origin and queue its remaining
/// footprint into `pending` for future positions. Pending entries in the
/// current row that no later cell scan reaches are dropped, and the position
/// is padded with "" at the end; rows are not extended retroactively.
///
/// Total over any finite cell stream; never errors.
pub fn reconstruct(rows: &[Vec<Cell>]) -> Grid {
    let mut pending: HashMap<(usize, usize), String> = HashMap::new();
    let mut grid: Grid = Vec::with_capacity(rows.len());

    for (r, src_row) in rows.iter().enumerate() {
        let mut out: Vec<String> = Vec::new();
        let mut c = 0usize;

        for cell in src_row {
            // Fast-forward past columns claimed by earlier rows' spans.
            while let Some(text) = pending.remove(&(r, c)) {
                out.push(text);
                c += 1;
            }

            out.push(cell.text.clone());

            // Queue the rest of the footprint. Same-row continuations land in
            // `pending` too and are picked up by the next cell's fast-forward;
            // continuations after the row's last cell are dropped.
            let row_span = cell.row_span.max(1);
            let col_span = cell.col_span.max(1);
            for dr in 0..row_span {
                for dc in 0..col_span {
                    if dr == 0 && dc == 0 {
                        continue; // origin already written
                    }
                    pending.insert((r + dr, c + dc), cell.text.clone());
                }
            }

            c += 1;
        }

        // A row fully consumed by spans from above still lands here (possibly
        // empty) to keep row correspondence with the visual table.
        grid.push(out);
    }

    let width = grid_width(&grid);
    for row in &mut grid {
        row.resize(width, s!());
    }
    grid
}
