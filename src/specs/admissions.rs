// src/specs/admissions.rs
//
// Parses the criteriaAndResultItemAjax.do response fragments: a handful of
// <table> blocks whose cells lean hard on rowspan/colspan. Output shapes
// straight into core::grid::reconstruct.

use std::time::Instant;

use crate::config::consts::Category;
use crate::core::grid::{self, Cell, Grid};
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, opener, span_attr, strip_tags};
use crate::core::sanitize::{normalize_entities, normalize_ws};

/// Tokenize every `<table>` block of a response document into rows of cells
/// in document order. Malformed cells degrade locally (text "", spans 1);
/// a broken table never aborts the document.
pub fn parse_doc(html_doc: &str) -> Vec<Vec<Vec<Cell>>> {
    let t = Instant::now();

    let mut tables = Vec::new();
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(html_doc, "<table", "</table>", pos) {
        let table = &html_doc[tb_s..tb_e];
        pos = tb_e;
        tables.push(parse_table(table));
    }

    logd!("Admissions: tokenized {} table(s) in {:?}", tables.len(), t.elapsed());
    tables
}

/// Tokenize and resolve in one go. Tables with no rows are skipped rather
/// than emitting empty grids.
pub fn extract_grids(html_doc: &str) -> Vec<Grid> {
    parse_doc(html_doc)
        .iter()
        .filter(|rows| !rows.is_empty())
        .map(|rows| grid::reconstruct(rows))
        .collect()
}

/// Pair categories with the grids parsed from their response documents, by
/// position. `None` marks a failed or empty fetch; the category then
/// contributes no grids and drops out of the sheet set downstream.
pub fn collect_results(
    categories: &[Category],
    docs: &[Option<String>],
) -> Vec<(String, Vec<Grid>)> {
    categories
        .iter()
        .zip(docs)
        .map(|(cat, doc)| {
            let grids = match doc {
                Some(html_doc) => extract_grids(html_doc),
                None => {
                    loge!("{}: no response document", cat.name);
                    Vec::new()
                }
            };
            (s!(cat.name), grids)
        })
        .collect()
}

/* ---------------- helpers ---------------- */

fn parse_table(table: &str) -> Vec<Vec<Cell>> {
    let mut rows = Vec::new();
    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
        let tr_block = &table[tr_s..tr_e];
        tr_pos = tr_e;
        rows.push(parse_row(tr_block));
    }
    rows
}

/// Next `<td>` or `<th>` block, whichever comes first.
fn next_cell_block(tr_block: &str, from: usize) -> Option<(usize, usize)> {
    let td = next_tag_block_ci(tr_block, "<td", "</td>", from);
    let th = next_tag_block_ci(tr_block, "<th", "</th>", from);
    match (td, th) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn parse_row(tr_block: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((c_s, c_e)) = next_cell_block(tr_block, pos) {
        let block = &tr_block[c_s..c_e];
        pos = c_e;

        let open = opener(block);
        let row_span = span_attr(open, "rowspan");
        let col_span = span_attr(open, "colspan");
        // Strip markup before decoding entities: encoded angle brackets are
        // cell text, not tags. The final pass collapses spaces decoded from
        // &nbsp;.
        let text = normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))));

        cells.push(Cell { text, row_span, col_span });
    }
    cells
}
