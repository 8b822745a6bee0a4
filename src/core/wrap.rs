// src/core/wrap.rs
//
// Display-only reflow. The canonical grid keeps its values; the UI gets a
// copy with each cell broken into fixed-width lines so wide Hangul answer
// text doesn't blow out the table widget.

use super::grid::Grid;

/// Split `s` into `max_len`-codepoint chunks joined with '\n'. The last chunk
/// may be shorter. Chunk boundaries are char boundaries, never bytes, so
/// multi-byte text stays intact.
pub fn wrap_text(s: &str, max_len: usize) -> String {
    debug_assert!(max_len > 0);
    if max_len == 0 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + s.len() / max_len);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && i % max_len == 0 {
            out.push('\n');
        }
        out.push(ch);
    }
    out
}

/// Reflow every cell of a grid. Pure; same dimensions; input untouched.
pub fn wrap_grid(grid: &Grid, max_len: usize) -> Grid {
    grid.iter()
        .map(|row| row.iter().map(|cell| wrap_text(cell, max_len)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_with_short_tail() {
        assert_eq!(wrap_text("ABCDEFGHIJ", 4), "ABCD\nEFGH\nIJ");
    }

    #[test]
    fn exact_multiple_gets_no_trailing_break() {
        assert_eq!(wrap_text("ABCDEF", 3), "ABC\nDEF");
    }

    #[test]
    fn short_and_empty_pass_through() {
        assert_eq!(wrap_text("AB", 4), "AB");
        assert_eq!(wrap_text("", 4), "");
    }

    #[test]
    fn chunking_counts_codepoints_not_bytes() {
        assert_eq!(wrap_text("대학입시자료조회", 3), "대학입\n시자료\n조회");
    }

    #[test]
    fn grid_wrap_preserves_dimensions_and_is_deterministic() {
        let grid = vec![
            vec![s!("가나다라마"), s!("x")],
            vec![s!(""), s!("123456")],
        ];
        let a = wrap_grid(&grid, 2);
        let b = wrap_grid(&grid, 2);
        assert_eq!(a, b);
        assert_eq!(a.len(), grid.len());
        assert_eq!(a[0].len(), grid[0].len());
        assert_eq!(a[0][0], "가나\n다라\n마");
        assert_eq!(a[1][1], "12\n34\n56");
        // source untouched
        assert_eq!(grid[0][0], "가나다라마");
    }
}
