// src/core/sanitize.rs

use unicode_normalization::UnicodeNormalization;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a scraped name safe as a filename or sheet name: NFKC-normalize
/// (pages mix full-width and half-width forms), map the characters Windows
/// rejects plus C0 controls to spaces, collapse runs, trim.
pub fn sanitize_filename(name: &str) -> String {
    let normalized: String = name.nfkc().collect();
    let mapped: String = normalized
        .chars()
        .map(|ch| match ch {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => ' ',
            c if (c as u32) < 0x20 => ' ',
            c => c,
        })
        .collect();
    normalize_ws(&mapped)
}

/// Cap a sheet name to `max` characters on a char boundary. The xlsx writer
/// downstream rejects longer names.
pub fn truncate_sheet_name(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_strips_forbidden_chars() {
        assert_eq!(
            sanitize_filename("서울대학교: 2026/수시*결과"),
            "서울대학교 2026 수시 결과"
        );
    }

    #[test]
    fn filename_applies_nfkc() {
        // Full-width Latin folds to ASCII under NFKC.
        assert_eq!(sanitize_filename("ＡＢＣ대학"), "ABC대학");
    }

    #[test]
    fn filename_drops_controls_and_collapses_ws() {
        assert_eq!(sanitize_filename("  a\x01b \n c  "), "a b c");
    }

    #[test]
    fn sheet_name_cap_is_char_based() {
        let name = "학생부종합".repeat(10);
        let cut = truncate_sheet_name(&name, 31);
        assert_eq!(cut.chars().count(), 31);
    }

    #[test]
    fn ws_normalization() {
        assert_eq!(normalize_ws("  수시 \t\n 모집  "), "수시 모집");
    }
}
