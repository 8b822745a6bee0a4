// src/core/html.rs
//
// Tolerant, case-insensitive tag scanning for the AJAX response fragments the
// detail endpoint returns. No DOM; just block slicing the way the pages are
// actually shaped.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<o ...> ... </o>` block at or after `from`. Returns byte offsets of
/// the whole block including the close tag.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Contents between the block's open tag and its final close tag.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// The open tag itself, `<td ...` up to (not including) `>`.
pub fn opener(block: &str) -> &str {
    &block[..block.find('>').unwrap_or(block.len())]
}

/// Value of an attribute inside a tag opener. Tolerates double quotes,
/// single quotes, and bare values (`rowspan=3`); case-insensitive on the
/// attribute name. Requires a non-alphanumeric character before the name so
/// `colspan=` never matches inside some longer attribute.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = join!(&to_lower(name), "=");
    let mut search = 0usize;

    while let Some(rel) = lc[search..].find(&needle) {
        let at = search + rel;
        search = at + needle.len();

        let boundary = at == 0 || !lc.as_bytes()[at - 1].is_ascii_alphanumeric();
        if !boundary {
            continue;
        }

        let val = &opener[at + needle.len()..];
        let (quote, off) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[off..].find(quote).map(|e| off + e).unwrap_or(val.len())
        } else {
            val[off..]
                .find(|ch: char| ch.is_ascii_whitespace() || ch == '>' || ch == '/')
                .map(|e| off + e)
                .unwrap_or(val.len())
        };
        return Some(val[off..end].to_string());
    }
    None
}

/// Parse a span attribute off a cell opener. Missing, unparsable, or zero
/// all collapse to 1; a malformed span never aborts the table.
pub fn span_attr(opener: &str, name: &str) -> usize {
    match attr_value(opener, name).and_then(|v| v.trim().parse::<usize>().ok()) {
        Some(n) if n >= 1 => n,
        _ => 1,
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
