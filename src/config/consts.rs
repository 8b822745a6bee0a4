// src/config/consts.rs

/// One admission-type query. `upcd`/`cd` are the form codes the detail
/// endpoint expects (`tsrdCmphSlcnArtclUpCd` / `tsrdCmphSlcnArtclCd`);
/// `name` doubles as the sheet name on export.
#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub name: &'static str,
    pub upcd: &'static str,
    pub cd: &'static str,
}

/// Prior-year admission results, one sheet per track.
pub const RESULT_CATEGORIES: &[Category] = &[
    Category { name: "학생부종합", upcd: "20", cd: "22" },
    Category { name: "학생부교과", upcd: "30", cd: "32" },
    Category { name: "수능", upcd: "40", cd: "42" },
];

/// Current-year main points ("주요사항") per track.
pub const MAIN_CATEGORIES: &[Category] = &[
    Category { name: "학생부종합(주요사항)", upcd: "20", cd: "21" },
    Category { name: "학생부교과(주요사항)", upcd: "30", cd: "31" },
    Category { name: "수능(주요사항)", upcd: "40", cd: "41" },
];

// Display
pub const WRAP_MAX_LEN: usize = 50;

// Export
pub const SHEET_NAME_MAX: usize = 31; // xlsx sheet-name cap
