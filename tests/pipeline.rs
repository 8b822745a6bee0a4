// tests/pipeline.rs
//
// End-to-end over the public API: response documents in, combined sheets and
// display grids out. No network.

use pretty_assertions::assert_eq;

use adiga_scrape::config::consts::{MAIN_CATEGORIES, WRAP_MAX_LEN};
use adiga_scrape::core::wrap::wrap_grid;
use adiga_scrape::sheet::assemble_named;
use adiga_scrape::specs::admissions::collect_results;

// Two tables in one response; the second is narrower than the first.
const DOC_JONGHAP: &str = r#"
    <table class="tbl_type01">
      <tr><th rowspan="2">모집단위</th><th colspan="2">2025 결과</th></tr>
      <tr><th>경쟁률</th><th>최종등록자 평균</th></tr>
      <tr><td>국어국문학과</td><td>8.1</td><td>2.43</td></tr>
    </table>
    <table>
      <tr><td colspan="2">비고</td></tr>
      <tr><td>면접</td><td>30%</td></tr>
    </table>
"#;

const DOC_GYOGWA: &str = r#"
    <table><tr><td>교과</td><td>100%</td></tr></table>
"#;

#[test]
fn documents_become_ordered_sheets() {
    let docs = vec![
        Some(String::from(DOC_JONGHAP)),
        Some(String::from(DOC_GYOGWA)),
        None, // 수능 fetch failed → no sheet
    ];

    let set = assemble_named(collect_results(MAIN_CATEGORIES, &docs));

    let names: Vec<&str> = set.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["학생부종합(주요사항)", "학생부교과(주요사항)"]);

    let jonghap = &set["학생부종합(주요사항)"];
    // 3 rows table one, separator, 2 rows table two.
    assert_eq!(jonghap.len(), 6);
    // The header colspan ends its row, so the continuation is dropped and the
    // slot pads to "" once the wider rows below set the table width.
    assert_eq!(
        jonghap[0],
        vec![
            String::from("모집단위"),
            String::from("2025 결과"),
            String::new(),
        ]
    );
    assert_eq!(
        jonghap[1],
        vec![
            String::from("모집단위"),
            String::from("경쟁률"),
            String::from("최종등록자 평균"),
        ]
    );
    // Separator is sized to the first table's width.
    assert_eq!(jonghap[3], vec![String::new(); 3]);
    // Second table: colspan continuation after the row's last cell drops,
    // then the narrow table pads to its own width only.
    assert_eq!(jonghap[4], vec![String::from("비고"), String::new()]);
    assert_eq!(jonghap[5], vec![String::from("면접"), String::from("30%")]);
}

#[test]
fn display_wrap_leaves_sheet_data_alone() {
    let docs = vec![Some(String::from(DOC_JONGHAP)), None, None];
    let set = assemble_named(collect_results(MAIN_CATEGORIES, &docs));
    let sheet = &set["학생부종합(주요사항)"];

    let wrapped = wrap_grid(sheet, 4);
    assert_eq!(wrapped.len(), sheet.len());
    // "최종등록자 평균" is 8 codepoints: two chunks of 4.
    assert_eq!(wrapped[1][2], "최종등록\n자 평균");
    // canonical value untouched
    assert_eq!(sheet[1][2], "최종등록자 평균");
}

#[test]
fn default_wrap_width_is_generous_enough_for_headers() {
    let docs = vec![Some(String::from(DOC_JONGHAP)), None, None];
    let set = assemble_named(collect_results(MAIN_CATEGORIES, &docs));
    let sheet = &set["학생부종합(주요사항)"];

    // Headers are shorter than the default width, so wrapping is identity.
    let wrapped = wrap_grid(sheet, WRAP_MAX_LEN);
    assert_eq!(&wrapped, sheet);
}
