use karte_structuring::normalize::{normalize, strip_visit_metadata};

#[test]
fn crlf_becomes_lf_and_outer_whitespace_is_trimmed() {
    assert_eq!(
        normalize("  S（主観）\r\n痛みがある\r\n"),
        "S（主観）\n痛みがある"
    );
}

#[test]
fn empty_and_whitespace_input_normalize_to_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \r\n\t \n"), "");
}

#[test]
fn metadata_block_is_cut_without_consuming_its_terminator() {
    let text = "【訪問情報】\n日時：2026-04-01 10:00\n担当：佐藤\n【症状推移】\n改善傾向";
    assert_eq!(strip_visit_metadata(text), "【症状推移】\n改善傾向");
}

#[test]
fn metadata_block_stops_at_horizontal_rule() {
    let text = "前文\n【訪問情報】\n日時：未定\n---\n本文";
    assert_eq!(strip_visit_metadata(text), "前文\n---\n本文");
}

#[test]
fn metadata_block_stops_at_markdown_heading() {
    let text = "【訪問情報】\n担当：田中\n### 訪問看護計画書\n【長期目標】\n目標";
    assert_eq!(
        strip_visit_metadata(text),
        "### 訪問看護計画書\n【長期目標】\n目標"
    );
}

#[test]
fn metadata_block_without_terminator_runs_to_end_of_text() {
    let text = "本文です\n【訪問情報】\n日時：未定\n担当：未定";
    assert_eq!(strip_visit_metadata(text).trim(), "本文です");
}

#[test]
fn every_metadata_block_is_removed() {
    let text = "【訪問情報】\n前の分\n【症状推移】\n安定\n【訪問情報】\n後の分";
    assert_eq!(strip_visit_metadata(text).trim(), "【症状推移】\n安定");
}

#[test]
fn input_that_is_only_metadata_normalizes_to_empty() {
    assert_eq!(normalize("【訪問情報】\n日時：2026-04-01\n担当：佐藤\n"), "");
}
