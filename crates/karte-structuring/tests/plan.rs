use karte_structuring::plan::{clean_plan_field, extract_care_plan};

#[test]
fn bracket_labels_are_extracted() {
    let plan = extract_care_plan(
        "【長期目標】\n在宅生活の継続\n【短期目標】\n疼痛管理\n【看護援助の方針】\n疼痛緩和を優先",
    );
    assert_eq!(plan.long_term_goal, "在宅生活の継続");
    assert_eq!(plan.short_term_goal, "疼痛管理");
    assert_eq!(plan.nursing_policy, "疼痛緩和を優先");
}

#[test]
fn bare_colon_labels_are_extracted() {
    let plan = extract_care_plan(
        "長期目標：自立歩行の維持\n短期目標：転倒なく過ごす\n看護援助の方針：リハビリ継続",
    );
    assert_eq!(plan.long_term_goal, "自立歩行の維持");
    assert_eq!(plan.short_term_goal, "転倒なく過ごす");
    assert_eq!(plan.nursing_policy, "リハビリ継続");
}

#[test]
fn bold_colon_labels_are_extracted() {
    let plan = extract_care_plan(
        "**長期目標：**\n在宅生活継続\n**短期目標**：\n体調安定\n**看護援助の方針：**\n服薬管理支援",
    );
    assert_eq!(plan.long_term_goal, "在宅生活継続");
    assert_eq!(plan.short_term_goal, "体調安定");
    assert_eq!(plan.nursing_policy, "服薬管理支援");
}

#[test]
fn duplicated_section_heading_is_stripped() {
    let plan = extract_care_plan("**訪問看護計画書**\n【長期目標】\n地域生活の継続");
    assert_eq!(plan.long_term_goal, "地域生活の継続");
}

#[test]
fn fields_stop_at_a_horizontal_rule() {
    let plan = extract_care_plan("【看護援助の方針】\n本人の意向を尊重する\n---\n以上");
    assert_eq!(plan.nursing_policy, "本人の意向を尊重する");
}

#[test]
fn metadata_block_inside_the_plan_section_is_ignored() {
    let plan = extract_care_plan(
        "【訪問情報】\n日時：2026-04-01\n【長期目標】\n症状の安定\n【短期目標】\n通院継続",
    );
    assert_eq!(plan.long_term_goal, "症状の安定");
    assert_eq!(plan.short_term_goal, "通院継続");
}

#[test]
fn empty_plan_text_yields_empty_fields() {
    let plan = extract_care_plan("");
    assert!(plan.is_empty());
    let plan = extract_care_plan("   \n ");
    assert!(plan.is_empty());
}

#[test]
fn unmatched_fields_stay_empty_without_fallback() {
    let plan = extract_care_plan("【短期目標】\n清潔保持");
    assert_eq!(plan.long_term_goal, "");
    assert_eq!(plan.short_term_goal, "清潔保持");
    assert_eq!(plan.nursing_policy, "");
}

#[test]
fn repeated_inline_label_is_cleaned_from_the_captured_span() {
    let plan = extract_care_plan("【短期目標】\n短期目標：服薬の自己管理");
    assert_eq!(plan.short_term_goal, "服薬の自己管理");
}

#[test]
fn cleaning_strips_emphasis_and_labels() {
    assert_eq!(clean_plan_field("**在宅生活の継続**"), "在宅生活の継続");
    assert_eq!(clean_plan_field("【長期目標】 在宅生活の継続"), "在宅生活の継続");
    assert_eq!(clean_plan_field("**短期目標：**体調の安定"), "体調の安定");
    assert_eq!(clean_plan_field("  転倒予防  "), "転倒予防");
}

#[test]
fn cleaning_is_idempotent() {
    let inputs = [
        "**短期目標：**体調の安定",
        "【長期目標】在宅生活の継続",
        "長期目標：**目標**：続き",
        "プレーンな本文",
        "",
        "**長期目標**：長期目標：二重ラベル",
    ];
    for input in inputs {
        let once = clean_plan_field(input);
        assert_eq!(clean_plan_field(&once), once, "not idempotent for {input:?}");
    }
}
