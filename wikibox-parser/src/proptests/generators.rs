//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Any string, control characters and multi-byte characters included.
pub fn any_document_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(".*").expect("Failed to create any string strategy")
}

/// Documents built from box tags and text, well-formed or not.
pub fn box_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("<box>".to_string()),
            Just("<box|".to_string()),
            Just("<box 50% round #abc>".to_string()),
            Just("<box red|".to_string()),
            Just("<box\n".to_string()),
            Just("</box>".to_string()),
            Just("</box|Caption>".to_string()),
            Just("</box\n>".to_string()),
            Just(">".to_string()),
            Just("|".to_string()),
            Just("\n".to_string()),
            prop::string::string_regex(r"[a-zA-Z0-9 .,!?]+").expect("Failed to create text chunk"),
        ],
        0..24,
    )
    .prop_map(|chunks| chunks.join(""))
}

/// Attribute strings mixing valid and invalid tokens.
pub fn attribute_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("50%".to_string()),
            Just("12em".to_string()),
            Just("#abc".to_string()),
            Just("#a0b1c2".to_string()),
            Just("rgb(10,20,30)".to_string()),
            Just("rgb(50%,0,100%)".to_string()),
            Just("round".to_string()),
            Just("<script>".to_string()),
            Just("\"quoted\"".to_string()),
            prop::string::string_regex(r"[ -~]{1,12}").expect("Failed to create token"),
        ],
        0..16,
    )
    .prop_map(|tokens| tokens.join(" "))
}
