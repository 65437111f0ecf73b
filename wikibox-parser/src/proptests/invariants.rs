//! Parser invariants checked with property-based testing

use proptest::prelude::*;

use crate::{
    Instruction, MAX_STYLE_TOKENS, Node, Options,
    lexer::{self, Context, Lookahead, Token, TokenKind},
    parse, parse_attributes,
};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    /// The parser never panics, no matter how malformed the input is.
    #[test]
    fn parser_never_panics(input in any_document_string()) {
        let _ = parse(&input, &Options::default());
    }

    /// Every opened box is closed exactly once.
    #[test]
    fn opens_and_closes_balance(input in box_document(), nested in any::<bool>()) {
        let options = Options::builder().with_nested_boxes(nested).build();
        let doc = parse(&input, &options);
        let opens = doc
            .instructions()
            .filter(|i| matches!(i, Instruction::TitleOpen(_) | Instruction::BoxOpen(Some(_))))
            .count();
        let closes = doc
            .instructions()
            .filter(|i| matches!(i, Instruction::BoxClose(_)))
            .count();
        prop_assert_eq!(opens, closes);
    }

    /// A title continuation only follows a title opened at the same level, and
    /// host markup never shows up inside a box.
    #[test]
    fn instructions_are_well_nested(input in box_document()) {
        let doc = parse(&input, &Options::default());
        // One entry per open box: whether its title is still being read.
        let mut levels: Vec<bool> = Vec::new();
        for node in &doc.nodes {
            match node {
                Node::Markup(_) => prop_assert!(levels.is_empty()),
                Node::Box(Instruction::TitleOpen(_)) => levels.push(true),
                Node::Box(Instruction::BoxOpen(Some(_))) => levels.push(false),
                Node::Box(Instruction::BoxOpen(None)) => {
                    prop_assert_eq!(levels.last(), Some(&true));
                    if let Some(in_title) = levels.last_mut() {
                        *in_title = false;
                    }
                }
                Node::Box(Instruction::Data(text)) => {
                    prop_assert!(!levels.is_empty());
                    prop_assert!(!text.is_empty());
                }
                Node::Box(Instruction::BoxClose(_)) => {
                    prop_assert!(levels.pop().is_some());
                }
            }
        }
        prop_assert!(levels.is_empty());
    }

    /// The text chunks and the tags between them rebuild the input exactly: nothing is
    /// skipped, repeated or reordered.
    #[test]
    fn tags_and_text_rebuild_the_input(input in box_document()) {
        let doc = parse(&input, &Options::default());
        let mut lookahead = Lookahead::new(&input);
        let mut open = 0_usize;
        let mut rebuilt = String::with_capacity(input.len());
        for node in &doc.nodes {
            let at = rebuilt.len();
            let piece = match node {
                Node::Markup(text) | Node::Box(Instruction::Data(text)) => text.as_str(),
                Node::Box(instruction) => {
                    let context = Context { inside_box: open > 0, accepts_entry: true };
                    let token = lexer::next_token(&input, at, context, &mut lookahead)
                        .filter(|token| token.start == at);
                    match (instruction, token) {
                        (
                            Instruction::TitleOpen(_),
                            Some(Token { kind: TokenKind::Enter { titled: true }, text, .. }),
                        )
                        | (
                            Instruction::BoxOpen(Some(_)),
                            Some(Token { kind: TokenKind::Enter { titled: false }, text, .. }),
                        )
                        | (
                            Instruction::BoxOpen(None),
                            Some(Token { kind: TokenKind::Continuation, text, .. }),
                        )
                        | (Instruction::BoxClose(_), Some(Token { kind: TokenKind::Exit, text, .. })) => {
                            text
                        }
                        // Boxes still open at the end are closed without a tag.
                        (Instruction::BoxClose(caption), None) if at == input.len() => {
                            prop_assert!(caption.is_empty());
                            ""
                        }
                        (instruction, token) => {
                            return Err(TestCaseError::fail(format!(
                                "{instruction:?} does not match {token:?} at byte {at}"
                            )));
                        }
                    }
                }
            };
            prop_assert_eq!(input.get(at..at + piece.len()), Some(piece), "at byte {}", at);
            rebuilt.push_str(piece);
            match node {
                Node::Box(Instruction::TitleOpen(_) | Instruction::BoxOpen(Some(_))) => open += 1,
                Node::Box(Instruction::BoxClose(_)) => open = open.saturating_sub(1),
                Node::Markup(_) | Node::Box(Instruction::BoxOpen(None) | Instruction::Data(_)) => {}
            }
        }
        prop_assert_eq!(rebuilt, input);
    }

    /// Attribute parsing never panics and only keeps safe class names.
    #[test]
    fn attributes_stay_bounded(input in attribute_string()) {
        let style = parse_attributes(&input);
        let used = style.classes.len() + usize::from(style.width.is_some());
        prop_assert!(used <= MAX_STYLE_TOKENS);
        for class in &style.classes {
            prop_assert!(!class.is_empty());
            prop_assert!(class.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        }
    }

    #[test]
    fn attribute_parser_never_panics(input in any_document_string()) {
        let _ = parse_attributes(&input);
    }
}
