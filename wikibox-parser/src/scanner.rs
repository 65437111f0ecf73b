//! The state machine turning box tokens into [`Instruction`]s.
//!
//! Every open box has its own [`State`]; nested boxes push a new state on the stack and
//! pop it when their closing tag is found, so a title being read in one box can never
//! leak into another.

use tracing::instrument;

use crate::{
    Document, Instruction, Node, Options,
    lexer::{self, Context, Lookahead, Token, TokenKind},
    style::parse_attributes,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Not inside any box.
    Outside,
    /// Between the `|` of an opening tag and the `>` ending the title.
    InTitle,
    /// Inside the content of a box.
    InContent,
}

/// One scanning run over a single source text.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
    options: &'a Options,
    lookahead: Lookahead,
    levels: Vec<State>,
    nodes: Vec<Node>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, options: &'a Options) -> Self {
        Self {
            input,
            cursor: 0,
            options,
            lookahead: Lookahead::new(input),
            levels: Vec::new(),
            nodes: Vec::new(),
        }
    }

    fn state(&self) -> State {
        self.levels.last().copied().unwrap_or(State::Outside)
    }

    fn context(&self) -> Context {
        let inside_box = self.state() != State::Outside;
        Context {
            inside_box,
            accepts_entry: !inside_box || self.options.nested_boxes,
        }
    }

    #[instrument(level = "trace", skip(self), fields(len = self.input.len()))]
    pub(crate) fn scan(mut self) -> Document {
        while let Some(token) =
            lexer::next_token(self.input, self.cursor, self.context(), &mut self.lookahead)
        {
            self.text_until(token.start);
            self.cursor = token.end;
            self.handle(token);
        }
        self.text_until(self.input.len());
        self.close_unterminated();
        Document { nodes: self.nodes }
    }

    fn handle(&mut self, token: Token<'_>) {
        match (token.kind, self.state()) {
            (TokenKind::Enter { titled }, _) => {
                let style = parse_attributes(token.attributes());
                tracing::trace!(?style, titled, "box opened");
                if titled {
                    self.levels.push(State::InTitle);
                    self.emit(Instruction::TitleOpen(style));
                } else {
                    self.levels.push(State::InContent);
                    self.emit(Instruction::BoxOpen(Some(style)));
                }
            }
            (TokenKind::Continuation, State::InTitle) => {
                if let Some(level) = self.levels.last_mut() {
                    *level = State::InContent;
                }
                self.emit(Instruction::BoxOpen(None));
            }
            (TokenKind::Continuation, State::InContent | State::Outside) => {
                self.emit(Instruction::Data(token.text.to_string()));
            }
            (TokenKind::Exit, _) => {
                let _ = self.levels.pop();
                self.emit(Instruction::BoxClose(token.caption().to_string()));
            }
        }
    }

    /// Report the text between the cursor and `end`, as data inside a box or as host
    /// markup outside.
    fn text_until(&mut self, end: usize) {
        let Some(text) = self.input.get(self.cursor..end).filter(|t| !t.is_empty()) else {
            return;
        };
        let text = text.to_string();
        if self.state() == State::Outside {
            self.nodes.push(Node::Markup(text));
        } else {
            self.emit(Instruction::Data(text));
        }
        self.cursor = end;
    }

    /// An inner box can use up the closing tag the outer one was opened on.
    fn close_unterminated(&mut self) {
        if !self.levels.is_empty() {
            tracing::warn!(
                open = self.levels.len(),
                "unterminated box at end of input, closing it"
            );
        }
        while self.levels.pop().is_some() {
            self.emit(Instruction::BoxClose(String::new()));
        }
    }

    fn emit(&mut self, instruction: Instruction) {
        self.nodes.push(Node::Box(instruction));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Style;

    fn scan(input: &str) -> Vec<Node> {
        Scanner::new(input, &Options::default()).scan().nodes
    }

    fn open() -> Node {
        Node::Box(Instruction::BoxOpen(Some(Style::default())))
    }

    fn data(text: &str) -> Node {
        Node::Box(Instruction::Data(text.to_string()))
    }

    fn close(caption: &str) -> Node {
        Node::Box(Instruction::BoxClose(caption.to_string()))
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn text_without_boxes_is_markup() {
        assert_eq!(scan("a > b"), vec![Node::Markup("a > b".to_string())]);
    }

    #[test]
    fn gt_in_content_is_data() {
        assert_eq!(
            scan("<box>a > b</box>"),
            vec![open(), data("a "), data(">"), data(" b"), close("")]
        );
    }

    #[test]
    fn title_ends_at_first_gt() {
        assert_eq!(
            scan("<box|Title>x > y</box>"),
            vec![
                Node::Box(Instruction::TitleOpen(Style::default())),
                data("Title"),
                Node::Box(Instruction::BoxOpen(None)),
                data("x "),
                data(">"),
                data(" y"),
                close(""),
            ]
        );
    }

    #[test]
    fn exit_inside_title_closes_the_box() {
        assert_eq!(
            scan("<box|a</box> </box>"),
            vec![
                Node::Box(Instruction::TitleOpen(Style::default())),
                data("a"),
                close(""),
                Node::Markup(" </box>".to_string()),
            ]
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn unterminated_boxes_are_closed_at_the_end() {
        assert_eq!(
            scan("<box>a<box>b</box>c"),
            vec![open(), data("a"), open(), data("b"), close(""), data("c"), close("")]
        );
        assert!(logs_contain("unterminated box at end of input"));
    }

    #[test]
    fn every_level_has_its_own_title_state() {
        assert_eq!(
            scan("<box|Outer <box|Inner>i</box> still title>o</box>"),
            vec![
                Node::Box(Instruction::TitleOpen(Style::default())),
                data("Outer "),
                Node::Box(Instruction::TitleOpen(Style::default())),
                data("Inner"),
                Node::Box(Instruction::BoxOpen(None)),
                data("i"),
                close(""),
                data(" still title"),
                Node::Box(Instruction::BoxOpen(None)),
                data("o"),
                close(""),
            ]
        );
    }

    #[rstest]
    #[case::titled("<box|")]
    #[case::untitled("<box>")]
    #[case::attributed("<box a ")]
    #[case::attributed_titled("<box a|")]
    #[tracing_test::traced_test]
    fn many_unterminated_tags_stay_markup(#[case] tag: &str) {
        let input = tag.repeat(40_000);
        assert_eq!(scan(&input), vec![Node::Markup(input.clone())]);
    }

    #[test]
    #[tracing_test::traced_test]
    fn exits_without_a_closing_gt_stay_data() {
        let tail = "</box".repeat(40_000);
        let input = format!("<box><box>x</box>{tail}");
        assert_eq!(
            scan(&input),
            vec![open(), open(), data("x"), close(""), data(&tail), close("")]
        );
    }
}
