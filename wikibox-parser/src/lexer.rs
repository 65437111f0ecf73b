//! Recognition of the box tags inside a stream of wiki markup.
//!
//! Four opening forms are recognised, tried in this order at a given position:
//!
//! 1. `<box>`
//! 2. `<box` whitespace attributes `>` (no `|` or line break in the attributes)
//! 3. `<box|`
//! 4. `<box` whitespace attributes `|`
//!
//! An opening tag only counts when a closing `</box...>` follows it somewhere in the
//! rest of the text, and the titled forms (3 and 4) additionally need a `>` later on the
//! same line to end the title. Inside a box a bare `>` and the closing tag are tokens as
//! well; outside a box they are ordinary text.

use crate::style::is_space;

const ENTRY: &str = "<box";
const EXIT: &str = "</box";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// An opening tag; `titled` when it ends in `|`.
    Enter { titled: bool },
    /// A bare `>`.
    Continuation,
    /// A closing `</box...>` tag.
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// The matched text.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// The attribute text of an opening tag, with the surrounding whitespace trimmed.
    pub fn attributes(&self) -> &'a str {
        self.text
            .get(ENTRY.len()..self.text.len().saturating_sub(1))
            .unwrap_or_default()
            .trim_matches(is_space)
    }

    /// The caption of a closing tag: whatever follows a leading `|` in `</box|...>`.
    pub fn caption(&self) -> &'a str {
        let inner = self
            .text
            .get(EXIT.len()..self.text.len().saturating_sub(1))
            .unwrap_or_default()
            .trim_matches(is_space);
        inner.strip_prefix('|').unwrap_or_default()
    }
}

/// Which tokens are recognised while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Context {
    /// Inside a box `>` and `</box...>` are tokens.
    pub inside_box: bool,
    /// Whether `<box...>` opens a box at this point.
    pub accepts_entry: bool,
}

/// Where the lookaheads of the opening forms stop, so every candidate tag is checked
/// without rescanning the rest of the text.
///
/// Built once per input. The stop caches assume candidates come in increasing order,
/// which is how the scanner asks for them; an earlier position just searches again.
#[derive(Debug)]
pub(crate) struct Lookahead {
    /// Start of the last `</box` that some `>` follows. A closing tag follows a
    /// position exactly when this is at or after it.
    last_exit: Option<usize>,
    /// The `>` or line break that ends a title.
    title_end: StopCache,
    /// The `>`, `|` or line break that ends the attributes of forms 2 and 4.
    attributes_end: StopCache,
}

impl Lookahead {
    pub(crate) fn new(input: &str) -> Self {
        let last_exit = input
            .rfind('>')
            .and_then(|gt| input.get(..gt))
            .and_then(|head| head.rfind(EXIT));
        Self {
            last_exit,
            title_end: StopCache::new(&['>', '\r', '\n']),
            attributes_end: StopCache::new(&['>', '|', '\r', '\n']),
        }
    }

    /// Whether a closing tag starts anywhere at or after `from`.
    fn exit_follows(&self, from: usize) -> bool {
        self.last_exit.is_some_and(|last| from <= last)
    }

    /// Whether the title starting at `from` ends with a `>` on the same line, followed
    /// somewhere by a closing tag.
    fn title_end_follows(&mut self, input: &str, from: usize) -> bool {
        self.title_end
            .first_from(input, from)
            .filter(|&stop| rest_starts_with(input, stop, ">"))
            .is_some_and(|stop| self.exit_follows(stop + 1))
    }
}

#[derive(Debug)]
struct StopCache {
    stops: &'static [char],
    /// `(searched_from, found)`: nothing in `stops` lies between the two.
    last: Option<(usize, Option<usize>)>,
}

impl StopCache {
    const fn new(stops: &'static [char]) -> Self {
        Self { stops, last: None }
    }

    /// The first stop character at or after `from`.
    fn first_from(&mut self, input: &str, from: usize) -> Option<usize> {
        if let Some((searched_from, found)) = self.last
            && searched_from <= from
            && found.is_none_or(|stop| from <= stop)
        {
            return found;
        }
        let found = input.get(from..)?.find(self.stops).map(|offset| from + offset);
        self.last = Some((from, found));
        found
    }
}

/// Find the leftmost token at or after `from`.
pub(crate) fn next_token<'a>(
    input: &'a str,
    from: usize,
    context: Context,
    lookahead: &mut Lookahead,
) -> Option<Token<'a>> {
    let rest = input.get(from..)?;
    for (offset, c) in rest.match_indices(['<', '>']) {
        let at = from + offset;
        let token = match c {
            ">" if context.inside_box => Some(Token {
                kind: TokenKind::Continuation,
                start: at,
                end: at + 1,
                text: c,
            }),
            "<" if context.inside_box && rest_starts_with(input, at, EXIT) => {
                match_exit(input, at, lookahead)
            }
            "<" if context.accepts_entry && rest_starts_with(input, at, ENTRY) => {
                match_entry(input, at, lookahead)
            }
            _ => None,
        };
        if token.is_some() {
            return token;
        }
    }
    None
}

fn rest_starts_with(input: &str, at: usize, prefix: &str) -> bool {
    input.get(at..).is_some_and(|rest| rest.starts_with(prefix))
}

fn token(input: &str, kind: TokenKind, start: usize, end: usize) -> Option<Token<'_>> {
    Some(Token {
        kind,
        start,
        end,
        text: input.get(start..end)?,
    })
}

/// `</box` followed by anything up to the first `>`, line breaks included.
fn match_exit<'a>(input: &'a str, start: usize, lookahead: &Lookahead) -> Option<Token<'a>> {
    if !lookahead.exit_follows(start) {
        return None;
    }
    let after = start + EXIT.len();
    let close = input.get(after..)?.find('>')?;
    token(input, TokenKind::Exit, start, after + close + 1)
}

fn match_entry<'a>(input: &'a str, start: usize, lookahead: &mut Lookahead) -> Option<Token<'a>> {
    let after = start + ENTRY.len();
    match input.get(after..)?.chars().next()? {
        '>' => {
            let end = after + 1;
            lookahead
                .exit_follows(end)
                .then(|| token(input, TokenKind::Enter { titled: false }, start, end))
                .flatten()
        }
        '|' => {
            let end = after + 1;
            lookahead
                .title_end_follows(input, end)
                .then(|| token(input, TokenKind::Enter { titled: true }, start, end))
                .flatten()
        }
        c if is_space(c) => match_attributed_entry(input, start, after + c.len_utf8(), lookahead),
        _ => None,
    }
}

/// Forms 2 and 4: the attributes run up to the first `>` or `|`, never across a line
/// break.
fn match_attributed_entry<'a>(
    input: &'a str,
    start: usize,
    attributes: usize,
    lookahead: &mut Lookahead,
) -> Option<Token<'a>> {
    let stop = lookahead.attributes_end.first_from(input, attributes)?;
    let end = stop + 1;
    match input.get(stop..)?.chars().next()? {
        '>' => lookahead
            .exit_follows(end)
            .then(|| token(input, TokenKind::Enter { titled: false }, start, end))
            .flatten(),
        '|' => lookahead
            .title_end_follows(input, end)
            .then(|| token(input, TokenKind::Enter { titled: true }, start, end))
            .flatten(),
        _ => None,
    }
}
