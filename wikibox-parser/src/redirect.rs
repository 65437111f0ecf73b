//! Anchor selection after a section edit.
//!
//! When a section whose text starts with a titled box is edited, the page should come
//! back scrolled to that box. The host calls [`before_redirect`] right before it
//! redirects back to the page.

use tracing::instrument;

use crate::{section_id::section_id, style::is_space};

/// The action that led to the redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Save,
    Preview,
    Edit,
    Show,
}

/// The redirect the host is about to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectEvent {
    /// The anchor the browser will be sent to, if any.
    pub fragment: Option<String>,
    pub previous_action: Action,
}

/// The text of a section edit.
#[derive(Clone, Copy, Debug)]
pub struct RedirectContext<'a> {
    /// Page text before the edited section; empty when the whole page was edited.
    pub prefix: &'a str,
    /// The edited section text.
    pub text: &'a str,
}

/// Point the redirect at the box the edited section starts with.
///
/// Nothing changes when the event already carries a fragment, when the previous action
/// was a save, when the whole page was edited, or when the section does not start with a
/// titled box. Returns whether the fragment was set.
#[instrument(level = "debug", skip(context))]
pub fn before_redirect(event: &mut RedirectEvent, context: &RedirectContext<'_>) -> bool {
    if event.fragment.as_deref().is_some_and(|f| !f.is_empty()) {
        return false;
    }
    if event.previous_action == Action::Save || context.prefix.is_empty() {
        return false;
    }
    let Some(title) = leading_box_title(context.text) else {
        return false;
    };
    let fragment = section_id(title);
    tracing::debug!(title, %fragment, "redirecting to box");
    event.fragment = Some(fragment);
    true
}

/// The title of a box opening the text: `<box ...|Title>` after optional whitespace.
///
/// The title runs from a `|` on the first line of the tag up to the next `>` or line
/// break and must not be empty; the first `|` that satisfies this wins.
#[must_use]
pub fn leading_box_title(text: &str) -> Option<&str> {
    let tag = text.trim_start_matches(is_space).strip_prefix("<box")?;
    let line = tag.split('\n').next().unwrap_or_default();
    line.match_indices('|').find_map(|(at, _)| {
        let title = line.get(at + 1..)?;
        let title = title.split('>').next().unwrap_or_default();
        (!title.is_empty()).then_some(title)
    })
}
