/// Generate a URL-safe section id from a title, the way the host wiki names its
/// section anchors.
///
/// The title is lowercased and every character that is neither alphanumeric nor a
/// namespace separator (`:`, `/`, `;`) or `.` becomes `_`, with runs collapsed into one.
/// Separators and dots are then removed, as are leading digits, `_` and `-`. When
/// nothing remains the id falls back to `section` followed by the digits of the title.
///
/// # Example
///
/// ```
/// use wikibox_parser::section_id;
///
/// assert_eq!(section_id("My Box Title"), "my_box_title");
/// assert_eq!(section_id("<b>bold</b>"), "b_bold_b");
/// assert_eq!(section_id("2024"), "section2024");
/// ```
#[must_use]
pub fn section_id(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            cleaned.push(c);
        } else if matches!(c, ':' | '/' | ';' | '.') {
            cleaned.push(':');
        } else if !cleaned.ends_with('_') {
            cleaned.push('_');
        }
    }
    // Separators are removed after collapsing, so `a / b` keeps two underscores.
    let cleaned = cleaned.trim_matches(['_', ':']).replace(':', "");

    let id = cleaned.trim_start_matches(|c: char| c.is_ascii_digit() || c == '_' || c == '-');
    if id.is_empty() {
        let digits = cleaned
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        format!("section{digits}")
    } else {
        id.to_string()
    }
}
