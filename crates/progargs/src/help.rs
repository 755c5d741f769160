//! Two-column help layout.

/// Width of the left (flag) column.
pub const DEFAULT_COLUMN: usize = 40;
/// Number of description characters per line.
pub const DEFAULT_WRAP: usize = 40;

/// Layout of rendered help lines.
///
/// The left column holds the flag names and is padded to `column`; the
/// description is cut into chunks of `wrap` characters, each continuation
/// chunk indented by `column` spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpStyle {
    column: usize,
    wrap: usize,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN,
            wrap: DEFAULT_WRAP,
        }
    }
}

impl HelpStyle {
    /// `wrap` is clamped to at least one character.
    pub fn new(column: usize, wrap: usize) -> Self {
        Self {
            column,
            wrap: wrap.max(1),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn wrap(&self) -> usize {
        self.wrap
    }

    /// Lay out `left` and `text` side by side.
    ///
    /// The left column always gets at least one space of padding, so an
    /// over-long left side pushes the first description chunk to the right
    /// instead of touching it. The result has no trailing newline.
    pub fn two_column(&self, left: &str, text: &str) -> String {
        let mut out = String::from(left);
        let pad = self.column.saturating_sub(left.chars().count()).max(1);
        out.extend(std::iter::repeat_n(' ', pad));

        for (idx, chunk) in chunks(text, self.wrap).into_iter().enumerate() {
            if idx > 0 {
                out.push('\n');
                out.extend(std::iter::repeat_n(' ', self.column));
            }
            out.push_str(chunk);
        }
        out
    }
}

/// Split `text` into pieces of `width` characters; the last may be shorter.
fn chunks(text: &str, width: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(end);
        out.push(head);
        rest = tail;
    }
    out
}
