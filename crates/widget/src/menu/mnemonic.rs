//! Keyboard mnemonics in menu labels.
//!
//! An `&` in a label marks the next character as the mnemonic: `"&File"`
//! displays as `File` and opens with `Alt+F`. `&&` stands for a literal
//! ampersand.

use std::borrow::Cow;

use crate::core::MenuNode;

/// Parsed mnemonic information from a label.
#[derive(Debug, Clone)]
pub struct ParsedMnemonic<'a> {
    /// The display text with mnemonic marker removed.
    pub display_text: Cow<'a, str>,
    /// The mnemonic character (lowercase for matching).
    pub mnemonic_char: Option<char>,
    /// Index of the underlined character in display_text.
    pub underline_index: Option<usize>,
}

/// Parse a label for mnemonic marker ('&').
///
/// # Examples
/// - `"&File"` → `("File", Some('f'), Some(0))`
/// - `"E&xit"` → `("Exit", Some('x'), Some(1))`
/// - `"Save && Close"` → `("Save & Close", None, None)` (escaped)
/// - `"No mnemonic"` → `("No mnemonic", None, None)`
pub fn parse_mnemonic(label: &str) -> ParsedMnemonic<'_> {
    const MARKER: char = '&';

    if !label.contains(MARKER) {
        return ParsedMnemonic {
            display_text: Cow::Borrowed(label),
            mnemonic_char: None,
            underline_index: None,
        };
    }

    let mut display_text = String::with_capacity(label.len());
    let mut mnemonic = None;
    let mut rest = label;

    while let Some(at) = rest.find(MARKER) {
        display_text.push_str(&rest[..at]);

        let mut marked = rest[at + MARKER.len_utf8()..].chars();

        match marked.next() {
            Some(MARKER) => display_text.push(MARKER),
            Some(c) => {
                // First marker wins.
                if mnemonic.is_none() {
                    mnemonic = Some((display_text.len(), c.to_ascii_lowercase()));
                }

                display_text.push(c);
            }
            None => {}
        }

        rest = marked.as_str();
    }

    display_text.push_str(rest);

    ParsedMnemonic {
        display_text: Cow::Owned(display_text),
        mnemonic_char: mnemonic.map(|(_, c)| c),
        underline_index: mnemonic.map(|(index, _)| index),
    }
}

/// A label split around its underlined shortcut character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Underlined<'a> {
    /// Text before the shortcut character.
    pub before: &'a str,
    /// The shortcut character itself, as written in the label.
    pub shortcut: &'a str,
    /// Text after the shortcut character.
    pub after: &'a str,
}

/// Splits `label` around the first occurrence of `shortcut`, ignoring case.
///
/// Returns `None` if the label does not contain the character.
pub fn split_shortcut(label: &str, shortcut: char) -> Option<Underlined<'_>> {
    let (start, c) = label
        .char_indices()
        .find(|(_, c)| c.to_lowercase().eq(shortcut.to_lowercase()))?;
    let end = start + c.len_utf8();

    Some(Underlined {
        before: &label[..start],
        shortcut: &label[start..end],
        after: &label[end..],
    })
}

/// Returns the shortcut character of a node, lowercased.
///
/// An explicit shortcut wins over a `&` marker in the label.
pub fn shortcut_of<Message>(node: &MenuNode<Message>) -> Option<char> {
    node.shortcut_char()
        .map(|c| c.to_ascii_lowercase())
        .or_else(|| node.label().and_then(|label| parse_mnemonic(label).mnemonic_char))
}
