//! What a renderer draws for a single item.

use crate::core::MenuNode;
use crate::menu::mnemonic::{self, split_shortcut};
use crate::menu::style::{Appearance, Overrides, Status};

/// The label of an item, split around its shortcut character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    /// Text before the underlined character, or the whole label.
    pub before: String,
    /// The underlined character, if the label contains the shortcut.
    pub underlined: Option<String>,
    /// Text after the underlined character.
    pub after: String,
}

impl Label {
    pub(crate) fn new(text: &str, shortcut: Option<char>) -> Self {
        match shortcut.and_then(|c| split_shortcut(text, c)) {
            Some(split) => Self {
                before: split.before.to_owned(),
                underlined: Some(split.shortcut.to_owned()),
                after: split.after.to_owned(),
            },
            None => Self {
                before: text.to_owned(),
                ..Self::default()
            },
        }
    }

    /// Returns the full display text.
    pub fn text(&self) -> String {
        [
            self.before.as_str(),
            self.underlined.as_deref().unwrap_or_default(),
            self.after.as_str(),
        ]
        .concat()
    }
}

/// The leading icon of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// A checkbox glyph.
    Check(bool),
    /// A named icon.
    Named(String),
    /// Empty space, keeping labels aligned.
    Blank,
}

impl Icon {
    /// Returns the glyph of a checkbox icon.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Icon::Check(true) => Some('☑'),
            Icon::Check(false) => Some('☐'),
            Icon::Named(_) | Icon::Blank => None,
        }
    }
}

/// The arrow drawn after the label of a submenu item.
pub const ARROW: char = '▶';

/// Everything a renderer needs to draw one item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemView {
    /// A separator line.
    Separator,
    /// A regular, checkbox or submenu item.
    Entry {
        /// The leading icon.
        icon: Icon,
        /// The label.
        label: Label,
        /// The secondary text.
        info: Option<String>,
        /// Whether a submenu arrow follows the label.
        arrow: bool,
        /// The resolved appearance of the whole row.
        appearance: Appearance,
        /// The resolved appearance of each column of the row.
        columns: Columns,
    },
}

/// The resolved appearance of the columns of an item row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns {
    /// The icon column.
    pub icon: Appearance,
    /// The label.
    pub label: Appearance,
    /// The secondary text.
    pub info: Appearance,
    /// The submenu arrow.
    pub arrow: Appearance,
}

impl Columns {
    fn new(overrides: &Overrides) -> Self {
        Self {
            icon: overrides.icon(),
            label: overrides.label(),
            info: overrides.info(),
            arrow: overrides.arrow(),
        }
    }
}

impl ItemView {
    /// Describes `node` in its current state.
    pub fn new<Message>(node: &MenuNode<Message>, active: bool, overrides: &Overrides) -> Self {
        let Some(raw) = node.label() else {
            return ItemView::Separator;
        };

        let parsed = mnemonic::parse_mnemonic(raw);
        let shortcut = node.shortcut_char().or(parsed.mnemonic_char);

        let icon = if node.is_checkable() {
            Icon::Check(node.is_checked())
        } else {
            node.icon_name()
                .map_or(Icon::Blank, |name| Icon::Named(name.to_owned()))
        };

        ItemView::Entry {
            icon,
            label: Label::new(&parsed.display_text, shortcut),
            info: node.info_text().map(str::to_owned),
            arrow: node.is_submenu(),
            appearance: overrides.item(Status {
                active,
                disabled: !node.is_enabled(),
                checked: node.is_checked(),
            }),
            columns: Columns::new(overrides),
        }
    }
}

/// What a renderer draws for a menu bar title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    /// The label.
    pub label: Label,
    /// The resolved appearance of the title.
    pub appearance: Appearance,
}

impl TitleView {
    /// Describes the title of a top-level `menu`.
    pub fn new<Message>(menu: &MenuNode<Message>, active: bool, overrides: &Overrides) -> Self {
        let parsed = mnemonic::parse_mnemonic(menu.label().unwrap_or_default());

        Self {
            label: Label::new(
                &parsed.display_text,
                menu.shortcut_char().or(parsed.mnemonic_char),
            ),
            appearance: overrides.title(active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_underlines_shortcut() {
        let node = MenuNode::<()>::item("Save As").shortcut('a');

        let ItemView::Entry { label, .. } = ItemView::new(&node, false, &Overrides::default())
        else {
            panic!("expected an entry");
        };

        assert_eq!(label.before, "S");
        assert_eq!(label.underlined.as_deref(), Some("a"));
        assert_eq!(label.text(), "Save As");
    }

    #[test]
    fn test_mnemonic_marker_is_stripped() {
        let node = MenuNode::<()>::item("E&xit");

        let ItemView::Entry { label, .. } = ItemView::new(&node, false, &Overrides::default())
        else {
            panic!("expected an entry");
        };

        assert_eq!(label.before, "E");
        assert_eq!(label.underlined.as_deref(), Some("x"));
        assert_eq!(label.after, "it");
    }

    #[test]
    fn test_check_item_and_submenu_decorations() {
        let overrides = Overrides::default();

        let check = ItemView::new(&MenuNode::<()>::check_item("Wrap", true), false, &overrides);
        let submenu = ItemView::new(
            &MenuNode::<()>::submenu("More", vec![]),
            true,
            &overrides,
        );

        assert!(matches!(check, ItemView::Entry { icon: Icon::Check(true), arrow: false, .. }));
        assert!(matches!(submenu, ItemView::Entry { icon: Icon::Blank, arrow: true, .. }));
        assert_eq!(Icon::Check(true).glyph(), Some('☑'));
    }

    #[test]
    fn test_title_view_highlight() {
        let menu = MenuNode::<()>::submenu("&File", vec![]);
        let overrides = Overrides::default();

        let idle = TitleView::new(&menu, false, &overrides);
        let active = TitleView::new(&menu, true, &overrides);

        assert_eq!(idle.label.text(), "File");
        assert_eq!(idle.label.underlined.as_deref(), Some("F"));
        assert_eq!(idle.appearance.background, None);
        assert!(active.appearance.background.is_some());
    }

    #[test]
    fn test_column_overrides_reach_the_view() {
        let overrides = Overrides {
            info: Appearance {
                italic: Some(true),
                ..Appearance::default()
            },
            arrow: Appearance {
                font_size: Some(12.0),
                ..Appearance::default()
            },
            ..Overrides::default()
        };

        let node = MenuNode::<()>::item("Print").info("Ctrl+P");

        let ItemView::Entry { columns, info, .. } = ItemView::new(&node, false, &overrides) else {
            panic!("expected an entry");
        };

        assert_eq!(info.as_deref(), Some("Ctrl+P"));
        assert_eq!(columns.info.italic, Some(true));
        assert_eq!(columns.info.text_color, Overrides::default().info().text_color);
        assert_eq!(columns.arrow.font_size, Some(12.0));
        assert_eq!(columns.icon, Overrides::default().icon());
    }

    #[test]
    fn test_separator_view() {
        let view = ItemView::new(&MenuNode::<()>::separator(), false, &Overrides::default());

        assert_eq!(view, ItemView::Separator);
    }
}
