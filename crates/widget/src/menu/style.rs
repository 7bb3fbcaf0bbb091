//! Styling for menu bars and popups.
//!
//! Every element kind has a default [`Appearance`]. Callers supply
//! [`Overrides`], which are merged over the defaults field by field.

use crate::core::Color;

/// The mouse cursor shown over an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// The platform's default arrow.
    #[default]
    Default,
    /// A cursor showing the element cannot be used.
    NotAllowed,
}

/// The appearance of a menu element.
///
/// Unset fields fall through to the renderer's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Appearance {
    /// The background color.
    pub background: Option<Color>,
    /// The text color.
    pub text_color: Option<Color>,
    /// Whether text is drawn in italics.
    pub italic: Option<bool>,
    /// The mouse cursor.
    pub cursor: Option<Cursor>,
    /// The padding [top, right, bottom, left].
    pub padding: Option<[f32; 4]>,
    /// The fixed width.
    pub width: Option<f32>,
    /// The font size.
    pub font_size: Option<f32>,
}

impl Appearance {
    /// Merges `other` over `self`: every field set in `other` wins.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            background: other.background.or(self.background),
            text_color: other.text_color.or(self.text_color),
            italic: other.italic.or(self.italic),
            cursor: other.cursor.or(self.cursor),
            padding: other.padding.or(self.padding),
            width: other.width.or(self.width),
            font_size: other.font_size.or(self.font_size),
        }
    }
}

/// The highlight state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    /// The item is highlighted.
    pub active: bool,
    /// The item cannot be activated.
    pub disabled: bool,
    /// The item is a checked checkbox.
    pub checked: bool,
}

/// Caller-supplied appearance overrides, one per element kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overrides {
    /// The list of a popup.
    pub list: Appearance,
    /// A title of a menu bar.
    pub title: Appearance,
    /// A highlighted title of a menu bar.
    pub title_active: Appearance,
    /// An item.
    pub item: Appearance,
    /// A highlighted item.
    pub active: Appearance,
    /// A disabled item.
    pub disabled: Appearance,
    /// A highlighted, disabled item.
    pub disabled_active: Appearance,
    /// A checked checkbox item.
    pub checked: Appearance,
    /// The icon column of an item.
    pub icon: Appearance,
    /// The label of an item.
    pub label: Appearance,
    /// The secondary text of an item.
    pub info: Appearance,
    /// The arrow of a submenu item.
    pub arrow: Appearance,
}

const HIGHLIGHT: Color = Color::from_rgb8(0xe5, 0xec, 0xff);
const MUTED: Color = Color::from_rgb8(0x80, 0x80, 0x80);
const DISABLED_HIGHLIGHT: Color = Color::from_rgb8(0xee, 0xee, 0xee);

impl Overrides {
    /// Resolves the appearance of a popup list.
    pub fn list(&self) -> Appearance {
        Appearance {
            padding: Some([0.0; 4]),
            ..Appearance::default()
        }
        .merge(self.list)
    }

    /// Resolves the appearance of a menu bar title.
    pub fn title(&self, active: bool) -> Appearance {
        let base = Appearance {
            padding: Some([3.2, 8.0, 3.2, 8.0]),
            cursor: Some(Cursor::Default),
            ..Appearance::default()
        }
        .merge(self.title);

        if active {
            base.merge(Appearance {
                background: Some(HIGHLIGHT),
                ..Appearance::default()
            })
            .merge(self.title_active)
        } else {
            base
        }
    }

    /// Resolves the appearance of an item in the given state.
    pub fn item(&self, status: Status) -> Appearance {
        let mut appearance = Appearance {
            padding: Some([2.0, 5.0, 2.0, 5.0]),
            cursor: Some(Cursor::Default),
            ..Appearance::default()
        };

        let disabled = Appearance {
            text_color: Some(MUTED),
            italic: Some(true),
            cursor: Some(Cursor::NotAllowed),
            ..Appearance::default()
        };

        match (status.active, status.disabled) {
            (true, true) => {
                appearance = appearance.merge(disabled).merge(Appearance {
                    background: Some(DISABLED_HIGHLIGHT),
                    ..Appearance::default()
                });
            }
            (true, false) => {
                appearance = appearance.merge(Appearance {
                    background: Some(HIGHLIGHT),
                    ..Appearance::default()
                });
            }
            (false, true) => appearance = appearance.merge(disabled),
            (false, false) => {}
        }

        appearance = appearance.merge(self.item);

        if status.active {
            appearance = appearance.merge(self.active);
        }

        if status.disabled {
            appearance = appearance.merge(self.disabled);

            if status.active {
                appearance = appearance.merge(self.disabled_active);
            }
        }

        if status.checked {
            appearance = appearance.merge(self.checked);
        }

        appearance
    }

    /// Resolves the appearance of the icon column.
    pub fn icon(&self) -> Appearance {
        Appearance {
            width: Some(16.0),
            ..Appearance::default()
        }
        .merge(self.icon)
    }

    /// Resolves the appearance of an item label.
    pub fn label(&self) -> Appearance {
        self.label
    }

    /// Resolves the appearance of the secondary text.
    pub fn info(&self) -> Appearance {
        Appearance {
            text_color: Some(MUTED),
            ..Appearance::default()
        }
        .merge(self.info)
    }

    /// Resolves the appearance of a submenu arrow.
    pub fn arrow(&self) -> Appearance {
        Appearance {
            font_size: Some(9.0),
            ..Appearance::default()
        }
        .merge(self.arrow)
    }
}
