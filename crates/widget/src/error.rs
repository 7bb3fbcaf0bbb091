use thiserror::Error;

/// An error building a menu widget from its children.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A context menu was given a number of children other than two.
    #[error("a context menu needs exactly 2 children, found {found}")]
    ContextMenuArity {
        /// The number of children given.
        found: usize,
    },

    /// A context menu was given two menus and no trigger.
    #[error("a context menu needs a trigger child")]
    MissingTrigger,

    /// A context menu was given two triggers and no menu.
    #[error("a context menu needs a menu child")]
    MissingMenu,

    /// A child of a menu bar is an item instead of a submenu.
    #[error("menu bar child {index} is not a submenu")]
    NotAMenu {
        /// The position of the child.
        index: usize,
    },
}
