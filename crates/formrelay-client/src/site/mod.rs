/// Page-level UI state shared by every page of the site
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use nav::NavState;
pub use reveal::RevealTracker;
pub use scroll::scroll_target;
pub use theme::{InMemoryThemeStore, Theme, ThemeController, ThemeStore};
