/// Mobile navigation drawer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    visible: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// `data-visible` on the nav element
    pub fn data_visible(&self) -> &'static str {
        bool_attr(self.visible)
    }

    /// `aria-expanded` on the toggle button; always mirrors `data-visible`
    pub fn aria_expanded(&self) -> &'static str {
        bool_attr(self.visible)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
