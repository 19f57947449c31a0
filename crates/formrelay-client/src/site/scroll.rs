/// Scroll target for in-page jumps
use crate::constants::STICKY_HEADER_OFFSET;

/// Top offset to scroll to so the section clears the sticky header
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - STICKY_HEADER_OFFSET).max(0.0)
}
