use crate::config::{HEADER_HEIGHT_PX, HEADER_SCROLL_THRESHOLD_PX, MOBILE_LINK_STAGGER_MS, SLIDER_PADDING_PX};

/// Highlight bar under the selected tab button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderGeometry {
    pub width: i32,
    pub left: i32,
}

impl SliderGeometry {
    pub fn from_button(client_width: i32, offset_left: i32) -> Self {
        Self {
            width: (client_width - 2 * SLIDER_PADDING_PX).max(0),
            left: offset_left + SLIDER_PADDING_PX,
        }
    }

    /// Geometry to keep after a re-measure. A button that could not be
    /// measured leaves the slider where it was.
    pub fn remeasure(self, measured: Option<Self>) -> Self {
        measured.unwrap_or(self)
    }

    pub fn style(&self) -> String {
        format!("--slider-width: {}px; --slider-left: {}px;", self.width, self.left)
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}

/// Document offset to scroll to so a section lands just below the fixed header.
pub fn scroll_target(viewport_top: f64, scroll_y: f64) -> f64 {
    viewport_top + scroll_y - HEADER_HEIGHT_PX
}

pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", index * MOBILE_LINK_STAGGER_MS)
}
