//! Portfolio pages.
//!
//! Each page builds its scopes once, under its own root in the shared
//! [`ScopeTree`], and renders every block at the block's effective style.

pub mod contact;
pub mod web_dev;

use std::time::Duration;

use ratatui::layout::Rect;

use crate::motion::{ResolvedStyle, ScopeId, ScopeTree};
use crate::ui::layout::shift_rect;

pub use contact::ContactScopes;
pub use web_dev::WebDevScopes;

/// Below this opacity a block is not drawn at all.
const VISIBLE_THRESHOLD: f32 = 0.02;

/// Read-only view of the animation state for one frame.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub tree: &'a ScopeTree,
    pub now: Duration,
    /// Body area; shifted blocks are clipped to it.
    pub bounds: Rect,
}

impl<'a> RenderContext<'a> {
    pub fn style(&self, id: ScopeId) -> ResolvedStyle {
        self.tree.effective_style(id, self.now)
    }

    /// Where to draw the block of scope `id` laid out at `area`, or `None`
    /// if it is invisible or pushed out of view.
    pub fn place(&self, id: ScopeId, area: Rect) -> Option<(Rect, ResolvedStyle)> {
        let style = self.style(id);
        if style.opacity < VISIBLE_THRESHOLD || area.height == 0 {
            return None;
        }
        let rect = shift_rect(area, style.row_offset(), self.bounds)?;
        Some((rect, style))
    }
}

/// Lines `text` occupies when greedily word-wrapped to `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    wrap_end(text, width).0
}

/// Greedy word wrap of `text` to `width` columns.
///
/// Returns the number of lines and the column just past the last character
/// on the last line. Whitespace runs count at their full width except where
/// a line breaks; words longer than `width` are split.
pub fn wrap_end(text: &str, width: u16) -> (u16, u16) {
    let width = width.max(1) as usize;
    let mut lines = 0usize;
    let mut column = 0usize;
    for paragraph in text.split('\n') {
        lines += 1;
        column = 0;
        let mut gap = 0usize;
        let mut word = 0usize;
        for ch in paragraph.chars().chain(std::iter::once(' ')) {
            if !ch.is_whitespace() {
                word += 1;
                continue;
            }
            if word > 0 {
                if column > 0 && column + gap + word > width {
                    lines += 1;
                    column = 0;
                } else {
                    column += gap;
                }
                column += word;
                while column > width {
                    lines += 1;
                    column -= width;
                }
                gap = 0;
                word = 0;
            }
            gap += 1;
        }
        // The chained sentinel is not part of the text.
        gap -= 1;
        column = (column + gap).min(width);
    }
    (saturate(lines), saturate(column))
}

fn saturate(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
