//! Rendering of the contact form and its status message.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::MotionVariants;
use crate::motion::{MotionError, ScopeId, ScopeKind, ScopeTree};
use crate::ui::layout::stack;
use crate::ui::pages::{wrap_end, RenderContext};
use crate::ui::theme::{
    fade, faded_fg, ACTIVE_HIGHLIGHT, CARD_BORDER, HEADER_TEXT, PLACEHOLDER, PRIMARY, STATUS_ERROR,
    STATUS_INFO, STATUS_OK,
};

use super::controller::FormController;
use super::fields::FieldSpec;
use super::state::SubmissionStatus;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

const SINGLE_LINE_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 6;
const STATUS_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const ROW_GAP: u16 = 1;

/// Scopes of the form: a staggered container whose items are the inputs and
/// the send button, plus the independently mounted status message.
#[derive(Debug, Clone)]
pub struct FormScopes {
    pub form: ScopeId,
    pub status: ScopeId,
    pub fields: Vec<ScopeId>,
    pub button: ScopeId,
}

impl FormScopes {
    pub fn build(
        tree: &mut ScopeTree,
        parent: ScopeId,
        variants: &MotionVariants,
        specs: &[FieldSpec],
    ) -> Result<Self, MotionError> {
        let form = tree.add_child(parent, variants.list.clone(), ScopeKind::Container)?;
        let status = tree.add_independent(form, variants.status.clone(), ScopeKind::Leaf)?;
        let fields = specs
            .iter()
            .map(|_| tree.add_child(form, variants.item.clone(), ScopeKind::Leaf))
            .collect::<Result<Vec<_>, _>>()?;
        let button = tree.add_child(form, variants.item.clone(), ScopeKind::Leaf)?;
        Ok(Self {
            form,
            status,
            fields,
            button,
        })
    }

    /// Rows the form needs, borders included.
    pub fn height(&self, tree: &ScopeTree, specs: &[FieldSpec]) -> u16 {
        let heights = self.row_heights(tree, specs);
        let rows: u16 = heights.iter().sum();
        let gaps = ROW_GAP * heights.len().saturating_sub(1) as u16;
        rows + gaps + 2
    }

    fn row_heights(&self, tree: &ScopeTree, specs: &[FieldSpec]) -> Vec<u16> {
        let mut heights = Vec::with_capacity(specs.len() + 2);
        if tree.is_mounted(self.status) {
            heights.push(STATUS_HEIGHT);
        }
        heights.extend(specs.iter().map(|spec| {
            if spec.multiline {
                MULTILINE_HEIGHT
            } else {
                SINGLE_LINE_HEIGHT
            }
        }));
        heights.push(BUTTON_HEIGHT);
        heights
    }
}

pub fn render_form(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scopes: &FormScopes,
    controller: &FormController,
) {
    let specs = controller.fields().specs();

    if let Some((rect, style)) = ctx.place(scopes.form, area) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(faded_fg(CARD_BORDER, style.opacity));
        frame.render_widget(block, rect);
    }

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let rows = stack(inner, &scopes.row_heights(ctx.tree, specs), ROW_GAP);
    let mut rows = rows.into_iter();

    if ctx.tree.is_mounted(scopes.status) {
        if let Some(row) = rows.next() {
            render_status(frame, ctx, row, scopes.status, controller);
        }
    }

    let busy = controller.state().is_busy();
    let focused = controller.fields().focused();
    for (index, (spec, scope)) in specs.iter().zip(&scopes.fields).enumerate() {
        let Some(row) = rows.next() else {
            break;
        };
        let value = controller.fields().value(&spec.name).unwrap_or_default();
        let input = FieldView {
            spec,
            value,
            focused: index == focused && !busy,
            disabled: busy,
        };
        input.render(frame, ctx, *scope, row);
    }

    if let Some(row) = rows.next() {
        render_button(
            frame,
            ctx,
            row,
            scopes.button,
            busy,
            controller.fields().button_focused(),
        );
    }
}

fn spinner_frame(now: Duration) -> &'static str {
    SPINNER[(now.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER.len()]
}

fn render_status(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scope: ScopeId,
    controller: &FormController,
) {
    let Some((rect, style)) = ctx.place(scope, area) else {
        return;
    };
    let state = controller.state();
    let (color, icon) = match state.status {
        SubmissionStatus::Loading => (STATUS_INFO, spinner_frame(ctx.now)),
        SubmissionStatus::Success => (STATUS_OK, "✓"),
        SubmissionStatus::Error => (STATUS_ERROR, "✗"),
        // Unmounted scopes are never placed, so idle does not reach here.
        SubmissionStatus::Idle => return,
    };

    let text_style = faded_fg(color, style.opacity).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), text_style),
        Span::styled(state.message.clone(), text_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(faded_fg(color, style.opacity * 0.6));
    frame.render_widget(Paragraph::new(line).block(block), rect);
}

struct FieldView<'a> {
    spec: &'a FieldSpec,
    value: &'a str,
    focused: bool,
    disabled: bool,
}

impl FieldView<'_> {
    fn render(&self, frame: &mut Frame<'_>, ctx: &RenderContext<'_>, scope: ScopeId, area: Rect) {
        let Some((rect, style)) = ctx.place(scope, area) else {
            return;
        };
        let opacity = if self.disabled {
            style.opacity * 0.5
        } else {
            style.opacity
        };
        let border = if self.focused { PRIMARY } else { CARD_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(faded_fg(border, opacity));
        let inner = block.inner(rect);

        let paragraph = if self.value.is_empty() {
            Paragraph::new(Span::styled(
                self.spec.placeholder.clone(),
                faded_fg(PLACEHOLDER, opacity),
            ))
        } else if self.spec.multiline {
            Paragraph::new(self.value.to_string())
                .style(faded_fg(HEADER_TEXT, opacity))
                .wrap(Wrap { trim: false })
        } else {
            Paragraph::new(visible_tail(self.value, inner.width.saturating_sub(1)))
                .style(faded_fg(HEADER_TEXT, opacity))
        };
        frame.render_widget(paragraph.block(block), rect);

        // Only show the caret once the field has settled into place.
        if self.focused && style.opacity >= 0.99 && inner.width > 0 && inner.height > 0 {
            let (column, line) = caret(self.value, self.spec.multiline, inner.width);
            let x = inner.x + column.min(inner.width.saturating_sub(1));
            let y = inner.y + line.min(inner.height.saturating_sub(1));
            frame.set_cursor_position((x, y));
        }
    }
}

fn render_button(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scope: ScopeId,
    busy: bool,
    focused: bool,
) {
    let Some((rect, style)) = ctx.place(scope, area) else {
        return;
    };
    let label = if busy {
        format!("{} Sending...", spinner_frame(ctx.now))
    } else {
        "Send Message ➤".to_string()
    };
    let opacity = if busy {
        style.opacity * 0.6
    } else {
        style.opacity
    };
    let mut text_style = faded_fg(PRIMARY, opacity).add_modifier(Modifier::BOLD);
    if focused && !busy {
        text_style = text_style.bg(fade(ACTIVE_HIGHLIGHT, opacity));
    }
    let border = if focused && !busy { PRIMARY } else { CARD_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(faded_fg(border, opacity));
    let paragraph = Paragraph::new(Line::from(Span::styled(label, text_style)).centered()).block(block);
    frame.render_widget(paragraph, rect);
}

/// Tail of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: u16) -> String {
    let count = value.chars().count();
    let skip = count.saturating_sub(width as usize);
    value.chars().skip(skip).collect()
}

/// Caret position (column, line) after the last character, following the
/// same word wrap the multiline paragraph uses.
fn caret(value: &str, multiline: bool, width: u16) -> (u16, u16) {
    if !multiline {
        let count = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        return (count.min(width.saturating_sub(1)), 0);
    }
    let (lines, column) = wrap_end(value, width);
    (column, lines.saturating_sub(1))
}
