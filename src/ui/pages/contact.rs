//! Contact page: heading, email link and the contact form.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::config::MotionVariants;
use crate::content::ContactContent;
use crate::motion::{MotionError, ScopeId, ScopeKind, ScopeTree};
use crate::ui::form::{render_form, FieldSpec, FormController, FormScopes};
use crate::ui::layout::{centered_column, stack};
use crate::ui::theme::{faded_fg, MUTED_TEXT, PRIMARY};

use super::{wrapped_height, RenderContext};

const MAX_WIDTH: u16 = 64;
const SECTION_GAP: u16 = 1;

#[derive(Debug, Clone)]
pub struct ContactScopes {
    pub root: ScopeId,
    pub header: ScopeId,
    pub email: ScopeId,
    pub form: FormScopes,
}

impl ContactScopes {
    /// ```text
    /// section (stagger 150ms)
    /// ├── header                  item
    /// ├── email                   item
    /// └── form (stagger 100ms)
    ///     ├── status              independent, no stagger slot
    ///     ├── field × n           item
    ///     └── send button         item
    /// ```
    pub fn build(
        tree: &mut ScopeTree,
        variants: &MotionVariants,
        specs: &[FieldSpec],
    ) -> Result<Self, MotionError> {
        let root = tree.add_root(variants.section.clone(), ScopeKind::Container);
        let header = tree.add_child(root, variants.item.clone(), ScopeKind::Leaf)?;
        let email = tree.add_child(root, variants.item.clone(), ScopeKind::Leaf)?;
        let form = FormScopes::build(tree, root, variants, specs)?;
        Ok(Self {
            root,
            header,
            email,
            form,
        })
    }
}

pub fn render(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scopes: &ContactScopes,
    content: &ContactContent,
    controller: &FormController,
) {
    let column = centered_column(area, MAX_WIDTH);
    let header_height = 2 + wrapped_height(&content.intro, column.width);
    let form_height = scopes.form.height(ctx.tree, controller.fields().specs());

    let sections = stack(
        Rect {
            y: column.y + 1,
            height: column.height.saturating_sub(1),
            ..column
        },
        &[header_height, 1, form_height],
        SECTION_GAP,
    );

    if let Some((rect, style)) = ctx.place(scopes.header, sections[0]) {
        let lines = vec![
            Line::from(Span::styled(
                format!("✉  {}", content.heading),
                faded_fg(PRIMARY, style.opacity).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                content.intro.clone(),
                faded_fg(MUTED_TEXT, style.opacity),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rect);
    }

    if let Some((rect, style)) = ctx.place(scopes.email, sections[1]) {
        let line = Line::from(Span::styled(
            format!("✉ {}", content.email),
            faded_fg(PRIMARY, style.opacity).add_modifier(Modifier::UNDERLINED),
        ))
        .centered();
        frame.render_widget(Paragraph::new(line), rect);
    }

    render_form(frame, ctx, sections[2], &scopes.form, controller);
}
