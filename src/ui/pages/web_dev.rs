//! Web Development page: heading, platform cards and key highlights.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::MotionVariants;
use crate::content::{Highlight, Platform, WebDevContent};
use crate::motion::{MotionError, ScopeId, ScopeKind, ScopeTree};
use crate::ui::layout::{centered_column, stack};
use crate::ui::theme::{faded_fg, CARD_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY};

use super::{wrapped_height, RenderContext};

const MAX_WIDTH: u16 = 100;
const SECTION_GAP: u16 = 1;
const CARD_GAP: u16 = 2;

#[derive(Debug, Clone)]
pub struct WebDevScopes {
    pub root: ScopeId,
    pub header: ScopeId,
    /// Item wrapper around the card grid.
    pub platforms: ScopeId,
    pub platform_grid: ScopeId,
    pub cards: Vec<ScopeId>,
    /// Item wrapper around the highlights box.
    pub highlights: ScopeId,
    pub highlight_list: ScopeId,
    pub bullets: Vec<ScopeId>,
}

impl WebDevScopes {
    /// ```text
    /// section (stagger 150ms)
    /// ├── header                    item
    /// ├── platforms                 item
    /// │   └── grid (stagger 100ms)
    /// │       └── card × n          item
    /// └── highlights                item
    ///     └── list (stagger 100ms)
    ///         └── bullet × n        item
    /// ```
    pub fn build(
        tree: &mut ScopeTree,
        variants: &MotionVariants,
        content: &WebDevContent,
    ) -> Result<Self, MotionError> {
        let root = tree.add_root(variants.section.clone(), ScopeKind::Container);
        let header = tree.add_child(root, variants.item.clone(), ScopeKind::Leaf)?;

        let platforms = tree.add_child(root, variants.item.clone(), ScopeKind::Container)?;
        let platform_grid =
            tree.add_child(platforms, variants.list.clone(), ScopeKind::Container)?;
        let cards = content
            .platforms
            .iter()
            .map(|_| tree.add_child(platform_grid, variants.item.clone(), ScopeKind::Leaf))
            .collect::<Result<Vec<_>, _>>()?;

        let highlights = tree.add_child(root, variants.item.clone(), ScopeKind::Container)?;
        let highlight_list =
            tree.add_child(highlights, variants.list.clone(), ScopeKind::Container)?;
        let bullets = content
            .highlights
            .iter()
            .map(|_| tree.add_child(highlight_list, variants.item.clone(), ScopeKind::Leaf))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root,
            header,
            platforms,
            platform_grid,
            cards,
            highlights,
            highlight_list,
            bullets,
        })
    }
}

pub fn render(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scopes: &WebDevScopes,
    content: &WebDevContent,
) {
    let column = centered_column(area, MAX_WIDTH);
    let text_width = column.width;

    let header_height = 2 + wrapped_height(&content.intro, text_width);
    let cards_height = content
        .platforms
        .iter()
        .map(card_height)
        .max()
        .unwrap_or(0);
    let highlights_height = highlights_box_height(content, column.width);

    let sections = stack(
        Rect {
            y: column.y + 1,
            height: column.height.saturating_sub(1),
            ..column
        },
        &[header_height, cards_height, highlights_height],
        SECTION_GAP,
    );

    render_header(frame, ctx, sections[0], scopes.header, content);
    render_cards(frame, ctx, sections[1], scopes, &content.platforms);
    render_highlights(frame, ctx, sections[2], scopes, content);
}

fn render_header(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scope: ScopeId,
    content: &WebDevContent,
) {
    let Some((rect, style)) = ctx.place(scope, area) else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("⚔  {}", content.heading),
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

fn card_height(platform: &Platform) -> u16 {
    // Borders, name, handle, stats, blank line, link.
    2 + 1 + 1 + platform.stats.len() as u16 + 1 + 1
}

fn render_cards(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scopes: &WebDevScopes,
    platforms: &[Platform],
) {
    if platforms.is_empty() || area.height == 0 {
        return;
    }
    let constraints = platforms
        .iter()
        .map(|_| Constraint::Ratio(1, platforms.len() as u32));
    let slots = Layout::horizontal(constraints).spacing(CARD_GAP).split(area);

    for ((platform, scope), slot) in platforms.iter().zip(&scopes.cards).zip(slots.iter()) {
        let Some((rect, style)) = ctx.place(*scope, *slot) else {
            continue;
        };
        let opacity = style.opacity;
        let mut lines = vec![
            Line::from(Span::styled(
                platform.name.clone(),
                faded_fg(HEADER_TEXT, opacity).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Handle: ", faded_fg(MUTED_TEXT, opacity)),
                Span::styled(platform.handle.clone(), faded_fg(PRIMARY, opacity)),
            ]),
        ];
        lines.extend(platform.stats.iter().map(|stat| {
            Line::from(vec![
                Span::styled(format!("{}: ", stat.label), faded_fg(MUTED_TEXT, opacity)),
                Span::styled(stat.value.clone(), faded_fg(HEADER_TEXT, opacity)),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("↗ {}", platform.profile_url),
            faded_fg(PRIMARY, opacity).add_modifier(Modifier::UNDERLINED),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(faded_fg(CARD_BORDER, opacity));
        let lines: Vec<Line> = lines.into_iter().map(Line::centered).collect();
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

fn bullet_width(box_width: u16) -> u16 {
    // Borders, padding and the "• " marker.
    box_width.saturating_sub(6)
}

fn bullet_text(highlight: &Highlight) -> String {
    format!("{}{}{}", highlight.text, highlight.link_text, highlight.rest)
}

fn highlights_box_height(content: &WebDevContent, width: u16) -> u16 {
    let bullets: u16 = content
        .highlights
        .iter()
        .map(|h| wrapped_height(&bullet_text(h), bullet_width(width)))
        .sum();
    // Borders, the heading line, a blank line, then the bullets.
    2 + 2 + bullets
}

fn render_highlights(
    frame: &mut Frame<'_>,
    ctx: &RenderContext<'_>,
    area: Rect,
    scopes: &WebDevScopes,
    content: &WebDevContent,
) {
    if let Some((rect, style)) = ctx.place(scopes.highlights, area) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(faded_fg(CARD_BORDER, style.opacity))
            .title(Span::styled(
                format!(" {} ", content.highlights_heading),
                faded_fg(HEADER_TEXT, style.opacity).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(block, rect);
    }

    let list = Rect {
        x: area.x + 2,
        y: area.y + 2,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    };
    let heights: Vec<u16> = content
        .highlights
        .iter()
        .map(|h| wrapped_height(&bullet_text(h), bullet_width(area.width)))
        .collect();
    let rows = stack(list, &heights, 0);

    for ((highlight, scope), row) in content.highlights.iter().zip(&scopes.bullets).zip(rows) {
        let Some((rect, style)) = ctx.place(*scope, row) else {
            continue;
        };
        let opacity = style.opacity;
        let line = Line::from(vec![
            Span::styled("• ", faded_fg(PRIMARY, opacity)),
            Span::styled(highlight.text.clone(), faded_fg(MUTED_TEXT, opacity)),
            Span::styled(
                highlight.link_text.clone(),
                faded_fg(PRIMARY, opacity).add_modifier(Modifier::BOLD),
            ),
            Span::styled(highlight.rest.clone(), faded_fg(MUTED_TEXT, opacity)),
        ]);
        frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantsConfig;
    use crate::content::Portfolio;

    #[test]
    fn scopes_follow_content() {
        let variants = VariantsConfig::default().build().unwrap();
        let content = Portfolio::default().web_dev;
        let mut tree = ScopeTree::new();
        let scopes = WebDevScopes::build(&mut tree, &variants, &content).unwrap();

        assert_eq!(
            tree.children(scopes.root),
            &[scopes.header, scopes.platforms, scopes.highlights]
        );
        assert_eq!(tree.children(scopes.platforms), &[scopes.platform_grid]);
        assert_eq!(scopes.cards.len(), content.platforms.len());
        assert_eq!(scopes.bullets.len(), content.highlights.len());
    }

    #[test]
    fn card_height_counts_stats() {
        let content = Portfolio::default().web_dev;
        assert_eq!(card_height(&content.platforms[0]), 8);
    }
}
