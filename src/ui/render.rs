use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages::{contact, web_dev, RenderContext};
use crate::ui::theme::BACKGROUND;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.page()).widget(), header);

    let ctx = RenderContext {
        tree: app.scopes(),
        now: app.now(),
        bounds: body,
    };
    match app.page() {
        Page::WebDev => web_dev::render(
            frame,
            &ctx,
            body,
            app.web_dev_scopes(),
            &app.content().web_dev,
        ),
        Page::Contact => contact::render(
            frame,
            &ctx,
            body,
            app.contact_scopes(),
            &app.content().contact,
            app.form(),
        ),
    }

    let notice = app.field_error().map(|err| err.to_string());
    let footer_widget = Footer::new(app.page()).with_notice(notice.as_deref());
    frame.render_widget(footer_widget.widget(footer), footer);
}
