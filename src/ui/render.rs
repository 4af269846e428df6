use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{examples_widget, Header};
use crate::ui::panels::{render_filters, render_map, render_results};
use crate::ui::session::MobileTab;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let Some(layout) = app.layout() else {
        return;
    };
    let view = app.view();
    let session = app.session();
    let focused_panel = (!app.is_input_focused()).then(|| app.focused_panel());

    let header = Header {
        query_text: app.query_text(),
        focused: app.is_input_focused(),
        loading: session.loading(),
        structured: session.query().is_some_and(|q| q.is_structured()),
        animation_tick: app.animation_tick(),
    };
    frame.render_widget(header.widget(), layout.header);

    if let (Some(banner), Some(error)) = (layout.banner, session.error()) {
        let widget = Paragraph::new(Span::styled(
            format!(" ⚠ {}", error),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(widget, banner);
    }

    if let Some(area) = layout.filters {
        let focused = focused_panel == Some(MobileTab::Filters);
        render_filters(frame, area, &view, app.radius(), focused);
    }
    if let Some(area) = layout.results {
        let focused = focused_panel == Some(MobileTab::Results);
        render_results(frame, area, &view, app.cursor(), session.loading(), focused);
    }
    if let Some(area) = layout.map {
        let focused = focused_panel == Some(MobileTab::Map);
        render_map(frame, area, &view, focused);
    }

    let footer = Footer {
        tabs: app.is_narrow().then(|| (session.mobile_tab(), view.total)),
        status: app.status_message(),
    };
    frame.render_widget(footer.widget(layout.footer), layout.footer);

    if let Some(dropdown) = layout.dropdown {
        frame.render_widget(Clear, dropdown);
        frame.render_widget(
            examples_widget(app.examples(), app.suggestions().highlighted()),
            dropdown,
        );
    }

    if app.is_input_focused() && layout.search_input.width > 0 {
        let offset = header
            .cursor_offset()
            .min(layout.search_input.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(
            layout.search_input.x + offset,
            layout.search_input.y,
        ));
    }
}
