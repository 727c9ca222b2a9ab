//! TUI rendering
//!
//! - `colors`: palette shared with the flow descriptors
//! - `pages`: page bodies for each route
//! - `relaying`: the relaying FAQ panel
//! - `dialog`: the shell around the visible modal

pub mod colors;
mod dialog;
mod pages;
mod relaying;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::navigation::Route;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.route() {
        Route::Home => pages::render_home(frame, app, chunks[1]),
        Route::Balances => pages::render_balances(frame, app, chunks[1]),
        Route::Transactions => pages::render_transactions(frame, app, chunks[1]),
        Route::Relaying => relaying::render_relaying(frame, app.relaying_focus, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);

    dialog::render_dialog(frame, &app.modals);
}

fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles = Route::ALL
        .iter()
        .map(|route| format!("{} {}", route.index() + 1, route.title()));
    let tabs = Tabs::new(titles)
        .select(app.route().index())
        .style(Style::default().fg(colors::TEXT_DIM))
        .highlight_style(
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!(" safedeck · {} ", app.safe.short_address()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        );
    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.route().path()),
        Style::default()
            .fg(colors::MODAL_BG)
            .bg(colors::SELECTED)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!(" {status} "),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ));
    }

    let hints = if app.modals.is_open() {
        " Esc close · Tab switch page "
    } else if app.route() == Route::Transactions {
        " c confirm · r reject · p replace · n new · q quit "
    } else {
        " Tab/1-4 pages · n new · s send · q quit "
    };
    spans.push(Span::styled(hints, Style::default().fg(colors::TEXT_MUTED)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
