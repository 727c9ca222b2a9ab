//! Page bodies: Safe overview, balances and the transaction queue

use chrono::Utc;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::colors;
use crate::app::App;
use crate::wallet::short_address;

fn page_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(colors::TEXT_DIM)),
        Span::styled(value, Style::default().fg(colors::TEXT_PRIMARY)),
    ])
}

/// Safe overview
pub fn render_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let safe = &app.safe;
    let mut lines = vec![
        field("Safe", safe.address.clone()),
        field("Network", safe.chain.clone()),
        field(
            "Threshold",
            format!("{} of {} owners", safe.threshold, safe.owners.len()),
        ),
        field("Nonce", safe.nonce.to_string()),
        field("Queued", safe.queue.len().to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Owners",
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(safe.owners.iter().map(|owner| {
        Line::from(Span::styled(
            format!("  {owner}"),
            Style::default().fg(colors::TEXT_PRIMARY),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n new transaction  s send tokens",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).block(page_block(" Home ")), area);
}

/// Token balances
pub fn render_balances(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .safe
        .balances
        .iter()
        .enumerate()
        .map(|(index, balance)| {
            ListItem::new(Line::from(Span::styled(
                format!("{:<8} {:>12}", balance.symbol, balance.amount),
                row_style(index == app.selection.balance),
            )))
        })
        .collect();

    let title = format!(" Assets ({}) · s send ", items.len());
    frame.render_widget(List::new(items).block(page_block(&title)), area);
}

/// Transaction queue
pub fn render_transactions(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let now = Utc::now();
    let threshold = app.safe.threshold;
    let items: Vec<ListItem<'_>> = app
        .safe
        .queue
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            let signers_color = if tx.confirmations >= threshold {
                colors::ACCENT_POSITIVE
            } else {
                colors::MODAL_BORDER_WARNING
            };
            let style = row_style(index == app.selection.queued);
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<4}", tx.nonce), style),
                Span::styled(
                    format!("Send {} {} to {}  ", tx.value, tx.token, short_address(&tx.to)),
                    style,
                ),
                Span::styled(
                    format!("{}/{threshold}", tx.confirmations),
                    style.fg(signers_color),
                ),
                Span::styled(
                    format!("  {}", tx.age(now)),
                    Style::default().fg(colors::TEXT_MUTED),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No queued transactions",
            Style::default().fg(colors::TEXT_DIM),
        )))
        .block(page_block(" Queue "));
        frame.render_widget(empty, area);
        return;
    }

    let title = format!(" Queue ({}) · c confirm  r reject  p replace ", items.len());
    frame.render_widget(List::new(items).block(page_block(&title)), area);
}
