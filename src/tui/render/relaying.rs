//! Relaying FAQ panel ("How it works")
//!
//! Static content. The Back and Next buttons can be focused but do nothing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::colors;
use crate::app::RelayingButton;

const FAQ: [(&str, &str); 3] = [
    ("Which networks are supported", "Gnosis Chain"),
    (
        "Do I have to pay for the service?",
        "Our partner Gnosis Chain will temporarily sponsor your transactions as the first test \
         version. In the next iteration, a fee will be charged for the service.\n\nYou can still \
         choose to execute with your connected wallet/owner keys if you don't want to use the \
         relaying service.",
    ),
    (
        "How often can I relay?",
        "In the pilot phase we pay your transaction fees until your transaction limit of five \
         transactions per hour is reached. After that threshold is reached, if you intend to \
         transact on the chain you need to use a connected owner key or wait until the next one \
         hour window opens up for you.",
    ),
];

fn button(label: &'static str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(colors::MODAL_BG)
            .bg(colors::SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::SELECTED)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Render the FAQ with the given button focused
pub fn render_relaying(frame: &mut Frame<'_>, focus: RelayingButton, area: Rect) {
    let block = Block::default()
        .title(" How it works ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (question, answer) in FAQ {
        lines.push(Line::from(Span::styled(
            question,
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(answer.split('\n').map(|paragraph| {
            Line::from(Span::styled(
                paragraph,
                Style::default().fg(colors::TEXT_DIM),
            ))
        }));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    frame.render_widget(
        Paragraph::new(Line::from(button("Back", focus == RelayingButton::Back))),
        buttons[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(button("Next", focus == RelayingButton::Next)))
            .alignment(ratatui::layout::Alignment::Right),
        buttons[1],
    );
}
