//! Dialog shell for the visible modal
//!
//! The shell only draws when the host has a mounted flow. When the modal is
//! closed nothing is drawn and the flow's state no longer exists.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors;
use crate::modal::{ModalHost, MountedFlow};

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    let percent_x = percent_x.min(100);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn dialog_area(mounted: &MountedFlow, lines: usize, frame_area: Rect) -> Rect {
    // Content lines + 2 for borders, min 7 lines
    let height = u16::try_from(lines + 2).unwrap_or(u16::MAX).max(7);
    centered_rect_absolute(mounted.descriptor().width_percent, height, frame_area)
}

/// Render the dialog for the mounted flow; renders nothing when closed
pub fn render_dialog(frame: &mut Frame<'_>, host: &ModalHost) {
    let frame_area = frame.area();
    let Some((area, descriptor, lines)) = host.with_mounted(|mounted| {
        let lines = mounted.lines();
        (
            dialog_area(mounted, lines.len(), frame_area),
            mounted.descriptor(),
            lines,
        )
    }) else {
        return;
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(descriptor.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(descriptor.accent)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
