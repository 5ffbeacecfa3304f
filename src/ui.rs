//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It
//! consumes `AlbumCard` projections and app state only, never raw albums.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, View};
use crate::catalog::AlbumCard;
use crate::config::UiSettings;
use crate::form::AlbumForm;

/// Render the controls help text for the active view.
fn controls_text(view: View) -> String {
    let pairs: &[(&str, &str)] = match view {
        View::Browse => &[
            ("j/k", "up/down"),
            ("gg/G", "top/bottom"),
            ("enter", "open card"),
            ("a", "add album"),
            ("/", "find by code"),
            ("s", "sort by duration"),
            ("r", "reload file"),
            ("q", "quit"),
        ],
        View::Form => &[("enter", "confirm field"), ("esc", "cancel")],
        View::Search => &[("enter", "look up"), ("esc", "close")],
        View::Detail(_) => &[("enter/esc", "close card"), ("q", "quit")],
    };

    pairs
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn track_count_text(n: usize) -> String {
    if n == 1 {
        "1 track".to_string()
    } else {
        format!("{} tracks", n)
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// One browse row: code, names, track count and total duration.
fn browse_row(card: &AlbumCard) -> String {
    format!(
        "{:>3}  {} - {}  ({}, {})",
        card.code,
        card.name,
        card.artist,
        track_count_text(card.tracks.len()),
        card.total
    )
}

/// Lines for the album detail card. Tracks longer than the highlight
/// threshold render in green.
fn card_lines(card: &AlbumCard) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("{} - {}", card.name, card.artist),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "Code: {:03}  Cover: {}",
        card.code, card.cover
    )));
    lines.push(Line::from(""));

    if card.tracks.is_empty() {
        lines.push(Line::from("No tracks recorded."));
    } else {
        for (i, track) in card.tracks.iter().enumerate() {
            let text = format!(" {:>2}. {:<36} {:>8}", i + 1, track.name, track.duration);
            if track.highlighted {
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::Green),
                )));
            } else {
                lines.push(Line::from(text));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!("Total duration:   {}", card.total)));
    let longest = match &card.longest {
        Some((name, duration)) => format!("Longest track:    {} ({})", name, duration),
        None => "Longest track:    -".to_string(),
    };
    lines.push(Line::from(longest));
    lines.push(Line::from(format!(
        "Average duration: {} ({:.2}s)",
        card.average, card.average_secs
    )));

    lines
}

/// Lines for the album entry form: progress so far, the current prompt,
/// the input buffer and any inline validation message.
fn form_lines(form: &AlbumForm) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(name) = form.album_name() {
        lines.push(Line::from(Span::styled(
            format!("{} ({} so far)", name, track_count_text(form.track_count())),
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(form.prompt()));
    lines.push(Line::from(format!("> {}", form.buffer())));

    if let Some(err) = form.error() {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    lines
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" milkcrate ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!("Albums: {}", app.catalog.len()));

        match app.sort_order() {
            Some(order) => parts.push(format!("Sort: {}", order.label())),
            None => parts.push("Sort: file order".to_string()),
        }

        if let Some(msg) = app.status() {
            parts.push(msg.to_string());
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .slow_blink()
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list
    let cards = app.cards();
    if cards.is_empty() {
        let empty = Paragraph::new("No albums yet. Press a to add one, or r to load the album file.")
            .block(Block::default().borders(Borders::ALL).title(" albums "));
        frame.render_widget(empty, chunks[2]);
    } else {
        // Center the selected item when possible by creating a visible window.
        let total = cards.len();
        let list_height = chunks[2].height as usize;
        let sel_pos = app.selected.min(total - 1);
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = cards[start..end]
            .iter()
            .map(|card| ListItem::new(browse_row(card)))
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" albums "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(selected_pos_in_visible));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Overlays keep the list visible under them.
    let list_area = chunks[2];
    match app.view() {
        View::Form => {
            if let Some(form) = app.form() {
                let popup_area = centered_rect_sized(56, 9, list_area);
                frame.render_widget(Clear, popup_area);

                let paragraph = Paragraph::new(form_lines(form))
                    .block(
                        Block::default()
                            .padding(Padding {
                                left: 1,
                                right: 0,
                                top: 0,
                                bottom: 0,
                            })
                            .borders(Borders::ALL)
                            .title(" add album (Esc cancels) "),
                    )
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, popup_area);
            }
        }
        View::Search => {
            let popup_area = centered_rect_sized(44, 7, list_area);
            frame.render_widget(Clear, popup_area);

            let mut lines = vec![
                Line::from("Album code:"),
                Line::from(format!("> {}", app.search_buffer())),
            ];
            if let Some(err) = app.search_error() {
                lines.push(Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                )));
            }

            let paragraph = Paragraph::new(lines)
                .block(
                    Block::default()
                        .padding(Padding {
                            left: 1,
                            right: 0,
                            top: 0,
                            bottom: 0,
                        })
                        .borders(Borders::ALL)
                        .title(" find by code (Esc closes) "),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, popup_area);
        }
        View::Detail(_) => {
            if let Some(card) = app.detail_card() {
                let lines = card_lines(&card);
                let height = (lines.len() as u16).saturating_add(2);
                let popup_area = centered_rect_sized(64, height, list_area);
                frame.render_widget(Clear, popup_area);

                let paragraph = Paragraph::new(lines)
                    .block(
                        Block::default()
                            .padding(Padding {
                                left: 1,
                                right: 0,
                                top: 0,
                                bottom: 0,
                            })
                            .borders(Borders::ALL)
                            .title(" album (Enter closes) "),
                    )
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, popup_area);
            }
        }
        View::Browse => {}
    }

    let footer = Paragraph::new(controls_text(app.view()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
