//! TUI rendering for the numvault vault room using ratatui.

mod effects;
mod input;
mod theme;
mod view;

pub use effects::BorrowFade;
pub use input::{InputPump, apply_key, handle_events};
pub use theme::{Glyphs, Palette, glyphs, styles};
pub use view::{RoomView, Status};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use numvault_engine::{BorrowPhase, Digit, LevelMode, Room};

/// Width of one place-value column on screen.
const CELL_WIDTH: usize = 4;
/// Operator gutter left of the first column.
const GUTTER: &str = "  ";

/// Main draw function
pub fn draw(frame: &mut Frame, room: &Room, view: &RoomView) {
    let palette = Palette::standard();
    let glyphs = glyphs(view.settings());

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    if room.is_complete() {
        draw_complete(frame, room, frame.area(), &palette, &glyphs);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Vault
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keys
        ])
        .split(frame.area());

    draw_vault(frame, room, view, chunks[0], &palette, &glyphs);
    draw_status(frame, room, view, chunks[1], &palette, &glyphs);
    draw_footer(frame, room, view, chunks[2], &palette, &glyphs);
}

fn cell(value: impl std::fmt::Display) -> String {
    format!("{value:>CELL_WIDTH$}")
}

fn draw_vault(
    frame: &mut Frame,
    room: &Room,
    view: &RoomView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let level = room.level();
    let kind = match level.mode() {
        LevelMode::NumberInput(_) => "Place value",
        LevelMode::VerticalSubtraction(_) => "Vault",
    };
    let title = format!(
        " {kind} {sep} Level {}/{} {sep} {} ",
        room.level_index() + 1,
        room.level_count(),
        level.id(),
        sep = glyphs.sep,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(title, styles::title(palette)));

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match level.mode() {
        LevelMode::VerticalSubtraction(problem) => {
            let original: Vec<u32> = problem.minuend().iter().copied().map(u32::from).collect();
            let live = room.live_minuend().unwrap_or(original.as_slice());
            let fading = view
                .fade()
                .filter(|fade| fade.progress() < 1.0)
                .map(BorrowFade::event);

            if live != original.as_slice() {
                let mut spans = vec![Span::raw(GUTTER)];
                for (&now, &was) in live.iter().zip(&original) {
                    if now == was {
                        spans.push(Span::raw(" ".repeat(CELL_WIDTH)));
                    } else {
                        spans.push(Span::styled(cell(was), styles::struck(palette)));
                    }
                }
                lines.push(Line::from(spans));
            }

            let mut spans = vec![Span::raw(GUTTER)];
            for (column, (&now, &was)) in live.iter().zip(&original).enumerate() {
                let style = if fading.is_some_and(|e| e.from() == column || e.to() == column) {
                    styles::fading(palette)
                } else if now == was {
                    styles::digit(palette)
                } else {
                    styles::regrouped(palette)
                };
                spans.push(Span::styled(cell(now), style));
            }
            lines.push(Line::from(spans));

            let mut spans = vec![Span::styled(
                format!("{} ", glyphs.minus),
                styles::digit(palette),
            )];
            spans.extend(
                problem
                    .subtrahend()
                    .iter()
                    .map(|&d| Span::styled(cell(u8::from(d)), styles::digit(palette))),
            );
            lines.push(Line::from(spans));

            let width = GUTTER.len() + CELL_WIDTH * problem.minuend().len();
            lines.push(Line::from(Span::styled(
                glyphs.rule.repeat(width),
                Style::default().fg(palette.text_muted),
            )));
        }
        LevelMode::NumberInput(task) => {
            lines.push(Line::from(Span::styled(
                format!("{GUTTER}{}", task.instruction()),
                Style::default().fg(palette.text_secondary),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(answer_line(room.answer().digits(), view.selected(), palette));
    lines.push(caret_line(room.answer().len(), view.selected(), palette, glyphs));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn answer_line(digits: &[Digit], selected: usize, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw(GUTTER)];
    for (column, &digit) in digits.iter().enumerate() {
        let value = u8::from(digit);
        if column == selected {
            spans.push(Span::styled(
                cell(format!("[{value}]")),
                styles::selected(palette),
            ));
        } else {
            spans.push(Span::styled(cell(value), styles::digit(palette)));
        }
    }
    Line::from(spans)
}

fn caret_line(columns: usize, selected: usize, palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    let mut text = String::from(GUTTER);
    for column in 0..columns {
        if column == selected {
            text.push_str("  ");
            text.push_str(glyphs.caret);
            text.push(' ');
        } else {
            text.push_str(&" ".repeat(CELL_WIDTH));
        }
    }
    Line::from(Span::styled(text, Style::default().fg(palette.accent)))
}

fn draw_status(
    frame: &mut Frame,
    room: &Room,
    view: &RoomView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (text, style) = match view.status() {
        Some(Status::Passed) => {
            let next = if room.level_index() + 1 == room.level_count() {
                "finish"
            } else {
                "the next level"
            };
            (
                format!("{} Correct! Press n for {next}.", glyphs.pass),
                styles::pass(palette),
            )
        }
        Some(Status::Failed(hint)) => {
            let text = match hint {
                Some(hint) => format!("{} Not yet. {}", glyphs.fail, hint.message()),
                None => format!("{} Not yet.", glyphs.fail),
            };
            (text, styles::fail(palette))
        }
        Some(Status::Notice(text)) => (text.clone(), styles::notice(palette)),
        Some(Status::Complete) | None => {
            if matches!(room.borrow_phase(), Some(BorrowPhase::Transitioning(_))) {
                (
                    "Borrowing...".to_string(),
                    Style::default().fg(palette.text_muted),
                )
            } else {
                (String::new(), Style::default())
            }
        }
    };

    let status = Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(text, style)]));
    frame.render_widget(status, area);
}

fn draw_footer(
    frame: &mut Frame,
    room: &Room,
    view: &RoomView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    // (key, label, enabled)
    let mut keys: Vec<(&str, &str, bool)> = vec![
        (glyphs.arrows_lr, "column", true),
        (glyphs.arrows_ud, "spin", true),
        ("0-9", "digit", true),
    ];
    if matches!(room.level().mode(), LevelMode::VerticalSubtraction(_)) {
        keys.push(("b", "borrow", room.can_borrow_from(view.selected())));
    }
    keys.extend([
        ("Enter", "check", true),
        ("r", "reset", true),
        ("n", "next", room.is_solved()),
        ("q", "quit", true),
    ]);

    let mut spans = vec![Span::raw(" ")];
    for (key, label, enabled) in keys {
        let key_style = if enabled {
            styles::key_highlight(palette)
        } else {
            styles::key_hint(palette)
        };
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::styled(format!(" {label}  "), styles::key_hint(palette)));
    }

    let stats = room.stats();
    let streak = format!("streak {} (best {}) ", stats.streak(), stats.best_streak());
    let streak_width = u16::try_from(streak.len()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(streak_width)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            streak,
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_complete(frame: &mut Frame, room: &Room, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let stats = room.stats();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Every vault is open", glyphs.pass),
            styles::pass(palette),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Solved {} levels in {} checks",
                stats.solved(),
                stats.attempts()
            ),
            Style::default().fg(palette.text_primary),
        )),
        Line::from(Span::styled(
            format!("Best streak {}", stats.best_streak()),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press q to quit",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(" numvault ", styles::title(palette)));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
