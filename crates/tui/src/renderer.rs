use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use sortanim_core::renderers::RecordedFrame;
use sortanim_core::views::bars::{BarLayout, render_bars};
use sortanim_protocol::{RenderCommand, ThemeToken};

const MIN_DELAY: Duration = Duration::from_millis(5);
const MAX_DELAY: Duration = Duration::from_millis(2000);

fn theme_to_color(token: &ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Black,
        ThemeToken::Bar => Color::Rgb(177, 186, 177),
        ThemeToken::BarHighlight => Color::Rgb(75, 104, 189),
        ThemeToken::BarSorted => Color::Rgb(26, 173, 28),
    }
}

/// Layout in terminal cells: one column gap between bars while they fit,
/// one row of padding for the pointer.
fn terminal_layout(cols: u16, rows: u16, bars: usize) -> BarLayout {
    let width = f64::from(cols);
    let mut layout = BarLayout {
        width,
        height: f64::from(rows),
        padding: 1.0,
        bar_spacing: 1.0,
    };
    if layout.bar_width(bars) < 1.0 {
        layout.bar_spacing = 0.0;
    }
    layout
}

/// Replay recorded frames until the user quits.
///
/// Space pauses, ←/→ step, +/- change speed, Home/End jump, q quits.
pub fn play(frames: &[RecordedFrame]) -> Result<()> {
    if frames.is_empty() {
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut cursor: usize = 0;
    let mut paused = false;
    let mut delay = Duration::from_millis(60);
    let mut last_step = Instant::now();

    loop {
        let recorded = &frames[cursor];

        terminal.draw(|frame| {
            let area = frame.area();

            // Header
            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " sortanim | frame {} ({}/{}) | {}ms {} | space pause | ←→ step | +/- speed | q quit ",
                    recorded.id,
                    cursor + 1,
                    frames.len(),
                    delay.as_millis(),
                    if paused { "paused" } else { "playing" },
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let block = Block::default()
                .borders(Borders::NONE)
                .style(Style::default().bg(Color::Black));
            frame.render_widget(block, content_area);

            let layout = terminal_layout(
                content_area.width,
                content_area.height,
                recorded.frame.len(),
            );
            let cmds = render_bars(recorded.id, &recorded.frame, &layout);
            let buf = frame.buffer_mut();
            let mut put = |x: f64, y: f64, ch: char, fg: Color| {
                if x < 0.0 || y < 0.0 {
                    return;
                }
                let (col, row) = (x as u16, y as u16);
                if col >= content_area.width || row >= content_area.height {
                    return;
                }
                buf[(content_area.x + col, content_area.y + row)]
                    .set_char(ch)
                    .set_fg(fg)
                    .set_bg(Color::Black);
            };

            for cmd in &cmds {
                match cmd {
                    RenderCommand::DrawRect {
                        rect,
                        color,
                        index: Some(_),
                        ..
                    } => {
                        let fg = theme_to_color(color);
                        let left = rect.x.floor();
                        let right = (rect.x + rect.w).floor().max(left + 1.0);
                        let top = rect.y.round();
                        let bottom = (rect.y + rect.h).round();
                        let mut y = top;
                        while y < bottom {
                            let mut x = left;
                            while x < right {
                                put(x, y, '█', fg);
                                x += 1.0;
                            }
                            y += 1.0;
                        }
                    }
                    RenderCommand::DrawPolygon { points, color } => {
                        // The tip sits above the baseline; mark the cell below it.
                        if let Some(tip) = points.last() {
                            put(tip.x.floor(), layout.baseline(), '▲', theme_to_color(color));
                        }
                    }
                    _ => {}
                }
            }
        })?;

        let timeout = if paused {
            Duration::from_millis(250)
        } else {
            delay.saturating_sub(last_step.elapsed())
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => paused = !paused,
                    KeyCode::Left => {
                        paused = true;
                        cursor = cursor.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        paused = true;
                        cursor = (cursor + 1).min(frames.len() - 1);
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = frames.len() - 1,
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        delay = (delay / 2).max(MIN_DELAY);
                    }
                    KeyCode::Char('-') => {
                        delay = (delay * 2).min(MAX_DELAY);
                    }
                    _ => {}
                }
            }
        } else if !paused && cursor + 1 < frames.len() {
            cursor += 1;
            last_step = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
