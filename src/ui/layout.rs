use crate::app::AppState;
use crate::constants::{CAPTION_FULLSCREEN, CAPTION_RESET, CAPTION_START};
use crate::types::{InputField, Orientation};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Height of the centered window drawn when fullscreen is off
const WINDOWED_HEIGHT: u16 = 14;

/// Width of the centered window as a percentage of the terminal
const WINDOWED_WIDTH_PERCENT: u16 = 70;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = if app.fullscreen {
        f.area()
    } else {
        // Windowed mode draws inside a centered bordered frame; the frame
        // title doubles as the window title.
        let outer = centered_rect(WINDOWED_WIDTH_PERCENT, WINDOWED_HEIGHT, f.area());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", app.window_title()));
        let inner = block.inner(outer);
        f.render_widget(block, outer);
        inner
    };

    match app.orientation {
        Orientation::Portrait => render_portrait(f, app, area),
        Orientation::Landscape => render_landscape(f, app, area),
    }
}

fn render_portrait(f: &mut Frame, app: &AppState, area: Rect) {
    // Windowed mode carries the title on the frame border instead
    let titlebar_height = if app.fullscreen { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(titlebar_height), // Titlebar
            Constraint::Min(3),                  // Live clock
            Constraint::Length(1), // Countdown readout
            Constraint::Length(1),
            Constraint::Length(3), // Duration inputs
            Constraint::Length(1), // Countdown controls
            Constraint::Length(1), // Orientation / fullscreen toggles
            Constraint::Length(1), // Statusbar
        ])
        .split(area);

    if app.fullscreen {
        render_titlebar(f, app, chunks[0]);
    }
    render_clock(f, app, chunks[1]);
    render_countdown(f, app, chunks[2]);
    render_inputs(f, app, chunks[4]);
    render_controls(f, app, chunks[5]);
    render_toggles(f, app, chunks[6]);
    render_statusbar(f, chunks[7]);
}

fn render_landscape(f: &mut Frame, app: &AppState, area: Rect) {
    let titlebar_height = if app.fullscreen { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(titlebar_height), // Titlebar
            Constraint::Min(0),                  // Body
            Constraint::Length(1),               // Statusbar
        ])
        .split(area);

    if app.fullscreen {
        render_titlebar(f, app, rows[0]);
    }
    render_statusbar(f, rows[2]);

    // Clock pane beside the control pane
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let clock_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(panes[0]);
    render_clock(f, app, clock_rows[0]);
    render_countdown(f, app, clock_rows[1]);

    let control_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(panes[1]);
    render_inputs(f, app, control_rows[1]);
    render_controls(f, app, control_rows[2]);
    render_toggles(f, app, control_rows[3]);
}

fn render_titlebar(f: &mut Frame, app: &AppState, area: Rect) {
    let title = Paragraph::new(app.window_title())
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn render_clock(f: &mut Frame, app: &AppState, area: Rect) {
    // Vertically center the single clock line within its pane
    let pad = area.height.saturating_sub(1) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(pad),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let clock = Paragraph::new(app.clock_text.clone())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    f.render_widget(clock, rows[1]);
}

fn render_countdown(f: &mut Frame, app: &AppState, area: Rect) {
    let style = if app.notice.is_some() {
        Style::default().fg(Color::Red)
    } else if app.countdown.is_running() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let readout = Paragraph::new(app.countdown_text())
        .style(style)
        .alignment(Alignment::Center);

    f.render_widget(readout, area);
}

fn render_inputs(f: &mut Frame, app: &AppState, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (field, rect) in InputField::ALL.into_iter().zip(fields.iter()) {
        let focused = app.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label());

        let text = if focused {
            format!("{}_", app.input(field))
        } else {
            app.input(field).to_string()
        };

        let input = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        f.render_widget(input, *rect);
    }
}

fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        control_span(CAPTION_START, app.start_enabled(), Color::Green),
        Span::raw("  "),
        control_span(app.pause_caption(), app.pause_enabled(), Color::Yellow),
        Span::raw("  "),
        control_span(CAPTION_RESET, true, Color::Red),
    ]);

    let controls = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(controls, area);
}

fn render_toggles(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        toggle_span(
            Orientation::Portrait.caption(),
            app.orientation == Orientation::Portrait,
        ),
        Span::raw("  "),
        toggle_span(
            Orientation::Landscape.caption(),
            app.orientation == Orientation::Landscape,
        ),
        Span::raw("  "),
        toggle_span(CAPTION_FULLSCREEN, app.fullscreen),
    ]);

    let toggles = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(toggles, area);
}

fn render_statusbar(f: &mut Frame, area: Rect) {
    let status = Paragraph::new(
        "Enter 开始 | Space 暂停/继续 | r 重置 | Tab 切换输入 | v/h 竖屏/横屏 | f 全屏 | q 退出",
    )
    .style(Style::default().fg(Color::White).bg(Color::DarkGray))
    .alignment(Alignment::Center);

    f.render_widget(status, area);
}

fn control_span(caption: &str, enabled: bool, color: Color) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[{}]", caption), style)
}

fn toggle_span(caption: &str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("[{}]", caption), style)
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
