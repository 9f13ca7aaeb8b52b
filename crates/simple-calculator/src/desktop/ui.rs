//! Terminal rendering for the desktop shell

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::DesktopApp;
use crate::core::ERROR_DISPLAY;
use crate::keypad::{ButtonKind, Keypad, KeypadButton};

/// Window title
pub const WINDOW_TITLE: &str = " Simple Calculator v1.0 ";

/// Key hints shown under the keypad
pub const KEY_HINTS: &str = "Esc clear · n ± · Enter = · q quit";

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Renders the calculator window to the frame
pub fn render(app: &DesktopApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Splits the window into display, keypad and hint rows
fn layout(frame: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(frame);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(0),    // Keypad
            Constraint::Length(1), // Hints
        ])
        .split(inner);
    [chunks[0], chunks[1], chunks[2]]
}

/// Returns the keypad area for a window of the given size
#[must_use]
pub fn keypad_area(frame: Rect) -> Rect {
    layout(frame)[1]
}

fn cell_size(keypad: &Keypad, area: Rect) -> (u16, u16) {
    let (rows, cols) = keypad.dimensions();
    let rows = u16::try_from(rows).unwrap_or(u16::MAX).max(1);
    let cols = u16::try_from(cols).unwrap_or(u16::MAX).max(1);
    (area.width / cols, area.height / rows)
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if !area.contains((x, y).into()) {
        return None;
    }
    let (btn_width, btn_height) = cell_size(keypad, area);
    if btn_width == 0 || btn_height == 0 {
        return None;
    }
    let col = usize::from((x - area.x) / btn_width);
    let row = usize::from((y - area.y) / btn_height);
    keypad.index_at(row, col)
}

fn button_style(btn: &KeypadButton) -> Style {
    let style = match btn.kind {
        ButtonKind::Operator => Style::default().fg(Color::White).bg(ORANGE),
        ButtonKind::Function => Style::default().fg(Color::Black).bg(Color::Gray),
        ButtonKind::Digit => Style::default().fg(Color::Black).bg(Color::White),
    };
    if btn.pressed {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

/// Calculator window widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a DesktopApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the widget for an app
    #[must_use]
    pub fn new(app: &'a DesktopApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let style = if text == ERROR_DISPLAY {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        let keypad = self.app.keypad();
        let (btn_width, btn_height) = cell_size(keypad, area);
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        for btn in keypad.buttons() {
            let (Ok(row), Ok(col), Ok(span)) = (
                u16::try_from(btn.row),
                u16::try_from(btn.col),
                u16::try_from(btn.span),
            ) else {
                continue;
            };
            // One cell of gutter to the right and below each button
            let rect = Rect {
                x: area.x + col * btn_width,
                y: area.y + row * btn_height,
                width: (span * btn_width).saturating_sub(1).max(1),
                height: btn_height.saturating_sub(1).max(1),
            };
            let style = button_style(btn);
            buf.set_style(rect, style);

            let label_width = u16::try_from(btn.label.chars().count()).unwrap_or(1);
            let label_x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height.saturating_sub(1) / 2;
            buf.set_string(label_x, label_y, btn.label, style);
        }
    }

    fn render_hints(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_dialog(message: &str, frame: Rect, buf: &mut Buffer) {
        let width = frame.width.min(36);
        let height = frame.height.min(7);
        let area = Rect {
            x: frame.x + (frame.width - width) / 2,
            y: frame.y + (frame.height - height) / 2,
            width,
            height,
        };
        Clear.render(area, buf);
        Paragraph::new(vec![
            Line::from(message),
            Line::default(),
            Line::from(Span::styled(
                "[ OK ]",
                Style::default().add_modifier(Modifier::REVERSED),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(WINDOW_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display, keypad, hints] = layout(area);
        self.render_display(display, buf);
        self.render_keypad(keypad, buf);
        Self::render_hints(hints, buf);

        if let Some(message) = self.app.dialog() {
            Self::render_dialog(message, area, buf);
        }
    }
}
