use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const BAR_FG: Color = Color::Rgb(0xd4, 0xbe, 0x98);
const BAR_BG: Color = Color::Rgb(0x45, 0x40, 0x3d);
const HINT_FG: Color = Color::Rgb(0x92, 0x83, 0x74);

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let carousel = &app.carousel;
        let mode = if carousel.is_running() {
            format!("AUTO {:.1}s", carousel.duration().as_secs_f64())
        } else {
            "PAUSED".to_string()
        };

        let status_text = match &app.status_message {
            Some(message) => format!(" {} | {}", mode, message),
            None => format!(
                " {} | Page {}/{} | Cycles {}",
                mode,
                carousel.carousel().selected_index() + 1,
                carousel.number_of_pages(),
                carousel.report_iterations(),
            ),
        };

        let help_hint = " q:quit h/l:page enter:tap space:pause +/-:speed s:shuffle ";
        let padding = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(BAR_FG)
                    .bg(BAR_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(BAR_BG)),
            Span::styled(help_hint, Style::default().fg(HINT_FG).bg(BAR_BG)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
