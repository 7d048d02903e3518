use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
    Frame,
};

use carousel_core::{ContentMode, HostSurface, Page, PageIndicator, PageView};

use crate::app::TextCarousel;
use crate::content::TextPage;

pub struct CarouselWidget;

fn tui_color(color: carousel_core::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl CarouselWidget {
    /// Render the carousel's container into `area`
    pub fn render(frame: &mut Frame, area: Rect, carousel: &TextCarousel) {
        let surface = carousel.show();
        let container = surface.container_frame();
        let origin = Rect {
            x: area.x.saturating_add(container.x as u16),
            y: area.y.saturating_add(container.y as u16),
            width: container.width as u16,
            height: container.height as u16,
        }
        .intersection(area);

        let region = surface.tree().scroll_region();
        if !region.hidden {
            let offset = surface.visible_offset();
            for page in &region.pages {
                Self::render_page(frame, origin, region.frame, page, offset);
            }
        }

        Self::render_indicator(frame, origin, carousel.carousel().indicator());
    }

    /// Draw the part of `page` that falls inside the scroll viewport
    fn render_page(
        frame: &mut Frame,
        origin: Rect,
        viewport: carousel_core::Rect,
        page: &PageView<TextPage>,
        offset: f64,
    ) {
        let page_frame = page.frame();
        let left = page_frame.x - offset;
        let right = left + page_frame.width;
        let visible_left = left.max(0.0);
        let visible_right = right.min(viewport.width);
        if visible_right <= visible_left {
            return;
        }

        // Draw the whole page off-screen, then copy the visible columns
        let page_area = Rect::new(
            0,
            0,
            page_frame.width.round() as u16,
            page_frame.height.min(viewport.height).round() as u16,
        );
        let mut page_buf = Buffer::empty(page_area);
        Self::draw_page(page.content(), page.content_mode(), page_area, &mut page_buf);

        let skip = (visible_left - left).round() as u16;
        let columns = (visible_right - visible_left).round() as u16;
        let dst_x = origin.x as f64 + viewport.x + visible_left;
        let dst_y = origin.y as f64 + viewport.y + page_frame.y.max(0.0);
        let (dst_x, dst_y) = (dst_x.round() as u16, dst_y.round() as u16);

        let buf = frame.buffer_mut();
        for dy in 0..page_area.height {
            for dx in 0..columns {
                let (x, y) = (dst_x.saturating_add(dx), dst_y.saturating_add(dy));
                if x >= origin.right() || y >= origin.bottom() {
                    continue;
                }
                if let (Some(src), Some(dst)) = (page_buf.cell((skip + dx, dy)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }

    fn draw_page(page: &TextPage, mode: ContentMode, area: Rect, buf: &mut Buffer) {
        let accent = tui_color(page.accent);
        let block = Block::bordered()
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", page.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let mut lines = Vec::new();
        if let Some(subtitle) = &page.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(accent).add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::default());
        }
        lines.extend(page.body.iter().map(|line| Line::from(line.as_str())));

        // Aspect-fit content is centered both ways
        let alignment = match mode {
            ContentMode::ScaleAspectFit => {
                let inner_height = area.height.saturating_sub(2) as usize;
                let padding = inner_height.saturating_sub(lines.len()) / 2;
                let mut padded = vec![Line::default(); padding];
                padded.append(&mut lines);
                lines = padded;
                Alignment::Center
            }
            ContentMode::ScaleToFill => Alignment::Left,
        };

        Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_indicator(frame: &mut Frame, origin: Rect, indicator: &PageIndicator) {
        let count = indicator.number_of_pages();
        if indicator.is_hidden() || count == 0 {
            return;
        }

        let indicator_frame = indicator.frame();
        let y = origin.y as f64 + indicator_frame.y;
        if y < origin.y as f64 || y >= origin.bottom() as f64 {
            return;
        }
        let width = if indicator_frame.width > 0.0 {
            indicator_frame.width as u16
        } else {
            origin.width
        };
        let area = Rect::new(
            origin.x.saturating_add(indicator_frame.x.max(0.0) as u16),
            y as u16,
            width,
            1,
        )
        .intersection(origin);

        let (dot, gap) = dot_style(indicator.scale());
        let mut spans = Vec::with_capacity(count * 2);
        for page in 0..count {
            if page > 0 {
                spans.push(Span::raw(" ".repeat(gap)));
            }
            let color = if page == indicator.current_page() {
                indicator.selected()
            } else {
                indicator.unselected()
            };
            spans.push(Span::styled(dot, Style::default().fg(tui_color(color))));
        }

        let mut style = Style::default();
        if let Some(background) = indicator.background() {
            style = style.bg(tui_color(background));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Glyph and spacing for the indicator's scale transform
fn dot_style(scale: f64) -> (&'static str, usize) {
    let glyph = if scale < 1.2 {
        "•"
    } else if scale < 1.8 {
        "●"
    } else {
        "⬤"
    };
    (glyph, (scale * 1.5).round() as usize)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use carousel_core::{IndicatorSize, ScrollConfig, ScrollingCarousel};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::surface::TerminalSurface;

    fn carousel(titles: &[&str]) -> TextCarousel {
        let pages = titles
            .iter()
            .map(|title| TextPage::new(*title).line(format!("body of {}", title)).into_page())
            .collect();
        let mut carousel = ScrollingCarousel::with_surface(
            Some(pages),
            carousel_core::Rect::new(0.0, 0.0, 30.0, 8.0),
            TerminalSurface::new(ScrollConfig {
                smooth_enabled: false,
                ..Default::default()
            }),
            2.0,
            true,
            Instant::now(),
        )
        .unwrap();
        carousel.carousel_mut().indicator_mut().offset_down(98);
        carousel
    }

    fn draw(carousel: &TextCarousel) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|frame| CarouselWidget::render(frame, frame.area(), carousel))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    #[test]
    fn test_first_page_and_dots() {
        let carousel = carousel(&["Alpha", "Beta", "Gamma"]);
        let buf = draw(&carousel);

        assert!(row(&buf, 0).contains("Alpha"));
        assert!(row(&buf, 1).contains("body of Alpha"));
        assert!(!row(&buf, 0).contains("Beta"));
        assert_eq!(row(&buf, 6).matches('•').count(), 3);
    }

    #[test]
    fn test_scrolled_to_second_page() {
        let mut carousel = carousel(&["Alpha", "Beta", "Gamma"]);
        carousel.tick();
        let buf = draw(&carousel);

        assert!(row(&buf, 0).contains("Beta"));
        assert!(!row(&buf, 0).contains("Alpha"));
    }

    #[test]
    fn test_half_scrolled_shows_both_pages() {
        let mut carousel = carousel(&["Alpha", "Beta"]);
        carousel
            .carousel_mut()
            .show_mut()
            .set_content_offset(carousel_core::Point::new(15.0, 0.0), false);
        let buf = draw(&carousel);

        let top = row(&buf, 0);
        assert!(top.contains("Beta"));
        assert!(!top.contains("Alpha"));
        // Alpha's right border sits next to Beta's left border
        let middle: Vec<char> = row(&buf, 1).chars().collect();
        assert_eq!(middle[14], '│');
        assert_eq!(middle[15], '│');
    }

    #[test]
    fn test_hidden_indicator_and_region() {
        let mut carousel = carousel(&["Alpha", "Beta"]);
        carousel.carousel_mut().hide_indicator();
        assert!(!row(&draw(&carousel), 6).contains('•'));

        carousel.carousel_mut().hide();
        assert!(!row(&draw(&carousel), 0).contains("Alpha"));
    }

    #[test]
    fn test_dot_style_follows_size() {
        assert_eq!(dot_style(IndicatorSize::Small.scale()), ("•", 2));
        assert_eq!(dot_style(IndicatorSize::Large.scale()), ("●", 2));
        assert_eq!(dot_style(IndicatorSize::Largest.scale()), ("⬤", 3));
    }
}
