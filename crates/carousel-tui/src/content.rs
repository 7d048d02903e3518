use std::rc::Rc;

use carousel_core::{Color, PageView};

/// Page content drawn by the terminal host
#[derive(Debug, Clone, PartialEq)]
pub struct TextPage {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Vec<String>,
    pub accent: Color,
}

pub type TextPageRef = Rc<PageView<TextPage>>;

impl TextPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body: Vec::new(),
            accent: Color::PURPLE,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// First non-empty line is the title, the rest is body text
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
        let title = lines.next().unwrap_or_default().trim().to_string();
        let mut page = Self::new(title);
        page.body = lines.map(str::to_string).collect();
        page
    }

    pub fn into_page(self) -> TextPageRef {
        PageView::new(self)
    }

    pub fn into_image_page(self) -> TextPageRef {
        PageView::image(self)
    }
}
