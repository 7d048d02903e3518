use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use carousel_core::{Color, IndicatorConfig, IndicatorSize};
use carousel_tui::{TextPage, TextPageRef};

/// Built-in page sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Two onboarding screens for an outdoors app
    Onboarding,
    /// Three full-bleed images
    Gallery,
    /// A four-step cookie recipe
    Recipes,
}

impl Demo {
    pub fn pages(self) -> Vec<TextPageRef> {
        match self {
            Demo::Onboarding => vec![
                TextPage::new("Adventure awaits!")
                    .subtitle("Use Parks App to find beautiful outdoor experiences.")
                    .line("[ hiking ]")
                    .into_page(),
                TextPage::new("Find the lake!")
                    .subtitle("First adventurer to the lake will find a free gift ~")
                    .line("[ flowers ]")
                    .into_page(),
            ],
            Demo::Gallery => ["sun.max", "cloud.hail.fill", "aqi.medium"]
                .into_iter()
                .map(|name| {
                    TextPage::new(name)
                        .line(format!("[ {} ]", name))
                        .accent(Color::BLUE)
                        .into_image_page()
                })
                .collect(),
            Demo::Recipes => {
                const STEPS: [(&str, &str); 4] = [
                    (
                        "Step 1 - Gather the ingredients",
                        "We need: butter, white sugar, brown sugar, flour, sea salt and chocolate chips.",
                    ),
                    (
                        "Step 2 - Make the cookie dough",
                        "Use a cooking scoop to roll into small circular portions.",
                    ),
                    (
                        "Step 3 - Freeze the dough",
                        "Flash-freeze on a baking sheet for 30 minutes. Place in the freezer.",
                    ),
                    ("Step 4 - Bake", "Bake at 375 degrees for 8-10 minutes."),
                ];
                STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, (subtitle, step))| {
                        TextPage::new("Deluxe chocolate chip cookies!")
                            .subtitle(*subtitle)
                            .line(*step)
                            .line("")
                            .line(format!("[ cookie-{} ]", index + 1))
                            .accent(Color::ORANGE)
                            .into_page()
                    })
                    .collect()
            }
        }
    }

    /// Indicator look each demo ships with
    pub fn style(self, indicator: &mut IndicatorConfig) {
        let (selected, unselected, size) = match self {
            Demo::Onboarding => (Color::RED, Color::WHITE, IndicatorSize::ExtraLarge),
            Demo::Gallery => (Color::RED, Color::BLACK, IndicatorSize::Large),
            Demo::Recipes => (Color::ORANGE, Color::BLACK, IndicatorSize::Largest),
        };
        indicator.selected_color = selected;
        indicator.unselected_color = unselected;
        indicator.size = size;
    }
}

/// One page per file: the first non-empty line is the title
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<TextPageRef>> {
    if paths.is_empty() {
        bail!("No page files given");
    }

    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read page {}", path.display()))?;
            Ok(TextPage::parse(&text).into_page())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_page_counts() {
        assert_eq!(Demo::Onboarding.pages().len(), 2);
        assert_eq!(Demo::Gallery.pages().len(), 3);
        assert_eq!(Demo::Recipes.pages().len(), 4);
    }

    #[test]
    fn test_gallery_pages_are_images() {
        use carousel_core::Page;
        assert!(Demo::Gallery.pages().iter().all(|page| page.is_image()));
        assert!(!Demo::Recipes.pages()[0].is_image());
    }

    #[test]
    fn test_demo_style() {
        let mut indicator = IndicatorConfig::default();
        Demo::Recipes.style(&mut indicator);
        assert_eq!(indicator.selected_color, Color::ORANGE);
        assert_eq!(indicator.size, IndicatorSize::Largest);
    }

    #[test]
    fn test_load_files() {
        let dir = std::env::temp_dir().join(format!("carousel-pages-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("one.txt");
        std::fs::write(&path, "Hello\nworld").unwrap();

        let pages = load_files(&[path]).unwrap();
        assert_eq!(pages[0].content().title, "Hello");

        assert!(load_files(&[dir.join("missing.txt")]).is_err());
        assert!(load_files(&[]).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
