use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use carousel_core::AppConfig;
use carousel_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{CarouselWidget, StatusBarWidget},
    App, TextPageRef,
};

use crate::pages::{self, Demo};
use crate::RunArgs;

pub async fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    let pages = prepare(&mut config, &args)?;
    tracing::info!(
        pages = pages.len(),
        duration = config.auto_scroll.duration_secs,
        repeat = config.auto_scroll.should_repeat,
        auto = config.auto_scroll.enabled,
        "Starting carousel"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Carousel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, pages, &config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Carousel exited with error: {:#}", e);
    }
    result
}

/// Fold the command line into the config and pick the pages to show
fn prepare(config: &mut AppConfig, args: &RunArgs) -> Result<Vec<TextPageRef>> {
    let pages = if args.pages.is_empty() {
        let demo = args.demo.unwrap_or(Demo::Onboarding);
        demo.style(&mut config.indicator);
        demo.pages()
    } else {
        pages::load_files(&args.pages)?
    };

    if let Some(duration) = args.duration {
        config.auto_scroll.duration_secs = duration;
    }
    if args.no_repeat {
        config.auto_scroll.should_repeat = false;
    }
    if args.manual {
        config.auto_scroll.enabled = false;
    }
    if let Some(size) = args.size {
        config.indicator.size = size;
    }
    Ok(pages)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    pages: Vec<TextPageRef>,
    config: &AppConfig,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(pages, size.width, size.height, config)
        .context("Failed to build the carousel")?;

    let event_handler = EventHandler::with_animation_fps(
        config.general.tick_rate_ms,
        config.animation.animation_fps,
    );

    loop {
        app.on_tick(Instant::now());

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            CarouselWidget::render(frame, layout[0], &app.carousel);
            StatusBarWidget::render(frame, layout[1], &app);
        })?;

        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        cycles = app.carousel.report_iterations(),
        taps = app.taps,
        "Carousel closed"
    );
    Ok(())
}
