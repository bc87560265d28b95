use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use garden_core::AppConfig;
use garden_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme, ui,
};

pub async fn run(config: Arc<AppConfig>, reduced_motion: bool) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Read once at startup
    let motion = config.motion.preference(reduced_motion);
    info!(reduced = motion.is_reduced(), "starting motion garden");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = if motion.is_reduced() {
        "Motion Garden (Reduced Motion)"
    } else {
        "Motion Garden"
    };
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(title)
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme, config.ui.accent_color.as_deref());

    let mut app = App::new(config.clone(), theme, motion, Instant::now());

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = event_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Cancel every pending timer before the terminal goes away
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    info!("motion garden stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next iteration's tick rate
    let mut needs_fast_update = false;

    loop {
        app.update(Instant::now());

        let now = Instant::now();
        terminal.draw(|frame| ui::draw(frame, app, keymap, now))?;

        // Poll at the animation frame rate while something is moving
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    debug!(?action, "key action");
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                AppEvent::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    app.on_resize();
                }
                AppEvent::FocusLost => app.on_focus_lost(now),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
