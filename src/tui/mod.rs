pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Quiz => match key.code {
            // Quit (answers are already persisted)
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Answer the current question
            KeyCode::Char(c @ '1'..='4') => app.select_option(c as usize - '1' as usize),
            KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),

            // Navigation (clamped at both ends)
            KeyCode::Right | KeyCode::Char('l') => app.next_question(),
            KeyCode::Left | KeyCode::Char('h') => app.prev_question(),

            // Submit anytime
            KeyCode::Char('s') | KeyCode::Enter => app.open_results(),

            // Reveal correct answer on the card
            KeyCode::Char('v') => app.toggle_reveal(),

            // Study panel
            KeyCode::Char('p') | KeyCode::Tab => app.toggle_panel(),

            // Restart
            KeyCode::Char('R') => app.restart(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Results => match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Enter => app.close_overlay(),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => app.scroll_review_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_review_up(),
            KeyCode::Char('R') => app.restart(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.close_overlay();
        }
    }
}
