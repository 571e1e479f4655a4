use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use argand::persistence::config;
use argand::tui::app::App;
use argand::tui::event::{poll_event, AppEvent};

fn main() -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let config = config::load_config();
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(event) = poll_event(Duration::from_millis(50)) {
            match event {
                AppEvent::Key(key) => {
                    app.handle_key(key);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                AppEvent::Resize(_, _) => {
                    // Terminal will auto-redraw
                }
                AppEvent::Tick => {
                    app.tick();
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
