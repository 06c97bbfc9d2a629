//! Terminal management
//!
//! Raw mode and the alternate screen are entered once per session and
//! always left again, whether the session ends normally, with an error,
//! or with a panic.

use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, with the cursor hidden
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, Hide)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    Ok(leave_raw_mode_on_error(terminal)?)
}

/// Raw mode must not outlive a failed setup
fn leave_raw_mode_on_error<T>(result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        let _ = disable_raw_mode();
    }
    result
}

/// Leave the alternate screen, disable raw mode, show the cursor
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        original_hook(panic_info);
    }));
}

/// Run `session` inside a prepared terminal and restore it afterwards
///
/// The session's own error wins over a restore error.
pub fn with_terminal<T, F>(session: F) -> Result<T>
where
    F: FnOnce(&mut Tui) -> Result<T>,
{
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = session(&mut terminal);
    let restored = restore_terminal(terminal);
    let value = result?;
    restored?;
    Ok(value)
}
