//! Interactive storefront in the terminal
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
pub use layout::MOBILE_BREAKPOINT_COLS;

use self::terminal::TerminalGuard;
use crate::state::Session;
use crate::storage::KeyValueStore;

/// Run the interactive TUI until the user quits, returning the session so the
/// caller can report the final state
pub fn run_interactive<S: KeyValueStore>(session: Session<S>) -> Result<Session<S>> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(session);

    app.run(guard.terminal_mut())?;

    drop(guard);
    Ok(app.into_session())
}
