//! Common surface of every terminal screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::application::controllers::{Effect, FetchOutcome, PendingFetch};
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::application::notice::Notice;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::KeyHint;

/// What the app must do after a screen handled a key.
pub enum ScreenAction {
    /// Key handled, nothing else to do.
    None,
    /// Key means nothing to the screen; global bindings apply.
    Ignored,
    Navigate(Route),
    /// Requests to spawn on behalf of the screen.
    Spawn(Vec<PendingFetch>),
    Notify(Notice),
    Quit,
}

impl ScreenAction {
    /// Maps a form submission to the action the app performs.
    #[must_use]
    pub fn from_submission(result: Result<Option<PendingFetch>, Notice>) -> Self {
        match result {
            Ok(Some(fetch)) => Self::Spawn(vec![fetch]),
            Ok(None) => Self::None,
            Err(notice) => Self::Notify(notice),
        }
    }
}

/// A screen wraps one controller and draws its state.
///
/// Screens never spawn or await. Requests go back to the app as
/// [`PendingFetch`] values and their outcomes come in through [`Screen::apply`].
pub trait Screen: Send {
    /// Requests to issue when the screen appears.
    fn mount(&mut self, _runner: &FetchRunner) -> Vec<PendingFetch> {
        Vec::new()
    }

    /// Applies a completed request to the underlying controller.
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        debug!(?outcome, "Screen has no controller for outcome");
        Effect::None
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Hints shown in the footer.
    fn key_hints(&self) -> &'static [KeyHint];
}
