//! Balance screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::screen::{Screen, ScreenAction};
use crate::application::controllers::{
    BalanceController, Controller, Effect, FetchOutcome, PendingFetch,
};
use crate::application::fetch::FetchRunner;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{BACK_HOME, BALANCE_CARD_HEIGHT, BalanceCard, KeyHint};

/// Key that reveals or hides a balance.
pub const TOGGLE_KEY: KeyCode = KeyCode::F(4);

const HINTS: &[KeyHint] = &[
    KeyHint::new("F4", "Mostrar/ocultar"),
    KeyHint::new("F5", "Atualizar"),
    BACK_HOME,
];

pub struct BalanceScreen {
    controller: BalanceController,
}

impl BalanceScreen {
    /// `toggle_enabled` allows hiding the amount.
    #[must_use]
    pub fn new(toggle_enabled: bool) -> Self {
        Self {
            controller: BalanceController::new(toggle_enabled),
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &BalanceController {
        &self.controller
    }
}

impl Screen for BalanceScreen {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.controller.mount(runner)
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        self.controller.apply(outcome)
    }

    fn handle_key(&mut self, key: KeyEvent, runner: &FetchRunner) -> ScreenAction {
        if key.code == TOGGLE_KEY {
            self.controller.toggle_visibility();
            ScreenAction::None
        } else if EventHandler::is_refresh_event(&key) {
            ScreenAction::Spawn(vec![self.controller.refresh(runner)])
        } else {
            ScreenAction::Ignored
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let [card, _] =
            Layout::vertical([Constraint::Length(BALANCE_CARD_HEIGHT), Constraint::Fill(1)])
                .areas(area);

        let mut widget = BalanceCard::new(self.controller.state(), self.controller.display(), theme);
        if self.controller.toggle_enabled() {
            widget = widget.toggle_hint(if self.controller.is_visible() {
                "F4 para ocultar"
            } else {
                "F4 para mostrar"
            });
        }
        widget.render(card, buf);
    }

    fn key_hints(&self) -> &'static [KeyHint] {
        HINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::signed_in_runner;
    use crate::application::services::HIDDEN_BALANCE;
    use crate::domain::ports::mocks::MockBankApiPort;
    use crossterm::event::KeyModifiers;
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_toggle_reveals_balance() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::new(123_456, 2)));
        let runner = signed_in_runner(api).await;
        let mut screen = BalanceScreen::new(true);

        for fetch in screen.mount(&runner) {
            screen.apply(fetch.await);
        }
        assert_eq!(screen.controller().display().as_deref(), Some(HIDDEN_BALANCE));

        screen.handle_key(key(TOGGLE_KEY), &runner);
        assert_eq!(
            screen.controller().display().as_deref(),
            Some("R$ 1.234,56")
        );
    }

    #[tokio::test]
    async fn test_refresh_spawns_fetch() {
        let runner = signed_in_runner(MockBankApiPort::new()).await;
        let mut screen = BalanceScreen::new(true);

        let action = screen.handle_key(key(KeyCode::F(5)), &runner);
        assert!(matches!(action, ScreenAction::Spawn(fetches) if fetches.len() == 1));
    }
}
