//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::application::controllers::{Effect, FetchOutcome, PendingFetch};
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::application::notice::Notice;
use crate::application::use_cases::ResolveSessionUseCase;
use crate::domain::entities::Session;
use crate::domain::errors::SESSION_EXPIRED_MESSAGE;
use crate::domain::ports::SessionStoragePort;
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    AccountsScreen, BalanceScreen, HomeScreen, LoginScreen, ProfileEditScreen, ProfileScreen,
    RegisterScreen, Screen, ScreenAction, StatementScreen, SummaryScreen, TransferDetailScreen,
    TransferScreen, TransfersScreen, WelcomeScreen,
};
use crate::presentation::widgets::{
    AlertPopup, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, HeaderMenu,
    HeaderMenuAction, HeaderMenuState, MENU_KEY,
};

const APP_NAME: &str = "MockBank";

#[derive(Debug)]
enum Action {
    /// A spawned request finished for the screen mounted as `generation`.
    Fetched {
        generation: u64,
        outcome: FetchOutcome,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    runner: FetchRunner,
    resolve_session_use_case: ResolveSessionUseCase,
    ui: UiConfig,
    theme: Theme,
    route: Route,
    screen: Box<dyn Screen>,
    /// Bumped on every navigation; results tagged with an older value are dropped.
    generation: u64,
    tasks: Vec<JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    session_rx: watch::Receiver<Session>,
    alert: Option<Notice>,
    menu: HeaderMenuState,
    footer_info: String,
}

impl App {
    #[must_use]
    pub fn new(runner: FetchRunner, storage: Arc<dyn SessionStoragePort>, ui: UiConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let session_rx = runner.session().subscribe();

        Self {
            state: AppState::Running,
            runner,
            resolve_session_use_case: ResolveSessionUseCase::new(storage),
            ui,
            theme: Theme::default(),
            route: Route::Welcome,
            screen: Box::new(WelcomeScreen::new()),
            generation: 0,
            tasks: Vec::new(),
            action_tx,
            action_rx,
            session_rx,
            alert: None,
            menu: HeaderMenuState::default(),
            footer_info: format!("{APP_NAME} v{}", crate::VERSION),
        }
    }

    /// # Errors
    /// Returns error if the terminal cannot be drawn.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<()> {
        match self.resolve_session_use_case.execute(cli_token).await {
            Ok(Some(resolved)) => {
                info!(source = %resolved.source, "Found existing session");
                self.runner.session().adopt(resolved.session);
            }
            Ok(None) => debug!("Starting signed out"),
            Err(e) => warn!(error = %e, "Could not read the stored session"),
        }

        let start = if self.runner.session().current_session().is_authenticated() {
            Route::Home
        } else {
            Route::Welcome
        };
        self.navigate(start);

        self.run_event_loop(terminal).await?;

        self.abort_tasks();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await;
                }

                Ok(()) = self.session_rx.changed() => {
                    self.handle_session_change();
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event).await == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                }

                else => break,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.alert.is_some() {
            if EventHandler::is_submit_event(&key) || EventHandler::is_back_event(&key) {
                self.alert = None;
            }
            return EventResult::Continue;
        }

        if self.route.requires_session() {
            if self.menu.is_open() {
                if let HeaderMenuAction::Select(item) = self.menu.handle_key(key) {
                    match item.route() {
                        Some(route) => self.navigate(route),
                        None => self.logout().await,
                    }
                }
                return EventResult::Continue;
            }

            if key.code == MENU_KEY {
                self.menu.open();
                return EventResult::Continue;
            }
        }

        match self.screen.handle_key(key, &self.runner) {
            ScreenAction::None => {}
            ScreenAction::Ignored => {
                if EventHandler::is_back_event(&key)
                    && let Some(parent) = self.route.parent()
                {
                    self.navigate(parent);
                }
            }
            ScreenAction::Navigate(route) => self.navigate(route),
            ScreenAction::Spawn(pending) => self.spawn(pending),
            ScreenAction::Notify(notice) => self.alert = Some(notice),
            ScreenAction::Quit => return EventResult::Exit,
        }

        EventResult::Continue
    }

    async fn handle_action(&mut self, action: Action) {
        match action {
            Action::Fetched {
                generation,
                outcome,
            } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "Dropping result for a disposed screen"
                    );
                    return;
                }

                let effect = self.screen.apply(outcome);
                self.handle_effect(effect).await;
            }
        }
    }

    async fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Notify(notice) => self.alert = Some(notice),
            Effect::Navigate { route, notice } => {
                self.navigate(route);
                if notice.is_some() {
                    self.alert = notice;
                }
            }
            Effect::RequireLogin => self.require_login().await,
        }
    }

    /// Publishes session changes made outside the app loop.
    fn handle_session_change(&mut self) {
        let authenticated = self.session_rx.borrow_and_update().is_authenticated();
        if !authenticated && self.route.requires_session() {
            info!(route = ?self.route, "Session ended, returning to login");
            self.navigate(Route::Login);
        }
    }

    /// Replaces the current screen.
    ///
    /// Protected routes fall back to the login screen without a session.
    /// Requests still running for the previous screen are aborted.
    fn navigate(&mut self, route: Route) {
        let route = if route.requires_session()
            && !self.runner.session().current_session().is_authenticated()
        {
            warn!(route = ?route, "No session, redirecting to login");
            self.alert = Some(Notice::error("Sessão expirada", SESSION_EXPIRED_MESSAGE));
            Route::Login
        } else {
            route
        };

        debug!(from = ?self.route, to = ?route, "Navigating");
        self.abort_tasks();
        self.generation += 1;
        self.menu.close();

        self.screen = self.build_screen(&route);
        self.route = route;

        let pending = self.screen.mount(&self.runner);
        self.spawn(pending);
    }

    fn build_screen(&self, route: &Route) -> Box<dyn Screen> {
        match route {
            Route::Welcome => Box::new(WelcomeScreen::new()),
            Route::Login => Box::new(LoginScreen::new()),
            Route::Register => Box::new(RegisterScreen::new(self.ui.confirm_password)),
            Route::Home => Box::new(HomeScreen::new()),
            Route::Accounts => Box::new(AccountsScreen::new()),
            Route::Balance => Box::new(BalanceScreen::new(self.ui.balance_toggle)),
            Route::Statement => Box::new(StatementScreen::new()),
            Route::Summary => Box::new(SummaryScreen::new()),
            Route::Transfer => Box::new(TransferScreen::new()),
            Route::Transfers => Box::new(TransfersScreen::new()),
            Route::TransferDetail(transfer) => {
                Box::new(TransferDetailScreen::new(transfer.clone()))
            }
            Route::Profile => Box::new(ProfileScreen::new()),
            Route::ProfileEdit => Box::new(ProfileEditScreen::new()),
        }
    }

    fn spawn(&mut self, pending: Vec<PendingFetch>) {
        self.tasks.retain(|task| !task.is_finished());

        for fetch in pending {
            let tx = self.action_tx.clone();
            let generation = self.generation;
            self.tasks.push(tokio::spawn(async move {
                let outcome = fetch.await;
                let _ = tx.send(Action::Fetched {
                    generation,
                    outcome,
                });
            }));
        }
    }

    fn abort_tasks(&mut self) {
        let running = self.tasks.iter().filter(|t| !t.is_finished()).count();
        if running > 0 {
            debug!(running, "Aborting requests of the previous screen");
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    async fn logout(&mut self) {
        if let Err(e) = self.runner.session().logout().await {
            warn!(error = %e, "Logout could not clear stored session");
        }
        self.navigate(Route::Login);
    }

    async fn require_login(&mut self) {
        if let Err(e) = self.runner.session().logout().await {
            warn!(error = %e, "Could not clear rejected session");
        }
        self.navigate(Route::Login);
        self.alert = Some(Notice::error("Sessão expirada", SESSION_EXPIRED_MESSAGE));
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let with_header = self.route.requires_session();

        let [header, title, body, footer] = Layout::vertical([
            Constraint::Length(u16::from(with_header)),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        if with_header {
            let session = self.session_rx.borrow().clone();
            frame.render_widget(
                HeaderBar::new(APP_NAME, session.display_nickname())
                    .style(HeaderBarStyle::from_theme(&self.theme)),
                header,
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.route.title(),
                self.theme.title_style,
            ))),
            Rect::new(title.x + 1, title.y, title.width.saturating_sub(2), 1),
        );

        let body = Rect::new(
            body.x + 1,
            body.y,
            body.width.saturating_sub(2),
            body.height,
        );
        self.screen.render(body, frame.buffer_mut(), &self.theme);

        frame.render_widget(
            FooterBar::new(self.screen.key_hints())
                .right_info(Some(self.footer_info.as_str()))
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer,
        );

        if with_header && self.menu.is_open() {
            frame.render_stateful_widget(HeaderMenu::new(&self.theme), area, &mut self.menu);
        }

        if let Some(notice) = &self.alert {
            frame.render_widget(AlertPopup::new(notice, &self.theme), area);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.abort_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_context::SessionContext;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::{MockBankApiPort, MockSessionStorage};
    use crossterm::event::{KeyCode, KeyModifiers};
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ui() -> UiConfig {
        UiConfig {
            balance_toggle: true,
            confirm_password: true,
        }
    }

    async fn app_with(api: MockBankApiPort, storage: MockSessionStorage) -> App {
        let storage = Arc::new(storage);
        let session = SessionContext::new(storage.clone());
        session.restore().await;
        let runner = FetchRunner::new(Arc::new(api), session);
        App::new(runner, storage, ui())
    }

    #[tokio::test]
    async fn test_app_creation() {
        let app = app_with(MockBankApiPort::new(), MockSessionStorage::new()).await;

        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.route, Route::Welcome);
        assert!(app.alert.is_none());
    }

    #[tokio::test]
    async fn test_protected_route_redirects_without_session() {
        let mut app = app_with(MockBankApiPort::new(), MockSessionStorage::new()).await;

        app.navigate(Route::Balance);

        assert_eq!(app.route, Route::Login);
        assert!(app.alert.is_some());
    }

    #[tokio::test]
    async fn test_escape_returns_to_parent() {
        let mut app = app_with(
            MockBankApiPort::new(),
            MockSessionStorage::with_session("abc", "ana"),
        )
        .await;
        app.navigate(Route::Home);
        app.navigate(Route::Register);

        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.route, Route::Welcome);
    }

    #[tokio::test]
    async fn test_alert_blocks_keys_until_dismissed() {
        let mut app = app_with(MockBankApiPort::new(), MockSessionStorage::new()).await;
        app.alert = Some(Notice::error("Erro", "Falhou"));

        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.route, Route::Welcome);
        assert!(app.alert.is_none());

        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_ctrl_c_exits() {
        let mut app = app_with(MockBankApiPort::new(), MockSessionStorage::new()).await;
        let result = app
            .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert_eq!(result, EventResult::Exit);
    }

    #[tokio::test]
    async fn test_result_for_disposed_screen_dropped() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(10)));
        let mut app = app_with(api, MockSessionStorage::with_session("abc", "ana")).await;

        app.navigate(Route::Balance);
        let stale = app.generation;
        app.navigate(Route::Home);

        app.handle_action(Action::Fetched {
            generation: stale,
            outcome: FetchOutcome::Balance {
                ticket: crate::application::request_slot::RequestSequence::new().issue(),
                result: Err(ApiError::Unauthorized),
            },
        })
        .await;

        assert_eq!(app.route, Route::Home);
        assert!(app.runner.session().current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_returns_to_login() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Err(ApiError::Unauthorized));
        let mut app = app_with(api, MockSessionStorage::with_session("abc", "ana")).await;

        app.navigate(Route::Balance);
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action).await;

        assert_eq!(app.route, Route::Login);
        assert!(!app.runner.session().current_session().is_authenticated());
        assert_eq!(
            app.alert.as_ref().map(|n| n.message.as_str()),
            Some(SESSION_EXPIRED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_menu_logout_clears_session() {
        let mut app = app_with(
            MockBankApiPort::new(),
            MockSessionStorage::with_session("abc", "ana"),
        )
        .await;
        app.navigate(Route::Home);

        app.handle_key(key(MENU_KEY)).await;
        assert!(app.menu.is_open());
        app.handle_key(key(KeyCode::Up)).await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.route, Route::Login);
        assert!(!app.runner.session().current_session().is_authenticated());
    }
}
