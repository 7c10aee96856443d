//! Profile view and profile edit controllers.

use tracing::{debug, warn};

use super::{Controller, Effect, FetchOutcome, PendingFetch, fetch_profile, settle, unexpected};
use crate::application::dto::ProfileForm;
use crate::application::fetch::FetchRunner;
use crate::application::notice::Notice;
use crate::application::request_slot::RequestSlot;
use crate::application::use_cases::{PROFILE_UPDATED, ProfileSave, UpdateProfileUseCase};
use crate::domain::LoadState;
use crate::domain::entities::Profile;
use crate::domain::masks;

const PROFILE_ERROR: &str = "Erro ao buscar perfil.";
const PROFILE_UPDATE_ERROR: &str = "Erro ao atualizar perfil.";

/// Read-only profile screen.
#[derive(Debug, Default)]
pub struct ProfileController {
    profile: RequestSlot<Profile>,
}

impl ProfileController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<Profile> {
        self.profile.state()
    }
}

impl Controller for ProfileController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        let ticket = self.profile.begin();
        vec![fetch_profile(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Profile { ticket, result } => {
                settle(&mut self.profile, ticket, result, PROFILE_ERROR)
            }
            other => unexpected("profile", &other),
        }
    }
}

/// Profile editor.
///
/// The form is prefilled from the server and refilled from the re-fetched
/// profile after every successful save. When that reload fails the typed
/// values stay in the form.
#[derive(Debug, Default)]
pub struct ProfileEditController {
    profile: RequestSlot<Profile>,
    form: Option<ProfileForm>,
    submitting: bool,
}

impl ProfileEditController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<Profile> {
        self.profile.state()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Takes the form produced by the latest profile load, if not taken yet.
    pub fn take_form(&mut self) -> Option<ProfileForm> {
        self.form.take()
    }

    /// Builds the editable form from a server profile.
    #[must_use]
    pub fn form_from(profile: &Profile) -> ProfileForm {
        ProfileForm {
            email: profile.email.clone(),
            phone: masks::format_phone(&profile.phone),
            birth_date: masks::to_display_date(&profile.birth_date),
            address: profile.address.clone(),
            account_type: profile.account_type.clone(),
        }
    }

    /// Validates and submits the form. Ignored while a submission is in flight.
    ///
    /// # Errors
    /// Returns a notice for an invalid email; nothing is sent in that case.
    pub fn submit(
        &mut self,
        runner: &FetchRunner,
        form: &ProfileForm,
    ) -> Result<Option<PendingFetch>, Notice> {
        if self.submitting {
            return Ok(None);
        }
        let update = UpdateProfileUseCase::validate(form).map_err(|e| Notice::from(&e))?;

        self.submitting = true;
        debug!("Submitting profile update");

        let use_case = UpdateProfileUseCase::new(runner.clone());
        Ok(Some(Box::pin(async move {
            FetchOutcome::ProfileSaved(use_case.execute(update).await)
        })))
    }

    fn load_form(&mut self) {
        self.form = self.profile.value().map(Self::form_from);
    }
}

impl Controller for ProfileEditController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        let ticket = self.profile.begin();
        vec![fetch_profile(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Profile { ticket, result } => {
                let effect = settle(&mut self.profile, ticket, result, PROFILE_ERROR);
                self.load_form();
                effect
            }
            FetchOutcome::ProfileSaved(result) => {
                self.submitting = false;
                match result {
                    Ok(ProfileSave::Reloaded(profile)) => {
                        let ticket = self.profile.begin();
                        self.profile.resolve(ticket, Ok(profile));
                        self.load_form();
                        Effect::Notify(Notice::success("Sucesso", PROFILE_UPDATED))
                    }
                    Ok(ProfileSave::ReloadFailed(e)) => {
                        warn!(error = %e, "Keeping edited values after failed reload");
                        Effect::Notify(Notice::success("Sucesso", PROFILE_UPDATED))
                    }
                    Err(e) if e.requires_login() => Effect::RequireLogin,
                    Err(e) => Effect::Notify(Notice::from_api_error(&e, PROFILE_UPDATE_ERROR)),
                }
            }
            other => unexpected("profile edit", &other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::{drive, signed_in_runner};
    use crate::application::use_cases::EMAIL_IN_USE;
    use crate::domain::entities::AccountType;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::MockBankApiPort;

    fn server_profile(email: &str) -> Profile {
        Profile {
            name: "Ana Souza".to_string(),
            nickname: "ana".to_string(),
            email: email.to_string(),
            cpf: "123.456.789-01".to_string(),
            phone: "11987654321".to_string(),
            birth_date: "1990-05-10".to_string(),
            address: "Rua A, 1".to_string(),
            account_type: Some(AccountType::Checking),
        }
    }

    #[tokio::test]
    async fn test_profile_loads() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_profile()
            .returning(|_| Ok(server_profile("ana@mockbank.com")));
        let runner = signed_in_runner(api).await;
        let mut controller = ProfileController::new();

        let pending = controller.mount(&runner);
        drive(&mut controller, pending).await;

        assert_eq!(controller.state().value().unwrap().nickname, "ana");
    }

    #[tokio::test]
    async fn test_edit_prefills_display_forms() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_profile()
            .returning(|_| Ok(server_profile("ana@mockbank.com")));
        let runner = signed_in_runner(api).await;
        let mut controller = ProfileEditController::new();

        let pending = controller.mount(&runner);
        drive(&mut controller, pending).await;
        let form = controller.take_form().unwrap();

        assert_eq!(form.birth_date, "10/05/1990");
        assert_eq!(form.phone, "(11) 98765-4321");
        assert!(controller.take_form().is_none());
    }

    #[tokio::test]
    async fn test_save_refills_from_server() {
        let mut api = MockBankApiPort::new();
        api.expect_update_profile().returning(|_, _| Ok(()));
        api.expect_fetch_profile()
            .returning(|_| Ok(server_profile("normalized@mockbank.com")));
        let runner = signed_in_runner(api).await;
        let mut controller = ProfileEditController::new();

        let mut form = ProfileEditController::form_from(&server_profile("ana@mockbank.com"));
        form.email = "NEW@mockbank.com".to_string();
        let pending = controller.submit(&runner, &form).unwrap().unwrap();
        let effects = drive(&mut controller, vec![pending]).await;

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::success("Sucesso", PROFILE_UPDATED))]
        );
        assert_eq!(controller.take_form().unwrap().email, "normalized@mockbank.com");
    }

    #[tokio::test]
    async fn test_save_reported_when_reload_fails() {
        let mut api = MockBankApiPort::new();
        api.expect_update_profile().times(1).returning(|_, _| Ok(()));
        api.expect_fetch_profile()
            .times(1)
            .returning(|_| Err(ApiError::connection("reset")));
        let runner = signed_in_runner(api).await;
        let mut controller = ProfileEditController::new();

        let form = ProfileEditController::form_from(&server_profile("ana@mockbank.com"));
        let pending = controller.submit(&runner, &form).unwrap().unwrap();
        let effects = drive(&mut controller, vec![pending]).await;

        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::success("Sucesso", PROFILE_UPDATED))]
        );
        assert!(!controller.is_submitting());
        assert!(controller.take_form().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let mut api = MockBankApiPort::new();
        api.expect_update_profile()
            .returning(|_, _| Err(ApiError::conflict("")));
        let runner = signed_in_runner(api).await;
        let mut controller = ProfileEditController::new();

        let form = ProfileEditController::form_from(&server_profile("ana@mockbank.com"));
        let pending = controller.submit(&runner, &form).unwrap().unwrap();
        let effects = drive(&mut controller, vec![pending]).await;

        match &effects[..] {
            [Effect::Notify(notice)] => assert_eq!(notice.message, EMAIL_IN_USE),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_email_blocks() {
        let runner = crate::application::controllers::testing::anonymous_runner(
            MockBankApiPort::new(),
        );
        let mut controller = ProfileEditController::new();
        let mut form = ProfileEditController::form_from(&server_profile("x"));
        form.email = "invalid".to_string();

        let notice = controller.submit(&runner, &form).err().unwrap();

        assert_eq!(notice.title, "Email inválido");
    }
}
