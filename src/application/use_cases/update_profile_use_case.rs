//! Profile update use case.

use tracing::{info, warn};

use crate::application::dto::ProfileForm;
use crate::application::fetch::FetchRunner;
use crate::domain::entities::{Profile, ProfileUpdate};
use crate::domain::errors::{ApiError, ValidationError};
use crate::domain::{masks, validation};

/// Message shown when the new email belongs to another account.
pub const EMAIL_IN_USE: &str = "E-mail já em uso.";

/// Message shown after a successful update.
pub const PROFILE_UPDATED: &str = "Perfil atualizado com sucesso!";

/// Result of an accepted profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSave {
    /// The profile as the server now has it.
    Reloaded(Profile),
    /// The update was stored but reading it back failed.
    ReloadFailed(ApiError),
}

/// Sends the edited profile and reloads it from the backend.
#[derive(Clone)]
pub struct UpdateProfileUseCase {
    runner: FetchRunner,
}

impl UpdateProfileUseCase {
    #[must_use]
    pub const fn new(runner: FetchRunner) -> Self {
        Self { runner }
    }

    /// Builds the request body, converting the birth date to backend form.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidEmail`] for a malformed email.
    pub fn validate(form: &ProfileForm) -> Result<ProfileUpdate, ValidationError> {
        validation::validate_email(&form.email)?;

        Ok(ProfileUpdate {
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            birth_date: masks::to_api_date(form.birth_date.trim()),
            address: form.address.trim().to_string(),
            account_type: form.account_type.clone(),
        })
    }

    /// Submits the update, then reads the profile back.
    ///
    /// Only the update decides success. A failed reload is reported inside
    /// [`ProfileSave::ReloadFailed`].
    ///
    /// # Errors
    /// Returns a conflict carrying [`EMAIL_IN_USE`] on HTTP 409, or the
    /// backend error of the update request.
    pub async fn execute(&self, update: ProfileUpdate) -> Result<ProfileSave, ApiError> {
        let saved = self
            .runner
            .authorized(move |api, token| async move {
                api.update_profile(&token, &update).await
            })
            .await;

        match saved {
            Ok(()) => info!("Profile updated"),
            Err(ApiError::Conflict { .. }) => {
                warn!("Email already in use");
                return Err(ApiError::conflict(EMAIL_IN_USE));
            }
            Err(e) => return Err(e),
        }

        let reloaded = self
            .runner
            .authorized(|api, token| async move { api.fetch_profile(&token).await })
            .await;

        Ok(match reloaded {
            Ok(profile) => ProfileSave::Reloaded(profile),
            Err(e) => {
                warn!(error = %e, "Profile saved but reload failed");
                ProfileSave::ReloadFailed(e)
            }
        })
    }
}
