//! Authentication extractors
//!
//! `AuthUser` resolves the bearer token all the way to a live, active
//! account and rejects anything less. `OptionalAuthUser` runs the same
//! resolution but never blocks the request: any failure means anonymous.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use roam_core::{Id, User};
use roam_service::AccountService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved account (never carries the credential)
    pub user: User,
}

impl AuthUser {
    /// The account's identifier
    #[must_use]
    pub fn user_id(&self) -> Id {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let service = AccountService::new(app_state.service_context());

        let user = service.authenticate(bearer.token()).await.map_err(|e| {
            tracing::debug!(error = %e, "bearer resolution failed");
            ApiError::from(e)
        })?;

        Ok(AuthUser { user })
    }
}

/// Optional authenticated account
///
/// Anonymous when the header is absent, the token is bad, or the account is
/// not in a usable state - the request always proceeds.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<User>);

impl OptionalAuthUser {
    /// The viewer's identifier, if authenticated
    #[must_use]
    pub fn viewer_id(&self) -> Option<Id> {
        self.0.as_ref().map(|user| user.id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let Ok(TypedHeader(Authorization(bearer))) = bearer else {
            return Ok(OptionalAuthUser(None));
        };

        let app_state = AppState::from_ref(state);
        let service = AccountService::new(app_state.service_context());

        Ok(OptionalAuthUser(
            service.authenticate_optional(bearer.token()).await,
        ))
    }
}
