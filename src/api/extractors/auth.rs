//! Session and role extractors.
//!
//! `CurrentUser` rejects requests without a valid session (401).
//! `Authorized<G>` additionally resolves the caller's role and rejects it
//! unless the role grants `G::PERMISSION` (403). Both run before any body
//! extractor, so an anonymous or under-privileged caller never gets a
//! validation error.

use std::marker::PhantomData;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{Permission, Role};
use crate::errors::AppError;

/// Authenticated caller
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Bearer token from the Authorization header, else the session cookie.
async fn session_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        return Some(bearer.token().to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, state)
            .await
            .ok_or(AppError::Unauthorized)?;

        let session = state.services.sessions.verify(&token)?;

        Ok(CurrentUser {
            id: session.user_id,
            email: session.email,
        })
    }
}

/// Permission required by an endpoint
pub trait Guard: Send + Sync + 'static {
    const PERMISSION: Permission;
}

/// Guards for each permission
pub mod guards {
    use super::Guard;
    use crate::domain::Permission;

    macro_rules! guard {
        ($name:ident, $permission:ident) => {
            pub struct $name;

            impl Guard for $name {
                const PERMISSION: Permission = Permission::$permission;
            }
        };
    }

    guard!(EditListings, EditListings);
    guard!(DeleteListings, DeleteListings);
    guard!(UploadPhotos, UploadPhotos);
    guard!(ManageOwners, ManageOwners);
    guard!(ManageSettings, ManageSettings);
    guard!(ManageTestimonials, ManageTestimonials);
}

/// Caller whose role grants `G::PERMISSION`
pub struct Authorized<G: Guard> {
    pub user: CurrentUser,
    pub role: Role,
    _guard: PhantomData<G>,
}

#[async_trait]
impl<G: Guard> FromRequestParts<AppState> for Authorized<G> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        let role = state.services.profiles.resolve_role(user.id).await?;

        if !role.permits(G::PERMISSION) {
            tracing::info!(
                user_id = %user.id,
                %role,
                permission = ?G::PERMISSION,
                "Request denied for role"
            );
            return Err(AppError::Forbidden);
        }

        Ok(Authorized {
            user,
            role,
            _guard: PhantomData,
        })
    }
}
