use contracts::enums::role::{Capability, Role};
use contracts::system::users::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// `/users/me` has not answered yet
    Checking,
    Active,
    /// The API rejected the session cookie
    Anonymous,
}

/// The signed-in user as far as the client knows it.
///
/// Provided once by [`provide_session`]; the layout guard refreshes it and
/// pages read the role from it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub profile: RwSignal<Option<UserProfile>>,
    pub status: RwSignal<SessionStatus>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            profile: RwSignal::new(None),
            status: RwSignal::new(SessionStatus::Checking),
        }
    }

    /// Re-validates the session with `GET /users/me`
    pub fn check(self) {
        spawn_local(async move {
            match api::current_user().await {
                Ok(profile) => self.set_profile(profile),
                Err(e) => {
                    if e.is_unauthorized() {
                        log::debug!("no active session");
                    } else {
                        log::warn!("session check failed: {}", e);
                    }
                    self.profile.try_set(None);
                    self.status.try_set(SessionStatus::Anonymous);
                }
            }
        });
    }

    /// Stores a fresh copy of the signed-in user. Unchanged data does not
    /// notify subscribers.
    pub fn set_profile(self, profile: UserProfile) {
        let changed = self
            .profile
            .with_untracked(|current| current.as_ref() != Some(&profile));
        if changed {
            self.profile.try_set(Some(profile));
        }
        if self.status.get_untracked() != SessionStatus::Active {
            self.status.try_set(SessionStatus::Active);
        }
    }

    /// Forgets the user after logout or account deletion; the next guarded
    /// page starts a new check.
    pub fn clear(self) {
        self.profile.try_set(None);
        self.status.try_set(SessionStatus::Checking);
    }

    /// Role of the signed-in user (reactive)
    pub fn role(&self) -> Option<Role> {
        self.profile.with(|p| p.as_ref().map(|p| p.role))
    }

    /// False until the role is known (reactive)
    pub fn can(&self, capability: Capability) -> bool {
        self.role().is_some_and(|role| role.can(capability))
    }
}

pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);
    session
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("provide_session was not called in App")
}
