//! Global session context and provider

use crate::client::set_auth_token;
use crate::config::AppConfig;
use gallery_core::{Session, SessionAction, SessionState};
use gloo::storage::{LocalStorage, Storage};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionContextData {
    state: SessionState,
}

impl Deref for SessionContextData {
    type Target = SessionState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        state.apply(action);

        match state.session() {
            Some(session) => persist(session),
            None => forget(),
        }

        Rc::new(Self { state })
    }
}

/// Save the session and point the authenticated client at its token
fn persist(session: &Session) {
    if let Err(e) = set_auth_token(Some(session.bearer_token())) {
        tracing::error!(error = %e, "failed to configure authenticated client");
    }
    if let Err(e) = LocalStorage::raw().set_item(AppConfig::TOKEN_KEY, session.bearer_token()) {
        tracing::warn!(error = ?e, "failed to store token");
    }
    if let Err(e) = LocalStorage::set(AppConfig::SESSION_KEY, session) {
        tracing::warn!(error = %e, "failed to store session");
    }
}

fn forget() {
    if let Err(e) = set_auth_token(None) {
        tracing::warn!(error = %e, "failed to clear authenticated client");
    }
    LocalStorage::delete(AppConfig::TOKEN_KEY);
    LocalStorage::delete(AppConfig::SESSION_KEY);
}

/// Session stored by a previous visit, if it is still usable
fn restore() -> SessionState {
    match LocalStorage::get::<Session>(AppConfig::SESSION_KEY) {
        Ok(session) if !session.bearer_token().is_empty() => {
            tracing::debug!(user_id = %session.id(), "restoring stored session");
            if let Err(e) = set_auth_token(Some(session.bearer_token())) {
                tracing::error!(error = %e, "failed to configure authenticated client");
            }
            SessionState::signed_in(session)
        }
        _ => SessionState::anonymous(),
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(|| SessionContextData { state: restore() });

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_current_session() -> Option<Session> {
    let session = use_session();
    session.session().cloned()
}
