use contracts::shared::error::ApiError;
use contracts::shared::list::ListScope;
use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Сессия из localStorage (токен без пользователя не считается сессией)
    pub fn restore() -> Self {
        match (storage::get_access_token(), storage::get_user_info()) {
            (Some(token), Some(user)) => Self {
                access_token: Some(token),
                user_info: Some(user),
            },
            _ => Self::default(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.access_token.as_ref()?;
        self.user_info.as_ref().map(|u| u.role_name)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());
    if let Some(role) = auth_state.get_untracked().role() {
        log::info!("session restored for role {}", role.code());
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: current role, reactive
pub fn current_role() -> Signal<Option<Role>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.role()))
}

/// Ключи владельца для списков текущего пользователя (снимок на момент вызова)
pub fn use_user_scope() -> ListScope {
    let (auth_state, _) = use_auth();
    auth_state.with_untracked(|s| {
        s.user_info
            .as_ref()
            .map(UserInfo::scope)
            .unwrap_or_default()
    })
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<Role, ApiError> {
    let response = api::login(email, password).await?;
    let role = response.user.role_name;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);
    storage::save_user_info(&response.user);
    log::info!("logged in as {} ({})", response.user.email, role.code());

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(role)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    log::info!("logged out");
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            account_id: 1,
            email: "user@mbkc.vn".into(),
            role_name: role,
            is_confirmed: true,
            brand_id: None,
            kitchen_center_id: None,
            cashier_id: None,
        }
    }

    #[test]
    fn test_role_requires_token() {
        let state = AuthState {
            access_token: None,
            user_info: Some(user(Role::Cashier)),
        };
        assert_eq!(state.role(), None);

        let state = AuthState {
            access_token: Some("jwt".into()),
            user_info: Some(user(Role::Cashier)),
        };
        assert_eq!(state.role(), Some(Role::Cashier));
    }
}
