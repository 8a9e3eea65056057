use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
const USER_INFO_KEY: &str = "auth_user_info";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn save_refresh_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

/// Пользователь (вместе с ролью) хранится рядом с токеном
pub fn save_user_info(user: &UserInfo) {
    let Ok(json) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_INFO_KEY, &json);
    }
}

/// Сохраненный пользователь; битая запись считается отсутствующей
pub fn get_user_info() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear all authentication data
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
