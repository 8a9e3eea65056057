//! Состояние загрузки карточки одной записи.

use contracts::shared::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailLoad<T> {
    Loading,
    Loaded(T),
    /// Сервер ответил 404
    NotFound,
    Failed(String),
}

impl<T> DetailLoad<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => DetailLoad::Loaded(value),
            Err(ApiError::Status { code: 404, .. }) => DetailLoad::NotFound,
            Err(e) => {
                log::warn!("detail load failed: {}", e);
                DetailLoad::Failed(e.user_message())
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            DetailLoad::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert_eq!(DetailLoad::from_result(Ok(7)).loaded(), Some(&7));
        assert_eq!(
            DetailLoad::<i32>::from_result(Err(ApiError::from_status(404, ""))),
            DetailLoad::NotFound
        );
        assert!(matches!(
            DetailLoad::<i32>::from_result(Err(ApiError::Network("offline".into()))),
            DetailLoad::Failed(_)
        ));
    }
}
