//! Разбор параметров пути (`:id` и т.п.) для экранов форм и карточек.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Значение числового параметра пути
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdParam {
    /// Параметра в маршруте нет (форма создания)
    Absent,
    Valid(i64),
    /// Параметр есть, но это не число: такой записи не бывает
    Invalid,
}

impl IdParam {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => IdParam::Absent,
            Some(raw) => raw.parse::<i64>().map(IdParam::Valid).unwrap_or(IdParam::Invalid),
        }
    }

    pub fn valid(&self) -> Option<i64> {
        match self {
            IdParam::Valid(id) => Some(*id),
            _ => None,
        }
    }
}

/// Читает параметр `name` текущего маршрута один раз при монтировании экрана
pub fn use_id_param(name: &str) -> IdParam {
    let params = use_params_map();
    params.with_untracked(|p| IdParam::parse(p.get(name).as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_param() {
        assert_eq!(IdParam::parse(None), IdParam::Absent);
        assert_eq!(IdParam::parse(Some("42")), IdParam::Valid(42));
        assert_eq!(IdParam::parse(Some("abc")), IdParam::Invalid);
        assert_eq!(IdParam::parse(Some("")), IdParam::Invalid);
        assert_eq!(IdParam::parse(Some("7")).valid(), Some(7));
        assert_eq!(IdParam::Invalid.valid(), None);
    }
}
