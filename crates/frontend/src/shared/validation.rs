//! Проверка полей формы перед отправкой.
//!
//! Ошибки валидации никогда не покидают форму: `validate` возвращает
//! [`FieldErrors`], форма показывает их рядом с полями и не отправляет запрос.

use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Первое сообщение для поля (для вывода под input)
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Email,
    Digits,
    /// Число больше нуля
    Positive,
    /// Число от 0 до 100
    Percent,
    /// Дата `YYYY-MM-DD` не позже `today`
    PastDate { today: NaiveDate },
}

impl Rule {
    fn check(&self, label: &str, value: &str) -> Option<String> {
        let value = value.trim();
        match self {
            Rule::Required => value
                .is_empty()
                .then(|| format!("{} is required", label)),
            // Пустое значение проверяет только Required
            _ if value.is_empty() => None,
            Rule::MinLen(min) => (value.chars().count() < *min)
                .then(|| format!("{} must be at least {} characters", label, min)),
            Rule::MaxLen(max) => (value.chars().count() > *max)
                .then(|| format!("{} must be at most {} characters", label, max)),
            Rule::Email => (!is_email(value)).then(|| format!("{} must be a valid email", label)),
            Rule::Digits => (!value.chars().all(|c| c.is_ascii_digit()))
                .then(|| format!("{} must contain only digits", label)),
            Rule::Positive => match value.parse::<f64>() {
                Ok(n) if n > 0.0 => None,
                _ => Some(format!("{} must be greater than 0", label)),
            },
            Rule::Percent => match value.parse::<f64>() {
                Ok(n) if (0.0..=100.0).contains(&n) => None,
                _ => Some(format!("{} must be between 0 and 100", label)),
            },
            Rule::PastDate { today } => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) if date <= *today => None,
                Ok(_) => Some(format!("{} cannot be in the future", label)),
                Err(_) => Some(format!("{} must be a valid date", label)),
            },
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

/// Набор правил для одного поля
#[derive(Clone, Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: Vec<Rule>,
}

/// Схема формы: поле → правила
#[derive(Clone, Debug, Default)]
pub struct Validator {
    fields: Vec<FieldRules>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: &'static str, label: &'static str, rules: &[Rule]) -> Self {
        self.fields.push(FieldRules {
            field,
            label,
            rules: rules.to_vec(),
        });
        self
    }

    /// `value_of` отдает текущее значение поля по имени
    pub fn validate(&self, value_of: impl Fn(&str) -> String) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in &self.fields {
            let value = value_of(field.field);
            for rule in &field.rules {
                if let Some(message) = rule.check(field.label, &value) {
                    errors.add(field.field, message);
                    // Одного сообщения на поле достаточно
                    break;
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_schema() -> Validator {
        Validator::new()
            .field("name", "Name", &[Rule::Required, Rule::MaxLen(10)])
            .field("managerEmail", "Manager email", &[Rule::Required, Rule::Email])
            .field("number", "Account number", &[Rule::Digits])
    }

    #[test]
    fn test_required_and_email() {
        let errors = brand_schema().validate(|field| match field {
            "name" => "   ".to_string(),
            "managerEmail" => "not-an-email".to_string(),
            _ => String::new(),
        });
        assert_eq!(errors.first("name"), Some("Name is required"));
        assert_eq!(errors.first("managerEmail"), Some("Manager email must be a valid email"));
        assert_eq!(errors.first("number"), None);
        assert_eq!(errors.fields().count(), 2);
    }

    #[test]
    fn test_valid_form() {
        let errors = brand_schema().validate(|field| match field {
            "name" => "Pho 24".to_string(),
            "managerEmail" => "manager@pho24.vn".to_string(),
            "number" => "0123456789".to_string(),
            _ => String::new(),
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_one_message_per_field() {
        let errors = Validator::new()
            .field("name", "Name", &[Rule::MaxLen(3), Rule::Digits])
            .validate(|_| "abcdef".to_string());
        assert_eq!(errors.first("name"), Some("Name must be at most 3 characters"));
        assert_eq!(errors, {
            let mut expected = FieldErrors::default();
            expected.add("name", "Name must be at most 3 characters");
            expected
        });
    }

    #[test]
    fn test_positive_and_digits() {
        assert!(Rule::Positive.check("Amount", "0").is_some());
        assert!(Rule::Positive.check("Amount", "12.5").is_none());
        assert!(Rule::Positive.check("Amount", "abc").is_some());
        assert!(Rule::Digits.check("Number", "12a").is_some());
        assert!(Rule::Digits.check("Number", "").is_none());
    }

    #[test]
    fn test_min_len_percent_and_date() {
        assert!(Rule::MinLen(6).check("Password", "12345").is_some());
        assert!(Rule::MinLen(6).check("Password", "123456").is_none());
        assert!(Rule::Percent.check("Commission", "100").is_none());
        assert!(Rule::Percent.check("Commission", "100.5").is_some());
        assert!(Rule::Percent.check("Commission", "-1").is_some());

        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let rule = Rule::PastDate { today };
        assert!(rule.check("Date of birth", "2001-03-09").is_none());
        assert_eq!(
            rule.check("Date of birth", "2024-03-16").as_deref(),
            Some("Date of birth cannot be in the future")
        );
        assert_eq!(
            rule.check("Date of birth", "09/03/2001").as_deref(),
            Some("Date of birth must be a valid date")
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("a@b.vn"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.vn"));
        assert!(!is_email("a@@b.vn"));
        assert!(!is_email("a b@c.vn"));
    }
}
