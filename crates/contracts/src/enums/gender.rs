use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![Gender::Male, Gender::Female]
    }

    /// Регистр не важен: API присылает и "Male", и "MALE"
    pub fn from_code(code: &str) -> Option<Self> {
        Gender::all()
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Способ оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Cashless,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Cashless => "Cashless",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_code_ignores_case() {
        assert_eq!(Gender::from_code("Female"), Some(Gender::Female));
        assert_eq!(Gender::from_code(" MALE "), Some(Gender::Male));
        assert_eq!(Gender::from_code("other"), None);
    }
}
