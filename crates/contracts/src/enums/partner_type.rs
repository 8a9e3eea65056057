use serde::{Deserialize, Serialize};

/// Партнерские платформы доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerType {
    GrabFood,
    ShopeeFood,
    BeFood,
}

impl PartnerType {
    /// Имя партнера в API
    pub fn code(&self) -> &'static str {
        match self {
            PartnerType::GrabFood => "GrabFood",
            PartnerType::ShopeeFood => "ShopeeFood",
            PartnerType::BeFood => "BeFood",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerType::GrabFood => "Grab Food",
            PartnerType::ShopeeFood => "Shopee Food",
            PartnerType::BeFood => "Be Food",
        }
    }

    pub fn all() -> Vec<PartnerType> {
        vec![PartnerType::GrabFood, PartnerType::ShopeeFood, PartnerType::BeFood]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        PartnerType::all().into_iter().find(|p| p.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(PartnerType::from_code("ShopeeFood"), Some(PartnerType::ShopeeFood));
        assert_eq!(PartnerType::from_code("Baemin"), None);
    }
}
