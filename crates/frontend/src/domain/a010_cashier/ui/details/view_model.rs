use crate::domain::a010_cashier::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::date_utils::today;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use chrono::NaiveDate;
use contracts::domain::a010_cashier::aggregate::{Cashier, CreateCashierRequest, UpdateCashierRequest};
use contracts::enums::gender::Gender;
use contracts::enums::status::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Номер удостоверения личности: 12 цифр
const CITIZEN_NUMBER_LEN: usize = 12;

/// Email задается только при создании (это логин кассира), аватар обязателен
/// только при создании.
pub fn cashier_schema(is_create: bool, today: NaiveDate) -> Validator {
    let validator = Validator::new()
        .field("fullName", "Full name", &[Rule::Required, Rule::MaxLen(80)]);
    let validator = if is_create {
        validator
            .field("email", "Email", &[Rule::Required, Rule::Email])
            .field("avatar", "Avatar", &[Rule::Required, Rule::MaxLen(500)])
    } else {
        validator.field("avatar", "Avatar", &[Rule::MaxLen(500)])
    };
    validator
        .field("gender", "Gender", &[Rule::Required])
        .field("dateOfBirth", "Date of birth", &[Rule::Required, Rule::PastDate { today }])
        .field(
            "citizenNumber",
            "Citizen number",
            &[
                Rule::Required,
                Rule::Digits,
                Rule::MinLen(CITIZEN_NUMBER_LEN),
                Rule::MaxLen(CITIZEN_NUMBER_LEN),
            ],
        )
}

pub fn validate_cashier_form(form: &CreateCashierRequest, is_create: bool, today: NaiveDate) -> FieldErrors {
    let mut errors = cashier_schema(is_create, today).validate(|field| match field {
        "fullName" => form.full_name.clone(),
        "email" => form.email.clone(),
        "gender" => form.gender.clone(),
        "dateOfBirth" => form.date_of_birth.clone(),
        "citizenNumber" => form.citizen_number.clone(),
        "avatar" => form.avatar.clone(),
        _ => String::new(),
    });
    if !form.gender.is_empty() && Gender::from_code(&form.gender).is_none() {
        errors.add("gender", "Gender must be male or female");
    }
    errors
}

/// ViewModel формы кассира
#[derive(Clone, Copy)]
pub struct CashierDetailsViewModel {
    pub id: Option<i64>,
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub date_of_birth: RwSignal<String>,
    pub citizen_number: RwSignal<String>,
    pub avatar: RwSignal<String>,
    pub status: RwSignal<Status>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CashierDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            full_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            gender: RwSignal::new(Gender::Male.code().to_string()),
            date_of_birth: RwSignal::new(String::new()),
            citizen_number: RwSignal::new(String::new()),
            avatar: RwSignal::new(String::new()),
            status: RwSignal::new(Status::Active),
            errors: RwSignal::new(FieldErrors::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }

    pub fn form(&self) -> CreateCashierRequest {
        CreateCashierRequest {
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            gender: self.gender.get_untracked(),
            date_of_birth: self.date_of_birth.get_untracked(),
            citizen_number: self.citizen_number.get_untracked(),
            avatar: self.avatar.get_untracked(),
        }
        .trimmed()
    }

    fn fill(&self, cashier: &Cashier) {
        let form = CreateCashierRequest::from(cashier);
        self.full_name.set(form.full_name);
        self.email.set(form.email);
        // Форма работает с кодами enum, API может прислать "Female"
        self.gender.set(
            Gender::from_code(&form.gender)
                .map(|g| g.code().to_string())
                .unwrap_or(form.gender),
        );
        self.date_of_birth.set(form.date_of_birth);
        self.citizen_number.set(form.citizen_number);
        self.avatar.set(form.avatar);
        self.status.set(cashier.status);
    }

    pub fn load_if_needed(&self, notifications: NotificationService) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_cashier(id).await {
                Ok(cashier) => this.fill(&cashier),
                Err(e) => notifications.error(e.user_message()),
            }
            this.loading.try_set(false);
        });
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: impl FnOnce() + 'static) {
        let form = self.form();
        let errors = validate_cashier_form(&form, self.is_create(), today());
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = match this.id {
                None => api::create_cashier(&form).await.map(|_| ()),
                Some(id) => {
                    let request = UpdateCashierRequest::from_form(&form, this.status.get_untracked());
                    api::update_cashier(id, &request).await
                }
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => {
                    let verb = if this.is_create() { "created" } else { "updated" };
                    log::info!("cashier {} {}", form.email, verb);
                    notifications.success(format!("Cashier \"{}\" {}", form.full_name, verb));
                    on_saved();
                }
                Err(e) => {
                    log::warn!("cashier save failed: {}", e);
                    notifications.error(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn filled() -> CreateCashierRequest {
        CreateCashierRequest {
            full_name: "Nguyen Van A".into(),
            email: "cashier.a@mbkc.vn".into(),
            gender: "MALE".into(),
            date_of_birth: "2000-05-20".into(),
            citizen_number: "079200001234".into(),
            avatar: "https://cdn.mbkc.vn/a.png".into(),
        }
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(validate_cashier_form(&filled(), true, today()).is_empty());
    }

    #[test]
    fn test_citizen_number_must_be_twelve_digits() {
        for bad in ["07920000123", "0792000012345", "07920000123x"] {
            let form = CreateCashierRequest {
                citizen_number: bad.into(),
                ..filled()
            };
            assert!(
                validate_cashier_form(&form, true, today()).first("citizenNumber").is_some(),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_birth_date_in_future_is_rejected() {
        let form = CreateCashierRequest {
            date_of_birth: "2024-03-16".into(),
            ..filled()
        };
        assert_eq!(
            validate_cashier_form(&form, true, today()).first("dateOfBirth"),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn test_email_and_avatar_only_checked_on_create() {
        let form = CreateCashierRequest {
            email: String::new(),
            avatar: String::new(),
            ..filled()
        };
        let errors = validate_cashier_form(&form, true, today());
        assert_eq!(errors.first("email"), Some("Email is required"));
        assert_eq!(errors.first("avatar"), Some("Avatar is required"));
        assert!(validate_cashier_form(&form, false, today()).is_empty());
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let form = CreateCashierRequest {
            gender: "OTHER".into(),
            ..filled()
        };
        assert_eq!(
            validate_cashier_form(&form, true, today()).first("gender"),
            Some("Gender must be male or female")
        );
    }
}
