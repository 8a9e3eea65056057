use crate::domain::a007_banking_account::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use contracts::domain::a007_banking_account::aggregate::CreateBankingAccountRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn banking_account_schema() -> Validator {
    Validator::new()
        .field("bankName", "Bank name", &[Rule::Required, Rule::MaxLen(100)])
        .field(
            "numberAccount",
            "Account number",
            &[Rule::Required, Rule::Digits, Rule::MaxLen(20)],
        )
        .field("bankLogo", "Bank logo", &[Rule::Required])
}

pub fn validate_banking_account_form(form: &CreateBankingAccountRequest) -> FieldErrors {
    banking_account_schema().validate(|field| match field {
        "bankName" => form.bank_name.clone(),
        "numberAccount" => form.number_account.clone(),
        "bankLogo" => form.bank_logo.clone(),
        _ => String::new(),
    })
}

#[derive(Clone, Copy)]
pub struct BankingAccountCreateViewModel {
    pub bank_name: RwSignal<String>,
    pub number_account: RwSignal<String>,
    pub bank_logo: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
}

impl BankingAccountCreateViewModel {
    pub fn new() -> Self {
        Self {
            bank_name: RwSignal::new(String::new()),
            number_account: RwSignal::new(String::new()),
            bank_logo: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::default()),
            saving: RwSignal::new(false),
        }
    }

    pub fn form(&self) -> CreateBankingAccountRequest {
        CreateBankingAccountRequest {
            bank_name: self.bank_name.get_untracked().trim().to_string(),
            number_account: self.number_account.get_untracked().trim().to_string(),
            bank_logo: self.bank_logo.get_untracked().trim().to_string(),
        }
    }

    /// Проверка и создание счета; при ошибке API поля не сбрасываются
    pub fn save_command(&self, notifications: NotificationService, on_saved: impl FnOnce() + 'static) {
        let form = self.form();
        let errors = validate_banking_account_form(&form);
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = api::create_banking_account(&form).await;
            this.saving.try_set(false);
            match result {
                Ok(account) => {
                    log::info!("banking account {} created", account.banking_account_id);
                    notifications.success(format!("Banking account \"{}\" created", form.bank_name));
                    on_saved();
                }
                Err(e) => {
                    log::warn!("banking account create failed: {}", e);
                    notifications.error(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_digits_only() {
        let form = CreateBankingAccountRequest {
            bank_name: "Vietcombank".into(),
            number_account: "0071-0006".into(),
            bank_logo: "https://cdn.mbkc.vn/vcb.png".into(),
        };
        let errors = validate_banking_account_form(&form);
        assert_eq!(
            errors.first("numberAccount"),
            Some("Account number must contain only digits")
        );
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_banking_account_form(&CreateBankingAccountRequest::default());
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["bankLogo", "bankName", "numberAccount"]
        );
        assert_eq!(errors.first("bankLogo"), Some("Bank logo is required"));
    }
}
