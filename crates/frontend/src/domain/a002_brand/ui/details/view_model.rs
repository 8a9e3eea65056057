use crate::domain::a002_brand::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use contracts::domain::a002_brand::aggregate::{Brand, CreateBrandRequest, UpdateBrandRequest};
use contracts::enums::status::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Правила формы бренда; логотип обязателен только при создании
pub fn brand_schema(is_create: bool) -> Validator {
    let logo_rules: &[Rule] = if is_create {
        &[Rule::Required, Rule::MaxLen(500)]
    } else {
        &[Rule::MaxLen(500)]
    };
    Validator::new()
        .field("name", "Brand name", &[Rule::Required, Rule::MaxLen(80)])
        .field("address", "Address", &[Rule::Required, Rule::MaxLen(255)])
        .field("logo", "Logo", logo_rules)
        .field("managerEmail", "Manager email", &[Rule::Required, Rule::Email])
}

pub fn validate_brand_form(form: &CreateBrandRequest, is_create: bool) -> FieldErrors {
    brand_schema(is_create).validate(|field| match field {
        "name" => form.name.clone(),
        "address" => form.address.clone(),
        "logo" => form.logo.clone(),
        "managerEmail" => form.manager_email.clone(),
        _ => String::new(),
    })
}

/// ViewModel формы создания/редактирования бренда
#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub id: Option<i64>,
    pub name: RwSignal<String>,
    pub address: RwSignal<String>,
    pub logo: RwSignal<String>,
    pub manager_email: RwSignal<String>,
    pub status: RwSignal<Status>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl BrandDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            logo: RwSignal::new(String::new()),
            manager_email: RwSignal::new(String::new()),
            status: RwSignal::new(Status::Active),
            errors: RwSignal::new(FieldErrors::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }

    pub fn form(&self) -> CreateBrandRequest {
        CreateBrandRequest {
            name: self.name.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            logo: self.logo.get_untracked().trim().to_string(),
            manager_email: self.manager_email.get_untracked().trim().to_string(),
        }
    }

    fn fill(&self, brand: &Brand) {
        let form = CreateBrandRequest::from(brand);
        self.name.set(form.name);
        self.address.set(form.address);
        self.logo.set(form.logo);
        self.manager_email.set(form.manager_email);
        self.status.set(brand.status);
    }

    /// Load brand for the edit form
    pub fn load_if_needed(&self, notifications: NotificationService) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_brand(id).await {
                Ok(brand) => this.fill(&brand),
                Err(e) => notifications.error(e.user_message()),
            }
            this.loading.try_set(false);
        });
    }

    /// Проверка и отправка. При ошибке форма остается открытой и заполненной.
    pub fn save_command(&self, notifications: NotificationService, on_saved: impl FnOnce() + 'static) {
        let form = self.form();
        let errors = validate_brand_form(&form, self.is_create());
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = match this.id {
                None => api::create_brand(&form).await.map(|_| ()),
                Some(id) => {
                    let request = UpdateBrandRequest::from_form(&form, this.status.get_untracked());
                    api::update_brand(id, &request).await
                }
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => {
                    let verb = if this.is_create() { "created" } else { "updated" };
                    log::info!("brand {} {}", form.name, verb);
                    notifications.success(format!("Brand \"{}\" {}", form.name, verb));
                    on_saved();
                }
                Err(e) => {
                    log::warn!("brand save failed: {}", e);
                    notifications.error(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateBrandRequest {
        CreateBrandRequest {
            name: "Pho Thin".into(),
            address: "13 Lo Duc, Ha Noi".into(),
            logo: "https://cdn.mbkc.vn/phothin.png".into(),
            manager_email: "manager@phothin.vn".into(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_brand_form(&filled(), true).is_empty());
    }

    #[test]
    fn test_logo_required_only_on_create() {
        let form = CreateBrandRequest {
            logo: String::new(),
            ..filled()
        };
        assert_eq!(validate_brand_form(&form, true).first("logo"), Some("Logo is required"));
        assert!(validate_brand_form(&form, false).is_empty());
    }

    #[test]
    fn test_invalid_email_and_long_name() {
        let form = CreateBrandRequest {
            name: "x".repeat(81),
            manager_email: "manager.phothin.vn".into(),
            ..filled()
        };
        let errors = validate_brand_form(&form, false);
        assert_eq!(errors.first("name"), Some("Brand name must be at most 80 characters"));
        assert_eq!(errors.first("managerEmail"), Some("Manager email must be a valid email"));
    }
}
