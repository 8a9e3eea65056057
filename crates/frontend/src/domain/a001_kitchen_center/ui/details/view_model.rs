use crate::domain::a001_kitchen_center::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use contracts::domain::a001_kitchen_center::aggregate::{
    CreateKitchenCenterRequest, KitchenCenter, UpdateKitchenCenterRequest,
};
use contracts::enums::status::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Правила формы кухонного центра; логотип обязателен только при создании
pub fn kitchen_center_schema(is_create: bool) -> Validator {
    let logo_rules: &[Rule] = if is_create {
        &[Rule::Required, Rule::MaxLen(500)]
    } else {
        &[Rule::MaxLen(500)]
    };
    Validator::new()
        .field("name", "Kitchen center name", &[Rule::Required, Rule::MaxLen(80)])
        .field("address", "Address", &[Rule::Required, Rule::MaxLen(255)])
        .field("logo", "Logo", logo_rules)
        .field("managerEmail", "Manager email", &[Rule::Required, Rule::Email])
}

pub fn validate_kitchen_center_form(form: &CreateKitchenCenterRequest, is_create: bool) -> FieldErrors {
    kitchen_center_schema(is_create).validate(|field| match field {
        "name" => form.name.clone(),
        "address" => form.address.clone(),
        "logo" => form.logo.clone(),
        "managerEmail" => form.manager_email.clone(),
        _ => String::new(),
    })
}

#[derive(Clone, Copy)]
pub struct KitchenCenterDetailsViewModel {
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

impl KitchenCenterDetailsViewModel {
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

    pub fn form(&self) -> CreateKitchenCenterRequest {
        CreateKitchenCenterRequest {
            name: self.name.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            logo: self.logo.get_untracked().trim().to_string(),
            manager_email: self.manager_email.get_untracked().trim().to_string(),
        }
    }

    fn fill(&self, kc: &KitchenCenter) {
        let form = CreateKitchenCenterRequest::from(kc);
        self.name.set(form.name);
        self.address.set(form.address);
        self.logo.set(form.logo);
        self.manager_email.set(form.manager_email);
        self.status.set(kc.status);
    }

    pub fn load_if_needed(&self, notifications: NotificationService) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_kitchen_center(id).await {
                Ok(kc) => this.fill(&kc),
                Err(e) => notifications.error(e.user_message()),
            }
            this.loading.try_set(false);
        });
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: impl FnOnce() + 'static) {
        let form = self.form();
        let errors = validate_kitchen_center_form(&form, self.is_create());
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = match this.id {
                None => api::create_kitchen_center(&form).await.map(|_| ()),
                Some(id) => {
                    let request =
                        UpdateKitchenCenterRequest::from_form(&form, this.status.get_untracked());
                    api::update_kitchen_center(id, &request).await
                }
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => {
                    let verb = if this.is_create() { "created" } else { "updated" };
                    log::info!("kitchen center {} {}", form.name, verb);
                    notifications.success(format!("Kitchen center \"{}\" {}", form.name, verb));
                    on_saved();
                }
                Err(e) => {
                    log::warn!("kitchen center save failed: {}", e);
                    notifications.error(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateKitchenCenterRequest {
        CreateKitchenCenterRequest {
            name: "MBKC Thu Duc".into(),
            address: "12 Vo Van Ngan, Thu Duc".into(),
            logo: "https://cdn.mbkc.vn/thuduc.png".into(),
            manager_email: "thuduc@mbkc.vn".into(),
        }
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(validate_kitchen_center_form(&filled(), true).is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let form = CreateKitchenCenterRequest {
            address: "  ".into(),
            logo: String::new(),
            manager_email: "thuduc.mbkc.vn".into(),
            ..filled()
        };
        let errors = validate_kitchen_center_form(&form, true);
        assert_eq!(errors.first("address"), Some("Address is required"));
        assert_eq!(errors.first("logo"), Some("Logo is required"));
        assert_eq!(errors.first("managerEmail"), Some("Manager email must be a valid email"));
        assert_eq!(errors.first("name"), None);

        // При редактировании логотип можно не менять
        let errors = validate_kitchen_center_form(&form, false);
        assert_eq!(errors.first("logo"), None);
    }
}
