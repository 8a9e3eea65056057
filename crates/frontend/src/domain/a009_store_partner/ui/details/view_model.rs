use crate::domain::a003_store::api::fetch_store_options;
use crate::domain::a009_store_partner::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::validation::{FieldErrors, Rule, Validator};
use contracts::domain::a003_store::aggregate::Store;
use contracts::domain::a009_store_partner::aggregate::{
    CreateStorePartnerRequest, Partner, PartnerAccount, StorePartner, UpdateStorePartnerRequest,
};
use contracts::enums::status::Status;
use contracts::shared::list::ListScope;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Значения полей формы как их вводит пользователь
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorePartnerForm {
    pub store_id: String,
    pub partner_id: String,
    pub user_name: String,
    pub password: String,
    pub commission: String,
}

impl StorePartnerForm {
    pub fn create_request(&self) -> Option<CreateStorePartnerRequest> {
        Some(CreateStorePartnerRequest {
            store_id: self.store_id.trim().parse().ok()?,
            partner_accounts: vec![PartnerAccount {
                partner_id: self.partner_id.trim().parse().ok()?,
                user_name: self.user_name.trim().to_string(),
                password: self.password.clone(),
                commission: self.commission.trim().parse().ok()?,
            }],
        })
    }

    /// Пустой пароль при редактировании оставляет прежний
    pub fn update_request(&self, status: Status) -> Option<UpdateStorePartnerRequest> {
        Some(UpdateStorePartnerRequest {
            user_name: self.user_name.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            commission: self.commission.trim().parse().ok()?,
            status,
        })
    }
}

pub fn store_partner_schema(is_create: bool) -> Validator {
    let validator = if is_create {
        Validator::new()
            .field("storeId", "Store", &[Rule::Required])
            .field("partnerId", "Partner", &[Rule::Required])
            .field("password", "Password", &[Rule::Required, Rule::MaxLen(100)])
    } else {
        Validator::new().field("password", "Password", &[Rule::MaxLen(100)])
    };
    validator
        .field("userName", "Partner account", &[Rule::Required, Rule::MaxLen(100)])
        .field("commission", "Commission", &[Rule::Required, Rule::Percent])
}

pub fn validate_store_partner_form(form: &StorePartnerForm, is_create: bool) -> FieldErrors {
    store_partner_schema(is_create).validate(|field| match field {
        "storeId" => form.store_id.clone(),
        "partnerId" => form.partner_id.clone(),
        "userName" => form.user_name.clone(),
        "password" => form.password.clone(),
        "commission" => form.commission.clone(),
        _ => String::new(),
    })
}

enum SaveRequest {
    Create(CreateStorePartnerRequest),
    Update(i64, i64, UpdateStorePartnerRequest),
}

#[derive(Clone, Copy)]
pub struct StorePartnerDetailsViewModel {
    /// (store id, partner id) редактируемой привязки
    pub key: Option<(i64, i64)>,
    pub store_id: RwSignal<String>,
    pub partner_id: RwSignal<String>,
    pub user_name: RwSignal<String>,
    pub password: RwSignal<String>,
    pub commission: RwSignal<String>,
    pub status: RwSignal<Status>,
    /// "Магазин / платформа" для заголовка формы редактирования
    pub link_name: RwSignal<String>,
    pub stores: RwSignal<Vec<Store>>,
    pub partners: RwSignal<Vec<Partner>>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl StorePartnerDetailsViewModel {
    pub fn new(key: Option<(i64, i64)>) -> Self {
        Self {
            key,
            store_id: RwSignal::new(String::new()),
            partner_id: RwSignal::new(String::new()),
            user_name: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            commission: RwSignal::new(String::new()),
            status: RwSignal::new(Status::Active),
            link_name: RwSignal::new(String::new()),
            stores: RwSignal::new(Vec::new()),
            partners: RwSignal::new(Vec::new()),
            errors: RwSignal::new(FieldErrors::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_create(&self) -> bool {
        self.key.is_none()
    }

    pub fn form(&self) -> StorePartnerForm {
        StorePartnerForm {
            store_id: self.store_id.get_untracked(),
            partner_id: self.partner_id.get_untracked(),
            user_name: self.user_name.get_untracked(),
            password: self.password.get_untracked(),
            commission: self.commission.get_untracked(),
        }
    }

    fn fill(&self, link: &StorePartner) {
        self.store_id.set(link.store_id.to_string());
        self.partner_id.set(link.partner_id.to_string());
        self.user_name.set(link.user_name.clone());
        self.commission.set(link.commission.to_string());
        self.status.set(link.status);
        self.link_name.set(format!("{} / {}", link.store_name, link.partner_name));
    }

    /// Создание: справочники магазинов и платформ; редактирование: сама привязка
    pub fn load(&self, scope: ListScope, notifications: NotificationService) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match this.key {
                Some((store_id, partner_id)) => {
                    match api::fetch_store_partner(store_id, partner_id).await {
                        Ok(link) => this.fill(&link),
                        Err(e) => notifications.error(e.user_message()),
                    }
                }
                None => {
                    match fetch_store_options(scope).await {
                        Ok(stores) => {
                            this.stores.try_set(stores);
                        }
                        Err(e) => notifications.error(e.user_message()),
                    }
                    match api::fetch_partners().await {
                        Ok(partners) => {
                            this.partners.try_set(partners);
                        }
                        Err(e) => notifications.error(e.user_message()),
                    }
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: impl FnOnce() + 'static) {
        let form = self.form();
        let errors = validate_store_partner_form(&form, self.is_create());
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }

        let this = *self;
        let request = match this.key {
            None => form.create_request().map(SaveRequest::Create),
            Some((store_id, partner_id)) => form
                .update_request(this.status.get_untracked())
                .map(|request| SaveRequest::Update(store_id, partner_id, request)),
        };
        // Проверенная форма всегда разбирается
        let Some(request) = request else {
            log::warn!("store partner form did not parse");
            return;
        };

        this.saving.set(true);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(request) => api::create_store_partner(request).await,
                SaveRequest::Update(store_id, partner_id, request) => {
                    api::update_store_partner(*store_id, *partner_id, request).await
                }
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => {
                    let verb = if this.is_create() { "created" } else { "updated" };
                    log::info!("store partner {}-{} {}", form.store_id, form.partner_id, verb);
                    notifications.success(format!("Store partner {}", verb));
                    on_saved();
                }
                Err(e) => {
                    log::warn!("store partner save failed: {}", e);
                    notifications.error(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StorePartnerForm {
        StorePartnerForm {
            store_id: "3".into(),
            partner_id: "2".into(),
            user_name: " p4ps_shopee ".into(),
            password: "secret".into(),
            commission: "12.5".into(),
        }
    }

    #[test]
    fn test_create_form_requires_store_and_partner() {
        let form = StorePartnerForm {
            store_id: String::new(),
            partner_id: String::new(),
            ..filled()
        };
        let errors = validate_store_partner_form(&form, true);
        assert_eq!(errors.first("storeId"), Some("Store is required"));
        assert_eq!(errors.first("partnerId"), Some("Partner is required"));
        // При редактировании магазин и платформа не меняются
        assert!(validate_store_partner_form(&form, false).is_empty());
    }

    #[test]
    fn test_commission_is_a_percent() {
        let form = StorePartnerForm {
            commission: "120".into(),
            ..filled()
        };
        assert_eq!(
            validate_store_partner_form(&form, true).first("commission"),
            Some("Commission must be between 0 and 100")
        );
    }

    #[test]
    fn test_requests_from_form() {
        let request = filled().create_request().unwrap();
        assert_eq!(request.store_id, 3);
        assert_eq!(request.partner_accounts[0].partner_id, 2);
        assert_eq!(request.partner_accounts[0].user_name, "p4ps_shopee");
        assert_eq!(request.partner_accounts[0].commission, 12.5);

        let update = StorePartnerForm {
            password: String::new(),
            ..filled()
        }
        .update_request(Status::Inactive)
        .unwrap();
        assert_eq!(update.password, None);
        assert_eq!(update.status, Status::Inactive);
    }
}
