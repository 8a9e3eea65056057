use leptos::prelude::*;

/// Общее состояние оболочки, передаваемое через context.
///
/// `editing`: открыта ли форма создания/редактирования (меню предупреждает
/// о потере ввода); `pathname_to_back`: куда вернуться из формы.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub editing: RwSignal<bool>,
    pub pathname_to_back: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            editing: RwSignal::new(false),
            pathname_to_back: RwSignal::new(None),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Форма открыта: запоминаем список, на который нужно вернуться
    pub fn begin_editing(&self, back_to: String) {
        self.editing.set(true);
        self.pathname_to_back.set(Some(back_to));
    }

    pub fn end_editing(&self) {
        self.editing.set(false);
    }

    /// Путь "назад" или `fallback`, если форма открыта напрямую по ссылке
    pub fn back_path(&self, fallback: &str) -> String {
        self.pathname_to_back
            .get_untracked()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
