use leptos::prelude::*;
use thaw::*;

/// Диалог подтверждения удаления.
///
/// Закрывается сам после "Delete"; сам запрос выполняет `on_confirm`.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>{move || message.get()}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
