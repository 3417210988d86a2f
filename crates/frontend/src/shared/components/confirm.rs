//! Confirmation dialog service.
//!
//! Destructive and side-effecting actions go through this instead of the
//! native `confirm()`: the requesting component hands over a callback and
//! the dialog runs it only when the user confirms. One request at a time;
//! a second request replaces a still-open one.

use leptos::prelude::*;

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
}

#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    pub fn request(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        on_confirm: Callback<()>,
    ) {
        self.pending.set(Some(ConfirmRequest {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            on_confirm,
        }));
    }

    fn resolve(&self, confirmed: bool) {
        let request = self.pending.get_untracked();
        self.pending.set(None);
        if confirmed {
            if let Some(request) = request {
                request.on_confirm.run(());
            }
        }
    }
}

/// Renders the pending confirmation, if any. Mounted once in the shell.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let service = use_context::<ConfirmService>().expect("ConfirmService context not found");

    view! {
        {move || {
            service.pending.get().map(|request| {
                view! {
                    <div class="modal-overlay" on:click=move |_| service.resolve(false)>
                        <div class="modal modal--confirm" on:click=|e| e.stop_propagation()>
                            <div class="modal-header">
                                <h2 class="modal-title">{request.title.clone()}</h2>
                            </div>
                            <div class="modal-body">
                                <p>{request.message.clone()}</p>
                            </div>
                            <div class="modal-footer">
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| service.resolve(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="button button--danger"
                                    on:click=move |_| service.resolve(true)
                                >
                                    {request.confirm_label.clone()}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
