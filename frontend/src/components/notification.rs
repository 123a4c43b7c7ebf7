use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

/// One transient notification: loading while the submit request is in
/// flight, then success or error once it resolves.
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Toast,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let accent = match props.toast.kind {
        ToastKind::Loading => "#2563eb",
        ToastKind::Success => "#16a34a",
        ToastKind::Error => "#dc2626",
    };

    html! {
        <div class="toast" style={format!("border-left: 4px solid {};", accent)}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: #1f2937;
                        color: #f9fafb;
                        padding: 0.875rem 1.25rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        animation: toast-slide-in 0.3s ease-out;
                        max-width: 24rem;
                    }
                    @keyframes toast-slide-in {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-spinner {
                        width: 1rem;
                        height: 1rem;
                        flex-shrink: 0;
                        border: 2px solid rgba(249, 250, 251, 0.3);
                        border-top-color: #f9fafb;
                        border-radius: 50%;
                        animation: toast-spin 1s linear infinite;
                    }
                    @keyframes toast-spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
            if props.toast.kind == ToastKind::Loading {
                <span class="toast-spinner"></span>
            }
            <span>{ &props.toast.message }</span>
        </div>
    }
}
