use leptos::*;
use std::time::Duration;

pub const DEFAULT_TOAST_TIMER: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopCenter,
}

/// Auto-dismissing, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub icon: ToastIcon,
    pub title: String,
    pub position: ToastPosition,
    pub show_confirm_button: bool,
    pub timer: Duration,
}

impl Toast {
    pub fn warning(title: impl Into<String>) -> Self {
        Self {
            icon: ToastIcon::Warning,
            title: title.into(),
            position: ToastPosition::TopCenter,
            show_confirm_button: false,
            timer: DEFAULT_TOAST_TIMER,
        }
    }
}

fn position_class(position: ToastPosition) -> &'static str {
    match position {
        ToastPosition::TopCenter => "fixed top-4 left-1/2 -translate-x-1/2 z-[80]",
    }
}

fn icon_glyph(icon: ToastIcon) -> &'static str {
    match icon {
        ToastIcon::Warning => "⚠",
    }
}

#[component]
pub fn ToastMessage(toast: Signal<Option<Toast>>, on_close: Callback<()>) -> impl IntoView {
    move || {
        toast.get().map(|toast| {
            let Toast {
                icon,
                title,
                position,
                show_confirm_button,
                ..
            } = toast;
            let container_class = format!(
                "{} flex items-center gap-3 rounded-lg bg-white shadow-lg border border-amber-300 px-4 py-3",
                position_class(position)
            );
            view! {
                <div class=container_class role="alert" aria-live="polite">
                    <span class="text-amber-500 text-xl">{icon_glyph(icon)}</span>
                    <span class="text-sm font-medium text-gray-900">{title}</span>
                    <Show when=move || show_confirm_button>
                        <button
                            type="button"
                            class="ml-2 rounded px-2 py-1 text-sm bg-blue-500 text-white"
                            on:click=move |_| on_close.call(())
                        >
                            {"OK"}
                        </button>
                    </Show>
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn warning_defaults_match_notification_contract() {
        let toast = Toast::warning("Heads up");
        assert_eq!(toast.icon, ToastIcon::Warning);
        assert_eq!(toast.position, ToastPosition::TopCenter);
        assert!(!toast.show_confirm_button);
        assert_eq!(toast.timer, Duration::from_millis(1500));
    }

    #[test]
    fn toast_renders_title_without_confirm_button() {
        let html = render_to_string(move || {
            let toast = create_rw_signal(Some(Toast::warning("Weekend selected")));
            view! { <ToastMessage toast={toast.into()} on_close=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("Weekend selected"));
        assert!(html.contains("role=\"alert\""));
        assert!(!html.contains(">OK<"));
    }

    #[test]
    fn toast_renders_nothing_when_empty() {
        let html = render_to_string(move || {
            let toast = create_rw_signal(None::<Toast>);
            view! { <ToastMessage toast={toast.into()} on_close=Callback::new(|_| ()) /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
