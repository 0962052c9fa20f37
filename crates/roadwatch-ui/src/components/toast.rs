use crate::core::ui::Toast;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::timers::callback::Timeout;
use js_sys::Date;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dismiss_label: AttrValue = bundle.text("toast.dismiss", "Dismiss").into();
    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastCard
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                    dismiss_label={dismiss_label.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
    dismiss_label: AttrValue,
}

/// One toast with its own timer, started once per toast id.
#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        let remaining = props.toast.remaining_ms(Date::now());
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let handle = Timeout::new(remaining, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            id,
        );
    }
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status">
            <span>{props.toast.message.clone()}</span>
            <button class="ghost" aria-label={props.dismiss_label.clone()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
