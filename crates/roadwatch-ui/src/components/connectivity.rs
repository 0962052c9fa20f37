use crate::core::connectivity::ConnectivityState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConnectivityIndicatorProps {
    pub state: ConnectivityState,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ConnectivityIndicator)]
pub(crate) fn connectivity_indicator(props: &ConnectivityIndicatorProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let state = props.state;
    let mut label = bundle.text(state.label_key(), "");
    if let ConnectivityState::Reconnecting { attempt } = state {
        label = format!("{label} ({attempt})");
    }
    let dot_class = if state.is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    html! {
        <div class={classes!("status-indicator", props.class.clone())} role="status">
            <span class={classes!("status-dot", dot_class, "status", state.status_class())}></span>
            <span>{label}</span>
        </div>
    }
}
