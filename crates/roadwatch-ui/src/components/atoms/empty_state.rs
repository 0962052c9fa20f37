//! Empty state panel for list-like views.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    pub icon: AttrValue,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <span class="empty-icon" aria-hidden="true">{props.icon.clone()}</span>
            <p>{props.title.clone()}</p>
        </div>
    }
}
