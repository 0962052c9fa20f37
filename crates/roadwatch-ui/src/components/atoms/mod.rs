//! Shared UI atoms used across the dashboard cards.

pub(crate) mod empty_state;

pub(crate) use empty_state::EmptyState;
