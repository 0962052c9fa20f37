//! Feature slices rendered by the app shell.

pub(crate) mod dashboard;
