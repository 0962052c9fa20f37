//! Vehicle detection dashboard feature slice.

mod footer;
mod live_feed;
mod priority_chart;
mod recent_detections;
mod shell;
mod stats_cards;
pub(crate) mod view;

pub(crate) use view::DashboardPage;
