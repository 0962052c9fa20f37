#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Roadwatch vehicle detection dashboard.
//! This crate holds the Yew front-end entrypoint plus the DOM-free dashboard
//! logic (stats, chart, table, connectivity) it renders.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::chart::PriorityChartModel;
    use crate::core::demo::demo_snapshot;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn demo_chart_renders_share_labels() {
        let chart = PriorityChartModel::from_stats(&demo_snapshot().stats);
        let labels: Vec<_> = chart.bars.iter().map(|bar| bar.percentage_label()).collect();
        assert_eq!(labels, vec!["8.2%", "30.6%", "61.2%"]);
    }

    #[test]
    fn chart_labels_translate() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let chart = PriorityChartModel::from_stats(&demo_snapshot().stats);
        assert_eq!(bundle.text(chart.bars[0].label_key(), ""), "High Priority");
    }
}
