use crate::components::atoms::EmptyState;
use crate::core::detections::{DetectionRow, DetectionTable, detection_table};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use roadwatch_api_models::DetectionRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RecentDetectionsProps {
    pub detections: Vec<DetectionRecord>,
}

#[function_component(RecentDetections)]
pub(crate) fn recent_detections(props: &RecentDetectionsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);

    let body = match detection_table(&props.detections) {
        DetectionTable::Empty => html! {
            <EmptyState icon="🚗" title={t("table.empty", "No detections yet")} />
        },
        DetectionTable::Rows(rows) => html! {
            <div class="table-container">
                <table class="detections-table">
                    <thead>
                        <tr>
                            <th>{t("table.time", "Time")}</th>
                            <th>{t("table.vehicle", "Vehicle")}</th>
                            <th>{t("table.priority", "Priority")}</th>
                            <th>{t("table.plate", "License Plate")}</th>
                            <th>{t("table.confidence", "Confidence")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(detection_row)}
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div class="card detections-card">
            <div class="card-header">
                <h3>{t("table.title", "Recent Detections")}</h3>
            </div>
            {body}
        </div>
    }
}

fn detection_row(row: &DetectionRow) -> Html {
    html! {
        <tr key={row.key.clone()}>
            <td class="time-cell">{row.time.clone()}</td>
            <td>
                <div class="vehicle-cell">
                    <span class="vehicle-icon" aria-hidden="true">{row.glyph}</span>
                    <span class="vehicle-type">{row.vehicle.clone()}</span>
                </div>
            </td>
            <td>
                <span class={classes!("priority-badge", row.badge_class)}>
                    {row.priority_label.clone()}
                </span>
            </td>
            <td>
                <span class={classes!("plate-number", (!row.has_plate).then_some("no-plate"))}>
                    {row.plate.clone()}
                </span>
            </td>
            <td>
                <div class="confidence-bar">
                    <div class="confidence-fill" style={row.confidence_style()}></div>
                    <span class="confidence-text">{row.confidence_label.clone()}</span>
                </div>
            </td>
        </tr>
    }
}
