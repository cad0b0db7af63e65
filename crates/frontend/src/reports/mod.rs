//! Admin analytics: monthly trends, fault rates by model and a maintenance
//! summary over a chosen date range.

use crate::shared::components::ui::{Badge, Input};
use crate::shared::date_utils::today;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;
use contracts::reports::{
    Analytics, FaultRateRow, MaintenanceSummary, SummaryRange, ANALYTICS_PATH, FAULT_RATE_PATH,
    MAINTENANCE_SUMMARY_PATH,
};
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;
use thaw::Card;

/// `/api/reports/maintenance-summary?start_date=..&end_date=..`
fn summary_url(range: &SummaryRange) -> String {
    match serde_qs::to_string(range) {
        Ok(query) => format!("{}?{}", MAINTENANCE_SUMMARY_PATH, query),
        Err(e) => {
            log::warn!("summary query not encoded: {}", e);
            MAINTENANCE_SUMMARY_PATH.to_string()
        }
    }
}

fn opt_count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "0".into())
}

fn opt_money(value: Option<f64>) -> String {
    format_amount(value.unwrap_or(0.0))
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or("-")
        .to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn ReportsPage() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let summary_load = PageLoad::new();

    let analytics = RwSignal::new(Analytics::default());
    let fault_rates = RwSignal::new(Vec::<FaultRateRow>::new());
    let summary = RwSignal::new(MaintenanceSummary::default());
    let range = RwSignal::new(SummaryRange::default_for(today()));

    let fetch_summary = move || {
        let url = summary_url(&range.get_untracked());
        summary_load.run(
            auth,
            move |client| async move { client.get::<MaintenanceSummary>(&url).await },
            move |data| summary.set(data),
        );
    };

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.get::<Analytics>(ANALYTICS_PATH),
                    client.get::<Vec<FaultRateRow>>(FAULT_RATE_PATH),
                )
            },
            move |(analytics_data, fault_rows)| {
                analytics.set(analytics_data);
                fault_rates.set(fault_rows);
            },
        );
        fetch_summary();
    };

    let apply_range = move |_| {
        if let Err(msg) = range.get_untracked().validate() {
            alert(&msg);
            return;
        }
        fetch_summary();
    };

    fetch();

    view! {
        <PageFrame page_id="reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Reports">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="report-grid">
                <Card>
                    <h3 class="card__title">"Monthly revenue"</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Month"</th>
                                <th class="table__header-cell table__header-cell--numeric">"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || analytics.with(|a| a.monthly_revenue.iter().map(|m| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{m.month.clone()}</td>
                                    <td class="table__cell table__cell--numeric">{opt_money(m.revenue)}</td>
                                </tr>
                            }).collect_view())}
                        </tbody>
                    </table>
                </Card>

                <Card>
                    <h3 class="card__title">"Jobs per month"</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Month"</th>
                                <th class="table__header-cell table__header-cell--numeric">"Jobs"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || analytics.with(|a| a.monthly_jobs.iter().map(|m| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{m.month.clone()}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(m.job_count)}</td>
                                </tr>
                            }).collect_view())}
                        </tbody>
                    </table>
                </Card>

                <Card>
                    <h3 class="card__title">"Elevator status"</h3>
                    <table class="table__data table--striped">
                        <tbody>
                            {move || analytics.with(|a| a.elevator_status.iter().map(|s| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{s.state.clone()}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(s.count)}</td>
                                </tr>
                            }).collect_view())}
                        </tbody>
                    </table>
                </Card>

                <Card>
                    <h3 class="card__title">"Most faults"</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Elevator"</th>
                                <th class="table__header-cell">"Brand"</th>
                                <th class="table__header-cell table__header-cell--numeric">"Faults"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || analytics.with(|a| a.top_issues.iter().map(|issue| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{or_dash(issue.name.as_deref().or(issue.id.as_deref()))}</td>
                                    <td class="table__cell">{or_dash(issue.brand.as_deref())}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(issue.fault_count)}</td>
                                </tr>
                            }).collect_view())}
                        </tbody>
                    </table>
                </Card>

                <Card>
                    <h3 class="card__title">"Most used parts"</h3>
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell table__header-cell--numeric">"Used"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || analytics.with(|a| a.top_parts.iter().map(|part| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{part.part_code.clone()}</td>
                                    <td class="table__cell">{or_dash(part.name.as_deref())}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(part.usage_count)}</td>
                                </tr>
                            }).collect_view())}
                        </tbody>
                    </table>
                </Card>
            </div>

            <Card>
                <h3 class="card__title">"Fault rate by model"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Brand"</th>
                            <th class="table__header-cell">"Model"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Elevators"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Faults"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Rate"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || fault_rates.get().into_iter().map(|row| {
                            let high = row.is_high();
                            let rate = format!("{:.1}%", row.fault_rate_percent.unwrap_or(0.0));
                            view! {
                                <tr class="table__row" class:table__row--alert=high>
                                    <td class="table__cell">{or_dash(row.brand.as_deref())}</td>
                                    <td class="table__cell">{or_dash(row.model.as_deref())}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(row.total_elevators)}</td>
                                    <td class="table__cell table__cell--numeric">{opt_count(row.fault_count)}</td>
                                    <td class="table__cell table__cell--numeric">
                                        {if high {
                                            view! { <Badge variant="error">{rate}</Badge> }.into_any()
                                        } else {
                                            view! { <span>{rate}</span> }.into_any()
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </Card>

            <Card>
                <h3 class="card__title">"Maintenance summary"</h3>
                <div class="filter-row">
                    <Input
                        label="From"
                        input_type="date"
                        value=Signal::derive(move || range.with(|r| r.start_date.clone()))
                        on_input=Callback::new(move |v: String| range.update(|r| r.start_date = v))
                    />
                    <Input
                        label="To"
                        input_type="date"
                        value=Signal::derive(move || range.with(|r| r.end_date.clone()))
                        on_input=Callback::new(move |v: String| range.update(|r| r.end_date = v))
                    />
                    <button class="button button--primary" on:click=apply_range>
                        "Apply"
                    </button>
                </div>

                <ErrorBanner error=summary_load.error />
                <LoadingIndicator loading=summary_load.loading />

                {move || summary.with(|s| {
                    let totals = &s.summary;
                    let avg_hours = totals
                        .avg_duration_hours
                        .map(|h| format!("{:.1}", h))
                        .unwrap_or_else(|| "-".into());
                    view! {
                        <dl class="summary-list">
                            <dt>"Jobs"</dt><dd>{opt_count(totals.total_jobs)}</dd>
                            <dt>"Total cost"</dt><dd>{opt_money(totals.total_cost)}</dd>
                            <dt>"Labor"</dt><dd>{opt_money(totals.total_labor_cost)}</dd>
                            <dt>"Parts"</dt><dd>{opt_money(totals.total_parts_cost)}</dd>
                            <dt>"Avg. duration (h)"</dt><dd>{avg_hours}</dd>
                            <dt>"Elevators serviced"</dt><dd>{opt_count(totals.elevators_serviced)}</dd>
                        </dl>
                    }
                })}

                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Job type"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Count"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || summary.with(|s| s.by_type.iter().map(|t| view! {
                            <tr class="table__row">
                                <td class="table__cell">{t.job_type.clone()}</td>
                                <td class="table__cell table__cell--numeric">{opt_count(t.count)}</td>
                                <td class="table__cell table__cell--numeric">{opt_money(t.cost)}</td>
                            </tr>
                        }).collect_view())}
                    </tbody>
                </table>
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_url_carries_range() {
        let range = SummaryRange {
            start_date: "2024-02-01".into(),
            end_date: "2024-03-01".into(),
        };
        assert_eq!(
            summary_url(&range),
            "/api/reports/maintenance-summary?start_date=2024-02-01&end_date=2024-03-01"
        );
    }

    #[test]
    fn test_missing_values_render_placeholders() {
        assert_eq!(opt_count(None), "0");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("Otis")), "Otis");
    }
}
