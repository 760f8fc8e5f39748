use futures::future::{AbortHandle, Abortable};
use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::{FeedStatus, PollingTask, ScoreDashboardService},
    config::config,
    domain::{
        chart::ChartConfig,
        logging::{LogComponent, get_logger},
        scores::{AggregateTotals, DateTimeRange, ScoreSeries, recompute, split_series},
    },
    global_state::{active_view, globals, score_feed},
    infrastructure::{ScoreApiClient, rendering::CanvasRenderer},
    presentation::{format_percent, line_chart, pie_chart, record_row},
    time_utils::now_utc,
    view_state::{DashboardView, RangeForm},
};

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 400;
const PIE_SIZE: u32 = 360;

/// 🦀 Root component: navigation plus whichever view the hash selects
#[component]
pub fn App() -> impl IntoView {
    // Signals must be owned by the root so they outlive view switches.
    globals();

    let current = active_view();
    current.set(DashboardView::from_hash(&location_hash()));

    let listener = window_event_listener(ev::hashchange, move |_| {
        current.set(DashboardView::from_hash(&location_hash()));
    });
    on_cleanup(move || listener.remove());

    let shown = create_memo(move |_| current.get());

    view! {
        <style>
            {r#"
            .score-dashboard {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                background: #1f2a36;
                min-height: 100vh;
                padding: 20px;
                color: #e0e0e0;
            }

            .header {
                text-align: center;
                margin-bottom: 16px;
            }

            .nav {
                display: flex;
                justify-content: center;
                gap: 8px;
                margin-bottom: 20px;
            }

            .nav-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 8px 18px;
                border-radius: 6px;
                cursor: pointer;
                font-size: 14px;
            }

            .nav-btn.active {
                background: #36a2eb;
            }

            .panel {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
            }

            canvas {
                border: 2px solid #4a5d73;
                border-radius: 10px;
            }

            .status {
                padding: 8px 14px;
                border-radius: 6px;
                font-size: 14px;
            }

            .status.loading {
                color: #a0a0a0;
            }

            .status.error {
                background: rgba(255, 99, 132, 0.15);
                border: 1px solid #ff6384;
                color: #ff9fb2;
            }

            .latest {
                border-collapse: collapse;
                min-width: 480px;
            }

            .latest th, .latest td {
                padding: 6px 12px;
                border-bottom: 1px solid #4a5d73;
                text-align: left;
            }

            .latest td.fun { color: #36a2eb; }
            .latest td.tired { color: #ff6384; }

            .range-form {
                display: flex;
                flex-wrap: wrap;
                gap: 10px;
                align-items: center;
            }

            .totals {
                display: flex;
                gap: 40px;
            }

            .total-value {
                font-size: 24px;
                font-weight: 700;
                text-align: center;
            }

            .total-label {
                font-size: 12px;
                color: #a0a0a0;
                text-align: center;
            }
            "#}
        </style>
        <div class="score-dashboard">
            <div class="header">
                <h1>"📈 Score Dashboard"</h1>
            </div>
            <NavBar />
            {move || match shown.get() {
                DashboardView::Live => view! { <LiveView /> }.into_view(),
                DashboardView::Totals => view! { <TotalsView /> }.into_view(),
            }}
        </div>
    }
}

fn location_hash() -> String {
    window().location().hash().unwrap_or_default()
}

fn select_view(tab: DashboardView) {
    active_view().set(tab);
    if let Err(e) = window().location().set_hash(tab.as_ref()) {
        get_logger().warn(
            LogComponent::Presentation("NavBar"),
            &format!("⚠️ Could not update location hash: {:?}", e),
        );
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let current = active_view();

    view! {
        <nav class="nav">
            {DashboardView::all()
                .map(|tab| {
                    view! {
                        <button
                            class="nav-btn"
                            class:active=move || current.get() == tab
                            on:click=move |_| select_view(tab)
                        >
                            {tab.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Loading hint before the first result, error message after a failure.
#[component]
fn FeedBanner() -> impl IntoView {
    let feed = score_feed();

    move || {
        let (status, message) = feed.with(|feed| (feed.status(), feed.error().map(|e| e.user_message())));
        match (status, message) {
            (FeedStatus::Loading, _) => {
                view! { <div class="status loading">"⏳ Loading scores..."</div> }.into_view()
            }
            (_, Some(message)) => view! { <div class="status error">{message}</div> }.into_view(),
            _ => ().into_view(),
        }
    }
}

fn draw(canvas: &web_sys::HtmlCanvasElement, chart: &ChartConfig, component: &'static str) {
    if let Err(e) = CanvasRenderer::render(canvas, chart) {
        get_logger().error(
            LogComponent::Presentation(component),
            &format!("❌ Chart render failed: {}", e),
        );
    }
}

/// 🔴 Live view: polls the endpoint and plots every record
#[component]
fn LiveView() -> impl IntoView {
    let feed = score_feed();
    let settings = config();
    let service = Rc::new(ScoreDashboardService::new(ScoreApiClient::new(settings.endpoint.clone())));

    let task = PollingTask::start(settings.refresh_interval, move || {
        let service = Rc::clone(&service);
        async move {
            service.refresh(&feed).await;
        }
    });
    on_cleanup(move || task.cancel());

    let canvas_ref = create_node_ref::<Canvas>();
    create_effect(move |_| {
        let series = feed.with(|feed| feed.records().map(split_series)).unwrap_or_else(ScoreSeries::default);
        if let Some(canvas) = canvas_ref.get() {
            draw(&canvas, &line_chart(&series), "LiveView");
        }
    });

    let latest_rows = move || {
        feed.with(|feed| {
            feed.records()
                .map(|records| records.latest(settings.latest_count).iter().map(record_row).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="panel">
            <FeedBanner />
            <canvas
                id="live-chart"
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
            />
            <h3>{format!("Latest {} records", settings.latest_count)}</h3>
            <table class="latest">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Time"</th>
                        <th>"Score"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=latest_rows
                        key=|row| (row.id, row.created_at.clone())
                        children=move |row| {
                            let class = row.bucket.to_lowercase();
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.created_at}</td>
                                    <td class=class>{row.score}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// 🥧 Totals view: one fetch, then a user-chosen range over the records
#[component]
fn TotalsView() -> impl IntoView {
    let feed = score_feed();
    let initial = DateTimeRange::today(now_utc());

    let (form, set_form) = create_signal(RangeForm::from_range(&initial));
    let (range, set_range) = create_signal(initial);
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (totals, set_totals) = create_signal(AggregateTotals::default());

    let recompute_now = move || {
        let next = feed.with_untracked(|feed| {
            feed.records().map(|records| recompute(records, &range.get_untracked()))
        });
        if let Some(next) = next {
            set_totals.set(next);
        }
    };

    // Records already loaded by the live view count right away.
    recompute_now();

    let service = ScoreDashboardService::new(ScoreApiClient::new(config().endpoint.clone()));
    let (abort, registration) = AbortHandle::new_pair();
    spawn_local(async move {
        let fetch = async move {
            if service.refresh(&feed).await.is_some() {
                recompute_now();
            }
        };
        if Abortable::new(fetch, registration).await.is_err() {
            get_logger().debug(LogComponent::Presentation("TotalsView"), "Totals fetch abandoned");
        }
    });
    on_cleanup(move || abort.abort());

    let update_form = move |edit: fn(&mut RangeForm, String), value: String| {
        set_form.update(|form| edit(form, value));
        match form.with_untracked(RangeForm::to_range) {
            Ok(next) => {
                set_form_error.set(None);
                set_range.set(next);
                recompute_now();
            }
            Err(e) => set_form_error.set(Some(e.to_string())),
        }
    };

    let canvas_ref = create_node_ref::<Canvas>();
    create_effect(move |_| {
        let chart = pie_chart(&totals.get());
        if let Some(canvas) = canvas_ref.get() {
            draw(&canvas, &chart, "TotalsView");
        }
    });

    let start_hour = Signal::derive(move || form.with(|form| form.start_hour.clone()));
    let end_hour = Signal::derive(move || form.with(|form| form.end_hour.clone()));

    view! {
        <div class="panel">
            <FeedBanner />
            <div class="range-form">
                <label>"From"</label>
                <input
                    type="date"
                    prop:value=move || form.with(|form| form.start_date.clone())
                    on:change=move |ev| update_form(|form, v| form.start_date = v, event_target_value(&ev))
                />
                <select on:change=move |ev| update_form(|form, v| form.start_hour = v, event_target_value(&ev))>
                    {hour_options(start_hour)}
                </select>
                <label>"To"</label>
                <input
                    type="date"
                    prop:value=move || form.with(|form| form.end_date.clone())
                    on:change=move |ev| update_form(|form, v| form.end_date = v, event_target_value(&ev))
                />
                <select on:change=move |ev| update_form(|form, v| form.end_hour = v, event_target_value(&ev))>
                    {hour_options(end_hour)}
                </select>
            </div>
            {move || form_error.get().map(|message| view! { <div class="status error">{message}</div> })}
            {move || {
                range
                    .with(DateTimeRange::is_inverted)
                    .then(|| view! { <div class="status error">"The start of the range is after its end."</div> })
            }}
            <canvas
                id="totals-chart"
                node_ref=canvas_ref
                width=PIE_SIZE
                height=PIE_SIZE
            />
            <div class="totals">
                <div>
                    <div class="total-value">{move || totals.get().fun}</div>
                    <div class="total-label">
                        {move || format!("Fun ({})", format_percent(totals.get().fun_percent()))}
                    </div>
                </div>
                <div>
                    <div class="total-value">{move || totals.get().tired}</div>
                    <div class="total-label">
                        {move || format!("Tired ({})", format_percent(totals.get().tired_percent()))}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn hour_options(selected: Signal<String>) -> impl IntoView {
    RangeForm::hour_options()
        .into_iter()
        .map(|(value, label)| {
            let current = value.clone();
            view! {
                <option value=value prop:selected=move || selected.get() == current>
                    {label}
                </option>
            }
        })
        .collect_view()
}
