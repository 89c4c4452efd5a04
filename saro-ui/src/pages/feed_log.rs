//! Regulatory Feed Log Page

use chrono::{DateTime, Local};
use leptos::*;
use saro::pages::feed_log::JURISDICTIONS;
use saro::pages::FeedLogPage;
use serde_json::Value;

use super::forms::{PageHeader, Panel};
use crate::components::json_view::{field, status_class, text};
use crate::components::{ErrorBanner, InlineLoading, StatCard};
use crate::state::global::mount_fetch;
use crate::state::GlobalState;

/// `HH:MM` in local time for an RFC 3339 timestamp, `—` otherwise
fn clock(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn impact_class(impact: &str) -> &'static str {
    match impact {
        "high" | "critical" => "border-red-500",
        "medium" => "border-amber-500",
        _ => "border-green-500",
    }
}

/// Feed log page component
#[component]
pub fn FeedLog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(FeedLogPage::default());

    let client = state.client.clone();
    let reload = move || {
        let Some(jurisdiction) = page.try_update(|p| {
            p.loading = true;
            p.jurisdiction.clone()
        }) else {
            return;
        };
        let client = client.clone();
        mount_fetch(
            page,
            async move { FeedLogPage::fetch(&client, &jurisdiction).await },
            FeedLogPage::apply,
        );
    };
    reload();

    let client = state.client.clone();
    let approve = move |feed_id: String| {
        if page.try_update(|p| p.begin_approve(&feed_id)).is_none() {
            return;
        }
        let client = client.clone();
        spawn_local(async move {
            let result = client.approve_feed(&feed_id).await;
            page.try_update(|p| p.finish_approve(&feed_id, result));
        });
    };

    let meta = move |key: &'static str| page.with(|p| p.meta.as_ref().and_then(|m| m.get(key)).cloned());

    view! {
        <div class="space-y-6">
            <div class="flex items-start justify-between">
                <PageHeader title="Regulatory Feed Log" subtitle="New entries are tagged, reviewed and pushed to the policy library" />
                <Show when=move || page.with(|p| p.new_count() > 0)>
                    <span class="px-3 py-1 rounded-full bg-amber-900/40 text-amber-300 text-sm">
                        {move || format!("{} new items", page.with(|p| p.new_count()))}
                    </span>
                </Show>
            </div>

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Total Feeds" value=Signal::derive(move || page.with(|p| p.total()).to_string()) />
                <StatCard label="New Items" value=Signal::derive(move || page.with(|p| p.new_count()).to_string()) />
                <StatCard label="Last Polled" value=Signal::derive(move || clock(meta("last_polled").as_ref())) />
                <StatCard label="Next Poll" value=Signal::derive(move || clock(meta("next_poll").as_ref())) />
            </div>

            <div class="flex flex-wrap items-center gap-2">
                <span class="text-xs text-slate-400 font-semibold">"Jurisdiction:"</span>
                {JURISDICTIONS
                    .into_iter()
                    .map(|j| {
                        let reload = reload.clone();
                        view! {
                            <button
                                on:click=move |_| {
                                    if page.try_update(|p| p.select_jurisdiction(j)) == Some(true) {
                                        reload();
                                    }
                                }
                                class="px-3 py-1 text-xs rounded-lg bg-slate-800 hover:bg-slate-700"
                                class:bg-blue-600=move || page.with(|p| p.jurisdiction == j)
                            >
                                {j}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    on:click={
                        let reload = reload.clone();
                        move |_| reload()
                    }
                    class="ml-auto px-3 py-1 text-xs rounded-lg bg-slate-800 hover:bg-slate-700"
                >
                    "↻ Refresh"
                </button>
            </div>

            <Show when=move || !page.with(|p| p.loading) fallback=|| view! { <InlineLoading /> }>
                <Panel title="Entries">
                    {move || {
                        let feeds = page.with(|p| p.feeds.clone());
                        if feeds.is_empty() {
                            return view! {
                                <p class="text-sm text-slate-500">"No feed entries for the selected jurisdiction"</p>
                            }.into_view();
                        }
                        feeds
                            .into_iter()
                            .map(|feed| {
                                let feed_id = field(&feed, "feed_id");
                                let status = field(&feed, "status");
                                let is_new = feed.get("is_new").and_then(Value::as_bool).unwrap_or(false);
                                let impact = field(&feed, "impact");
                                let approving = {
                                    let feed_id = feed_id.clone();
                                    move || page.with(|p| p.approving.as_deref() == Some(feed_id.as_str()))
                                };
                                let approve = approve.clone();
                                view! {
                                    <div class=format!(
                                        "bg-slate-800 rounded-lg px-4 py-3 border-l-4 {}",
                                        if is_new { impact_class(&impact) } else { "border-slate-700" },
                                    )>
                                        <div class="flex justify-between gap-3">
                                            <div class="space-y-1">
                                                <div class="flex items-center gap-2 text-xs">
                                                    {is_new.then(|| view! { <span class="text-amber-300 font-bold">"NEW"</span> })}
                                                    <span class="text-blue-300">{field(&feed, "jurisdiction")}</span>
                                                    <span class="text-slate-400">{field(&feed, "regulation")}</span>
                                                    <span class=status_class(&impact)>{format!("{} impact", impact.to_uppercase())}</span>
                                                </div>
                                                <div class="font-medium">{field(&feed, "headline")}</div>
                                                <div class="text-xs text-slate-500">
                                                    {format!("Source: {} · Fetched: {}", text(feed.get("feed")), clock(feed.get("fetched_at")))}
                                                </div>
                                            </div>
                                            <div class="flex flex-col items-end gap-2 shrink-0">
                                                <span class=format!("text-xs uppercase {}", status_class(&status))>
                                                    {status.replace('_', " ")}
                                                </span>
                                                {(status != "reviewed").then(|| view! {
                                                    <button
                                                        on:click=move |_| approve(feed_id.clone())
                                                        disabled=approving.clone()
                                                        class="px-3 py-1 text-xs rounded-lg border border-green-700 text-green-400"
                                                    >
                                                        {move || if approving() { "..." } else { "✓ Approve" }}
                                                    </button>
                                                })}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Panel>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clock_falls_back_for_missing_or_bad_timestamps() {
        assert_eq!(clock(None), "—");
        assert_eq!(clock(Some(&json!("yesterday"))), "—");
        assert_eq!(clock(Some(&json!(42))), "—");
        assert_eq!(clock(Some(&json!("2024-05-01T10:30:00Z"))).len(), 5);
    }

    #[test]
    fn impact_picks_border_colour() {
        assert_eq!(impact_class("high"), "border-red-500");
        assert_eq!(impact_class("medium"), "border-amber-500");
        assert_eq!(impact_class("low"), "border-green-500");
    }
}
