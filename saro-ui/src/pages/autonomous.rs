//! Autonomous Governance Page
//!
//! Remediation bots, the model marketplace and the ethics scanner.

use leptos::*;
use saro::pages::autonomous::{AutonomousTab, BOT_TYPES, SURVEILLANCE_DEMOS};
use saro::pages::AutonomousPage;

use super::forms::{ActionButton, ChipButton, PageHeader, Panel, SelectField, TextArea, TextField};
use crate::components::json_view::field;
use crate::components::{ErrorBanner, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_request};
use crate::state::GlobalState;

const CATEGORIES: [&str; 5] = ["finance", "healthcare", "hr", "nlp", "general"];

/// Autonomous page component
#[component]
pub fn Autonomous() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(AutonomousPage::default());

    let client = state.client.clone();
    mount_fetch(
        page,
        async move { AutonomousPage::fetch(&client, "ALL").await },
        AutonomousPage::apply,
    );

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Autonomous Governance" subtitle="Remediation bots, model marketplace and surveillance ethics" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (AutonomousTab::Bots, "Bots"),
                    (AutonomousTab::Marketplace, "Marketplace"),
                    (AutonomousTab::Ethics, "Ethics"),
                ]
                active=tab
                on_select=move |t: AutonomousTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                AutonomousTab::Bots => view! { <Bots page=page /> }.into_view(),
                AutonomousTab::Marketplace => view! { <Marketplace page=page /> }.into_view(),
                AutonomousTab::Ethics => view! { <Ethics page=page /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Bots(page: RwSignal<AutonomousPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (bot_type, set_bot_type) = create_slice(page, |p| p.bot_form.bot_type.clone(), |p, v| p.bot_form.bot_type = v);
    let (finding, set_finding) =
        create_slice(page, |p| p.bot_form.finding_id.clone(), |p, v| p.bot_form.finding_id = v);

    let client = state.client.clone();
    let execute = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            |p: &mut AutonomousPage| Some(p.begin_execute()),
            move |request| async move { client.execute_bot(&request).await },
            AutonomousPage::finish_execute,
        );
    };

    let client = state.client.clone();
    let revert = move |job_id: String| {
        let client = client.clone();
        run_request(
            page,
            move |_: &mut AutonomousPage| Some(job_id),
            move |job_id| async move { client.revert_bot(&job_id).await },
            AutonomousPage::finish_revert,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Execute Bot">
                <SelectField
                    label="Bot"
                    options=BOT_TYPES.iter().map(|(id, _)| *id).collect()
                    value=bot_type
                    set_value=set_bot_type
                />
                <p class="text-xs text-slate-500">
                    {move || {
                        let selected = bot_type.get();
                        BOT_TYPES.iter().find(|(id, _)| *id == selected).map(|(_, label)| *label).unwrap_or_default()
                    }}
                </p>
                <TextField label="Finding ID" value=finding set_value=set_finding placeholder="FIND-001" />
                <ActionButton
                    label="Execute"
                    busy_label="Executing..."
                    busy=Signal::derive(move || page.with(|p| p.busy))
                    on_click=execute
                />
                {move || page.with(|p| p.bot_result.clone()).map(|job| view! { <JsonView value=job /> })}
                {move || page.with(|p| p.bot_status.clone()).map(|status| view! {
                    <h3 class="text-sm text-slate-400">"Bot fleet"</h3>
                    <JsonView value=status />
                })}
            </Panel>
            <Panel title="Recent Actions">
                {move || page.with(|p| p.revert_message.clone()).map(|message| view! {
                    <div class="text-sm text-green-400">{message}</div>
                })}
                <div class="space-y-2">
                    {move || {
                        page.with(|p| p.bot_actions.clone())
                            .into_iter()
                            .map(|action| {
                                let job_id = field(&action, "job_id");
                                let revert = revert.clone();
                                view! {
                                    <div class="flex items-center justify-between bg-slate-800 rounded-lg px-4 py-3">
                                        <div>
                                            <div class="font-medium">{field(&action, "bot_type")}</div>
                                            <div class="text-xs text-slate-400">
                                                {format!("{} · {}", job_id, field(&action, "status"))}
                                            </div>
                                        </div>
                                        <ChipButton label="Revert" on_click=move |_: ()| revert(job_id.clone()) />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Panel>
        </div>
    }
}

#[component]
fn Marketplace(page: RwSignal<AutonomousPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let client = state.client.clone();
    let category = Signal::derive(move || page.with(|p| p.category.clone()));
    let set_category = SignalSetter::map(move |category: String| {
        if page.try_update(|p| p.select_category(&category)) == Some(true) {
            let client = client.clone();
            mount_fetch(
                page,
                async move { client.marketplace_listings(&category).await },
                AutonomousPage::apply_listings,
            );
        }
    });

    let client = state.client.clone();
    let purchase = move |listing_id: String| {
        let client = client.clone();
        run_request(
            page,
            move |p: &mut AutonomousPage| Some(p.begin_purchase(&listing_id)),
            move |request| async move { client.purchase_model(&request).await },
            AutonomousPage::finish_purchase,
        );
    };

    let (name, set_name) = create_slice(page, |p| p.list_form.name.clone(), |p, v| p.list_form.name = v);
    let (vendor, set_vendor) = create_slice(page, |p| p.list_form.vendor.clone(), |p, v| p.list_form.vendor = v);
    let (list_category, set_list_category) =
        create_slice(page, |p| p.list_form.category.clone(), |p, v| p.list_form.category = v);
    let (price, set_price) = create_slice(
        page,
        |p| p.list_form.price_usd.to_string(),
        |p, v: String| {
            if let Ok(price) = v.trim().parse() {
                p.list_form.price_usd = price;
            }
        },
    );

    let client = state.client.clone();
    let list = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AutonomousPage::begin_list,
            move |listing| async move { client.list_model(&listing).await },
            AutonomousPage::finish_list,
        );
    };

    let mut filter_options = vec!["ALL"];
    filter_options.extend(CATEGORIES);

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <div class="md:col-span-2 space-y-6">
                <Panel title="Listings">
                    <SelectField label="Category" options=filter_options value=category set_value=set_category />
                    <div class="grid md:grid-cols-2 gap-3">
                        {move || {
                            page.with(|p| p.listings.clone())
                                .into_iter()
                                .map(|listing| {
                                    let listing_id = field(&listing, "listing_id");
                                    let purchase = purchase.clone();
                                    view! {
                                        <div class="bg-slate-800 rounded-lg p-4 space-y-1">
                                            <div class="font-medium">{field(&listing, "name")}</div>
                                            <div class="text-xs text-slate-400">
                                                {format!("{} · {}", field(&listing, "vendor"), field(&listing, "category"))}
                                            </div>
                                            <div class="flex items-center justify-between pt-2">
                                                <span class="text-sm">{format!("${}", field(&listing, "price_usd"))}</span>
                                                <ChipButton label="Purchase" on_click=move |_: ()| purchase(listing_id.clone()) />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    {move || page.with(|p| p.purchase_result.clone()).map(|receipt| view! { <JsonView value=receipt /> })}
                </Panel>
                {move || page.with(|p| p.market_stats.clone()).map(|stats| view! {
                    <Panel title="Marketplace Stats">
                        <JsonView value=stats />
                    </Panel>
                })}
            </div>
            <Panel title="List a Model">
                <TextField label="Model name" value=name set_value=set_name />
                <TextField label="Vendor" value=vendor set_value=set_vendor />
                <SelectField label="Category" options=CATEGORIES.to_vec() value=list_category set_value=set_list_category />
                <TextField label="Price (USD)" value=price set_value=set_price />
                <ActionButton
                    label="List Model"
                    busy_label="Listing..."
                    busy=Signal::derive(move || page.with(|p| p.busy))
                    on_click=list
                />
                {move || page.with(|p| p.list_result.clone()).map(|listed| view! { <JsonView value=listed /> })}
            </Panel>
        </div>
    }
}

#[component]
fn Ethics(page: RwSignal<AutonomousPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (system, set_system) =
        create_slice(page, |p| p.ethics_form.system_name.clone(), |p, v| p.ethics_form.system_name = v);
    let (description, set_description) =
        create_slice(page, |p| p.ethics_form.description.clone(), |p, v| p.ethics_form.description = v);

    let client = state.client.clone();
    let scan = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AutonomousPage::begin_scan,
            move |request| async move { client.surveillance_scan(&request).await },
            AutonomousPage::finish_scan,
        );
    };

    let client = state.client.clone();
    let dpia = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            AutonomousPage::begin_dpia,
            move |request| async move { client.generate_dpia(&request).await },
            AutonomousPage::finish_dpia,
        );
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <Panel title="Surveillance Scan">
                <div class="flex flex-wrap gap-2">
                    {SURVEILLANCE_DEMOS
                        .iter()
                        .enumerate()
                        .map(|(index, (label, _))| view! {
                            <ChipButton label=*label on_click=move |_: ()| page.update(|p| p.use_surveillance_demo(index)) />
                        })
                        .collect_view()}
                </div>
                <TextField label="System name" value=system set_value=set_system />
                <TextArea label="System description" value=description set_value=set_description rows=5 />
                <div class="flex space-x-2">
                    <ActionButton
                        label="Run Ethics Scan"
                        busy_label="Scanning..."
                        busy=Signal::derive(move || page.with(|p| p.busy))
                        on_click=scan
                    />
                    <ActionButton
                        label="Generate DPIA"
                        busy=Signal::derive(move || page.with(|p| p.busy))
                        on_click=dpia
                    />
                </div>
                {move || page.with(|p| p.ethics_result.clone()).map(|result| view! { <JsonView value=result /> })}
                {move || page.with(|p| p.dpia.clone()).map(|dpia| view! {
                    <h3 class="text-sm text-slate-400">"Data Protection Impact Assessment"</h3>
                    <JsonView value=dpia />
                })}
            </Panel>
            <Panel title="Prohibited Use Cases">
                <RecordTable
                    rows=Signal::derive(move || page.with(|p| p.prohibited.clone()))
                    columns=&[("category", "Category"), ("description", "Description")]
                />
            </Panel>
        </div>
    }
}
