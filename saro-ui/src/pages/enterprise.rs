//! Enterprise Page

use leptos::*;
use saro::pages::enterprise::EnterpriseTab;
use saro::pages::EnterprisePage;

use super::forms::{ActionButton, PageHeader, Panel, SelectField, TextField};
use crate::components::{ErrorBanner, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_request};
use crate::state::GlobalState;

const INDUSTRIES: [&str; 5] = ["technology", "finance", "healthcare", "insurance", "public_sector"];
const PLANS: [&str; 3] = ["starter", "professional", "enterprise"];

/// Enterprise page component
#[component]
pub fn Enterprise() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(EnterprisePage::default());

    let client = state.client.clone();
    mount_fetch(page, async move { EnterprisePage::fetch(&client).await }, EnterprisePage::apply);

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Enterprise" subtitle="Tenants, availability and integrations" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (EnterpriseTab::Overview, "Overview"),
                    (EnterpriseTab::Tenants, "Tenants"),
                    (EnterpriseTab::Ha, "High Availability"),
                    (EnterpriseTab::Integrations, "Integrations"),
                ]
                active=tab
                on_select=move |t: EnterpriseTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                EnterpriseTab::Overview => view! {
                    <Panel title="Enterprise Metrics">
                        {move || page.with(|p| p.metrics.clone()).map(|metrics| view! { <JsonView value=metrics /> })}
                    </Panel>
                }.into_view(),
                EnterpriseTab::Tenants => view! { <Tenants page=page /> }.into_view(),
                EnterpriseTab::Ha => view! {
                    <Panel title="High Availability">
                        {move || page.with(|p| p.ha_status.clone()).map(|ha| view! { <JsonView value=ha /> })}
                    </Panel>
                }.into_view(),
                EnterpriseTab::Integrations => view! {
                    <Panel title="Integrations">
                        {move || page.with(|p| p.integrations.clone()).map(|integrations| view! { <JsonView value=integrations /> })}
                    </Panel>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Tenants(page: RwSignal<EnterprisePage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_slice(page, |p| p.form.name.clone(), |p, v| p.form.name = v);
    let (industry, set_industry) = create_slice(page, |p| p.form.industry.clone(), |p, v| p.form.industry = v);
    let (plan, set_plan) = create_slice(page, |p| p.form.plan.clone(), |p, v| p.form.plan = v);
    let (email, set_email) = create_slice(
        page,
        |p| p.form.contact_email.clone().unwrap_or_default(),
        |p, v: String| p.form.contact_email = Some(v).filter(|s| !s.trim().is_empty()),
    );

    let client = state.client.clone();
    let create = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            EnterprisePage::begin_create,
            move |tenant| async move { client.create_tenant(&tenant).await },
            EnterprisePage::finish_create,
        );
    };

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <Panel title="New Tenant">
                <TextField label="Name" value=name set_value=set_name placeholder="FinServ Bank AG" />
                <SelectField label="Industry" options=INDUSTRIES.to_vec() value=industry set_value=set_industry />
                <SelectField label="Plan" options=PLANS.to_vec() value=plan set_value=set_plan />
                <TextField label="Contact email" value=email set_value=set_email />
                <ActionButton
                    label="Create Tenant"
                    busy_label="Creating..."
                    busy=Signal::derive(move || page.with(|p| p.creating))
                    on_click=create
                />
                {move || page.with(|p| p.created.clone()).map(|tenant| view! { <JsonView value=tenant /> })}
            </Panel>
            <div class="md:col-span-2">
                <Panel title="Tenants">
                    <RecordTable
                        rows=Signal::derive(move || page.with(|p| p.tenants.clone()))
                        columns=&[("tenant_id", "ID"), ("name", "Name"), ("industry", "Industry"), ("plan", "Plan"), ("status", "Status")]
                    />
                </Panel>
            </div>
        </div>
    }
}
