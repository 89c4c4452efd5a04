//! Policy Library Page

use leptos::*;
use saro::pages::policy_library::{PolicyTab, DEMO_TEXTS, JURISDICTIONS, STATUSES};
use saro::pages::PolicyLibraryPage;
use std::rc::Rc;

use super::forms::{ActionButton, ChipButton, PageHeader, Panel, SelectField, TextArea, TextField};
use crate::api::Client;
use crate::components::json_view::{field, status_class};
use crate::components::{ErrorBanner, InlineLoading, JsonView, RecordTable, TabBar};
use crate::state::global::{mount_fetch, run_on_copy, run_request};
use crate::state::GlobalState;

const DOC_TYPES: [&str; 4] = ["regulation", "guideline", "standard", "internal_policy"];
const REGULATIONS: [&str; 8] = [
    "EU AI Act",
    "GDPR",
    "NIST AI RMF",
    "FDA SaMD",
    "ISO 42001",
    "MAS TREx",
    "UK AI Bill",
    "China AIGC",
];

/// Policy library page component
#[component]
pub fn PolicyLibrary() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let page = create_rw_signal(PolicyLibraryPage::default());

    let client = state.client.clone();
    page.update(|p| p.loading = true);
    mount_fetch(
        page,
        async move { PolicyLibraryPage::fetch(&client, &Default::default()).await },
        PolicyLibraryPage::apply,
    );

    let tab = Signal::derive(move || page.with(|p| p.tab));

    view! {
        <div class="space-y-6">
            <PageHeader title="Policy Library" subtitle="Regulations and internal policies under review" />

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            <TabBar
                tabs=vec![
                    (PolicyTab::Library, "Library"),
                    (PolicyTab::Upload, "Upload"),
                    (PolicyTab::Detail, "Detail"),
                ]
                active=tab
                on_select=move |t: PolicyTab| page.update(|p| p.tab = t)
            />

            {move || match tab.get() {
                PolicyTab::Library => view! { <Library page=page /> }.into_view(),
                PolicyTab::Upload => view! { <Upload page=page /> }.into_view(),
                PolicyTab::Detail => view! { <Detail page=page /> }.into_view(),
            }}
        </div>
    }
}

/// Refetch the list when the filter changed
fn refilter(
    page: RwSignal<PolicyLibraryPage>,
    client: &Rc<Client>,
    jurisdiction: Option<String>,
    status: Option<String>,
) {
    let changed = page.try_update(|p| {
        let jurisdiction = jurisdiction.unwrap_or_else(|| p.filter.jurisdiction.clone());
        let status = status.unwrap_or_else(|| p.filter.status.clone());
        let changed = p.set_filter(&jurisdiction, &status);
        if changed {
            p.loading = true;
        }
        changed.then(|| p.filter.clone())
    });
    if let Some(Some(filter)) = changed {
        let client = client.clone();
        mount_fetch(
            page,
            async move { PolicyLibraryPage::fetch(&client, &filter).await },
            PolicyLibraryPage::apply,
        );
    }
}

#[component]
fn Library(page: RwSignal<PolicyLibraryPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = state.client.clone();
    let jurisdiction = Signal::derive(move || page.with(|p| p.filter.jurisdiction.clone()));
    let status = Signal::derive(move || page.with(|p| p.filter.status.clone()));
    let set_jurisdiction = {
        let client = client.clone();
        SignalSetter::map(move |j: String| refilter(page, &client, Some(j), None))
    };
    let set_status = SignalSetter::map(move |s: String| refilter(page, &client, None, Some(s)));

    view! {
        <Panel title="Policies">
            <div class="grid grid-cols-2 gap-4">
                <SelectField label="Jurisdiction" options=JURISDICTIONS.to_vec() value=jurisdiction set_value=set_jurisdiction />
                <SelectField label="Status" options=STATUSES.to_vec() value=status set_value=set_status />
            </div>
            <Show when=move || page.with(|p| p.loading) fallback=move || view! {
                <RecordTable
                    rows=Signal::derive(move || page.with(|p| p.policies.clone()))
                    columns=&[("title", "Title"), ("jurisdiction", "Jurisdiction"), ("regulation", "Regulation"), ("status", "Status")]
                    on_select=move |i: usize| page.update(|p| p.select(i))
                />
            }>
                <InlineLoading />
            </Show>
        </Panel>
    }
}

#[component]
fn Upload(page: RwSignal<PolicyLibraryPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_slice(page, |p| p.form.title.clone(), |p, v| p.form.title = v);
    let (content, set_content) = create_slice(page, |p| p.form.content.clone(), |p, v| p.form.content = v);
    let (jurisdiction, set_jurisdiction) =
        create_slice(page, |p| p.form.jurisdiction.clone(), |p, v| p.form.jurisdiction = v);
    let (regulation, set_regulation) =
        create_slice(page, |p| p.form.regulation.clone(), |p, v| p.form.regulation = v);
    let (doc_type, set_doc_type) = create_slice(page, |p| p.form.doc_type.clone(), |p, v| p.form.doc_type = v);

    let client = state.client.clone();
    let toasts = state.clone();
    let upload = move |_: ()| {
        let client = client.clone();
        let toasts = toasts.clone();
        run_request(
            page,
            PolicyLibraryPage::begin_upload,
            move |policy| async move { client.upload_policy(&policy).await },
            move |p, result| {
                let ok = result.is_ok();
                p.finish_upload(result);
                if ok {
                    toasts.show_success("Policy uploaded");
                }
            },
        );
    };

    view! {
        <Panel title="Upload Policy">
            <div class="flex flex-wrap gap-2">
                {DEMO_TEXTS
                    .iter()
                    .enumerate()
                    .map(|(index, (label, _))| view! {
                        <ChipButton label=*label on_click=move |_: ()| page.update(|p| p.use_demo(index)) />
                    })
                    .collect_view()}
            </div>
            <TextField label="Title" value=title set_value=set_title />
            <div class="grid grid-cols-3 gap-4">
                <SelectField label="Jurisdiction" options=JURISDICTIONS[1..].to_vec() value=jurisdiction set_value=set_jurisdiction />
                <SelectField label="Regulation" options=REGULATIONS.to_vec() value=regulation set_value=set_regulation />
                <SelectField label="Type" options=DOC_TYPES.to_vec() value=doc_type set_value=set_doc_type />
            </div>
            <TextArea label="Policy text" value=content set_value=set_content rows=10 />
            <ActionButton
                label="Upload"
                busy_label="Uploading..."
                busy=Signal::derive(move || page.with(|p| p.uploading))
                on_click=upload
            />
        </Panel>
    }
}

#[component]
fn Detail(page: RwSignal<PolicyLibraryPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let client = state.client.clone();
    let approve = move |policy_id: String| {
        let client = client.clone();
        run_on_copy(page, move |mut p: PolicyLibraryPage| async move {
            p.approve(&client, &policy_id).await;
            p
        });
    };

    view! {
        {move || match page.with(|p| p.selected.clone()) {
            None => view! {
                <Panel title="Policy">
                    <p class="text-sm text-slate-500">"Select a policy from the library."</p>
                </Panel>
            }.into_view(),
            Some(policy) => {
                let policy_id = field(&policy, "policy_id");
                let status = field(&policy, "status");
                let approve = approve.clone();
                view! {
                    <Panel title="Policy">
                        <div class="flex items-center justify-between">
                            <div>
                                <div class="text-lg font-bold">{field(&policy, "title")}</div>
                                <div class=format!("text-xs uppercase {}", status_class(&status))>{status.clone()}</div>
                            </div>
                            <Show when={
                                let status = status.clone();
                                move || status != "reviewed"
                            }>
                                <ChipButton label="Mark Reviewed" on_click={
                                    let approve = approve.clone();
                                    let policy_id = policy_id.clone();
                                    move |_: ()| approve(policy_id.clone())
                                } />
                            </Show>
                        </div>
                        <JsonView value=policy.clone() />
                    </Panel>
                }.into_view()
            }
        }}
    }
}
