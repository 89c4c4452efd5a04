//! Client Onboarding Page

use leptos::*;
use saro::pages::onboarding::{INDUSTRIES, PLANS, STEPS};
use saro::pages::overview::Persona;
use saro::pages::OnboardingPage;
use serde_json::Value;

use super::forms::{ActionButton, PageHeader, Panel, SelectField, TextField};
use crate::components::json_view::{field, text};
use crate::components::ErrorBanner;
use crate::state::global::run_request;
use crate::state::GlobalState;

/// Onboarding wizard component
#[component]
pub fn Onboarding() -> impl IntoView {
    let page = create_rw_signal(OnboardingPage::default());
    let step = Signal::derive(move || page.with(|p| p.step));

    view! {
        <div class="space-y-6 max-w-3xl">
            <PageHeader title="Client Onboarding" subtitle="Get your account, API keys and persona configured" />

            <Show when=move || !page.with(|p| p.is_complete())>
                <StepIndicator step=step />
            </Show>

            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone())) />

            {move || match step.get() {
                1 => view! { <CompanyStep page=page /> }.into_view(),
                2 => view! { <PersonaStep page=page /> }.into_view(),
                3 => view! { <PlanStep page=page /> }.into_view(),
                4 => view! { <ReviewStep page=page /> }.into_view(),
                _ => view! { <Provisioned page=page /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn StepIndicator(step: Signal<u8>) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            {STEPS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let number = i as u8 + 1;
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-8 h-8 rounded-full flex items-center justify-center text-sm font-bold border-2 border-slate-700"
                                class:bg-green-500=move || step.get() > number
                                class:bg-blue-500=move || step.get() == number
                            >
                                {move || if step.get() > number { "✓".to_string() } else { number.to_string() }}
                            </div>
                            <span class="text-xs text-slate-400">{*label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn WizardNav(page: RwSignal<OnboardingPage>, #[prop(optional)] hide_back: bool) -> impl IntoView {
    view! {
        <div class="flex justify-between pt-4">
            {(!hide_back).then(|| view! {
                <button
                    on:click=move |_| page.update(|p| { p.back(); })
                    class="px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700"
                >
                    "← Back"
                </button>
            })}
            <button
                on:click=move |_| page.update(|p| { p.next(); })
                class="ml-auto px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 font-medium"
            >
                "Next →"
            </button>
        </div>
    }
}

#[component]
fn CompanyStep(page: RwSignal<OnboardingPage>) -> impl IntoView {
    let (company, set_company) =
        create_slice(page, |p| p.form.company_name.clone(), |p, v| p.form.company_name = v);
    let (industry, set_industry) = create_slice(page, |p| p.form.industry.clone(), |p, v| p.form.industry = v);

    view! {
        <Panel title="Company">
            <TextField label="Company name" value=company set_value=set_company placeholder="Acme Financial" />
            <SelectField label="Industry" options=INDUSTRIES.to_vec() value=industry set_value=set_industry />
            <WizardNav page=page hide_back=true />
        </Panel>
    }
}

#[component]
fn PersonaStep(page: RwSignal<OnboardingPage>) -> impl IntoView {
    view! {
        <Panel title="Persona">
            <p class="text-sm text-slate-400">"Your persona sets the default dashboard and workflow."</p>
            <div class="grid md:grid-cols-2 gap-3">
                {Persona::ALL
                    .into_iter()
                    .map(|persona| {
                        let selected = move || page.with(|p| p.form.persona == persona.id());
                        view! {
                            <button
                                on:click=move |_| page.update(|p| p.form.persona = persona.id().to_string())
                                class="text-left rounded-lg p-4 border-2 border-slate-700 bg-slate-800"
                                class:border-blue-500=selected
                            >
                                <div class="font-bold">{persona.name()}</div>
                                <div class="text-xs text-slate-400">{persona.description()}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <WizardNav page=page />
        </Panel>
    }
}

#[component]
fn PlanStep(page: RwSignal<OnboardingPage>) -> impl IntoView {
    view! {
        <Panel title="Plan">
            <div class="grid md:grid-cols-3 gap-3">
                {PLANS
                    .into_iter()
                    .map(|plan| {
                        let selected = move || page.with(|p| p.form.plan == plan.id);
                        view! {
                            <button
                                on:click=move |_| page.update(|p| p.form.plan = plan.id.to_string())
                                class="text-left rounded-lg p-4 border-2 border-slate-700 bg-slate-800"
                                class:border-blue-500=selected
                            >
                                <div class="font-bold">{plan.name}</div>
                                <div class="text-sm text-slate-400">{plan.price}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <WizardNav page=page />
        </Panel>
    }
}

#[component]
fn ReviewStep(page: RwSignal<OnboardingPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let client = state.client.clone();
    let submit = move |_: ()| {
        let client = client.clone();
        run_request(
            page,
            OnboardingPage::begin_submit,
            move |request| async move { client.onboard(&request).await },
            OnboardingPage::finish_submit,
        );
    };

    let rows = move || {
        page.with(|p| {
            let persona = Persona::parse(&p.form.persona).map(|persona| persona.name()).unwrap_or_default();
            let plan = PLANS.iter().find(|plan| plan.id == p.form.plan).map(|plan| plan.name).unwrap_or_default();
            vec![
                ("Company", p.form.company_name.clone()),
                ("Industry", p.form.industry.clone()),
                ("Persona", persona.to_string()),
                ("Plan", plan.to_string()),
            ]
        })
    };

    view! {
        <Panel title="Review">
            <dl class="divide-y divide-slate-800">
                {move || rows()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="flex justify-between py-2 text-sm">
                            <dt class="text-slate-400">{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div class="flex justify-between pt-4">
                <button
                    on:click=move |_| page.update(|p| { p.back(); })
                    class="px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700"
                >
                    "← Back"
                </button>
                <ActionButton
                    label="Create Account"
                    busy_label="Provisioning..."
                    busy=Signal::derive(move || page.with(|p| p.submitting))
                    on_click=submit
                />
            </div>
        </Panel>
    }
}

#[component]
fn Provisioned(page: RwSignal<OnboardingPage>) -> impl IntoView {
    let account = move || page.with(|p| p.result.clone()).unwrap_or(Value::Null);

    view! {
        <div class="space-y-6">
            <div class="bg-green-900/30 border border-green-700 rounded-lg p-6 text-center">
                <div class="text-xl font-bold text-green-400">
                    {move || format!("Welcome to SARO, {}!", field(&account(), "company_name"))}
                </div>
                <div class="text-sm text-slate-400">
                    "Tenant ID: "
                    <span class="font-mono text-blue-300">{move || field(&account(), "tenant_id")}</span>
                </div>
            </div>
            <div class="grid md:grid-cols-2 gap-6">
                <Panel title="API Keys">
                    {move || {
                        let account = account();
                        [("Live API Key", "api_key"), ("Sandbox Key", "sandbox_key")]
                            .into_iter()
                            .map(|(label, key)| view! {
                                <div>
                                    <div class="text-xs uppercase text-slate-500">{label}</div>
                                    <code class="block truncate font-mono text-sm text-blue-300 bg-slate-950 rounded px-3 py-2">
                                        {field(&account, key)}
                                    </code>
                                </div>
                            })
                            .collect_view()
                    }}
                </Panel>
                <Panel title="Onboarding Checklist">
                    {move || {
                        account()
                            .get("steps")
                            .and_then(Value::as_array)
                            .cloned()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|step| {
                                let done = step.get("done").and_then(Value::as_bool).unwrap_or(false);
                                view! {
                                    <div class="flex items-center space-x-2 py-1 text-sm">
                                        <span class:text-green-400=done class:text-slate-600=!done>
                                            {if done { "✓" } else { "○" }}
                                        </span>
                                        <span class:text-slate-500=!done>{text(step.get("step"))}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Panel>
            </div>
        </div>
    }
}
