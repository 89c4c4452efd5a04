//! Model-output input shared by the audit pipeline and the output checker

use leptos::*;
use saro::api::dto::InputMode;
use saro::pages::checklist::OutputForm;

use super::forms::{SelectField, TextArea, TextField};

const DOMAINS: [&str; 4] = ["finance", "healthcare", "hr", "general"];
const POLICIES: [&str; 4] = ["EU AI Act", "NIST AI RMF", "ISO 42001", "FDA SaMD"];

/// Setter for one field of the form; the rest of the form is left as is.
fn field_setter(
    form: Signal<OutputForm>,
    set_form: SignalSetter<OutputForm>,
    apply: fn(&mut OutputForm, String),
) -> SignalSetter<String> {
    SignalSetter::map(move |value: String| {
        let mut next = form.get_untracked();
        apply(&mut next, value);
        set_form.set(next);
    })
}

fn parse_metric(value: &str, current: f64) -> f64 {
    value.trim().parse().unwrap_or(current)
}

#[component]
pub fn OutputFormFields(form: Signal<OutputForm>, set_form: SignalSetter<OutputForm>) -> impl IntoView {
    let model = Signal::derive(move || form.with(|f| f.model_name.clone()));
    let domain = Signal::derive(move || form.with(|f| f.domain.clone()));
    let policy = Signal::derive(move || form.with(|f| f.policy.clone()));
    let text = Signal::derive(move || form.with(|f| f.output_text.clone()));
    let mode = Signal::derive(move || {
        form.with(|f| match f.mode {
            InputMode::Text => "text".to_string(),
            InputMode::Structured => "structured".to_string(),
        })
    });

    let bias = Signal::derive(move || form.with(|f| f.output_data.bias_score.to_string()));
    let accuracy = Signal::derive(move || form.with(|f| f.output_data.accuracy.to_string()));
    let transparency = Signal::derive(move || form.with(|f| f.output_data.transparency_score.to_string()));
    let oversight = move || form.with(|f| f.output_data.human_oversight);

    view! {
        <div class="space-y-4">
            <TextField
                label="Model name"
                value=model
                set_value=field_setter(form, set_form, |f, v| f.model_name = v)
                placeholder="CreditScorer-v2"
            />
            <div class="grid grid-cols-2 gap-4">
                <SelectField
                    label="Domain"
                    options=DOMAINS.to_vec()
                    value=domain
                    set_value=field_setter(form, set_form, |f, v| f.domain = v)
                />
                <SelectField
                    label="Policy"
                    options=POLICIES.to_vec()
                    value=policy
                    set_value=field_setter(form, set_form, |f, v| f.policy = v)
                />
            </div>
            <SelectField
                label="Input"
                options=vec!["text", "structured"]
                value=mode
                set_value=field_setter(form, set_form, |f, v| {
                    f.mode = if v == "structured" { InputMode::Structured } else { InputMode::Text };
                })
            />
            {move || match form.with(|f| f.mode) {
                InputMode::Text => view! {
                    <TextArea
                        label="Model output"
                        value=text
                        set_value=field_setter(form, set_form, |f, v| f.output_text = v)
                        rows=6
                    />
                }.into_view(),
                InputMode::Structured => view! {
                    <div class="grid grid-cols-3 gap-4">
                        <TextField
                            label="Bias score"
                            value=bias
                            set_value=field_setter(form, set_form, |f, v| {
                                f.output_data.bias_score = parse_metric(&v, f.output_data.bias_score);
                            })
                        />
                        <TextField
                            label="Accuracy"
                            value=accuracy
                            set_value=field_setter(form, set_form, |f, v| {
                                f.output_data.accuracy = parse_metric(&v, f.output_data.accuracy);
                            })
                        />
                        <TextField
                            label="Transparency"
                            value=transparency
                            set_value=field_setter(form, set_form, |f, v| {
                                f.output_data.transparency_score = parse_metric(&v, f.output_data.transparency_score);
                            })
                        />
                    </div>
                    <label class="flex items-center space-x-2 text-sm text-slate-400">
                        <input
                            type="checkbox"
                            prop:checked=oversight
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                let mut next = form.get_untracked();
                                next.output_data.human_oversight = checked;
                                set_form.set(next);
                            }
                        />
                        <span>"Human oversight configured"</span>
                    </label>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_metric_keeps_current_value() {
        assert_eq!(parse_metric("0.42", 0.1), 0.42);
        assert_eq!(parse_metric(" 0.5 ", 0.1), 0.5);
        assert_eq!(parse_metric("abc", 0.1), 0.1);
        assert_eq!(parse_metric("", 0.7), 0.7);
    }
}
