//! Rendering of backend JSON
//!
//! Responses stay `serde_json::Value`; these helpers show them without
//! assuming more shape than a page needs.

use leptos::*;
use serde_json::Value;

/// Pretty-printed JSON block
#[component]
pub fn JsonView(#[prop(into)] value: Value) -> impl IntoView {
    let text = serde_json::to_string_pretty(&value).unwrap_or_default();

    view! {
        <pre class="bg-slate-950 border border-slate-800 rounded-lg p-4 text-xs text-slate-300 overflow-auto max-h-96">
            {text}
        </pre>
    }
}

/// One headline number
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-lg p-4">
            <div class="text-xs text-slate-400">{label}</div>
            <div class="text-2xl font-bold text-white mt-1">{move || value.get()}</div>
        </div>
    }
}

/// Records as a table of `columns` (key, heading). Rows are clickable when
/// `on_select` is set.
#[component]
pub fn RecordTable(
    #[prop(into)] rows: Signal<Vec<Value>>,
    columns: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] on_select: Option<Callback<usize>>,
) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="text-left text-slate-400 border-b border-slate-800">
                    {columns.iter().map(|(_, heading)| view! { <th class="py-2 pr-4">{*heading}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        return view! {
                            <tr><td class="py-4 text-slate-500" colspan=columns.len()>"Nothing here yet."</td></tr>
                        }
                        .into_view();
                    }
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, row)| view! {
                            <tr
                                class="border-b border-slate-800/60 hover:bg-slate-800/40"
                                class:cursor-pointer=on_select.is_some()
                                on:click=move |_| {
                                    if let Some(on_select) = on_select {
                                        on_select.call(index);
                                    }
                                }
                            >
                                {columns.iter().map(|(key, _)| cell(&row, key)).collect_view()}
                            </tr>
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

fn cell(row: &Value, key: &str) -> impl IntoView {
    let value = field(row, key);
    let class = if key == "status" || key.ends_with("verdict") || key.ends_with("risk_level") {
        status_class(&value)
    } else {
        "text-slate-200"
    };
    view! { <td class=format!("py-2 pr-4 {}", class)>{value}</td> }
}

/// Display text for a JSON scalar; `—` for null or missing
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "—".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `value[key]` as display text
pub fn field(value: &Value, key: &str) -> String {
    text(value.get(key))
}

/// Tailwind text colour for a status or verdict word
pub fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pass" | "passed" | "compliant" | "reviewed" | "healthy" | "ok" | "approved" => "text-green-400",
        "warn" | "warning" | "review" | "partial" | "pending_review" | "medium" => "text-amber-400",
        "fail" | "failed" | "critical" | "flagged" | "non_compliant" | "prohibited" | "high" => "text-red-400",
        _ => "text-slate-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_text() {
        let value = json!({"name": "EU AI Act", "score": 0.8, "empty": null});
        assert_eq!(field(&value, "name"), "EU AI Act");
        assert_eq!(field(&value, "score"), "0.8");
        assert_eq!(field(&value, "empty"), "—");
        assert_eq!(field(&value, "missing"), "—");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("PASS"), "text-green-400");
        assert_eq!(status_class("critical"), "text-red-400");
        assert_eq!(status_class("something"), "text-slate-300");
    }
}
