//! Tab Bar

use leptos::*;

/// Horizontal tabs over `tabs`; `active` is compared by value
#[component]
pub fn TabBar<T>(
    tabs: Vec<(T, &'static str)>,
    #[prop(into)] active: Signal<T>,
    #[prop(into)] on_select: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    view! {
        <div class="flex space-x-1 border-b border-slate-800">
            {tabs
                .into_iter()
                .map(|(tab, label)| view! {
                    <button
                        on:click=move |_| on_select.call(tab)
                        class="px-4 py-2 text-sm rounded-t-lg text-slate-400 hover:text-white transition-colors"
                        class:bg-slate-800=move || active.get() == tab
                        class:text-white=move || active.get() == tab
                    >
                        {label}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
