//! Technology stack panel and per-category badge rows.

#[cfg(test)]
#[path = "tech_stack_test.rs"]
mod tech_stack_test;

use leptos::prelude::*;

use crate::net::types::TechStack;

/// Colour modifier class for a badge category.
#[must_use]
pub fn badge_class(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "languages" => "badge badge--languages",
        "frameworks" => "badge badge--frameworks",
        "tools" => "badge badge--tools",
        _ => "badge badge--other",
    }
}

/// Non-empty categories, in display order.
#[must_use]
pub fn badge_rows(stack: &TechStack) -> Vec<(&'static str, Vec<String>)> {
    stack
        .categories()
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| (category, items.to_vec()))
        .collect()
}

#[component]
pub fn TechStackPanel(stack: TechStack, commentary: Option<String>) -> impl IntoView {
    view! {
        <section class="card tech-stack">
            <h3 class="tech-stack__title gradient-text">"Technology Stack"</h3>
            {commentary.map(|text| view! { <p class="tech-stack__commentary">"🤖 " {text}</p> })}
            <div class="tech-stack__rows">
                {badge_rows(&stack)
                    .into_iter()
                    .map(|(category, items)| view! { <TechStackBadge category=category items=items/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One labelled row of badges. Renders nothing for an empty list.
#[component]
pub fn TechStackBadge(#[prop(into)] category: String, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        let class = badge_class(&category);
        view! {
            <div class="tech-stack__row">
                <span class="tech-stack__category">{format!("{category}:")}</span>
                {items.into_iter().map(|item| view! { <span class=class>{item}</span> }).collect_view()}
            </div>
        }
    })
}
