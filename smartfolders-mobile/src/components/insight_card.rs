//! AI insight banner

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub insight: String,
}

#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    html! {
        <div class="insight-card">
            <div class="insight-icon">{"✨"}</div>
            <div class="insight-content">
                <div class="insight-title">{"AI Insight"}</div>
                <p class="insight-text">{&props.insight}</p>
            </div>
        </div>
    }
}
