use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagPillProps {
    pub label: &'static str,
}

#[function_component(TagPill)]
pub fn tag_pill(props: &TagPillProps) -> Html {
    html! {
        <span class="tag-pill">{props.label}</span>
    }
}
