use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum PillTone {
    #[default]
    Dark,
    /// For pills sitting on dark cards.
    Light,
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub tone: PillTone,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    let tone = match props.tone {
        PillTone::Dark => "pill-dark",
        PillTone::Light => "pill-light",
    };
    html! {
        <span class={classes!("pill", tone)}>{ props.label.clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusPillProps {
    pub label: AttrValue,
}

#[function_component(StatusPill)]
pub fn status_pill(props: &StatusPillProps) -> Html {
    html! {
        <span class="status-pill">
            <span class="status-dot" aria-hidden="true"></span>
            { props.label.clone() }
        </span>
    }
}
