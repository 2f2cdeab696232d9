use yew::prelude::*;

/// Single-open accordion state: at most one key is expanded at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disclosure<K> {
    open: Option<K>,
}

impl<K: PartialEq + Clone> Disclosure<K> {
    pub fn closed() -> Self {
        Self { open: None }
    }

    pub fn opened(key: K) -> Self {
        Self { open: Some(key) }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn open_key(&self) -> Option<&K> {
        self.open.as_ref()
    }

    /// Closes `key` if it is the open one, otherwise opens it and closes the rest.
    pub fn toggled(&self, key: K) -> Self {
        if self.is_open(&key) {
            Self::closed()
        } else {
            Self::opened(key)
        }
    }

    /// The open key, or `fallback` when everything is collapsed.
    pub fn selected_or(&self, fallback: K) -> K {
        self.open.clone().unwrap_or(fallback)
    }
}

#[derive(Properties, PartialEq)]
pub struct PlusXProps {
    pub open: bool,
}

/// Plus sign that rotates into an X while its panel is open.
#[function_component(PlusX)]
pub fn plus_x(props: &PlusXProps) -> Html {
    html! {
        <svg
            width="22"
            height="22"
            viewBox="0 0 24 24"
            class={classes!("plus-x", props.open.then(|| "open"))}
            aria-hidden="true"
        >
            <line x1="12" y1="5" x2="12" y2="19" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
            <line x1="5" y1="12" x2="19" y2="12" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct DisclosureItemProps {
    /// DOM id of the panel, referenced by the button's `aria-controls`.
    pub panel_id: AttrValue,
    pub open: bool,
    pub ontoggle: Callback<()>,
    pub header: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DisclosureItem)]
pub fn disclosure_item(props: &DisclosureItemProps) -> Html {
    let toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(());
        })
    };

    html! {
        <div class={classes!("disclosure", props.open.then(|| "open"), props.class.clone())}>
            <button
                type="button"
                class="disclosure-toggle"
                aria-expanded={props.open.to_string()}
                aria-controls={props.panel_id.clone()}
                onclick={toggle}
            >
                { props.header.clone() }
                <PlusX open={props.open} />
            </button>
            if props.open {
                <div id={props.panel_id.clone()} class="disclosure-panel">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_open_key_collapses_everything() {
        let state = Disclosure::opened("kitchens");
        let next = state.toggled("kitchens");
        assert_eq!(next.open_key(), None);
        assert_eq!(next.selected_or("kitchens"), "kitchens");
    }

    #[test]
    fn opening_another_key_closes_the_previous_one() {
        let state = Disclosure::opened("kitchens").toggled("loft");
        assert!(state.is_open(&"loft"));
        assert!(!state.is_open(&"kitchens"));
        assert_eq!(state.selected_or("kitchens"), "loft");
    }

    #[test]
    fn closed_state_reopens_on_toggle() {
        let state: Disclosure<usize> = Disclosure::closed();
        assert!(!state.is_open(&0));
        assert!(state.toggled(0).is_open(&0));
    }
}
