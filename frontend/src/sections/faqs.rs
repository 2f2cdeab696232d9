use yew::prelude::*;

use crate::components::disclosure::{Disclosure, DisclosureItem};
use crate::components::reveal::Reveal;
use crate::content::FAQS;
use crate::dom;

fn panel_id(question: &str) -> String {
    format!("faq-{}", urlencoding::encode(question))
}

#[function_component(Faqs)]
pub fn faqs() -> Html {
    // first question starts expanded
    let open = use_state(|| match FAQS.first() {
        Some(faq) => Disclosure::opened(faq.question),
        None => Disclosure::closed(),
    });

    let get_in_touch = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_into_view("contact");
    });

    html! {
        <section id="faqs" class="faqs" aria-labelledby="faqs-heading">
            <div class="container faqs-grid">
                <Reveal class="faqs-intro">
                    <span class="section-badge">{"FAQs"}</span>
                    <h2 id="faqs-heading">{"Answering Your"}<br/>{"Questions"}</h2>
                    <p>{"Got more questions? Send us your enquiry below"}</p>
                    <button type="button" class="soft-cta" onclick={get_in_touch}>
                        {"Get in touch"}
                        <span class="cta-arrow" aria-hidden="true">{"↗"}</span>
                    </button>
                </Reveal>

                <div class="faqs-list">
                    { for FAQS.iter().map(|faq| {
                        let ontoggle = {
                            let open = open.clone();
                            let question = faq.question;
                            Callback::from(move |_| open.set(open.toggled(question)))
                        };
                        html! {
                            <DisclosureItem
                                key={faq.question}
                                class="faq-item"
                                panel_id={panel_id(faq.question)}
                                open={open.is_open(&faq.question)}
                                {ontoggle}
                                header={html! { <span class="question-text">{faq.question}</span> }}
                            >
                                <p class="faq-answer">{faq.answer}</p>
                            </DisclosureItem>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_are_url_safe() {
        assert_eq!(panel_id("Do you offer free quotes?"), "faq-Do%20you%20offer%20free%20quotes%3F");
    }
}
