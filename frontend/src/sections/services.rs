use log::warn;
use yew::prelude::*;

use crate::components::disclosure::{Disclosure, DisclosureItem};
use crate::components::image_fallback::ImageFallback;
use crate::components::reveal::Reveal;
use crate::content::{find_service, service_image, FALLBACK_SERVICE, GLOBAL_SERVICE_IMAGE, SERVICES};

#[derive(Properties, PartialEq)]
struct ServiceImageProps {
    slug: &'static str,
}

/// Image for the selected service, stepping down the fallback chain on load errors.
#[function_component(ServiceImage)]
fn service_image_view(props: &ServiceImageProps) -> Html {
    let chain = use_state(|| ImageFallback::new(service_image(props.slug), GLOBAL_SERVICE_IMAGE));

    {
        let chain = chain.clone();
        use_effect_with_deps(
            move |slug: &&'static str| {
                chain.set(ImageFallback::new(service_image(slug), GLOBAL_SERVICE_IMAGE));
                || ()
            },
            props.slug,
        );
    }

    let onerror = {
        let chain = chain.clone();
        Callback::from(move |_: Event| {
            let mut next = (*chain).clone();
            match next.on_error() {
                Some(src) => warn!("service image failed, trying {}", src),
                None => {
                    warn!("service image fallback exhausted");
                    return;
                }
            }
            chain.set(next);
        })
    };

    let alt = find_service(props.slug).map_or("Kitchens", |s| s.title);

    html! {
        <div class="service-image" key={chain.current().to_string()}>
            <img src={chain.current().to_string()} {alt} {onerror} />
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let open = use_state(|| Disclosure::opened(FALLBACK_SERVICE));
    let selected = open.selected_or(FALLBACK_SERVICE);

    html! {
        <section id="services" class="services" aria-labelledby="services-heading">
            <div class="container">
                <Reveal class="section-header" amount={0.35}>
                    <span class="section-badge">{"Services"}</span>
                    <h2 id="services-heading">{"What we do"}</h2>
                    <p>{"Find out which one of our services fit the needs of your project"}</p>
                </Reveal>

                <div class="services-grid">
                    <ServiceImage slug={selected} />
                    <div class="services-accordion">
                        { for SERVICES.iter().map(|service| {
                            let ontoggle = {
                                let open = open.clone();
                                let slug = service.slug;
                                Callback::from(move |_| open.set(open.toggled(slug)))
                            };
                            let header = html! {
                                <>
                                    <span class="service-icon" aria-hidden="true">
                                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                            <rect x="3" y="3" width="18" height="18" rx="2" stroke-width="1.5" />
                                            <path d="M7 3v18M3 8h18" stroke-width="1.5" />
                                        </svg>
                                    </span>
                                    <span class="service-title">{service.title}</span>
                                </>
                            };
                            html! {
                                <DisclosureItem
                                    key={service.slug}
                                    panel_id={format!("svc-{}", service.slug)}
                                    open={open.is_open(&service.slug)}
                                    {ontoggle}
                                    {header}
                                >
                                    <p class="service-description">{service.description}</p>
                                </DisclosureItem>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
