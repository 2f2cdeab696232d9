use yew::prelude::*;

use crate::carousel::{use_center_carousel, CarouselDots};
use crate::components::reveal::Reveal;
use crate::content::{marquee_loop, Testimonial, TESTIMONIALS};

#[derive(Properties, PartialEq)]
struct CardProps {
    testimonial: Testimonial,
    #[prop_or_default]
    tinted: bool,
}

#[function_component(Card)]
fn card(props: &CardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class={classes!("testimonial-card", props.tinted.then(|| "tinted"))}>
            <div class="stars" aria-hidden="true">{"★★★★★"}</div>
            <p class="testimonial-quote">{format!("“{}”", t.quote)}</p>
            <div class="testimonial-author">
                {
                    match t.avatar {
                        Some(src) => html! { <img class="avatar" src={src} alt={t.name} /> },
                        None => html! { <span class="avatar avatar-empty" aria-hidden="true"></span> },
                    }
                }
                <div>
                    <div class="author-name">{t.name}</div>
                    <div class="author-role">{t.role}</div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    reverse: bool,
}

#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    let cards = use_memo(|_| marquee_loop(TESTIMONIALS), ());
    let direction = if props.reverse { "marquee-ltr" } else { "marquee-rtl" };
    // the two rows alternate tint in opposite phase
    let tint_phase = usize::from(!props.reverse);

    html! {
        <div class="marquee-mask">
            <div class={classes!("marquee-row", direction)}>
                { for cards.iter().enumerate().map(|(i, t)| html! {
                    <Card testimonial={*t} tinted={i % 2 == tint_phase} />
                }) }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let track = use_node_ref();
    let carousel = use_center_carousel(track.clone());

    html! {
        <section id="testimonials" class="testimonials" aria-labelledby="testimonials-heading">
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-badge">{"Testimonials"}</span>
                    <h2 id="testimonials-heading">{"Hear from our clients"}</h2>
                    <p>{"Hear from our happy clients about their experience working with Refit and the quality of our craftsmanship."}</p>
                </Reveal>

                <div class="testimonials-mobile">
                    <div ref={track} class="carousel-rail snap-start full-width no-scrollbar">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <div class="carousel-slide" key={i}>
                                <Card testimonial={*t} tinted=true />
                            </div>
                        }) }
                    </div>
                    <CarouselDots handle={carousel} count={TESTIMONIALS.len()} />
                </div>

                <div class="testimonials-marquee">
                    <MarqueeRow reverse=false />
                    <MarqueeRow reverse=true />
                </div>
            </div>
        </section>
    }
}
