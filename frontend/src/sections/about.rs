use yew::prelude::*;

use crate::carousel::{use_intersection_carousel, CarouselDots};
use crate::components::reveal::{use_reveal, Reveal};
use crate::content::{marquee_loop, Stat, ABOUT_IMAGES, STATS};

#[derive(Properties, PartialEq)]
struct StatBlockProps {
    stat: Stat,
}

#[function_component(StatBlock)]
fn stat_block(props: &StatBlockProps) -> Html {
    let Stat { value, label, detail } = props.stat;
    html! {
        <Reveal class="stat" amount={0.3}>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
            <p class="stat-detail">{detail}</p>
        </Reveal>
    }
}

/// Desktop strip of images scrolling forever once it has been seen.
#[function_component(Marquee)]
fn marquee() -> Html {
    let node = use_node_ref();
    let in_view = use_reveal(node.clone(), 0.25);
    let images = use_memo(|_| marquee_loop(ABOUT_IMAGES), ());

    html! {
        <div class="about-marquee" aria-hidden="true">
            <div ref={node} class={classes!("marquee-track", in_view.then(|| "running"))}>
                { for images.iter().enumerate().map(|(i, src)| html! {
                    <figure class="marquee-item" key={format!("{}-{}", src, i)}>
                        <img src={*src} alt="" loading={if i < 2 { "eager" } else { "lazy" }} />
                    </figure>
                }) }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let rail = use_node_ref();
    let carousel = use_intersection_carousel(rail.clone());

    html! {
        <section id="about" class="about" aria-labelledby="about-heading">
            <div class="container">
                <div class="about-intro">
                    <Reveal amount={0.4}>
                        <span class="section-badge">{"About us"}</span>
                        <h2 id="about-heading">{"Home"}<br/>{"Improvement"}<br/>{"Specialists"}</h2>
                    </Reveal>
                    <Reveal amount={0.4} class="about-copy">
                        <p>
                            {"Welcome to "}<strong>{"LifetimeArt"}</strong>
                            {", your trusted home improvement experts, dedicated to transforming homes with precision and care. With years of experience in building kitchens, bathrooms, garages, and more, we deliver top-quality craftsmanship and a seamless customer experience. Our mission is to bring your vision to life while ensuring clear communication and expert guidance at every step."}
                        </p>
                    </Reveal>
                </div>

                <Marquee />

                <div class="about-carousel">
                    <div ref={rail} class="carousel-rail snap-start no-scrollbar">
                        { for ABOUT_IMAGES.iter().map(|src| html! {
                            <div class="carousel-slide" key={*src}>
                                <img src={*src} alt="" />
                            </div>
                        }) }
                    </div>
                    <CarouselDots handle={carousel} count={ABOUT_IMAGES.len()} />
                </div>

                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <StatBlock key={stat.label} stat={*stat} />
                    }) }
                </div>
            </div>
        </section>
    }
}
