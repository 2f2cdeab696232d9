use yew::prelude::*;

use crate::carousel::{use_center_carousel, CarouselDots};
use crate::components::pill::{Pill, PillTone};
use crate::components::reveal::Reveal;
use crate::content::{Project, PROJECTS};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    #[prop_or_default]
    compact: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let p = props.project;
    let tone = if p.dark { PillTone::Light } else { PillTone::Dark };

    let avatar = match p.avatar {
        Some(src) => html! { <img class="avatar" src={src} alt={p.author} width="32" height="32" /> },
        None => html! { <span class="avatar avatar-empty" aria-hidden="true"></span> },
    };

    html! {
        <Reveal amount={0.35}>
            <article class={classes!("project-card", p.dark.then(|| "dark"), props.compact.then(|| "compact"))}>
                <div class="project-image">
                    <img src={p.image} alt={p.title} />
                </div>
                <div class="project-body">
                    <h3>{p.title}</h3>
                    <p class="project-description">{p.description}</p>
                    <div class="project-tags">
                        { for p.tags.iter().map(|tag| html! { <Pill label={*tag} {tone} /> }) }
                    </div>
                    <div class="project-quote">
                        <div class="quote-text">
                            <span aria-hidden="true" class="quote-mark">{"“"}</span>
                            {p.quote}
                        </div>
                        <div class="quote-author">
                            { avatar }
                            <span>{p.author}</span>
                        </div>
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[function_component(Works)]
pub fn works() -> Html {
    let track = use_node_ref();
    let carousel = use_center_carousel(track.clone());

    html! {
        <section id="work" class="works" aria-labelledby="work-heading">
            <div class="container">
                <Reveal class="section-header" amount={0.4}>
                    <span class="section-badge">{"Our work"}</span>
                    <h2 id="work-heading">{"Get inspired by our work"}</h2>
                    <p>{"Selected renovations and new builds."}</p>
                </Reveal>

                <div class="works-mobile">
                    <div ref={track} class="carousel-rail snap-center no-scrollbar">
                        { for PROJECTS.iter().map(|p| html! {
                            <div class="carousel-slide project-slide" key={p.slug}>
                                <ProjectCard project={*p} compact=true />
                            </div>
                        }) }
                    </div>
                    <CarouselDots handle={carousel} count={PROJECTS.len()} />
                </div>

                <ul class="works-stack">
                    { for PROJECTS.iter().enumerate().map(|(i, p)| html! {
                        <li key={p.slug} class="works-stack-item" style={format!("z-index: {}", 10 + i)}>
                            <ProjectCard project={*p} />
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
