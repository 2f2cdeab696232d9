use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::pill::StatusPill;
use crate::config;
use crate::content::{HEADER_NAV, HEADLINE};
use crate::dom;

const HERO_IMAGE: &str = "/images/hero-desktop.png";
const HERO_ALT: &str = "Warm modern kitchen with framed palm artwork above a wooden dining table.";

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" aria-label={config::SITE_NAME}>
                    <img src="/images/logo.svg" alt="" width="22" height="22" />
                    <span>{config::SITE_NAME}</span>
                </a>
                <ul class="nav-links">
                    { for HEADER_NAV.iter().map(|link| html! {
                        <li><a href={link.href} class="nav-link">{link.label}</a></li>
                    }) }
                </ul>
                <button class="burger-menu" aria-label="Open menu" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-drawer">
                    <button class="drawer-close" aria-label="Close menu" onclick={close_menu.clone()}>
                        <span></span>
                        <span></span>
                    </button>
                    <ul class="drawer-links">
                        { for HEADER_NAV.iter().map(|link| html! {
                            <li>
                                <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </nav>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let work_with_us = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_into_view("contact");
    });

    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <Nav />
            <div class="hero-grid">
                <div class="hero-copy">
                    <StatusPill label="Available for work" />
                    <h1 id="hero-heading">
                        { for HEADLINE.iter().map(|line| html! {
                            <span class="headline-line">{*line}</span>
                        }) }
                    </h1>
                    <p class="hero-subtitle">
                        {"LifetimeArt delivers expert home improvements, creating beautiful and functional spaces with quality craftsmanship."}
                    </p>
                    <button class="hero-cta" onclick={work_with_us}>
                        {"Work with us"}
                        <span class="cta-arrow" aria-hidden="true">{"↗"}</span>
                    </button>
                </div>
                <figure class="hero-figure">
                    <img src={HERO_IMAGE} alt={HERO_ALT} />
                    <figcaption class="hero-quote">
                        <div class="stars" aria-hidden="true">{"★★★★★"}</div>
                        <blockquote>
                            {"“LifetimeArt has been a game-changer for my home. Their ability to blend functionality with exquisite design is unparalleled.”"}
                        </blockquote>
                    </figcaption>
                </figure>
            </div>
        </section>
    }
}
