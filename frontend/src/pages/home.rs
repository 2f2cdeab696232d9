use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, faqs::Faqs, footer::Footer, hero::Hero, services::Services,
    testimonials::Testimonials, works::Works,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount, unless the URL targets a section
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let has_anchor = window.location().hash().map_or(false, |h| h.len() > 1);
                    if !has_anchor {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Services />
            <Works />
            <Testimonials />
            <Faqs />
            <Contact />
            <Footer />
            <style>{LANDING_CSS}</style>
        </main>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --ink: #171717;
        --muted: #525252;
        --line: #e5e5e5;
        --panel: #121113;
        --soft: #eff1f5;
        --ease: cubic-bezier(0.16, 1, 0.3, 1);
    }

    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: Inter, system-ui, -apple-system, sans-serif;
        color: var(--ink);
        background: #fff;
        -webkit-font-smoothing: antialiased;
    }

    .container {
        margin: 0 auto;
        max-width: 1160px;
        padding: 64px 24px;
    }

    @media (min-width: 1440px) { .container { max-width: 1360px; } }
    @media (min-width: 1960px) { .container { max-width: 1860px; padding-left: 48px; padding-right: 48px; } }

    .section-badge {
        display: inline-flex;
        border-radius: 9999px;
        background: var(--ink);
        color: #fff;
        font-size: 12px;
        padding: 4px 12px;
    }

    .section-badge.light { background: rgba(255, 255, 255, 0.1); }

    .section-header { text-align: center; }
    .section-header h2 { font-size: clamp(34px, 5vw, 52px); letter-spacing: -0.02em; margin: 12px 0; }
    .section-header p { color: var(--muted); max-width: 720px; margin: 0 auto; line-height: 1.7; }

    /* reveal on scroll */
    .reveal { opacity: 0; transform: translateY(14px); transition: opacity 0.28s var(--ease), transform 0.28s var(--ease); }
    .reveal.visible { opacity: 1; transform: none; }

    /* nav */
    .top-nav { position: fixed; inset: 0 0 auto 0; z-index: 50; transition: background 0.2s; }
    .top-nav.scrolled { background: rgba(18, 17, 19, 0.85); backdrop-filter: blur(12px); }
    .nav-content { display: flex; align-items: center; justify-content: space-between; max-width: 1160px; margin: 0 auto; padding: 16px 24px; }
    .nav-logo { display: flex; gap: 8px; align-items: center; color: #fff; font-weight: 600; text-decoration: none; }
    .nav-links { display: flex; gap: 24px; list-style: none; margin: 0; padding: 0; }
    .nav-link { color: rgba(255, 255, 255, 0.9); font-size: 14px; text-decoration: none; }
    .burger-menu { display: none; flex-direction: column; gap: 5px; background: none; border: 0; padding: 6px; }
    .burger-menu span { display: block; width: 24px; height: 2px; background: #fff; }
    .mobile-drawer { position: fixed; inset: 0; z-index: 70; background: rgba(0, 0, 0, 0.45); backdrop-filter: blur(16px); padding: 80px 24px; }
    .drawer-close { position: absolute; top: 16px; right: 16px; width: 40px; height: 40px; border-radius: 9999px; border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.1); }
    .drawer-close span { position: absolute; left: 12px; top: 19px; width: 16px; height: 2px; background: #fff; transform: rotate(45deg); }
    .drawer-close span + span { transform: rotate(-45deg); }
    .drawer-links { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 24px; }
    .drawer-links a { color: #fff; font-size: 22px; text-decoration: none; }

    @media (max-width: 1023px) {
        .nav-links { display: none; }
        .burger-menu { display: inline-flex; }
    }

    /* hero */
    .hero { position: relative; background: var(--panel); color: #fff; padding-top: 72px; }
    .hero-grid { display: grid; gap: 40px; max-width: 1160px; margin: 0 auto; padding: 48px 24px 64px; }
    .hero h1 { font-size: clamp(34px, 5vw, 72px); line-height: 1.04; letter-spacing: -0.02em; font-weight: 800; }
    .headline-line { display: block; }
    .hero-subtitle { color: rgba(229, 229, 229, 0.9); max-width: 56ch; line-height: 1.7; }
    .hero-cta, .soft-cta { display: inline-flex; align-items: center; gap: 12px; height: 48px; padding: 0 16px; border-radius: 9999px; border: 1px solid rgba(0, 0, 0, 0.1); background: #f5f5f5; color: var(--ink); cursor: pointer; }
    .cta-arrow { display: inline-flex; width: 32px; height: 32px; align-items: center; justify-content: center; border-radius: 9999px; background: var(--ink); color: #fff; }
    .hero-figure { position: relative; margin: 0; border-radius: 24px; overflow: hidden; }
    .hero-figure img { width: 100%; height: 100%; object-fit: cover; display: block; }
    .hero-quote { position: absolute; right: 24px; bottom: 24px; max-width: 500px; padding: 24px; border-radius: 16px; background: rgba(255, 255, 255, 0.12); backdrop-filter: blur(12px); }
    .status-pill { display: inline-flex; align-items: center; gap: 8px; border-radius: 9999px; background: #262626; color: #fff; font-size: 14px; padding: 4px 12px; }
    .status-dot { width: 8px; height: 8px; border-radius: 9999px; background: #e5e5e5; }

    @media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; align-items: center; } }
    @media (max-width: 1279px) { .hero-quote { display: none; } }

    /* carousels */
    .carousel-rail { display: flex; gap: 16px; overflow-x: auto; scroll-snap-type: x mandatory; padding: 0 4px 8px; }
    .carousel-rail.full-width { gap: 0; }
    .carousel-slide { flex-shrink: 0; }
    .snap-start .carousel-slide { scroll-snap-align: start; scroll-margin-left: 16px; }
    .snap-center .carousel-slide { scroll-snap-align: center; }
    .full-width .carousel-slide { width: 100%; }
    .no-scrollbar { scrollbar-width: none; }
    .no-scrollbar::-webkit-scrollbar { display: none; }
    .carousel-dots { display: flex; justify-content: center; gap: 8px; margin-top: 16px; }
    .carousel-dot { width: 8px; height: 8px; padding: 0; border: 0; border-radius: 9999px; background: #d4d4d4; opacity: 0.7; cursor: pointer; transition: opacity 0.2s; }
    .carousel-dot.active { background: var(--ink); opacity: 0.9; }

    /* about */
    .about-intro { display: grid; gap: 32px; }
    .about-intro h2 { font-size: clamp(28px, 4vw, 56px); line-height: 1.02; letter-spacing: -0.01em; }
    .about-copy p { line-height: 1.8; color: #404040; max-width: 70ch; }
    .about-marquee { display: none; margin-top: 48px; overflow: hidden; mask-image: linear-gradient(to right, transparent, black 8%, black 92%, transparent); }
    .marquee-track { display: flex; gap: 20px; width: max-content; }
    .marquee-track.running { animation: marquee-rtl 28s linear infinite; }
    .marquee-item { margin: 0; flex-shrink: 0; width: 320px; height: 280px; border-radius: 20px; overflow: hidden; }
    .marquee-item img, .carousel-slide img { width: 100%; height: 100%; object-fit: cover; display: block; }
    .about-carousel { margin-top: 40px; }
    .about-carousel .carousel-slide { width: 78vw; height: 220px; border-radius: 16px; overflow: hidden; }
    .stats-grid { display: grid; gap: 64px; margin-top: 56px; }
    .stat-value { font-size: 56px; font-weight: 800; letter-spacing: -0.02em; }
    .stat-label { margin-top: 8px; font-weight: 600; }
    .stat-detail { margin-top: 4px; font-size: 13.5px; line-height: 1.7; color: var(--muted); max-width: 40ch; }

    @media (min-width: 1024px) {
        .about-intro { grid-template-columns: 360px 1fr; }
        .about-marquee { display: block; }
        .about-carousel { display: none; }
        .stats-grid { grid-template-columns: repeat(4, 1fr); gap: 32px; }
        .stat-value { font-size: 44px; }
    }

    /* disclosure */
    .disclosure-toggle { display: flex; width: 100%; align-items: center; gap: 12px; padding: 16px 0; border: 0; background: none; text-align: left; cursor: pointer; color: inherit; font: inherit; }
    .plus-x { flex: none; margin-left: auto; transition: transform 0.22s var(--ease); }
    .plus-x.open { transform: rotate(45deg); }
    .disclosure-panel { animation: panel-in 0.28s var(--ease); overflow: hidden; }

    /* services */
    .services-grid { display: grid; gap: 40px; margin-top: 40px; align-items: start; }
    .service-image { position: relative; aspect-ratio: 4 / 3; min-height: 260px; border-radius: 24px; overflow: hidden; background: #f5f5f5; animation: fade-in 0.28s var(--ease); }
    .service-image img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
    .services-accordion { border-top: 1px solid var(--line); border-bottom: 1px solid var(--line); }
    .services-accordion .disclosure + .disclosure { border-top: 1px solid var(--line); }
    .service-icon { display: inline-flex; width: 36px; height: 36px; align-items: center; justify-content: center; border-radius: 6px; border: 1px solid var(--line); }
    .service-title { font-weight: 600; }
    .service-description { padding: 0 0 20px 60px; margin: 0; font-size: 14.5px; line-height: 1.8; color: var(--muted); }

    @media (min-width: 768px) { .services-grid { grid-template-columns: 1fr 1fr; gap: 48px; } }

    /* works */
    .works-mobile { margin-top: 40px; }
    .project-slide { width: 86vw; max-width: 520px; }
    .project-card { border-radius: 24px; overflow: hidden; background: #e9ecef; box-shadow: 0 24px 80px rgba(0, 0, 0, 0.12); }
    .project-card.dark { background: #0f0f10; color: #fff; }
    .project-card.compact .project-image { margin: 16px; aspect-ratio: 16 / 11; border-radius: 16px; overflow: hidden; }
    .project-image img { width: 100%; height: 100%; object-fit: cover; display: block; }
    .project-body { padding: 20px 16px; display: flex; flex-direction: column; gap: 12px; }
    .project-body h3 { font-size: clamp(26px, 3vw, 34px); letter-spacing: -0.02em; margin: 0; }
    .project-description { line-height: 1.75; margin: 0; }
    .project-tags { display: flex; flex-wrap: wrap; gap: 8px; }
    .project-quote { border-radius: 14px; padding: 16px; background: rgba(255, 255, 255, 0.7); }
    .project-card.dark .project-quote { background: rgba(255, 255, 255, 0.06); }
    .quote-author { display: flex; align-items: center; gap: 12px; margin-top: 12px; }
    .avatar { width: 32px; height: 32px; border-radius: 9999px; object-fit: cover; }
    .avatar-empty { display: inline-block; background: #d4d4d4; }
    .pill { display: inline-flex; align-items: center; border-radius: 9999px; padding: 4px 12px; font-size: 12px; }
    .pill-dark { background: rgba(23, 23, 23, 0.9); color: #fff; }
    .pill-light { background: rgba(255, 255, 255, 0.12); color: #fff; border: 1px solid rgba(255, 255, 255, 0.2); }
    .works-stack { display: none; list-style: none; padding: 0; margin: 40px 0 64px; }
    .works-stack-item { position: sticky; top: 96px; margin-bottom: 40px; }

    @media (min-width: 768px) {
        .works-mobile { display: none; }
        .works-stack { display: block; }
        .works-stack .project-card { display: grid; grid-template-columns: 1fr 1fr; }
        .works-stack .project-image { height: 430px; }
        .works-stack .project-body { padding: 32px; justify-content: center; }
    }

    /* testimonials */
    .testimonials-mobile { margin-top: 32px; }
    .testimonial-card { border-radius: 16px; padding: 24px; background: #fff; border: 1px solid var(--line); box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); min-width: 340px; max-width: 380px; }
    .testimonials-mobile .testimonial-card { margin: 0 auto; width: 92%; min-width: 0; min-height: 260px; }
    .testimonial-card.tinted { background: var(--soft); }
    .testimonial-quote { margin-top: 12px; line-height: 1.7; color: #404040; }
    .testimonial-author { display: flex; align-items: center; gap: 12px; margin-top: 20px; }
    .author-name { font-size: 14px; font-weight: 500; }
    .author-role { font-size: 12px; color: #737373; }
    .testimonials-marquee { display: none; }
    .marquee-mask { overflow: hidden; margin-top: 32px; mask-image: linear-gradient(to right, transparent, black 8%, black 92%, transparent); }
    .marquee-row { display: flex; gap: 32px; width: max-content; }
    .marquee-rtl { animation: marquee-rtl 40s linear infinite; }
    .marquee-ltr { animation: marquee-ltr 40s linear infinite; }

    @media (min-width: 768px) {
        .testimonials-mobile { display: none; }
        .testimonials-marquee { display: block; }
    }

    /* faqs */
    .faqs-grid { display: grid; gap: 40px; }
    .faqs-intro h2 { font-size: clamp(40px, 5vw, 46px); line-height: 1.06; letter-spacing: -0.02em; }
    .faqs-list { display: flex; flex-direction: column; gap: 16px; }
    .faq-item { border-radius: 16px; border: 1px solid var(--line); background: #fafafa; overflow: hidden; }
    .faq-item .disclosure-toggle { padding: 16px 24px; }
    .faq-answer { padding: 0 24px 20px; margin: 0; line-height: 1.7; color: var(--muted); }

    @media (min-width: 768px) { .faqs-grid { grid-template-columns: 420px 1fr; gap: 56px; } }

    /* contact */
    .contact .container { padding-bottom: 24px; }
    .contact-panel { display: grid; gap: 40px; border-radius: 24px; background: var(--panel); color: #fff; padding: 24px; }
    .contact-details dl div { display: flex; gap: 16px; margin-bottom: 20px; }
    .contact-details dt { width: 92px; flex-shrink: 0; color: rgba(255, 255, 255, 0.7); }
    .contact-details hr, .footer-panel hr { border: 0; border-top: 1px solid rgba(255, 255, 255, 0.1); margin: 32px 0; }
    .socials { display: flex; gap: 20px; margin-top: 12px; }
    .socials a { display: inline-flex; width: 28px; height: 28px; align-items: center; justify-content: center; border-radius: 6px; border: 1px solid rgba(255, 255, 255, 0.2); }
    .contact-form { display: flex; flex-direction: column; border-radius: 16px; background: #fff; color: var(--ink); padding: 24px; }
    .contact-form label { margin-top: 16px; font-size: 14px; font-weight: 500; }
    .contact-form label:first-child { margin-top: 0; }
    .contact-form input, .contact-form textarea { margin-top: 4px; border-radius: 8px; border: 1px solid var(--line); padding: 8px 12px; font: inherit; font-size: 15px; }
    .required { color: #ef4444; }
    .form-notice { margin-top: 16px; border-radius: 8px; padding: 10px 12px; font-size: 14px; }
    .form-notice.success { background: #ecfdf5; color: #065f46; }
    .form-notice.error { background: #fef2f2; color: #991b1b; }
    .submit-button { margin-top: 20px; height: 44px; border: 0; border-radius: 12px; background: #404040; color: #fff; font: inherit; cursor: pointer; }
    .submit-button:disabled { opacity: 0.6; cursor: progress; }

    @media (min-width: 768px) { .contact-panel { grid-template-columns: 1fr 560px; padding: 40px; } }

    /* footer */
    .site-footer .container { padding-top: 0; padding-bottom: 0; }
    .footer-panel { border-radius: 24px 24px 0 0; background: var(--panel); color: #fff; padding: 24px; }
    .footer-grid { display: grid; gap: 40px; }
    .footer-brand { display: flex; align-items: center; gap: 8px; font-size: 18px; font-weight: 600; }
    .footer-links { display: grid; grid-template-columns: 1fr 1fr; gap: 8px 40px; list-style: none; padding: 0; font-size: 14px; }
    .footer-links a { color: rgba(255, 255, 255, 0.7); text-decoration: none; }
    .footer-links a:hover { color: #fff; }
    .legal { font-size: 12px; color: rgba(255, 255, 255, 0.6); }

    @media (min-width: 768px) { .footer-grid { grid-template-columns: 1fr 360px; } .footer-panel { padding: 40px; } }

    @keyframes marquee-rtl { from { transform: translateX(0); } to { transform: translateX(-50%); } }
    @keyframes marquee-ltr { from { transform: translateX(-50%); } to { transform: translateX(0); } }
    @keyframes fade-in { from { opacity: 0; transform: scale(0.985); } to { opacity: 1; transform: none; } }
    @keyframes panel-in { from { opacity: 0; max-height: 0; } to { opacity: 1; max-height: 600px; } }

    @media (prefers-reduced-motion: reduce) {
        .reveal { opacity: 1; transform: none; transition: none; }
        .marquee-track.running, .marquee-rtl, .marquee-ltr, .service-image, .disclosure-panel { animation: none; }
        .plus-x { transition: none; }
    }
"#;
