use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::FOOTER_NAV;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer id="site-footer" class="site-footer">
            <div class="container">
                <Reveal class="footer-panel">
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <img src="/images/logo.svg" alt="LifetimeArt logo" width="22" height="22" />
                            <span>{config::SITE_NAME}</span>
                        </div>
                        <nav aria-label="Footer navigation">
                            <div class="footer-heading">{"Quick links"}</div>
                            <ul class="footer-links">
                                { for FOOTER_NAV.iter().map(|link| html! {
                                    <li key={link.label}><a href={link.href}>{link.label}</a></li>
                                }) }
                            </ul>
                        </nav>
                    </div>
                    <hr />
                    <p class="legal">{copyright_line(year)}</p>
                </Reveal>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_studio() {
        assert_eq!(copyright_line(2025), "© 2025 LifetimeArt. All rights reserved.");
    }
}
