use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

fn social_links() -> Html {
    html! {
        <>
            <a href={config::LINKEDIN_URL} class="footer__link" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
            <a href={config::X_URL} class="footer__link" target="_blank" rel="noopener noreferrer">{"X"}</a>
            <a href={config::INSTAGRAM_URL} class="footer__link" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
        </>
    }
}

fn legal_links() -> Html {
    html! {
        <>
            <a href={config::PRIVACY_PATH} class="footer__link">{"Privacy"}</a>
            <a href={config::TERMS_PATH} class="footer__link">{"Terms"}</a>
            <a href={config::mailto(config::INFO_EMAIL)} class="footer__link">{"Contact"}</a>
        </>
    }
}

/// Single-row footer under the tabbed layout.
#[function_component(CompactFooter)]
pub fn compact_footer() -> Html {
    html! {
        <footer class="footer footer--compact">
            <nav class="footer__links">
                { legal_links() }
            </nav>
            <nav class="footer__social">
                { social_links() }
            </nav>
        </footer>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__top">
                    <img src={config::BRAND_LOGO} alt="Sonia" class="footer__logo" />
                    <nav class="footer__links">
                        { legal_links() }
                    </nav>
                    <nav class="footer__social">
                        { social_links() }
                    </nav>
                </div>
                <div class="footer__bottom">
                    <p class="footer__tagline">{"support for the rest of us"}</p>
                    <p class="footer__copyright">{ format!("San Francisco / {}", year) }</p>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    padding: 3rem 2rem 2rem;
                    color: #6b6890;
                    font-size: 0.95rem;
                }
                .footer__container {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .footer__top,
                .footer__bottom {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer__bottom {
                    margin-top: 2rem;
                    border-top: 1px solid rgba(45, 42, 110, 0.1);
                    padding-top: 1.5rem;
                }
                .footer__logo {
                    height: 32px;
                }
                .footer__links,
                .footer__social {
                    display: flex;
                    gap: 1.25rem;
                }
                .footer__link {
                    color: inherit;
                    text-decoration: none;
                }
                .footer__link:hover {
                    color: #2d2a6e;
                }
                "#}
            </style>
        </footer>
    }
}
