use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::NAV_LINKS;
use crate::dom;
use crate::layout;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| dom::scroll_y().map_or(false, layout::is_scrolled));

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = dom::scroll_y() {
                is_scrolled.set(layout::is_scrolled(scroll_y));
            }
        });
    }

    // Lock page scroll behind the overlay
    use_effect_with_deps(
        |open: &bool| {
            dom::set_body_scroll_locked(*open);
            || dom::set_body_scroll_locked(false)
        },
        *menu_open,
    );

    let nav_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let (menu_label, expanded) = if *menu_open {
        ("Close menu", "true")
    } else {
        ("Open menu", "false")
    };

    html! {
        <header class={classes!(
            "navigation",
            is_scrolled.then(|| "navigation--scrolled"),
            menu_open.then(|| "navigation--menu-open"),
        )}>
            <nav class="navigation__inner">
                <a href="#hero" class="navigation__logo" onclick={nav_to("hero")}>
                    <img src={config::HEADER_LOGO} alt="Sonia" class="navigation__logo-img" />
                </a>

                <ul class="navigation__links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.id}>
                            <a href={format!("#{}", link.id)} class="navigation__link" onclick={nav_to(link.id)}>
                                { link.label }
                            </a>
                        </li>
                    }) }
                </ul>

                <button
                    class={classes!("navigation__menu-btn", menu_open.then(|| "navigation__menu-btn--open"))}
                    onclick={toggle_menu}
                    aria-label={menu_label}
                    aria-expanded={expanded}
                >
                    <span class="navigation__menu-line" />
                    <span class="navigation__menu-line" />
                </button>
            </nav>

            <div class={classes!("navigation__overlay", menu_open.then(|| "navigation__overlay--open"))}>
                <ul class="navigation__mobile-links">
                    { for NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                        <li key={link.id} style={layout::stagger_style(index)}>
                            <a href={format!("#{}", link.id)} class="navigation__mobile-link" onclick={nav_to(link.id)}>
                                { link.label }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>

            <style>
                {r#"
                .navigation {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 80px;
                    z-index: 100;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .navigation--scrolled {
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 0 rgba(45, 42, 110, 0.08);
                }
                .navigation__inner {
                    max-width: 1100px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .navigation__logo-img {
                    height: 28px;
                }
                .navigation__links {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .navigation__link,
                .navigation__mobile-link {
                    color: #2d2a6e;
                    text-decoration: none;
                    font-weight: 500;
                }
                .navigation__menu-btn {
                    display: none;
                    flex-direction: column;
                    gap: 6px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    z-index: 101;
                }
                .navigation__menu-line {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #2d2a6e;
                    transition: transform 0.3s ease;
                }
                .navigation__menu-btn--open .navigation__menu-line:first-child {
                    transform: translateY(4px) rotate(45deg);
                }
                .navigation__menu-btn--open .navigation__menu-line:last-child {
                    transform: translateY(-4px) rotate(-45deg);
                }
                .navigation__overlay {
                    position: fixed;
                    inset: 0;
                    background: #fbf8f3;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .navigation__overlay--open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .navigation__mobile-links {
                    list-style: none;
                    padding: 0;
                    text-align: center;
                }
                .navigation__mobile-links li {
                    margin: 1.25rem 0;
                    font-size: 1.75rem;
                    opacity: 0;
                    transform: translateY(12px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .navigation__overlay--open .navigation__mobile-links li {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (max-width: 768px) {
                    .navigation__links {
                        display: none;
                    }
                    .navigation__menu-btn {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
