use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::{footer::CompactFooter, menu_button::MenuButton, nav_bar::NavBar};
use crate::config;
use crate::content::Tab;
use crate::dom;
use crate::intro::IntroStage;
use crate::sequencer::{Profile, TabAction, TabSequencer};

#[function_component(TabbedHome)]
pub fn tabbed_home() -> Html {
    let stage = use_state(IntroStage::default);
    let tabs = use_reducer(TabSequencer::default);

    // Splash intro, one stage per timeout
    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |stage: &IntroStage| {
                let stage = *stage;
                let timeout = stage
                    .next_delay()
                    .map(|delay| Timeout::new(delay, move || stage_setter.set(stage.next())));
                move || drop(timeout)
            },
            *stage,
        );
    }

    // Drive the tab switch; a new epoch replaces the pending step
    {
        let dispatcher = tabs.dispatcher();
        use_effect_with_deps(
            move |(_, delay): &(u64, Option<u32>)| {
                let timeout = delay.map(|delay| Timeout::new(delay, move || dispatcher.dispatch(TabAction::Advance)));
                move || drop(timeout)
            },
            (tabs.epoch(), tabs.next_delay()),
        );
    }

    let on_select = {
        let dispatcher = tabs.dispatcher();
        Callback::from(move |tab: Tab| {
            let profile = dom::viewport_width()
                .map(Profile::for_width)
                .unwrap_or(Profile::Desktop);
            info!("Tab {} selected", tab);
            dispatcher.dispatch(TabAction::Select(tab, profile));
        })
    };

    let on_toggle_menu = {
        let dispatcher = tabs.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TabAction::ToggleMenu))
    };

    let view = tabs.view();

    html! {
        <main class={classes!("tabbed", stage.is_animated().then(|| "animated"))}>
            <img
                src={config::SPLASH_LOGO}
                alt="Sonia Logo"
                class={classes!("logo", (!stage.shows_logo()).then(|| "hidden"))}
            />
            <div class={classes!(
                "content",
                stage.shows_content().then(|| "visible"),
                view.menu_open.then(|| "menu-open"),
            )}>
                <MenuButton menu_open={view.menu_open} on_toggle={on_toggle_menu} />
                <NavBar highlighted={tabs.highlighted()} menu_open={view.menu_open} {on_select} />
                <div class="content-area">
                    <div class={classes!("content-wrapper", (!view.content_visible).then(|| "shrunk"))}>
                        <div class="content-text">{ view.selected.copy() }</div>
                        if view.selected.shows_download() {
                            <a
                                href={config::APP_STORE_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!("action-button", (!view.button_visible).then(|| "faded"))}
                            >
                                {"Download Sonia"}
                            </a>
                        }
                        if view.selected.shows_yc_badge() {
                            <img src={config::YC_LOGO} alt="YC Logo" class="content-image" />
                        }
                    </div>
                </div>
            </div>
            <div class={classes!("footer-wrapper", stage.shows_content().then(|| "visible"))}>
                <CompactFooter />
            </div>

            <style>
                {r#"
                .tabbed {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #fbf8f3;
                    color: #2d2a6e;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .logo {
                    width: 120px;
                    transition: transform 0.5s ease, opacity 0.3s ease;
                }
                .animated .logo {
                    transform: scale(0.8);
                }
                .logo.hidden {
                    opacity: 0;
                    position: absolute;
                    pointer-events: none;
                }
                .content,
                .footer-wrapper {
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .content.visible,
                .footer-wrapper.visible {
                    opacity: 1;
                }
                .content {
                    width: 100%;
                    max-width: 860px;
                    padding: 0 2rem;
                }
                .navbar {
                    position: relative;
                }
                .mobile-title {
                    display: none;
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .nav-container {
                    position: relative;
                    display: flex;
                    justify-content: center;
                }
                .nav-item {
                    background: none;
                    border: none;
                    padding: 0.75rem 20px;
                    font-size: 1.1rem;
                    color: #6b6890;
                    cursor: pointer;
                }
                .nav-item.selected {
                    color: #2d2a6e;
                }
                .slider {
                    position: absolute;
                    bottom: 0;
                    height: 2px;
                    width: var(--slider-width, 0px);
                    left: var(--slider-left, 0px);
                    background: #2d2a6e;
                    transition: left 0.3s ease, width 0.3s ease;
                }
                .menu-button {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .menu-button.hidden {
                    visibility: hidden;
                }
                .content-wrapper {
                    margin-top: 3rem;
                    text-align: center;
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .content-wrapper.shrunk {
                    opacity: 0;
                    transform: scale(0.96);
                }
                .content-text {
                    font-size: 1.35rem;
                    line-height: 1.6;
                }
                .action-button {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #2d2a6e;
                    color: #fff;
                    text-decoration: none;
                    transition: opacity 0.5s ease;
                }
                .action-button.faded {
                    opacity: 0;
                }
                .content-image {
                    margin-top: 2rem;
                    height: 40px;
                }
                .footer--compact {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    padding: 3rem 1rem 2rem;
                }
                .footer--compact .footer__links,
                .footer--compact .footer__social {
                    display: flex;
                    gap: 1.25rem;
                }
                .footer--compact .footer__link {
                    color: #6b6890;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .menu-button,
                    .mobile-title {
                        display: block;
                    }
                    .nav-container {
                        display: none;
                        flex-direction: column;
                    }
                    .nav-container.show {
                        display: flex;
                    }
                    .slider {
                        display: none;
                    }
                }
                "#}
            </style>
        </main>
    }
}
