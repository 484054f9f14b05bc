use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::button::{Button, Size, Variant};
use crate::config;
use crate::dom;
use crate::motion::{self, Point};

type FrameCallback = Closure<dyn FnMut(f64)>;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let is_loaded = use_state(|| false);
    let hero_ref = use_node_ref();
    let pointer = use_mut_ref(|| Point::IDLE);

    // Entrance animation shortly after mount
    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(config::HERO_ENTRANCE_DELAY_MS, move || is_loaded.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    // Backdrop follow loop, one frame at a time until unmount
    {
        let hero_ref = hero_ref.clone();
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let frame_id = Rc::new(Cell::new(None::<i32>));
                let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
                let started_at = Cell::new(None::<f64>);

                {
                    let frame_id = frame_id.clone();
                    let next_tick = tick.clone();
                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let start = match started_at.get() {
                            Some(start) => start,
                            None => {
                                started_at.set(Some(now));
                                now
                            }
                        };
                        if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                            let offset = motion::follow_offset(
                                *pointer.borrow(),
                                f64::from(hero.client_width()),
                                f64::from(hero.client_height()),
                                now - start,
                            );
                            dom::set_style_var(&hero, "--pointer-x", &format!("{:.1}px", offset.x));
                            dom::set_style_var(&hero, "--pointer-y", &format!("{:.1}px", offset.y));
                        }
                        if let Some(callback) = next_tick.borrow().as_ref() {
                            frame_id.set(dom::request_frame(callback));
                        }
                    }) as Box<dyn FnMut(f64)>));
                }

                if let Some(callback) = tick.borrow().as_ref() {
                    frame_id.set(dom::request_frame(callback));
                }

                move || {
                    if let Some(id) = frame_id.get() {
                        dom::cancel_frame(id);
                    }
                    // breaks the closure's reference to itself
                    tick.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onmousemove = {
        let hero_ref = hero_ref.clone();
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                let rect = hero.get_bounding_client_rect();
                *pointer.borrow_mut() = Point {
                    x: f64::from(e.client_x()) - rect.left(),
                    y: f64::from(e.client_y()) - rect.top(),
                };
            }
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| *pointer.borrow_mut() = Point::IDLE);

    let scroll_to_content = Callback::from(|_: MouseEvent| {
        dom::scroll_to_section("why");
    });

    html! {
        <section
            id="hero"
            ref={hero_ref}
            class={classes!("hero", is_loaded.then(|| "hero--loaded"))}
            {onmousemove}
            {onmouseleave}
        >
            <div class="hero__backdrop" />
            <div class="hero__content">
                <div class="hero__brand">
                    <img src={config::BRAND_LOGO} alt="" class="hero__logo" />
                    <span class="hero__brand-name">{"Sonia"}</span>
                </div>
                <h1 class="hero__title">{"Your AI companion for emotional wellbeing"}</h1>
                <p class="hero__subtitle">{"Your partner to grow, anytime and lifelong."}</p>
                <div class="hero__cta">
                    <Button
                        href={config::HERO_APP_STORE_URL}
                        variant={Variant::Primary}
                        size={Size::Large}
                        external={true}
                    >
                        {"Download the app"}
                    </Button>
                </div>
            </div>

            <button class="hero__scroll-indicator" onclick={scroll_to_content} aria-label="Scroll to content">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                    stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 5v14M19 12l-7 7-7-7" />
                </svg>
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #fbf8f3;
                    --pointer-x: 50%;
                    --pointer-y: 50%;
                }
                .hero__backdrop {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(
                        600px circle at var(--pointer-x) var(--pointer-y),
                        rgba(160, 140, 255, 0.35),
                        transparent 70%
                    );
                    pointer-events: none;
                }
                .hero__content {
                    position: relative;
                    text-align: center;
                    max-width: 720px;
                    padding: 0 2rem;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .hero--loaded .hero__content {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero__brand {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .hero__logo {
                    height: 40px;
                }
                .hero__brand-name {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #2d2a6e;
                }
                .hero__title {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    line-height: 1.1;
                    color: #2d2a6e;
                    margin: 0 0 1.25rem;
                }
                .hero__subtitle {
                    font-size: 1.25rem;
                    color: #6b6890;
                    margin-bottom: 2.5rem;
                }
                .hero__scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: #2d2a6e;
                    cursor: pointer;
                    animation: heroBounce 2s ease-in-out infinite;
                }
                @keyframes heroBounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 8px); }
                }
                "#}
            </style>
        </section>
    }
}
