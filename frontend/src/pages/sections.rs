use yew::prelude::*;

use crate::components::{
    button::{Button, Size, Variant},
    footer::Footer,
    hero::HeroSection,
    navigation::Navigation,
    section::{Background, Section},
    testimonials::TestimonialsSection,
};
use crate::config;
use crate::content::{HIRING_COPY, PARTNERSHIPS_COPY, RESEARCH_COPY, SONIA_COPY, WHY_COPY};

#[function_component(LongScroll)]
pub fn long_scroll() -> Html {
    html! {
        <div class="long-scroll">
            <Navigation />
            <main>
                <HeroSection />

                <Section id="why" background={Background::Surface}>
                    <h2 class="section__title">{"Why we exist"}</h2>
                    <p class="section__body">{ WHY_COPY }</p>
                </Section>

                <Section id="product">
                    <h2 class="section__title">{"Meet Sonia"}</h2>
                    <p class="section__body">{ SONIA_COPY }</p>
                    <Button href={config::APP_STORE_URL} external={true}>
                        {"Download Sonia"}
                    </Button>
                </Section>

                <TestimonialsSection />

                <Section id="research" background={Background::Surface}>
                    <h2 class="section__title">{"Research"}</h2>
                    <p class="section__body">{ RESEARCH_COPY }</p>
                    <Button href={config::mailto(config::RESEARCH_EMAIL)} variant={Variant::Secondary}>
                        {"Collaborate with us"}
                    </Button>
                </Section>

                <Section id="partnerships">
                    <h2 class="section__title">{"Partnerships"}</h2>
                    <p class="section__body">{ PARTNERSHIPS_COPY }</p>
                    <Button href={config::mailto(config::INFO_EMAIL)} variant={Variant::Secondary}>
                        {"Get in touch"}
                    </Button>
                </Section>

                <Section id="hiring" background={Background::Surface}>
                    <h2 class="section__title">{"Careers"}</h2>
                    <p class="section__body">{ HIRING_COPY }</p>
                    <img src={config::YC_LOGO} alt="Backed by Y Combinator" class="section__badge" />
                    <Button href={config::mailto(config::JOBS_EMAIL)} size={Size::Large}>
                        {"Join us"}
                    </Button>
                </Section>
            </main>
            <Footer />

            <style>
                {r#"
                .long-scroll {
                    background: #fbf8f3;
                    color: #2d2a6e;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .section {
                    padding: 7rem 2rem;
                }
                .section--surface {
                    background: #f3eee6;
                }
                .section__container {
                    max-width: 880px;
                    margin: 0 auto;
                    opacity: 0;
                    transform: translateY(32px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .section--visible .section__container {
                    opacity: 1;
                    transform: translateY(0);
                }
                .section__title {
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    margin: 0 0 1.25rem;
                }
                .section__subtitle,
                .section__body {
                    font-size: 1.2rem;
                    line-height: 1.6;
                    color: #4b4870;
                    margin-bottom: 2rem;
                }
                .section__badge {
                    display: block;
                    height: 40px;
                    margin-bottom: 2rem;
                }
                .testimonials__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .testimonial {
                    margin: 0;
                    padding: 1.75rem;
                    border-radius: 20px;
                    background: #fff;
                }
                .testimonial--accent-1 { border-top: 4px solid #a08cff; }
                .testimonial--accent-2 { border-top: 4px solid #ffb38a; }
                .testimonial--accent-3 { border-top: 4px solid #7fd1b9; }
                .testimonial--accent-4 { border-top: 4px solid #f28fb1; }
                .testimonial__quote {
                    margin: 0;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
