use yew::prelude::*;

use crate::components::section::{Background, Section};
use crate::content::{testimonial_accent, TESTIMONIALS};

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <Section id="testimonials" background={Background::Default} class={classes!("testimonials-section")}>
            <h2 class="section__title">{"Stories from our community"}</h2>
            <p class="section__subtitle">
                {"More than 20,000 humans have already found support with Sonia."}
            </p>
            <div class="testimonials__grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, quote)| html! {
                    <blockquote
                        key={index}
                        class={format!("testimonial testimonial--accent-{}", testimonial_accent(index))}
                    >
                        <p class="testimonial__quote">{ format!("\"{}\"", quote) }</p>
                    </blockquote>
                }) }
            </div>
        </Section>
    }
}
