use yew::prelude::*;

use crate::reveal::use_reveal;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Background {
    #[default]
    Default,
    Surface,
}

impl Background {
    fn class(self) -> &'static str {
        match self {
            Background::Default => "section--default",
            Background::Surface => "section--surface",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub background: Background,
}

/// Anchorable page section that fades in the first time it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!(
                "section",
                props.background.class(),
                revealed.then(|| "section--visible"),
                props.class.clone(),
            )}
        >
            <div class="section__container">
                { for props.children.iter() }
            </div>
        </section>
    }
}
