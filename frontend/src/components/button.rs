use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Size {
    Large,
    #[default]
    Medium,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Primary => "button--primary",
            Variant::Secondary => "button--secondary",
        }
    }
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Large => "button--large",
            Size::Medium => "button--medium",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Renders a link when `href` is set, otherwise a plain button.
#[styled_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = css!(
        r#"
            display: inline-flex;
            align-items: center;
            justify-content: center;
            border: none;
            border-radius: 999px;
            font-weight: 600;
            text-decoration: none;
            cursor: pointer;
            transition: transform 0.2s ease, box-shadow 0.2s ease;

            &.button--primary {
                background: #2d2a6e;
                color: #fff;
            }
            &.button--secondary {
                background: transparent;
                color: #2d2a6e;
                border: 1px solid #2d2a6e;
            }
            &.button--large {
                padding: 1.1rem 2.4rem;
                font-size: 1.15rem;
            }
            &.button--medium {
                padding: 0.75rem 1.6rem;
                font-size: 1rem;
            }
            &:hover {
                transform: translateY(-2px);
                box-shadow: 0 6px 20px rgba(45, 42, 110, 0.25);
            }
        "#
    );

    let classes = classes!(
        style,
        "button",
        props.variant.class(),
        props.size.class(),
        props.class.clone()
    );
    let onclick = props.onclick.clone();

    match &props.href {
        Some(href) if props.external => html! {
            <a href={href.clone()} class={classes} {onclick} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
            </a>
        },
        Some(href) => html! {
            <a href={href.clone()} class={classes} {onclick}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button class={classes} {onclick}>
                { for props.children.iter() }
            </button>
        },
    }
}
