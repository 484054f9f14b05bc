use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuButtonProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(MenuButton)]
pub fn menu_button(props: &MenuButtonProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <button class={classes!("menu-button", props.menu_open.then(|| "hidden"))} {onclick}>
            {"☰"}
        </button>
    }
}
