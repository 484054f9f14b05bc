use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::Tab;
use crate::dom;
use crate::layout::SliderGeometry;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub highlighted: Tab,
    pub menu_open: bool,
    pub on_select: Callback<Tab>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let slider = use_state_eq(SliderGeometry::default);
    let window_size = use_window_size();

    // Re-measure after the highlight moves or the window resizes
    {
        let slider = slider.clone();
        use_effect_with_deps(
            move |(tab, _size): &(Tab, (f64, f64))| {
                let measured = dom::measure_tab_button(*tab);
                if measured.is_none() {
                    debug!("Tab button for {} not rendered yet", tab);
                }
                slider.set((*slider).remeasure(measured));
                || ()
            },
            (props.highlighted, window_size),
        );
    }

    html! {
        <nav class="navbar">
            <div class="mobile-title">{ props.highlighted.label() }</div>
            <div class={classes!("nav-container", props.menu_open.then(|| "show"))}>
                { for Tab::nav_items(props.highlighted).into_iter().map(|(tab, selected)| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            key={tab.id()}
                            class={classes!("nav-item", selected.then(|| "selected"))}
                            data-tab={tab.id()}
                            {onclick}
                        >
                            { tab.label() }
                        </button>
                    }
                }) }
                <div class="slider" style={slider.style()} />
            </div>
        </nav>
    }
}
