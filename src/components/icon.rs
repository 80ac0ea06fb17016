use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// One or more SVG path `d` strings, drawn in a 24x24 box.
    pub paths: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} fill="none" stroke="currentColor" viewBox="0 0 24 24">
            { for props.paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={d.clone()}></path>
            }) }
        </svg>
    }
}

pub const CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";
pub const MENU: &str = "M4 6h16M4 12h16M4 18h16";
pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";
pub const MAIL: &str = "M3 8l7.89 4.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
pub const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
pub const PIN: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z";
pub const PIN_DOT: &str = "M15 11a3 3 0 11-6 0 3 3 0 016 0z";
