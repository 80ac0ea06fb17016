use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::{self, Icon};
use crate::section::Section;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub short: String,
    pub active: Section,
    pub theme: Theme,
    pub on_navigate: Callback<Section>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, short, active, theme, on_navigate, on_toggle_theme } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let desktop_links = Section::ALL.iter().map(|&section| {
        let on_navigate = on_navigate.clone();
        html! {
            <button
                key={section.id()}
                class={classes!("nav-link", (section == *active).then(|| "active"))}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
            >
                {section.label()}
            </button>
        }
    });

    // Picking a section from the mobile panel also closes it
    let mobile_links = Section::ALL.iter().map(|&section| {
        let on_navigate = on_navigate.clone();
        let menu_open = menu_open.clone();
        html! {
            <button
                key={section.id()}
                class={classes!("mobile-link", (section == *active).then(|| "active"))}
                onclick={Callback::from(move |_: MouseEvent| {
                    on_navigate.emit(section);
                    menu_open.set(false);
                })}
            >
                {section.label()}
            </button>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-brand">{brand.clone()}</span>
                    <span class="nav-short">{short.clone()}</span>
                </div>

                <div class="nav-right">
                    { for desktop_links }
                    <button class="theme-toggle" onclick={toggle_theme}>
                        { if theme.is_dark() { "☀️" } else { "🌙" } }
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <Icon
                        class={classes!("burger-icon")}
                        paths={vec![AttrValue::Static(if *menu_open { icon::CLOSE } else { icon::MENU })]}
                    />
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for mobile_links }
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: var(--color-bg);
                    backdrop-filter: blur(4px);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }

                .nav-short {
                    margin-left: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--color-text);
                }

                .nav-right {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }

                .nav-link {
                    background: none;
                    border: none;
                    border-bottom: 2px solid transparent;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--color-text);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: var(--color-primary);
                }

                .nav-link.active {
                    color: var(--color-primary);
                    font-weight: 600;
                    border-bottom-color: var(--color-primary);
                }

                .theme-toggle {
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.25rem;
                    border: 1px solid var(--color-primary);
                    color: var(--color-primary);
                    background: none;
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--color-text);
                    cursor: pointer;
                }

                .burger-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu.open {
                        display: block;
                        padding: 0.5rem 0.5rem 0.75rem;
                        border-top: 1px solid #e5e7eb;
                        background: var(--color-bg);
                    }
                }

                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                    font-size: 1rem;
                    font-weight: 500;
                    background: none;
                    border: none;
                    color: var(--color-text);
                    cursor: pointer;
                }

                .mobile-link.active,
                .mobile-link:hover {
                    color: var(--color-primary);
                }
                "#}
            </style>
        </nav>
    }
}
