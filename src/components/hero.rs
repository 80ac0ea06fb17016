use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::{self, Icon};
use crate::content::Brand;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: Brand,
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="container hero-content">
                <h1 class="hero-title">
                    <span class="gradient-text">{props.brand.name.clone()}</span>
                    <br />
                    <span class="hero-company">{props.brand.company.clone()}</span>
                </h1>
                <p class="hero-tagline">{props.brand.tagline.clone()}</p>
                <div class="hero-actions">
                    <button class="btn-primary" onclick={go_to(Section::Portfolio)}>
                        {"View Our Work"}
                        <Icon class={classes!("btn-icon")} paths={vec![AttrValue::Static(icon::CHEVRON_RIGHT)]} />
                    </button>
                    <button class="btn-outline" onclick={go_to(Section::Contact)}>
                        {"Get In Touch"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    padding-top: 4rem;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: var(--color-primary-20);
                }

                .hero-content {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    color: var(--color-text);
                    margin-bottom: 1.5rem;
                }

                .gradient-text {
                    background: linear-gradient(45deg, var(--color-primary), #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-company {
                    font-size: 2.25rem;
                }

                .hero-tagline {
                    font-size: 1.5rem;
                    color: var(--color-text);
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .btn-icon {
                    margin-left: 0.5rem;
                    width: 1.25rem;
                    height: 1.25rem;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }

                    .hero-company {
                        font-size: 1.875rem;
                    }

                    .hero-tagline {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
