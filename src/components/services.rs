use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{Service, Tech};
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
    pub tech: Vec<Tech>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id={Section::Services.id()} class="page-section services">
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p class="muted">{"Comprehensive technology solutions for your business needs"}</p>
                </div>

                <div class="card-grid three">
                    { for props.services.iter().map(|service| html! {
                        <div key={service.title.clone()} class="card card-hover service-card">
                            <Icon class={classes!("service-icon")} paths={vec![AttrValue::from(service.icon.clone())]} />
                            <h3>{service.title.clone()}</h3>
                            <p class="muted">{service.description.clone()}</p>
                        </div>
                    }) }
                </div>

                if !props.tech.is_empty() {
                    <div class="tech-grid">
                        { for props.tech.iter().map(|tech| html! {
                            <div key={tech.name.clone()} class="tech-tile">
                                <span class="tech-name">{tech.name.clone()}</span>
                                <span class="tech-category">{tech.category.clone()}</span>
                            </div>
                        }) }
                    </div>
                }
            </div>

            <style>
                {r#"
                .services {
                    background: var(--color-primary-20);
                }

                .service-card {
                    padding: 2rem;
                }

                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 1.5rem 0 1rem;
                }

                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    color: var(--color-primary);
                }

                .tech-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
                    gap: 1rem;
                }

                .tech-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.25rem 1rem;
                    border-radius: 0.75rem;
                    background: var(--color-bg);
                    border: 1px solid transparent;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }

                .tech-tile:hover {
                    transform: translateY(-4px);
                    border-color: var(--color-primary);
                }

                .tech-name {
                    font-weight: 600;
                }

                .tech-category {
                    font-size: 0.75rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                "#}
            </style>
        </section>
    }
}
