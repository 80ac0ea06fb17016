use yew::prelude::*;

use crate::content::{About, Brand};
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub brand: Brand,
    pub about: About,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let AboutProps { brand, about } = props;

    html! {
        <section id={Section::About.id()} class="page-section">
            <div class="container">
                <div class="section-header">
                    <h2>{format!("About {}", brand.name)}</h2>
                    <p>{about.intro.clone()}</p>
                </div>

                <div class="about-grid">
                    <div>
                        <h3 class="about-heading">{"Our Mission"}</h3>
                        { for about.mission.iter().map(|paragraph| html! {
                            <p class="about-paragraph">{paragraph.clone()}</p>
                        }) }
                    </div>

                    <div class="expertise-card">
                        <h4>{"Our Expertise"}</h4>
                        <ul class="expertise-list">
                            { for about.expertise.iter().map(|item| html! {
                                <li key={item.clone()}>
                                    <span class="dot"></span>
                                    {item.clone()}
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                    align-items: center;
                }

                .about-heading {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .about-paragraph {
                    line-height: 1.625;
                    margin-bottom: 1.5rem;
                }

                .expertise-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--color-primary-10);
                }

                .expertise-card h4 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .expertise-list {
                    list-style: none;
                    padding: 0;
                }

                .expertise-list li {
                    display: flex;
                    align-items: center;
                    margin-bottom: 0.75rem;
                }

                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-right: 0.75rem;
                    border-radius: 9999px;
                    background: var(--color-primary);
                }

                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
