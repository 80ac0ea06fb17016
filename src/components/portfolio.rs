use yew::prelude::*;

use crate::components::icon::{self, Icon};
use crate::content::{Client, Project};
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
}

fn project_card(project: &Project) -> Html {
    html! {
        <div key={project.title.clone()} class="card card-hover project-card">
            <div class={classes!("project-banner", format!("accent-{}", project.accent))}>
                <Icon class={classes!("project-icon")} paths={vec![AttrValue::from(project.icon.clone())]} />
            </div>
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p>{project.description.clone()}</p>
                <div class="tags">
                    { for project.tags.iter().map(|tag| html! {
                        <span class="tag">{tag.clone()}</span>
                    }) }
                </div>
                <a
                    href={project.demo_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="demo-link"
                >
                    {"View Demo"}
                    <Icon class={classes!("demo-icon")} paths={vec![AttrValue::Static(icon::CHEVRON_RIGHT)]} />
                </a>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section id={Section::Portfolio.id()} class="page-section portfolio">
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Portfolio"}</h2>
                    <p class="muted">{"Successful projects that showcase our expertise and commitment"}</p>
                </div>

                <div class="card-grid two">
                    { for props.projects.iter().map(project_card) }
                </div>

                if !props.clients.is_empty() {
                    <div class="clients">
                        <h3>{"Who We Work With"}</h3>
                        <div class="client-strip">
                            { for props.clients.iter().map(|client| html! {
                                <div key={client.name.clone()} class="client">
                                    <span class="client-name">{client.name.clone()}</span>
                                    <span class="client-detail">{client.detail.clone()}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                }
            </div>

            <style>
                {r#"
                .portfolio {
                    background: var(--color-primary-10);
                }

                .project-card {
                    overflow: hidden;
                }

                .project-banner {
                    height: 12rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .project-icon {
                    width: 6rem;
                    height: 6rem;
                }

                .accent-blue { background: #eff6ff; color: var(--color-primary); }
                .accent-green { background: #f0fdf4; color: #16a34a; }
                .accent-purple { background: #faf5ff; color: #9333ea; }
                .accent-orange { background: #fff7ed; color: #ea580c; }

                .project-body {
                    padding: 2rem;
                }

                .project-body h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .project-body p {
                    margin-bottom: 1.5rem;
                }

                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }

                .tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: var(--color-primary);
                    background: var(--color-primary-10);
                }

                .demo-link {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #fff;
                    background: var(--color-primary);
                    text-decoration: none;
                }

                .demo-icon {
                    margin-left: 0.25rem;
                    width: 1rem;
                    height: 1rem;
                }

                .clients {
                    margin-top: 4rem;
                    text-align: center;
                }

                .clients h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .client-strip {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }

                .client {
                    display: flex;
                    flex-direction: column;
                    max-width: 14rem;
                }

                .client-name {
                    font-weight: 600;
                    color: var(--color-primary);
                }

                .client-detail {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </section>
    }
}
