use log::info;
use yew::prelude::*;

use crate::components::{
    about::AboutSection,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    portfolio::Portfolio,
    services::Services,
};
use crate::content::{self, SiteContent};
use crate::section::Section;
use crate::theme::{Theme, ThemeController};
use crate::tracker::{scroll_to, use_active_section};

/// The whole page. Owns the active section and the theme; children get them
/// as props and report clicks back through callbacks.
#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| content::load(), ());
    let active = use_active_section();
    let theme = use_state_eq(Theme::default);

    // Restore the saved theme once on mount
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                theme.set(ThemeController::browser().restore());
                || ()
            },
            (),
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            theme.set(ThemeController::browser().toggle(*theme));
        })
    };

    let on_navigate = Callback::from(|section: Section| {
        info!("Scrolling to {}", section);
        scroll_to(section);
    });

    let SiteContent { brand, about, services, tech, projects, clients, contact } =
        (*content).clone();

    html! {
        <div class="landing">
            <Nav
                brand={brand.name.clone()}
                short={brand.short.clone()}
                {active}
                theme={*theme}
                on_navigate={on_navigate.clone()}
                {on_toggle_theme}
            />
            <Hero brand={brand.clone()} {on_navigate} />
            <AboutSection brand={brand.clone()} {about} />
            <Services {services} {tech} />
            <Portfolio {projects} {clients} />
            <Contact {contact} />
            <Footer {brand} />

            <style>
                {r#"
                :root {
                    --color-bg: #ffffff;
                    --color-text: #1f2937;
                    --color-primary: #2563eb;
                    --color-primary-10: rgba(37, 99, 235, 0.1);
                    --color-primary-20: rgba(37, 99, 235, 0.2);
                    --color-primary-30: rgba(37, 99, 235, 0.3);
                }

                :root.dark {
                    --color-bg: #0f172a;
                    --color-text: #e5e7eb;
                    --color-primary: #60a5fa;
                    --color-primary-10: rgba(96, 165, 250, 0.1);
                    --color-primary-20: rgba(96, 165, 250, 0.2);
                    --color-primary-30: rgba(96, 165, 250, 0.3);
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                }

                .landing {
                    min-height: 100vh;
                    background: var(--color-bg);
                    color: var(--color-text);
                    overflow-x: hidden;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .page-section {
                    padding: 5rem 0;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .section-header p {
                    font-size: 1.25rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .muted {
                    color: #4b5563;
                }

                :root.dark .muted {
                    color: #9ca3af;
                }

                .card-grid {
                    display: grid;
                    gap: 2rem;
                }

                .card-grid.three {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }

                .card-grid.two {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }

                .card {
                    border-radius: 0.75rem;
                    background: var(--color-bg);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .card-hover {
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .card-hover:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .btn-primary,
                .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }

                .btn-primary {
                    border: none;
                    color: #fff;
                    background: var(--color-primary);
                }

                .btn-primary:hover {
                    opacity: 0.7;
                }

                .btn-outline {
                    border: 2px solid var(--color-primary);
                    color: var(--color-primary);
                    background: none;
                }

                .btn-outline:hover {
                    color: #fff;
                    background: var(--color-primary);
                }

                @media (max-width: 1024px) {
                    .card-grid.two {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .card-grid.three {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
