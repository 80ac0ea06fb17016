use log::info;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::{self, Icon};
use crate::config::CONTACT_PLACEHOLDER;
use crate::content::ContactDetails;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactDetails,
}

/// The form has no backend. Sending only tells the visitor so.
fn send_placeholder() {
    info!("Contact form used; no submission endpoint configured");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(CONTACT_PLACEHOLDER);
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ContactDetails { email, phone, location } = &props.contact;
    let on_send = Callback::from(|_: MouseEvent| send_placeholder());

    html! {
        <section id={Section::Contact.id()} class="page-section contact">
            <div class="container">
                <div class="section-header">
                    <h2>{"Let's Work Together"}</h2>
                    <p>{"Ready to transform your ideas into powerful digital solutions?"}</p>
                </div>

                <div class="contact-grid">
                    <div>
                        <h3 class="contact-heading">{"Get In Touch"}</h3>
                        <div class="contact-item">
                            <Icon class={classes!("contact-icon")} paths={vec![AttrValue::Static(icon::MAIL)]} />
                            <span>{email.clone()}</span>
                        </div>
                        <div class="contact-item">
                            <Icon class={classes!("contact-icon")} paths={vec![AttrValue::Static(icon::PHONE)]} />
                            <span>{phone.clone()}</span>
                        </div>
                        <div class="contact-item">
                            <Icon
                                class={classes!("contact-icon")}
                                paths={vec![AttrValue::Static(icon::PIN), AttrValue::Static(icon::PIN_DOT)]}
                            />
                            <span>{location.clone()}</span>
                        </div>
                    </div>

                    <div class="contact-form">
                        <label>{"Name"}</label>
                        <input type="text" placeholder="Your Name" />
                        <label>{"Email"}</label>
                        <input type="email" placeholder="your@email.com" />
                        <label>{"Message"}</label>
                        <textarea rows="4" placeholder="Tell us about your project..."></textarea>
                        <button type="button" class="send-button" onclick={on_send}>
                            {"Send Message"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    background: var(--color-primary-30);
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                }

                .contact-heading {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .contact-item {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }

                .contact-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    margin-right: 1rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: #fff;
                }

                .contact-form label {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .contact-form input,
                .contact-form textarea {
                    padding: 0.75rem 1rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    color: #374151;
                    resize: none;
                }

                .send-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    color: var(--color-primary);
                    background: var(--color-primary-10);
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }

                .send-button:hover {
                    color: #fff;
                    background: var(--color-primary);
                }

                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
