use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::Brand;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let Brand { name, company, motto, .. } = &props.brand;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-brand">{name.clone()}</div>
                <div class="footer-company">{company.clone()}</div>
                <p class="footer-motto">{motto.clone()}</p>
                <div class="footer-bottom">
                    <p>{format!("© {} {} {}. All rights reserved.", year, name, company)}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    text-align: center;
                    color: #fff;
                    background: #111827;
                }

                .footer-brand {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #60a5fa;
                    margin-bottom: 0.5rem;
                }

                .footer-company,
                .footer-motto {
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }

                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}
