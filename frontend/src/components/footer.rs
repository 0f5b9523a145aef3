use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::services::SERVICES;

#[function_component(Footer)]
pub fn footer() -> Html {
    let company = [
        ("About", Route::About),
        ("Portfolio", Route::Portfolio),
        ("Contact", Route::Contact),
    ];
    let socials = ["Instagram", "LinkedIn", "YouTube", "Twitter"];

    html! {
        <footer class="site-footer">
            <div class="site-footer__main">
                <div class="site-footer__brand">
                    <span class="site-footer__logo">{"JSSKYLINE"}</span>
                    <p>
                        {"Aerial-crafted imaging for land, table, and industry. Professional drone services \
                          and studio photography delivering perspective with purpose."}
                    </p>
                    <ul class="site-footer__credentials">
                        <li>{"Professional UAV Services"}</li>
                        <li>{"Licensed & Insured"}</li>
                        <li>{"Part 107 Certified"}</li>
                    </ul>
                </div>

                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        {
                            SERVICES.iter().map(|service| html! {
                                <li key={service.short_title}>
                                    <Link<Route> to={service.route()}>{service.short_title}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h3>{"Company"}</h3>
                    <ul>
                        {
                            company.into_iter().map(|(label, route)| html! {
                                <li key={label}>
                                    <Link<Route> to={route}>{label}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>

            <div class="footer-cta">
                <h3>{"Ready to Elevate Your Project?"}</h3>
                <p>
                    {"Get professional aerial imaging and studio photography services \
                      tailored to your specific needs."}
                </p>
                <div class="footer-cta__actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Request Quote"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-secondary">{"View Portfolio"}</Link<Route>>
                </div>
            </div>

            <div class="site-footer__bottom">
                <span>{"© JSSKYLINE. All rights reserved."}</span>
                <div class="site-footer__socials">
                    // no profiles published yet
                    { for socials.iter().map(|name| html! { <a href="#" aria-label={*name}>{*name}</a> }) }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #141414;
                    border-top: 1px solid #262626;
                    color: #A3A3A3;
                    padding: 4rem 2rem 0;
                }

                .site-footer__main {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .site-footer__logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #FAFAFA;
                }

                .site-footer h3 {
                    color: #FAFAFA;
                }

                .site-footer a {
                    color: #A3A3A3;
                    text-decoration: none;
                }

                .site-footer a:hover {
                    color: #FF6B1A;
                }

                .footer-cta {
                    max-width: 720px;
                    margin: 3rem auto;
                    padding: 2rem;
                    text-align: center;
                    border: 1px solid rgba(255, 107, 26, 0.2);
                    border-radius: 12px;
                    background: rgba(255, 107, 26, 0.08);
                }

                .footer-cta__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .site-footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #262626;
                    padding: 1.5rem 0;
                    font-size: 0.875rem;
                }

                .site-footer__socials {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 768px) {
                    .site-footer__main {
                        grid-template-columns: 1fr;
                    }

                    .site-footer__bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
