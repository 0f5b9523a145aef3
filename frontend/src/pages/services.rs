use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::services::{step_badge, PROCESS, SERVICES};

const SHARED_STYLE: &str = r#"
    .services-page {
        min-height: 100vh;
        background: #0A0A0A;
        color: #FAFAFA;
    }

    .page-hero, .process, .page-cta {
        padding: 6rem 2rem 4rem;
        text-align: center;
        max-width: 960px;
        margin: 0 auto;
    }

    .page-hero p, .process > p, .page-cta p {
        color: #D4D4D4;
    }

    .service-list {
        background: #141414;
        padding: 4rem 2rem;
        display: flex;
        flex-direction: column;
        gap: 4rem;
    }

    .service-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
        max-width: 1200px;
        margin: 0 auto;
    }

    .service-row--flipped .service-row__copy {
        order: 2;
    }

    .service-row h2 {
        color: #FF6B1A;
    }

    .service-row__media img {
        width: 100%;
        aspect-ratio: 4 / 3;
        object-fit: cover;
        border-radius: 12px;
        background: #262626;
    }

    .feature-list {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
        margin: 1.5rem 0 2rem;
        color: #D4D4D4;
    }

    .process__steps {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 2rem;
        margin-top: 3rem;
    }

    .process__badge {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        background: #FF6B1A;
        color: #0A0A0A;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }

    .page-cta__actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
    }

    @media (max-width: 768px) {
        .service-row, .process__steps {
            grid-template-columns: 1fr;
        }

        .service-row--flipped .service-row__copy {
            order: 0;
        }
    }
"#;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Professional Imaging Services"}</h1>
                <p>
                    {"Comprehensive aerial and studio photography solutions tailored to your industry needs. \
                      From real estate marketing to legal documentation, we deliver perspective with purpose."}
                </p>
            </section>

            <section class="service-list">
                {
                    SERVICES.iter().enumerate().map(|(index, service)| {
                        let row_class = if index % 2 == 0 { "service-row" } else { "service-row service-row--flipped" };
                        html! {
                            <article class={row_class} key={service.title}>
                                <div class="service-row__copy">
                                    <h2>{service.title}</h2>
                                    <p>{service.summary}</p>
                                    <ul class="feature-list">
                                        { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                    <Link<Route> to={service.route()} classes="btn-primary">
                                        {"Learn More"}
                                    </Link<Route>>
                                </div>
                                <div class="service-row__media">
                                    <img src={service.image} alt={service.title} />
                                </div>
                            </article>
                        }
                    }).collect::<Html>()
                }
            </section>

            <section class="process">
                <h2>{"Our Process"}</h2>
                <p>{"A systematic approach ensuring consistent quality and client satisfaction."}</p>
                <div class="process__steps">
                    {
                        PROCESS.iter().enumerate().map(|(index, step)| html! {
                            <div class="process__step" key={step.title}>
                                <div class="process__badge">{step_badge(index)}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="page-cta">
                <h2>{"Ready to Get Started?"}</h2>
                <p>
                    {"Contact us today to discuss your project requirements and receive a custom quote \
                      tailored to your specific needs."}
                </p>
                <div class="page-cta__actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Request Quote"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-secondary">{"View Portfolio"}</Link<Route>>
                </div>
            </section>

            <style>{SHARED_STYLE}</style>
        </div>
    }
}

#[function_component(AerialMarketing)]
pub fn aerial_marketing() -> Html {
    let use_cases = [
        "Residential property marketing",
        "Commercial real estate showcases",
        "Construction marketing materials",
        "Event venue presentations",
        "Tourism and hospitality content",
        "Land development visualization",
    ];
    let deliverables = [
        "High-resolution aerial stills (RAW + edited)",
        "Cinematic video content (4K+)",
        "Virtual tour integration assets",
        "Social media optimized content",
        "Print-ready marketing materials",
        "Web gallery with download links",
    ];
    let process = [
        ("Property Analysis", "Site visit and planning for optimal shooting conditions and key feature identification."),
        ("Flight Planning", "Weather monitoring, airspace clearance, and shot list development for maximum impact."),
        ("Professional Shooting", "High-resolution stills and cinematic video capture using professional-grade equipment."),
        ("Marketing Assets", "Edited deliverables optimized for web, print, and social media distribution."),
    ];
    let case_studies = [
        (
            "Luxury Estate Showcase",
            "High-end property needed compelling visuals to justify premium pricing.",
            "Golden hour aerial cinematics combined with interior integration shots.",
            "Property sold 40% above asking price within 2 weeks of listing.",
        ),
        (
            "Commercial Development",
            "Large mixed-use development required comprehensive marketing suite.",
            "Multi-phase aerial documentation with progress visualization.",
            "95% pre-lease rate achieved before construction completion.",
        ),
    ];

    html! {
        <div class="services-page">
            <style>{SHARED_STYLE}</style>
            <section class="page-hero">
                <h1>{"Aerial Marketing & Real Estate"}</h1>
                <p>
                    {"Transform property presentations with stunning aerial visuals that showcase unique perspectives, \
                      highlight key features, and create emotional connections with potential buyers."}
                </p>
            </section>

            <section class="detail-columns">
                <div>
                    <h2>{"Where It Helps"}</h2>
                    <ul>{ for use_cases.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                </div>
                <div>
                    <h2>{"Deliverables"}</h2>
                    <ul>{ for deliverables.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                </div>
            </section>

            <section class="process">
                <h2>{"Our Process"}</h2>
                <p>{"From initial consultation to final delivery, we ensure every project exceeds expectations."}</p>
                <div class="process__steps process__steps--four">
                    {
                        process.iter().enumerate().map(|(index, (title, description))| html! {
                            <div class="process__step" key={*title}>
                                <div class="process__badge">{(index + 1).to_string()}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="case-studies">
                <h2>{"Success Stories"}</h2>
                <div class="case-studies__grid">
                    {
                        case_studies.iter().map(|(title, problem, approach, result)| html! {
                            <div class="case-study" key={*title}>
                                <h3>{*title}</h3>
                                <h4>{"Problem"}</h4>
                                <p>{*problem}</p>
                                <h4>{"Approach"}</h4>
                                <p>{*approach}</p>
                                <h4>{"Result"}</h4>
                                <p class="case-study__result">{*result}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="page-cta">
                <h2>{"Ready to Elevate Your Property Marketing?"}</h2>
                <p>
                    {"Contact us today to discuss your aerial marketing needs and discover how professional \
                      aerial imagery can transform your property presentations."}
                </p>
                <div class="page-cta__actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Request Quote"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-secondary">{"View Sample Work"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .detail-columns, .case-studies__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .detail-columns {
                    background: #141414;
                    padding: 4rem 2rem;
                }

                .detail-columns h2, .case-study h3 {
                    color: #FF6B1A;
                }

                .detail-columns li {
                    color: #D4D4D4;
                    margin-bottom: 1rem;
                }

                .process__steps--four {
                    grid-template-columns: repeat(4, 1fr);
                }

                .case-studies {
                    padding: 4rem 2rem;
                    text-align: center;
                }

                .case-study {
                    text-align: left;
                    background: #141414;
                    border: 1px solid #262626;
                    border-radius: 12px;
                    padding: 2rem;
                }

                .case-study p {
                    color: #A3A3A3;
                }

                .case-study__result {
                    color: #FF6B1A;
                }

                @media (max-width: 768px) {
                    .detail-columns, .case-studies__grid, .process__steps--four {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Inspections)]
pub fn inspections() -> Html {
    html! {
        <div class="services-page">
            <style>{SHARED_STYLE}</style>
            <section class="page-hero">
                <h1>{"Inspections & Construction Monitoring"}</h1>
                <p>
                    {"Comprehensive construction progress tracking and infrastructure inspections with \
                      Teams/Zoom integration for remote collaboration."}
                </p>
            </section>
            <section class="page-cta">
                <Link<Route> to={Route::Contact} classes="btn-primary">
                    {"Request Inspection Services"}
                </Link<Route>>
            </section>
        </div>
    }
}
