use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::services::SERVICES;

#[function_component(Home)]
pub fn home() -> Html {
    let pillars = [
        ("Elevated Vision", "Capturing perspectives that transform how you see and present your projects."),
        ("Detailed Craft", "Precision in every frame, from macro studio work to aerial cinematics."),
        ("Technical Rigor", "Professional-grade equipment and methodologies ensuring consistent excellence."),
        ("Client-Ready Delivery", "Polished deliverables ready for marketing, legal, or operational use."),
    ];
    let testimonials = [
        (
            "JSSKYLINE delivered exceptional aerial footage that transformed our property marketing completely.",
            "Sarah Chen",
            "Real Estate Developer, Urban Properties Group",
        ),
        (
            "The precision and professionalism in their construction monitoring saved us weeks of site visits.",
            "Mike Rodriguez",
            "Project Manager, BuildTech Construction",
        ),
        (
            "Their legal documentation services provided the evidence we needed with impeccable chain of custody.",
            "Jennifer Walsh",
            "Senior Partner, Walsh & Associates Law",
        ),
    ];

    html! {
        <div class="landing">
            <section class="hero">
                <h1 class="hero__title">{"Aerial-Crafted Imaging for Land, Table, and Industry"}</h1>
                <p class="hero__subtitle">
                    {"Professional drone services and studio photography delivering perspective with purpose."}
                </p>
                <span class="hero__tagline">{"PERSPECTIVE WITH PURPOSE"}</span>
                <div class="hero__actions">
                    <Link<Route> to={Route::Services} classes="btn-primary">
                        {"Explore Services"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn-secondary">
                        {"Request a Quote"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-section home-section--alt">
                <h2>{"Why Choose JSSKYLINE"}</h2>
                <p class="home-section__lead">{"Four foundational principles that drive every project we undertake."}</p>
                <div class="home-grid home-grid--four">
                    {
                        pillars.iter().map(|(title, description)| html! {
                            <div class="home-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Our Services"}</h2>
                <p class="home-section__lead">{"Comprehensive imaging solutions tailored to your industry needs."}</p>
                <div class="home-grid home-grid--two">
                    {
                        SERVICES.iter().map(|service| html! {
                            <Link<Route> to={service.route()} classes="home-card home-card--service">
                                <img src={service.image} alt={service.short_title} />
                                <h3>{service.short_title}</h3>
                                <p>{service.summary}</p>
                                <span class="home-card__more">{"Learn More →"}</span>
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Services} classes="btn-secondary">{"View All Services"}</Link<Route>>
            </section>

            <section class="home-section home-section--alt">
                <h2>{"Client Success Stories"}</h2>
                <p class="home-section__lead">{"Real results from real clients across diverse industries."}</p>
                <div class="home-grid home-grid--three">
                    {
                        testimonials.iter().map(|(quote, author, role)| html! {
                            <figure class="home-card" key={*author}>
                                <blockquote>{format!("\"{}\"", quote)}</blockquote>
                                <figcaption>
                                    <strong>{*author}</strong>
                                    <span>{*role}</span>
                                </figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Ready to Elevate Your Project?"}</h2>
                <p class="home-section__lead">
                    {"Get professional aerial imaging and studio photography services \
                      that deliver results. Contact us today for a custom quote."}
                </p>
                <div class="hero__actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Started Today"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-secondary">{"View Our Work"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #0A0A0A;
                    color: #FAFAFA;
                }

                .hero {
                    padding: 8rem 2rem 6rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero__title {
                    font-size: clamp(2.5rem, 6vw, 4rem);
                    line-height: 1.1;
                    max-width: 900px;
                }

                .hero__subtitle {
                    color: #D4D4D4;
                    max-width: 640px;
                    margin: 1.5rem 0 2.5rem;
                }

                .hero__tagline {
                    color: #FF6B1A;
                    letter-spacing: 0.1em;
                    margin-bottom: 2.5rem;
                }

                .hero__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .home-section {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .home-section--alt {
                    background: #141414;
                }

                .home-section__lead {
                    color: #D4D4D4;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .home-grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                }

                .home-grid--two { grid-template-columns: repeat(2, 1fr); }
                .home-grid--three { grid-template-columns: repeat(3, 1fr); }
                .home-grid--four { grid-template-columns: repeat(4, 1fr); }

                .home-card {
                    display: block;
                    text-align: left;
                    background: #0A0A0A;
                    border: 1px solid #262626;
                    border-radius: 12px;
                    padding: 2rem;
                    color: #D4D4D4;
                    text-decoration: none;
                }

                .home-card h3, .home-card__more, .home-card strong {
                    color: #FF6B1A;
                }

                .home-card--service img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 8px;
                    background: #262626;
                }

                .home-card figcaption {
                    display: flex;
                    flex-direction: column;
                    border-top: 1px solid #404040;
                    padding-top: 1rem;
                }

                @media (max-width: 768px) {
                    .home-grid--two, .home-grid--three, .home-grid--four {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
