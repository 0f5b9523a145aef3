use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    let approach = [
        ("Technical Precision", "Professional-grade equipment, proper certifications, and meticulous planning ensure consistent, high-quality results."),
        ("Creative Vision", "Every shot is composed with purpose, telling your story through compelling visual narratives."),
        ("Client Partnership", "We work closely with you to understand objectives and deliver assets that exceed expectations."),
    ];
    let equipment = [
        ("Aerial Systems", [
            "DJI Mavic 3 Pro (4K/120fps)",
            "DJI Phantom 4 Pro V2.0",
            "Professional gimbal stabilization",
            "Extended flight time batteries",
        ]),
        ("Studio Equipment", [
            "Canon R5 / R6 Mark II",
            "Professional macro lenses",
            "Studio lighting systems",
            "Focus stacking capabilities",
        ]),
    ];
    let compliance = [
        ("Certifications", [
            "FAA Part 107 Certified Pilot",
            "Comprehensive Liability Insurance",
            "LAANC Airspace Authorization",
            "Ongoing Safety Training",
        ]),
        ("Legal Compliance", [
            "Chain-of-custody documentation",
            "Evidence-ready metadata",
            "Court-admissible imagery",
            "Expert testimony support",
        ]),
    ];

    let render_group = |(heading, items): &(&'static str, [&'static str; 4])| html! {
        <div class="about-group" key={*heading}>
            <h3>{*heading}</h3>
            <ul>{ for items.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
        </div>
    };

    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About JSSKYLINE"}</h1>
                <p class="about-hero__quote">
                    {"\"There is another world, but it is in this one.\" - W.B. Yeats"}
                </p>
            </section>

            <section class="about-story">
                <div>
                    <h2>{"Our Story"}</h2>
                    <p>
                        {"JSSKYLINE was born from a simple belief: every project, property, and product \
                          has a unique story waiting to be revealed through the right perspective."}
                    </p>
                    <p>
                        {"We combine cutting-edge aerial technology with studio precision to capture \
                          imagery that doesn't just document, it transforms how audiences connect with \
                          your vision. From soaring landscapes to intricate macro details, we deliver \
                          perspective with purpose."}
                    </p>
                    <p>
                        {"Our approach is built on technical rigor, creative vision, and unwavering \
                          commitment to client success. Every frame is crafted to serve a specific \
                          purpose, whether it's selling a property, documenting progress, or creating \
                          art that moves people."}
                    </p>
                </div>
                <img src="/img/about-hero.jpg" alt="JSSKYLINE in action" />
            </section>

            <section class="about-approach">
                <h2>{"Our Approach"}</h2>
                <p>{"Technical excellence meets creative vision in everything we do."}</p>
                <div class="about-approach__grid">
                    {
                        approach.iter().map(|(title, description)| html! {
                            <div class="about-card" key={*title}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about-credentials">
                <div>
                    <h2>{"Professional Equipment"}</h2>
                    { for equipment.iter().map(render_group) }
                </div>
                <div>
                    <h2>{"Safety & Compliance"}</h2>
                    { for compliance.iter().map(render_group) }
                </div>
            </section>

            <section class="about-cta">
                <h2>{"Ready to Work Together?"}</h2>
                <p>{"Let's discuss how our aerial and studio expertise can elevate your next project."}</p>
                <div class="about-cta__actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-secondary">{"View Our Work"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    background: #0A0A0A;
                    color: #FAFAFA;
                }

                .about-hero, .about-approach, .about-cta {
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                    max-width: 960px;
                    margin: 0 auto;
                }

                .about-hero__quote, .about-approach > p, .about-cta p {
                    color: #D4D4D4;
                }

                .about-story, .about-credentials {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    background: #141414;
                    padding: 4rem 2rem;
                }

                .about-story h2, .about-credentials h2, .about-card h3 {
                    color: #FF6B1A;
                }

                .about-story p, .about-group li, .about-card p {
                    color: #D4D4D4;
                }

                .about-story img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 12px;
                    background: #262626;
                }

                .about-approach__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .about-card {
                    background: #141414;
                    border: 1px solid #262626;
                    border-radius: 12px;
                    padding: 2rem;
                }

                .about-cta__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                @media (max-width: 768px) {
                    .about-story, .about-credentials, .about-approach__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
