use yew::prelude::*;
use log::info;

use crate::portfolio::{filter_items, CategoryFilter, MediaKind, PortfolioItem, PORTFOLIO_ITEMS};

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    item: PortfolioItem,
}

#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class="card">
            <div class="card__media">
                <img src={item.media} alt={item.title} />
                if item.media_kind == MediaKind::Video {
                    <div class="card__play">{"▶"}</div>
                }
            </div>
            <h3 class="card__title">{item.title}</h3>
            <div class="card__meta">
                <div>
                    <span class="card__label">{"Services:"}</span>
                    <span>{item.services.join(", ")}</span>
                </div>
                <div>
                    <span class="card__label">{"Equipment:"}</span>
                    <span>{item.equipment.join(", ")}</span>
                </div>
                <div>
                    <span class="card__label">{"Outcome:"}</span>
                    <span class="card__outcome">{item.outcome}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_filter = use_state(CategoryFilter::default);

    let shown = filter_items(PORTFOLIO_ITEMS, *active_filter);

    html! {
        <div class="portfolio-page">
            <section class="portfolio-hero">
                <h1>{"Portfolio"}</h1>
                <p>{"Showcasing professional aerial and studio work across diverse industries and applications."}</p>
            </section>

            <section class="filter-chips">
                { for CategoryFilter::chips().map(|chip| {
                    let onclick = {
                        let active_filter = active_filter.clone();
                        Callback::from(move |_: MouseEvent| {
                            info!("Portfolio filter set to {}", chip.label());
                            active_filter.set(chip);
                        })
                    };
                    html! {
                        <button
                            class={classes!("chip", (*active_filter == chip).then(|| "chip--active"))}
                            {onclick}
                        >
                            {chip.label()}
                        </button>
                    }
                })}
            </section>

            <section class="portfolio-grid">
                { for shown.into_iter().map(|item| html! {
                    <PortfolioCard key={item.id} item={item.clone()} />
                })}
            </section>

            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    background: #171717;
                    color: #FAFAFA;
                    padding: 8rem 2rem 4rem;
                }
                .portfolio-hero {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .filter-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .chip {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #262626;
                    color: #D4D4D4;
                    cursor: pointer;
                }
                .chip--active {
                    background: #FF9023;
                    color: #0A0A0A;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .card__media {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 8px;
                    background: #262626;
                }
                .card__media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .card__play {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #FF9023;
                    font-size: 2rem;
                }
                .card__title, .card__outcome {
                    color: #FF9023;
                }
                .card__label {
                    color: #A3A3A3;
                    margin-right: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
