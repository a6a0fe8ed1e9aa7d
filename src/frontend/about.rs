use yew::prelude::*;

use super::hooks::use_reveal;
use crate::content::{EDUCATION, FEATURES, STATS};
use crate::motion::{CARD, SECTION_RELAXED};
use crate::navigation::Anchor;
use crate::reveal::VisibilityOptions;

#[function_component(About)]
pub fn about() -> Html {
    let (node, visible) = use_reveal(VisibilityOptions::default());
    let item = |index: usize| SECTION_RELAXED.item_style(visible, index);

    html! {
        <section id={Anchor::About.id()} class="section">
            <div class="section-container">
                <div ref={node} class="section-inner" style={SECTION_RELAXED.container_style(visible)}>
                    <div class="section-header" style={item(0)}>
                        <h2>{"About "}<span class="gradient-text">{"Me"}</span></h2>
                        <div class="section-rule" />
                    </div>

                    <div class="card about-card" style={item(1)}>
                        <h3 class="gradient-text">{"Computer Science Student & AI/ML Enthusiast"}</h3>
                        <p>
                            {"I'm a passionate Computer Science graduate at GITAM University with a strong \
                              foundation in AI/ML technologies and web development. Currently pursuing my B.Tech \
                              in Computer Science and Engineering with a GPA of 8.6, I'm driven by innovation \
                              and the desire to create impactful technological solutions."}
                        </p>
                        <p>
                            {"My experience spans across various domains including machine learning, artificial \
                              intelligence, natural language processing, and web development. I've had the privilege \
                              of working with prestigious institutions like IITH, DRDL, and IBM, gaining hands-on \
                              experience in cutting-edge technologies and real-world applications."}
                        </p>

                        <div class="stats-grid">
                            { for STATS.iter().map(|stat| html! {
                                <div key={stat.label} class="stat">
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="education" style={item(2)}>
                        <h3><span class="gradient-text">{"Education"}</span></h3>
                        <div class="education-grid">
                            { for EDUCATION.iter().map(|entry| html! {
                                <div key={entry.school} class="card">
                                    <h4>{entry.school}</h4>
                                    <p class="accent">{entry.program}</p>
                                    <p class="muted">{entry.years}</p>
                                    <p>{entry.score}</p>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="feature-grid" style={item(3)}>
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div key={feature.title} class="card feature-card" style={CARD.item_style(visible, index)}>
                                <div class="feature-head">
                                    <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
                                    <h3>{feature.title}</h3>
                                </div>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
