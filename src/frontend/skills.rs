use yew::prelude::*;

use super::hooks::use_reveal;
use crate::content::SKILL_CATEGORIES;
use crate::motion::{skill_fill_style, skill_row_delay, SECTION_BRISK, SKILL_ROW};
use crate::navigation::Anchor;
use crate::reveal::VisibilityOptions;

#[function_component(Skills)]
pub fn skills() -> Html {
    let (node, visible) = use_reveal(VisibilityOptions::default());
    let item = |index: usize| SECTION_BRISK.item_style(visible, index);

    html! {
        <section id={Anchor::Skills.id()} class="section">
            <div class="section-container">
                <div ref={node} class="section-inner" style={SECTION_BRISK.container_style(visible)}>
                    <div class="section-header" style={item(0)}>
                        <h2>{"My "}<span class="gradient-text">{"Skills"}</span></h2>
                        <div class="section-rule" />
                        <p>{"Here are the technologies and tools I work with to bring ideas to life"}</p>
                    </div>

                    <div class="skill-grid" style={item(1)}>
                        { for SKILL_CATEGORIES.iter().enumerate().map(|(category_index, category)| html! {
                            <div key={category.title} class="card skill-card" style={item(category_index + 2)}>
                                <h3 class="gradient-text">{category.title}</h3>
                                { for category.skills.iter().enumerate().map(|(skill_index, skill)| html! {
                                    <div
                                        key={skill.name}
                                        class="skill-row"
                                        style={SKILL_ROW.style(visible, skill_row_delay(category_index, skill_index))}
                                    >
                                        <div class="skill-label">
                                            <span>{skill.name}</span>
                                            <span class="muted">{format!("{}%", skill.level)}</span>
                                        </div>
                                        <div class="skill-bar">
                                            <div
                                                class={classes!("skill-fill", format!("skill-{}", skill.color))}
                                                style={skill_fill_style(visible, skill.level, category_index, skill_index)}
                                            />
                                        </div>
                                    </div>
                                }) }
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
