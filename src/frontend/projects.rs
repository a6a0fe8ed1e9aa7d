use yew::prelude::*;

use super::hooks::use_reveal;
use crate::content::{filter_projects, Project, ProjectFilter};
use crate::motion::{Stagger, SECTION_BRISK};
use crate::navigation::Anchor;
use crate::reveal::VisibilityOptions;

const CARD_ENTER: Stagger = Stagger::new(0.0, 0.1);

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let style = format!("animation-delay: {}s;", CARD_ENTER.delay(props.index));

    html! {
        <article class="project-card" style={style}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-overlay">
                    <a class="project-link" href={project.demo_url} aria-label={format!("{} demo", project.title)}>{"↗"}</a>
                    <a class="project-link" href={project.code_url} aria-label={format!("{} source", project.title)}>{"</>"}</a>
                </div>
            </div>
            <div class="project-body">
                <h3 class="gradient-text">{project.title}</h3>
                <p>{project.description}</p>
                <div class="tag-list">
                    { for project.tags.iter().map(|tag| html! { <span key={*tag} class="tag">{*tag}</span> }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let (node, visible) = use_reveal(VisibilityOptions::default());
    let filter = use_state_eq(ProjectFilter::default);
    let item = |index: usize| SECTION_BRISK.item_style(visible, index);

    html! {
        <section id={Anchor::Projects.id()} class="section">
            <div class="section-container">
                <div ref={node} class="section-inner" style={SECTION_BRISK.container_style(visible)}>
                    <div class="section-header" style={item(0)}>
                        <h2>{"My "}<span class="gradient-text">{"Projects"}</span></h2>
                        <div class="section-rule" />
                        <p>{"Here are some of my recent projects that showcase my skills and creativity"}</p>
                    </div>

                    <div class="filter-bar" style={item(1)}>
                        { for ProjectFilter::ALL.iter().map(|option| {
                            let option = *option;
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| filter.set(option))
                            };
                            html! {
                                <button
                                    key={option.label()}
                                    type="button"
                                    class={classes!("filter-button", (*filter == option).then_some("is-active"))}
                                    aria-pressed={(*filter == option).to_string()}
                                    {onclick}
                                >
                                    <span aria-hidden="true">{option.icon()}</span>
                                    {option.label()}
                                </button>
                            }
                        }) }
                    </div>

                    // Keying the grid by filter remounts the cards so their enter animation replays.
                    <div key={filter.label()} class="project-grid">
                        { for filter_projects(*filter).enumerate().map(|(index, project)| html! {
                            <ProjectCard key={project.id} {project} {index} />
                        }) }
                    </div>

                    <div class="section-cta" style={item(2)}>
                        <a class="button button-primary" href={Anchor::Contact.href()}>
                            <span>{"Let's Work Together"}</span>
                            <span class="button-arrow" aria-hidden="true">{"→"}</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
