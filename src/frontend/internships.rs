use log::debug;
use yew::prelude::*;

use super::hooks::use_reveal;
use crate::content::{initials, CERTIFICATIONS, INTERNSHIPS};
use crate::motion::{CARD, CERTIFICATE, SECTION_RELAXED};
use crate::navigation::Anchor;
use crate::reveal::VisibilityOptions;

#[derive(Properties, PartialEq)]
struct CompanyLogoProps {
    src: &'static str,
    company: &'static str,
}

/// Falls back to the company's initials when the logo image fails.
#[function_component(CompanyLogo)]
fn company_logo(props: &CompanyLogoProps) -> Html {
    let failed = use_state_eq(|| false);
    let onerror = {
        let failed = failed.clone();
        let company = props.company;
        Callback::from(move |_: Event| {
            debug!("internships: logo for {company} unavailable, showing initials");
            failed.set(true);
        })
    };

    html! {
        <div class="company-logo">
            if *failed {
                <div class="company-initials">{initials(props.company)}</div>
            } else {
                <img src={props.src} alt={format!("{} logo", props.company)} {onerror} />
            }
        </div>
    }
}

#[function_component(Internships)]
pub fn internships() -> Html {
    let (node, visible) = use_reveal(VisibilityOptions::default());
    let item = |index: usize| SECTION_RELAXED.item_style(visible, index);

    html! {
        <section id={Anchor::Internships.id()} class="section">
            <div class="section-container">
                <div ref={node} class="section-inner" style={SECTION_RELAXED.container_style(visible)}>
                    <div class="section-header" style={item(0)}>
                        <h2>{"Internships & "}<span class="gradient-text">{"Experiences"}</span></h2>
                        <div class="section-rule" />
                        <p>{"Hands-on experience with cutting-edge technologies and real-world applications"}</p>
                    </div>

                    <div class="card-grid" style={item(1)}>
                        { for INTERNSHIPS.iter().enumerate().map(|(index, internship)| html! {
                            <div key={internship.title} class="card centered" style={CARD.item_style(visible, index)}>
                                <CompanyLogo src={internship.logo} company={internship.company} />
                                <h4 class="gradient-text">{internship.title}</h4>
                                <p>{internship.company}</p>
                                <p class="small muted">{internship.duration}</p>
                                <p class="small">{internship.description}</p>
                            </div>
                        }) }
                    </div>

                    <div class="certifications" style={item(2)}>
                        <h3 class="gradient-text">{"Certifications"}</h3>
                        <div class="card-grid">
                            { for CERTIFICATIONS.iter().enumerate().map(|(index, cert)| html! {
                                <div key={cert.title} class="card centered" style={CERTIFICATE.item_style(visible, index)}>
                                    <div class="cert-icon" aria-hidden="true">{cert.icon}</div>
                                    <h4 class="gradient-text">{cert.title}</h4>
                                    <p>{cert.issuer}</p>
                                    <p class="small muted">{cert.year}</p>
                                    <p class="small">{cert.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
