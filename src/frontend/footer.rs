use yew::prelude::*;

use super::dom::{current_year, scroll_to_anchor, scroll_to_top};
use crate::content::{EMAIL, FOOTER_SOCIALS, LOCATION};
use crate::navigation::FOOTER_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h2>{"Harini's Portfolio"}</h2>
                    <p class="small">
                        {"Passionate about creating meaningful digital experiences. From elegant UI designs to robust solutions."}
                    </p>
                    <div class="social-row">
                        { for FOOTER_SOCIALS.iter().map(|social| html! {
                            <a
                                key={social.label}
                                class="social-icon"
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.label}
                            >
                                {social.label}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        { for FOOTER_LINKS.iter().map(|anchor| {
                            let anchor = *anchor;
                            html! {
                                <li key={anchor.id()}>
                                    <button type="button" onclick={Callback::from(move |_: MouseEvent| scroll_to_anchor(anchor))}>
                                        {anchor.label()}
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Get in Touch"}</h3>
                    <ul class="footer-contact small">
                        <li>{"Email: "}<span>{EMAIL}</span></li>
                        <li>{"Location: "}<span>{LOCATION}</span></li>
                        <li>{"Status: "}<span class="available">{"Available for freelance"}</span></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom small">
                <p>{format!("© {} Harini. Designed with passion & precision.", current_year())}</p>
                <button type="button" class="footer-top" aria-label="Scroll to top" onclick={to_top}>{"⇧"}</button>
            </div>
        </footer>
    }
}
