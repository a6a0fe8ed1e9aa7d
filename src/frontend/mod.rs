mod about;
mod background;
mod contact;
mod dom;
mod footer;
mod hero;
mod hooks;
mod internships;
mod navbar;
mod projects;
mod skills;

use log::{info, warn, Level};
use web_sys::window;
use yew::prelude::*;

use crate::theme::ThemeStore;

use about::About;
use background::ParticleBackground;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use internships::Internships;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

#[function_component(App)]
fn app() -> Html {
    let store = use_memo((), |_| ThemeStore::default());

    {
        let store = (*store).clone();
        use_effect_with((), move |_| {
            dom::apply_theme(store.current());
            let subscription = store.subscribe(dom::apply_theme);
            move || drop(subscription)
        });
    }

    html! {
        <ContextProvider<ThemeStore> context={(*store).clone()}>
            <ParticleBackground />
            <div class="page-shell">
                <Navbar />
                <main id="content">
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <Internships />
                    <Contact />
                </main>
                <Footer />
            </div>
        </ContextProvider<ThemeStore>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    info!("mounting portfolio");
    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            warn!("no #app mount point, rendering into <body>");
            yew::Renderer::<App>::new().render()
        }
    };
}
