mod custom_cursor;
pub mod dom;
mod magnetic_button;
mod reveal;
mod sections;
mod theme_toggle;

use web_sys::window;
use yew::prelude::*;

use crate::{
    content::developer_greeting,
    theme::{PreferenceStore, Theme},
};
use custom_cursor::CustomCursor;
use dom::{DocumentThemeMarker, LocalStorage};
use sections::{About, Contact, ExperienceTimeline, Footer, Hero, Nav, Projects, Skills};
use theme_toggle::ThemeContext;

type BrowserPreferences = PreferenceStore<LocalStorage, DocumentThemeMarker>;

fn browser_preferences() -> BrowserPreferences {
    PreferenceStore::new(LocalStorage, DocumentThemeMarker, dom::system_prefers_dark())
}

#[function_component(App)]
fn app() -> Html {
    let store = use_mut_ref(browser_preferences);
    let theme = use_state(|| store.borrow().read());

    {
        let store = store.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            theme.set(store.borrow_mut().initialize());
            log::info!("{}", developer_greeting());
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next: Theme = store.borrow_mut().toggle();
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <CustomCursor />
            <Nav />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <ExperienceTimeline />
                <Contact />
            </main>
            <Footer />
        </ContextProvider<ThemeContext>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
