mod contact_form;
mod dom;
mod effects;
mod gtag;
mod sections;

use gloo_console::log;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::navigation::{plan_navigation, Section};
use dom::{element_document_top, smooth_scroll_to};
use effects::{use_scroll_effects, use_viewport_effects};
use gtag::Analytics;
use sections::{ContactSection, Footer, Header, Hero, Services, Solutions, Stats};

#[function_component(App)]
fn app() -> Html {
    let analytics = use_memo((), |_| Analytics::detect());
    let menu_open = use_state_eq(|| false);
    let scroll = use_scroll_effects();
    use_viewport_effects();

    use_effect_with((), |_| {
        log!("LuaData site initialized");
        || ()
    });

    // Scroll events re-render App; stable callbacks keep Hero and Footer from following.
    let on_toggle_menu = use_callback(menu_open.clone(), |_: (), menu_open| {
        menu_open.set(!**menu_open)
    });

    let on_overlay = use_callback(on_toggle_menu.clone(), |_: MouseEvent, on_toggle_menu| {
        on_toggle_menu.emit(())
    });

    let on_navigate = use_callback(menu_open.setter(), |section: Section, set_menu_open| {
        let plan = plan_navigation(element_document_top(section.id()));
        if let Some(top) = plan.scroll_to {
            smooth_scroll_to(top);
        }
        if plan.close_menu {
            set_menu_open.set(false);
        }
    });

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <div class="App">
                <div
                    class="progress-bar"
                    style={format!("width: {}%", scroll.progress)}
                    role="progressbar"
                    aria-label="Page scroll progress"
                />

                <div
                    class={classes!("mobile-overlay", (*menu_open).then_some("active"))}
                    onclick={on_overlay}
                />

                <Header
                    header={scroll.header}
                    menu_open={*menu_open}
                    on_navigate={on_navigate.clone()}
                    on_toggle_menu={on_toggle_menu}
                />

                <Hero on_navigate={on_navigate.clone()} />
                <Services />
                <Solutions />
                <Stats />
                <ContactSection />
                <Footer on_navigate={on_navigate} />
            </div>
        </ContextProvider<Analytics>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
