use web_sys::MouseEvent;
use yew::prelude::*;

use super::contact_form::ContactForm;
use super::effects::use_hero_particles;
use super::gtag::Analytics;
use crate::analytics::AnalyticsEvent;
use crate::content::{
    carousel_items, hero_card_delay, solution_for, FooterLink, COMPANY_NAME, CONTACT_EMAIL,
    CONTACT_FEATURES, FOOTER_COMPANY_LINKS, FOOTER_SERVICE_LINKS, HERO_CARDS, OFFICES,
    PHONE_NUMBERS, SERVICES, SOCIAL_LINKS, STATS, TAGLINE,
};
use crate::counter::CounterAnimation;
use crate::navigation::Section;
use crate::scroll::HeaderState;
use crate::tabs::{panel_states, SolutionTab};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Section,
    pub on_navigate: Callback<Section>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub role: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Runs after navigation, for links that also report analytics.
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

/// In-page anchor that scrolls smoothly instead of jumping.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let to = props.to;
        let on_navigate = props.on_navigate.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(to);
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
        })
    };

    html! {
        <a
            href={props.to.href()}
            class={props.class.clone()}
            role={props.role.clone()}
            aria-label={props.aria_label.clone()}
            onclick={onclick}
        >
            {props.children.clone()}
        </a>
    }
}

fn svg_icon(path: &'static str) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path d={path} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub header: HeaderState,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();

    let on_cta = Callback::from(move |_: ()| analytics.report(AnalyticsEvent::CtaClick));
    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let menu_links = [
        (Section::Services, "Services"),
        (Section::MachineLearning, "Solutions"),
        (Section::About, "About"),
        (Section::Contact, "Contact"),
    ];

    html! {
        <header
            class={classes!("header", props.header.scrolled.then_some("scrolled"))}
            style={format!("transform: {}", props.header.transform())}
            role="banner"
        >
            <nav class="nav" role="navigation" aria-label="Main navigation">
                <div class="container">
                    <div class="nav-content">
                        <div class="logo-container">
                            <a href="/" class="logo" aria-label="LuaData Homepage">
                                <span class="logo-text">{COMPANY_NAME}</span>
                                <div class="logo-pulse" aria-hidden="true"></div>
                            </a>
                        </div>

                        <ul class={classes!("nav-links", props.menu_open.then_some("mobile-open"))} role="menubar">
                            { for menu_links.into_iter().map(|(section, label)| html! {
                                <li role="none" key={section.id()}>
                                    <NavLink
                                        to={section}
                                        class="nav-link"
                                        role="menuitem"
                                        on_navigate={props.on_navigate.clone()}
                                    >
                                        {label}
                                    </NavLink>
                                </li>
                            }) }
                        </ul>

                        <div class="header-actions">
                            <NavLink
                                to={Section::Contact}
                                class="cta-button"
                                aria_label="Get started with LuaData"
                                on_navigate={props.on_navigate.clone()}
                                on_follow={on_cta}
                            >
                                <span>{"Get Started"}</span>
                            </NavLink>
                            <button
                                class={classes!("mobile-menu-toggle", props.menu_open.then_some("active"))}
                                onclick={on_toggle}
                                aria-label="Toggle mobile menu"
                                aria-expanded={props.menu_open.to_string()}
                            >
                                <span class="hamburger-line"></span>
                                <span class="hamburger-line"></span>
                                <span class="hamburger-line"></span>
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigateProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &NavigateProps) -> Html {
    let particles = use_node_ref();
    use_hero_particles(particles.clone());

    html! {
        <section class="hero" id={Section::Hero.id()} role="main">
            <div class="hero-bg" aria-hidden="true">
                <div class="hero-gradient"></div>
                <div class="hero-particles" ref={particles}></div>
            </div>

            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 class="hero-title">
                            <span class="title-line">{"Transform Your Business"}</span>
                            <span class="title-line gradient-text">{"with Intelligent AI Solutions"}</span>
                        </h1>

                        <p class="hero-description">
                            {"We build cutting-edge AI and machine learning systems that drive real business results. \
                              From predictive analytics to automated workflows, unlock the power of your data."}
                        </p>

                        <div class="hero-buttons">
                            <NavLink to={Section::Contact} class="btn-primary" on_navigate={props.on_navigate.clone()}>
                                <span>{"Start Your Project"}</span>
                            </NavLink>
                            <NavLink to={Section::Services} class="btn-secondary" on_navigate={props.on_navigate.clone()}>
                                <span>{"Explore Services"}</span>
                            </NavLink>
                        </div>
                    </div>

                    <div class="hero-visual" aria-hidden="true">
                        <div class="floating-cards">
                            { for HERO_CARDS.iter().enumerate().map(|(index, card)| html! {
                                <div
                                    key={card.title}
                                    class="card-3d"
                                    style={format!("animation-delay: {}", hero_card_delay(index))}
                                >
                                    <div class="card-content">
                                        <svg class="card-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                            <path d={card.icon} />
                                        </svg>
                                        <div class="card-title">{card.title}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-icon"></div>
                <span>{"Scroll to explore"}</span>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();

    html! {
        <section class="services" id={Section::Services.id()}>
            <div class="container">
                <div class="section-header">
                    <div class="section-badge">
                        <span>{"Our Expertise"}</span>
                    </div>
                    <h2 class="section-title">{"AI & Data Science Services"}</h2>
                    <p class="section-subtitle">{"Comprehensive solutions that drive innovation and growth through intelligent automation"}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let onclick = {
                            let analytics = analytics.clone();
                            let title = service.title;
                            Callback::from(move |_: MouseEvent| {
                                analytics.report(AnalyticsEvent::ServiceInterest {
                                    service: title.to_string(),
                                });
                            })
                        };

                        html! {
                            <div key={service.title} class="service-card" tabindex="0" role="article" onclick={onclick}>
                                <div class="service-icon">{svg_icon(service.icon)}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <div class="service-metrics">
                                    { for service.metrics.iter().map(|metric| html! {
                                        <div class="metric">
                                            <span class="metric-value">{metric.value}</span>
                                            <span class="metric-label">{metric.label}</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Solutions)]
pub fn solutions() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let active_tab = use_state_eq(SolutionTab::default);

    let tab_buttons = SolutionTab::ALL.into_iter().map(|tab| {
        let onclick = {
            let active_tab = active_tab.clone();
            let analytics = analytics.clone();
            Callback::from(move |_: MouseEvent| {
                active_tab.set(tab);
                analytics.report(AnalyticsEvent::TabClick { tab });
            })
        };
        let selected = *active_tab == tab;

        html! {
            <button
                key={tab.id()}
                class={classes!("tab-btn", selected.then_some("active"))}
                onclick={onclick}
                role="tab"
                aria-selected={selected.to_string()}
                aria-controls={tab.id()}
            >
                {svg_icon(tab.icon())}
                <span>{tab.label()}</span>
            </button>
        }
    });

    let panels = panel_states(*active_tab)
        .into_iter()
        .map(|(tab, shown)| {
            let solution = solution_for(tab);
            let panel_id = tab.id();
            html! {
                <div
                    key={panel_id}
                    class={classes!("tab-panel", shown.then_some("active"))}
                    id={panel_id}
                    role="tabpanel"
                >
                    <div class="solution-card">
                        <div class="solution-header">
                            <div class="solution-icon">{svg_icon(solution.tab.icon())}</div>
                            <h3>{solution.heading}</h3>
                        </div>
                        <div class="solution-content">
                            { for solution.features.iter().map(|feature| html! {
                                <div class="solution-feature">
                                    <h4>{feature.title}</h4>
                                    <p>{feature.description}</p>
                                    <div class="feature-tags">
                                        { for feature.tags.iter().map(|tag| html! {
                                            <span class="tag">{*tag}</span>
                                        }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            }
        });

    html! {
        <section class="solutions" id={Section::MachineLearning.id()}>
            <div class="container">
                <div class="section-header">
                    <div class="section-badge">
                        <span>{"Advanced Solutions"}</span>
                    </div>
                    <h2 class="section-title">{"Machine Learning Excellence"}</h2>
                    <p class="section-subtitle">{"Harness the power of AI to transform your business operations and drive intelligent decision-making"}</p>
                </div>

                <div class="solutions-tabs">
                    <div class="tab-nav" role="tablist" aria-label="Solution categories">
                        { for tab_buttons }
                    </div>
                    <div class="tab-content">
                        { for panels }
                    </div>
                </div>

                <TechShowcase />
            </div>
        </section>
    }
}

#[function_component(TechShowcase)]
fn tech_showcase() -> Html {
    html! {
        <div class="tech-showcase">
            <h3>{"Technologies We Master"}</h3>
            <div class="tech-carousel">
                <div class="tech-track">
                    { for carousel_items().map(|tech| html! {
                        <div class="tech-item">
                            <div class="tech-logo">
                                <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                    <path d={tech.icon} />
                                </svg>
                            </div>
                            <span class="tech-name">{tech.name}</span>
                            <span class="tech-desc">{tech.description}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="container">
                <div class="stats-content">
                    <div class="stats-header">
                        <h2>{"Proven Track Record"}</h2>
                        <p>{"Numbers that speak for our expertise and commitment to excellence"}</p>
                    </div>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| {
                            // Text stats such as "24/7" are shown as-is and never counted.
                            let counted = CounterAnimation::parse(stat.target).is_some();
                            let label = if counted {
                                CounterAnimation::label(0)
                            } else {
                                stat.target.to_string()
                            };

                            html! {
                                <div key={stat.label} class="stat-card">
                                    <div class="stat-icon">{svg_icon(stat.icon)}</div>
                                    <h3 class="stat-number" data-target={counted.then_some(stat.target)}>
                                        {label}
                                    </h3>
                                    <p>{stat.label}</p>
                                    <div class="stat-bar">
                                        <div class="stat-fill" data-width={stat.fill_width}></div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section class="contact-section" id={Section::Contact.id()}>
            <div class="container">
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="section-badge">
                            <span>{"Get Started"}</span>
                        </div>
                        <h2>{"Ready to Transform Your Business with AI?"}</h2>
                        <p>{"Let's build intelligent solutions that drive real results. Get started with a free consultation and discover the potential of your data."}</p>

                        <div class="contact-features">
                            { for CONTACT_FEATURES.iter().map(|feature| html! {
                                <div key={feature.title} class="contact-feature">
                                    <div class="feature-icon">{svg_icon(feature.icon)}</div>
                                    <div class="feature-content">
                                        <h4>{feature.title}</h4>
                                        <p>{feature.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &NavigateProps) -> Html {
    let footer_links = |links: &'static [FooterLink]| {
        links
            .iter()
            .map(|link| {
                html! {
                    <li key={link.label}>
                        <NavLink to={link.target} on_navigate={props.on_navigate.clone()}>
                            {link.label}
                        </NavLink>
                    </li>
                }
            })
            .collect::<Html>()
    };

    html! {
        <footer id={Section::About.id()} role="contentinfo">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <div class="footer-logo">
                            <h3>{COMPANY_NAME}</h3>
                            <div class="logo-tagline">{TAGLINE}</div>
                        </div>
                        <p>{"Transforming businesses through intelligent AI, machine learning, and data science solutions that drive real results and sustainable growth."}</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.href} href={social.href} class="social-link" aria-label={social.label}>
                                    <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                        <path d={social.icon} />
                                    </svg>
                                </a>
                            }) }
                        </div>
                    </div>
                    <div class="footer-section">
                        <h3>{"Services"}</h3>
                        <ul class="footer-links">{footer_links(&FOOTER_SERVICE_LINKS)}</ul>
                    </div>
                    <div class="footer-section">
                        <h3>{"Company"}</h3>
                        <ul class="footer-links">{footer_links(&FOOTER_COMPANY_LINKS)}</ul>
                    </div>
                    <div class="footer-section">
                        <h3>{"Contact Info"}</h3>
                        <div class="contact-info-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                                    <polyline points="22,6 12,13 2,6" />
                                </svg>
                            </div>
                            <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact-info-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                                    <path d="M22 16.92v3a2 2 0 01-2.18 2 19.79 19.79 0 01-8.63-3.07 19.5 19.5 0 01-6-6A19.79 19.79 0 012.12 4.18 2 2 0 014.11 2h3a2 2 0 012 1.72c.13.96.36 1.9.7 2.81a2 2 0 01-.45 2.11L8.09 9.91a16 16 0 006 6l1.27-1.27a2 2 0 012.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0122 16.92z" />
                                </svg>
                            </div>
                            { for PHONE_NUMBERS.iter().map(|phone| html! {
                                <div key={phone.dial}>
                                    <a href={format!("tel:{}", phone.dial)}>{phone.display}</a>
                                </div>
                            }) }
                        </div>
                        <div class="contact-info-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                                    <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0118 0z" />
                                    <circle cx="12" cy="10" r="3" />
                                </svg>
                            </div>
                            { for OFFICES.iter().map(|office| html! {
                                <div key={*office}><span>{*office}</span></div>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© 2025 {COMPANY_NAME}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
