use gloo_timers::callback::Interval;
use std::time::Duration;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{
    magnetic_button::MagneticButton,
    reveal::{Reveal, Section},
    theme_toggle::DarkModeToggle,
};
use crate::{
    content::{
        ContactForm, Experience, Project, SkillCategory, TaglineRotation, ABOUT_PARAGRAPHS,
        ABOUT_STATS, CONTACT_CHANNELS, CONTACT_EMAIL, EXPERIENCES, GITHUB_URL, HERO_TAGLINES,
        LINKEDIN_URL, LOCATION, MUSIC_EMBED_URL, NAV_ITEMS, OWNER_FULL_NAME, OWNER_NAME,
        PROJECTS, RESUME_PATH, SKILL_CATEGORIES, TAGLINE_PERIOD,
    },
    reveal::RevealAnimation,
};

const CARD_STAGGER: Duration = Duration::from_millis(100);
const LIST_STAGGER: Duration = Duration::from_millis(200);
const ITEM_DURATION: Duration = Duration::from_millis(600);
const ITEM_RISE_PX: f64 = 40.0;
const TAGLINES: &[&str] = &HERO_TAGLINES;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="site-nav">
            <a class="site-logo" href="#top">{OWNER_NAME}<span class="accent">{"."}</span></a>
            <ul class="nav-links">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <li key={*item}>
                        <MagneticButton class="nav-link" href={format!("#{}", item.to_lowercase())}>
                            {*item}
                        </MagneticButton>
                    </li>
                }) }
            </ul>
            <div class="nav-actions">
                <DarkModeToggle />
                <MagneticButton class="nav-cta" href={format!("mailto:{CONTACT_EMAIL}")}>
                    {"Let's talk"}
                </MagneticButton>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct RotatingTextProps {
    phrases: &'static [&'static str],
}

#[function_component(RotatingText)]
fn rotating_text(props: &RotatingTextProps) -> Html {
    let rotation = use_mut_ref(|| TaglineRotation::new(props.phrases.len()));
    let redraw = use_force_update();

    {
        let rotation = rotation.clone();
        use_effect_with(props.phrases.len(), move |_| {
            let period = u32::try_from(TAGLINE_PERIOD.as_millis()).unwrap_or(u32::MAX);
            let interval = Interval::new(period, move || {
                if rotation.borrow_mut().advance().is_some() {
                    redraw.force_update();
                }
            });
            move || drop(interval)
        });
    }

    let Some(index) = rotation.borrow().current() else {
        return html! {};
    };

    html! {
        <div class="tagline-window">
            <p class="tagline">{props.phrases[index]}</p>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="top" class="hero">
            <div class="hero-copy">
                <h1 class="hero-title">
                    <span class="hero-greeting">{"Hi, I'm"}</span>
                    <span class="hero-name">{OWNER_NAME}</span>
                </h1>
                <RotatingText phrases={TAGLINES} />
                <div class="hero-actions">
                    <MagneticButton class="button button-primary" href="#projects">
                        {"View My Work"}
                    </MagneticButton>
                    <MagneticButton class="button button-ghost" href={RESUME_PATH}>
                        {"Download Resume"}
                    </MagneticButton>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true">
                <span>{"Scroll to explore"}</span>
                <span class="scroll-arrow">{"↓"}</span>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section id="about" class="about">
            <h2 class="section-title">{"DEVELOPER"}<br /><span class="accent">{"& CREATOR"}</span></h2>
            <div class="about-grid">
                <Reveal cursor={AttrValue::Static("text")} class="about-copy">
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <div class="about-facts">
                        <span>{"📍 "}{LOCATION}</span>
                        <span>{"☕ Coffee Enthusiast"}</span>
                    </div>
                </Reveal>
                <Reveal class="about-stats">
                    { for ABOUT_STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </Reveal>
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let animation = RevealAnimation::staggered(props.index, CARD_STAGGER, ITEM_DURATION, ITEM_RISE_PX);

    html! {
        <Reveal animation={animation} class="project-card" cursor={AttrValue::Static("project")}>
            <div class="project-header">
                <div>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-subtitle">{project.subtitle}</p>
                </div>
                <span class="project-year">{project.year}</span>
            </div>
            <p class="project-description">{project.description}</p>
            <ul class="tech-stack">
                { for project.tech_stack.iter().map(|tech| html! { <li key={*tech}>{*tech}</li> }) }
            </ul>
            <div class="project-links">
                <MagneticButton class="project-link" href={project.github}>{"⌥ Code"}</MagneticButton>
                <MagneticButton class="project-link" href={project.live}>{"↗ Live Demo"}</MagneticButton>
            </div>
        </Reveal>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <Section id="projects" class="projects">
            <h2 class="section-title">{"DIGITAL"}<br /><span class="accent">{"CRAFTSMANSHIP"}</span></h2>
            <p class="section-lead">
                {"A selection of projects that showcase my passion for creating exceptional user experiences"}
            </p>
            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.title} project={*project} index={index} />
                }) }
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    category: SkillCategory,
    index: usize,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let category = props.category;
    let animation = RevealAnimation::staggered(props.index, LIST_STAGGER, ITEM_DURATION, ITEM_RISE_PX / 2.0);

    html! {
        <Reveal animation={animation} class={classes!("skill-card", category.accent.class())}>
            <div class="skill-header">
                <span class="skill-icon" aria-hidden="true">{category.icon}</span>
                <h3>{category.title}</h3>
            </div>
            <ul class="skill-list">
                { for category.skills.iter().map(|skill| html! { <li key={*skill} class="skill">{*skill}</li> }) }
            </ul>
        </Reveal>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <Section id="skills" class="skills">
            <h2 class="section-title">{"TECHNICAL"}<br /><span class="accent">{"ARSENAL"}</span></h2>
            <div class="skill-grid">
                { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                    <SkillCard key={category.title} category={*category} index={index} />
                }) }
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceItemProps {
    experience: Experience,
    index: usize,
}

#[function_component(ExperienceItem)]
fn experience_item(props: &ExperienceItemProps) -> Html {
    let experience = props.experience;
    let animation = RevealAnimation::staggered(props.index, LIST_STAGGER, ITEM_DURATION, ITEM_RISE_PX);

    html! {
        <Reveal animation={animation} class="experience-item">
            <div class="experience-header">
                <div>
                    <h3 class="experience-role">{experience.role}</h3>
                    <p class="experience-company">{experience.company}</p>
                </div>
                <span class="experience-period">{experience.period}</span>
            </div>
            <p class="experience-description">{experience.description}</p>
        </Reveal>
    }
}

#[function_component(ExperienceTimeline)]
pub fn experience_timeline() -> Html {
    html! {
        <Section id="experience" class="experience">
            <h2 class="section-title">{"PROFESSIONAL"}<br /><span class="accent">{"JOURNEY"}</span></h2>
            <div class="experience-list">
                { for EXPERIENCES.iter().enumerate().map(|(index, experience)| html! {
                    <ExperienceItem key={experience.role} experience={*experience} index={index} />
                }) }
            </div>
        </Section>
    }
}

#[derive(Clone, Copy)]
enum ContactField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    fn write(self, form: &mut ContactForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Email => form.email = value,
            Self::ProjectType => form.project_type = value,
            Self::Message => form.message = value,
        }
    }
}

#[function_component(ContactPanel)]
fn contact_panel() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<&'static str>);

    let update = |field: ContactField| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            field.write(&mut next, value);
            form.set(next);
        }
    };

    let on_input = |field: ContactField| {
        let update = update(field);
        Callback::from(move |event: InputEvent| {
            update(event.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_message = {
        let update = update(ContactField::Message);
        Callback::from(move |event: InputEvent| {
            update(event.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.mailto_href() {
                Ok(href) => {
                    error.set(None);
                    if let Some(win) = window() {
                        if win.location().set_href(&href).is_err() {
                            log::warn!("could not open the mail client");
                        }
                    }
                }
                Err(problem) => error.set(Some(problem.message())),
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Your Name"
                    aria-label="Your Name"
                    data-cursor="text"
                    value={form.name.clone()}
                    oninput={on_input(ContactField::Name)}
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    aria-label="Your Email"
                    data-cursor="text"
                    value={form.email.clone()}
                    oninput={on_input(ContactField::Email)}
                />
            </div>
            <input
                type="text"
                placeholder="Project Type"
                aria-label="Project Type"
                data-cursor="text"
                value={form.project_type.clone()}
                oninput={on_input(ContactField::ProjectType)}
            />
            <textarea
                rows="4"
                placeholder="Tell me about your project..."
                aria-label="Message"
                data-cursor="text"
                value={form.message.clone()}
                oninput={on_message}
            />
            if let Some(message) = *error {
                <p class="form-error" role="alert">{message}</p>
            }
            <MagneticButton class="button button-primary button-block" button_type="submit">
                {"Send Message"}
            </MagneticButton>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <Section id="contact" class="contact">
            <h2 class="section-title">{"LET'S BUILD"}<br /><span class="accent">{"SOMETHING"}</span></h2>
            <p class="section-lead">
                {"Ready to turn your ideas into reality? Let's create something amazing together."}
            </p>
            <div class="contact-grid">
                <Reveal class="panel">
                    <ContactPanel />
                </Reveal>
                <Reveal class="contact-aside">
                    <div class="panel">
                        <h3>{"Get in Touch"}</h3>
                        <ul class="contact-channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <li key={channel.href}>
                                    <MagneticButton class="contact-channel" href={channel.href}>
                                        <span class="channel-icon" aria-hidden="true">{channel.icon}</span>
                                        <span>{channel.label}</span>
                                    </MagneticButton>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="panel">
                        <h3>{"Currently Vibing To"}</h3>
                        <p class="muted">{"Music fuels my creativity. Here's what I'm listening to while coding:"}</p>
                        <iframe
                            class="music-embed"
                            title="Currently playing"
                            src={MUSIC_EMBED_URL}
                            width="100%"
                            height="352"
                            allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                            loading="lazy"
                        />
                    </div>
                    <div class="panel">
                        <p class="availability"><span class="pulse" aria-hidden="true" />{"Available for Projects"}</p>
                        <p class="muted">
                            {"I'm currently accepting new projects and collaborations. Let's create something amazing together!"}
                        </p>
                    </div>
                </Reveal>
            </div>
        </Section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div>
                <p>{format!("© 2025 {OWNER_FULL_NAME}. Built with Rust, Yew & WebAssembly.")}</p>
                <p class="muted">{"Crafted with ❤️ and lots of ☕"}</p>
            </div>
            <div class="footer-links">
                <MagneticButton class="footer-link" href={GITHUB_URL} label={AttrValue::Static("GitHub")}>{"⌥"}</MagneticButton>
                <MagneticButton class="footer-link" href={LINKEDIN_URL} label={AttrValue::Static("LinkedIn")}>{"in"}</MagneticButton>
                <MagneticButton class="footer-link" href={format!("mailto:{CONTACT_EMAIL}")} label={AttrValue::Static("Email")}>{"✉"}</MagneticButton>
            </div>
        </footer>
    }
}
