use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::components::gallery_modal::GalleryModal;
use crate::config::ShowcaseConfig;
use crate::showcase::autoplay::AutoplayTimer;
use crate::showcase::carousel::{card_pose, resolve_action, ActionIcon, PrimaryAction};
use crate::showcase::filter;
use crate::showcase::layout::{gap_px, is_single_column};
use crate::showcase::project::{Category, Project, ProjectImage};
use crate::showcase::state::{ShowcaseAction, ShowcaseState};
use crate::utils::platform::{BrowserLinks, BrowserTimers};

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturedProjectsProps {
    pub projects: Rc<Vec<Project>>,
    #[prop_or_default]
    pub config: ShowcaseConfig,
}

#[function_component]
pub fn FeaturedProjects(props: &FeaturedProjectsProps) -> Html {
    let state = {
        let projects = props.projects.clone();
        let autoplay = props.config.autoplay;
        use_reducer(move || ShowcaseState::new(projects, autoplay))
    };
    let container_ref = use_node_ref();
    let container_width = use_state_eq(|| 0.0_f64);

    // Autoplay timer, re-synced whenever the flag or the filtered length changes.
    {
        let timer = use_mut_ref(|| AutoplayTimer::new(BrowserTimers));
        let state = state.clone();
        let interval_ms = props.config.autoplay_interval_ms;
        let deps = (state.carousel.autoplay, state.carousel.len());
        use_effect_with_deps(
            move |_| {
                let dispatcher = state.dispatcher();
                timer.borrow_mut().sync(&state.carousel, interval_ms, move || {
                    dispatcher.dispatch(ShowcaseAction::AutoplayTick);
                });
                move || {
                    timer.borrow_mut().stop();
                }
            },
            deps,
        );
    }

    // Track the container width for the gap and the column breakpoint.
    {
        let container_ref = container_ref.clone();
        let container_width = container_width.clone();
        use_effect_with_deps(
            move |_| {
                let measure = {
                    let container_ref = container_ref.clone();
                    move || {
                        if let Some(element) = container_ref.cast::<HtmlElement>() {
                            container_width.set(element.offset_width() as f64);
                        }
                    }
                };
                measure();

                let callback = Closure::<dyn Fn()>::new(measure);
                let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        log::error!("Failed to create resize observer: {:?}", e);
                        None
                    }
                };
                if let (Some(observer), Some(element)) = (&observer, container_ref.cast::<Element>()) {
                    log::debug!("Observing projects container");
                    observer.observe(&element);
                }
                move || {
                    if let Some(observer) = observer {
                        log::debug!("Disconnecting resize observer");
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let dispatcher = state.dispatcher();
    let layout = props.config.layout;
    let width = *container_width;
    let single_column = is_single_column(width, &layout);
    let gap = gap_px(width, &layout);

    let filter_bar = Category::FILTERS
        .iter()
        .map(|&category| {
            let dispatcher = dispatcher.clone();
            let count = filter::count(state.catalog(), category);
            let onclick = Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(ShowcaseAction::SelectFilter(category));
            });
            html! {
                <button
                    class={classes!("filter-button", (state.filter() == category).then_some("active"))}
                    {onclick}
                >
                    {format!("{} ({})", category.label(), count)}
                </button>
            }
        })
        .collect::<Html>();

    let body = match state.carousel.active_project() {
        None => html! {
            <div class="projects-empty">
                <h2>{"No Projects Found"}</h2>
                <p>{"No projects match the selected filter."}</p>
            </div>
        },
        Some(active_project) => {
            let active = state.carousel.active_index();
            let len = state.carousel.len();
            let cards = state
                .carousel
                .items()
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    let pose = card_pose(index, active, len);
                    let opens_gallery = index == active && project.has_gallery();
                    let onclick = if index != active {
                        let dispatcher = dispatcher.clone();
                        Some(Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(ShowcaseAction::Select(index));
                        }))
                    } else {
                        opens_gallery.then(|| {
                            let dispatcher = dispatcher.clone();
                            Callback::from(move |_: MouseEvent| {
                                dispatcher.dispatch(ShowcaseAction::OpenGallery);
                            })
                        })
                    };
                    html! {
                        <div
                            key={format!("{}-{}", index, project.name)}
                            class="project-card"
                            style={format!(
                                "opacity: {}; transform: scale({}) rotate({}deg); z-index: {};",
                                pose.opacity, pose.scale, pose.rotate_deg, pose.z_index
                            )}
                        >
                            <div
                                class={classes!("project-card-frame", (index != active || opens_gallery).then_some("clickable"))}
                                {onclick}
                            >
                                { card_face(project) }
                            </div>
                        </div>
                    }
                })
                .collect::<Html>();

            let action = resolve_action(active_project);
            let on_primary = {
                let dispatcher = dispatcher.clone();
                let action = action.clone();
                Callback::from(move |_: MouseEvent| {
                    if action.perform(&BrowserLinks) {
                        dispatcher.dispatch(ShowcaseAction::OpenGallery);
                    }
                })
            };
            let on_previous = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShowcaseAction::Previous))
            };
            let on_next = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShowcaseAction::Next))
            };

            html! {
                <div
                    class="projects-grid"
                    style={format!(
                        "grid-template-columns: {}; gap: {}px;",
                        if single_column { "1fr" } else { "1fr 1fr" },
                        gap
                    )}
                >
                    <div class="project-stack">
                        <div class="project-stack-inner">{cards}</div>
                    </div>
                    <div class="project-details">
                        <div class="project-text">
                            <h3>{&active_project.name}</h3>
                            <p class="project-designation">{&active_project.designation}</p>
                            <div class="project-tech">
                                { for active_project.technologies.iter().map(|tech| html! {
                                    <span class="tech-pill">{tech}</span>
                                }) }
                            </div>
                            <p class="project-quote">
                                { for active_project.quote.split_whitespace().enumerate().map(|(index, word)| html! {
                                    <span
                                        class="quote-word"
                                        style={format!("animation-delay: {:.2}s;", 0.02 * index as f64)}
                                    >
                                        {word}{"\u{00a0}"}
                                    </span>
                                }) }
                            </p>
                        </div>
                        <div class={classes!("project-controls", single_column.then_some("stacked"))}>
                            <button class="circle-button" onclick={on_previous} aria-label="Previous project">
                                <i class="fas fa-chevron-left"></i>
                            </button>
                            <button class="circle-button" onclick={on_next} aria-label="Next project">
                                <i class="fas fa-chevron-right"></i>
                            </button>
                            <button class="view-project-button" onclick={on_primary}>
                                { action_icon(&action) }
                                {action.label()}
                            </button>
                        </div>
                    </div>
                </div>
            }
        }
    };

    let gallery_images = Rc::new(state.active_gallery().to_vec());
    let project_name: AttrValue = state
        .carousel
        .active_project()
        .map(|project| AttrValue::from(project.name.clone()))
        .unwrap_or_else(|| AttrValue::from(""));
    let on_close = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ShowcaseAction::CloseGallery))
    };
    let on_next_image = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ShowcaseAction::NextImage))
    };
    let on_previous_image = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ShowcaseAction::PreviousImage))
    };
    let on_jump = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |index: usize| dispatcher.dispatch(ShowcaseAction::JumpToImage(index)))
    };

    html! {
        <section id="projects" class="projects-section">
            <style>{PROJECTS_CSS}</style>
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge"><span class="pulse-dot"></span><span>{"Featured Projects"}</span></div>
                    <h2>{"Our Latest"}<span class="gradient-text">{"Creations"}</span></h2>
                    <p>{"Explore our portfolio of software solutions that have transformed businesses across industries."}</p>
                    <div class="filter-bar">{filter_bar}</div>
                </div>
                <div ref={container_ref} class="projects-body">
                    {body}
                </div>
            </div>
            <GalleryModal
                is_open={state.gallery.is_open()}
                images={gallery_images}
                {project_name}
                current={state.gallery.current_image()}
                counter={state.gallery.counter()}
                {on_close}
                on_next={on_next_image}
                on_previous={on_previous_image}
                {on_jump}
            />
        </section>
    }
}

fn card_face(project: &Project) -> Html {
    if project.shows_code_host_badge() {
        return html! {
            <div class="code-host-badge">
                <i class="fab fa-github"></i>
                <p>{"View on GitHub"}</p>
            </div>
        };
    }
    let src = match &project.src {
        ProjectImage::Asset(src) => src.clone(),
        ProjectImage::CodeHostBadge => "/placeholder.svg".to_string(),
    };
    html! {
        <>
            <img src={src} alt={project.name.clone()} />
            if project.has_gallery() {
                <div class="gallery-hint">{"Click to view gallery"}</div>
            }
        </>
    }
}

fn action_icon(action: &PrimaryAction) -> Html {
    match action.icon() {
        ActionIcon::CodeHost => html! { <i class="fab fa-github"></i> },
        ActionIcon::ExternalLink => html! { <i class="fas fa-arrow-up-right-from-square"></i> },
    }
}

const PROJECTS_CSS: &str = r#"
    .projects-section {
        padding: 5rem 0;
        background: black;
        position: relative;
        overflow: hidden;
    }
    .filter-bar {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin-bottom: 2rem;
    }
    .filter-button {
        padding: 0.5rem 1.5rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: transparent;
        color: #d1d5db;
        cursor: pointer;
    }
    .filter-button.active {
        color: white;
        border-color: rgba(192, 132, 252, 0.5);
        background: linear-gradient(90deg, rgba(192, 132, 252, 0.2), rgba(244, 114, 182, 0.2));
    }
    .projects-grid {
        display: grid;
        position: relative;
    }
    .project-stack-inner {
        position: relative;
        padding-top: 73%;
    }
    .project-card {
        position: absolute;
        inset: 0;
        transform-origin: bottom;
        transition: all 0.4s ease-in-out;
    }
    .project-card-frame {
        height: 100%;
        border-radius: 18px;
        padding: 1px;
        background: #33313d;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .project-card-frame.clickable { cursor: pointer; }
    .project-card-frame img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 17px;
    }
    .code-host-badge {
        color: #d1d5db;
        text-align: center;
        font-size: 1.125rem;
    }
    .code-host-badge i { font-size: 8rem; }
    .project-details {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        padding: 1rem 0;
        color: white;
    }
    .tech-pill {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        margin: 0 0.5rem 0.5rem 0;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 9999px;
        font-size: 0.75rem;
    }
    .quote-word {
        display: inline-block;
        animation: word-reveal 0.2s ease-in-out both;
    }
    @keyframes word-reveal {
        from { opacity: 0; filter: blur(10px); transform: translateY(5px); }
        to { opacity: 1; filter: blur(0); transform: translateY(0); }
    }
    .project-controls {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .project-controls.stacked { padding-top: 3rem; }
    .circle-button {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: rgba(0, 0, 0, 0.4);
        border: 1px solid rgba(255, 255, 255, 0.2);
        color: white;
        cursor: pointer;
    }
    .view-project-button {
        flex: 1;
        padding: 0.75rem 1.5rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: transparent;
        color: white;
        font-weight: 600;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        cursor: pointer;
    }
    .projects-empty {
        text-align: center;
        color: white;
    }
"#;
