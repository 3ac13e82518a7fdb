use std::rc::Rc;
use yew::prelude::*;

use crate::components::featured_projects::FeaturedProjects;
use crate::components::hero::HeroSection;
use crate::components::services::ServicesSection;
use crate::components::tech::TechSection;
use crate::config;
use crate::showcase::catalog;
use crate::showcase::project::Project;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    // The catalog is read once per mount and shared read-only afterwards.
    let projects = use_memo(
        |_| match catalog::load_embedded() {
            Ok(projects) => projects,
            Err(e) => {
                log::error!("Failed to load project catalog: {}", e);
                Rc::new(Vec::<Project>::new())
            }
        },
        (),
    );

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="portfolio-page">
            <style>{PAGE_CSS}</style>
            <HeroSection />
            <FeaturedProjects projects={(*projects).clone()} config={config::get_showcase_config()} />
            <ServicesSection />
            <TechSection />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        background: black;
        font-family: system-ui, sans-serif;
    }
    .section-inner {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
        color: white;
    }
    .section-header h2 {
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 700;
    }
    .section-header p {
        font-size: 1.25rem;
        color: #d1d5db;
        max-width: 48rem;
        margin: 0 auto 3rem;
    }
    .section-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        font-size: 0.875rem;
    }
    .pulse-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #c084fc;
        animation: pulse 2s infinite;
    }
    .gradient-text {
        display: block;
        background: linear-gradient(90deg, #c084fc, #f472b6, #d8b4fe);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    @keyframes pulse {
        50% { opacity: 0.5; }
    }
"#;
