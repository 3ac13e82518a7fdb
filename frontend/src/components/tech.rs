use yew::prelude::*;

use crate::utils::marquee::{marquee_css, repeat_items, track};
use crate::utils::platform::StylesheetLink;

const COLOURED_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/gh/dheereshagrwal/coloured-icons@1.9.4/src/app/ci.min.css";

#[derive(Clone, Copy, PartialEq)]
enum TechIcon {
    Coloured(&'static str),
    Shopify,
}

#[derive(Clone, Copy, PartialEq)]
struct Technology {
    name: &'static str,
    icon: TechIcon,
}

const TECHNOLOGIES: [Technology; 11] = [
    Technology { name: "React.js", icon: TechIcon::Coloured("ci-react") },
    Technology { name: "React Native", icon: TechIcon::Coloured("ci-react") },
    Technology { name: "Angular", icon: TechIcon::Coloured("ci-angular") },
    Technology { name: "iOS", icon: TechIcon::Coloured("ci-apple") },
    Technology { name: "Tailwind CSS", icon: TechIcon::Coloured("ci-tailwindcss") },
    Technology { name: "Python", icon: TechIcon::Coloured("ci-python") },
    Technology { name: ".NET", icon: TechIcon::Coloured("ci-dotnet") },
    Technology { name: "C#", icon: TechIcon::Coloured("ci-csharp") },
    Technology { name: "Shopify", icon: TechIcon::Shopify },
    Technology { name: "WordPress", icon: TechIcon::Coloured("ci-wordpress") },
    Technology { name: "PHP", icon: TechIcon::Coloured("ci-php") },
];

#[function_component]
pub fn TechSection() -> Html {
    // The icon font is only needed while this section is mounted.
    use_effect_with_deps(
        move |_| {
            let link = match StylesheetLink::attach(COLOURED_ICONS_CSS) {
                Ok(link) => Some(link),
                Err(e) => {
                    log::warn!("Coloured icons unavailable: {}", e);
                    None
                }
            };
            move || drop(link)
        },
        (),
    );

    let strip = track(TECHNOLOGIES.len(), 3, 120, 100);
    let strip_css = marquee_css("tech-track", strip, 30);

    html! {
        <section id="technologies" class="tech-section">
            <style>{TECH_CSS}</style>
            <style>{strip_css}</style>
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge"><span class="pulse-dot"></span><span>{"Technologies We Master"}</span></div>
                    <h2>{"Our Tech"}<span class="gradient-text">{"Stack"}</span></h2>
                    <p>{"Cutting-edge technologies and frameworks we use to build exceptional digital experiences that drive results."}</p>
                </div>
                <div class="tech-marquee">
                    <div class="tech-fade left"></div>
                    <div class="tech-fade right"></div>
                    <div class="tech-track">
                        { for repeat_items(&TECHNOLOGIES, 3).into_iter().enumerate().map(|(index, tech)| html! {
                            <div key={format!("{}-{}", tech.name, index)} class="tech-item">
                                { tech_icon(tech.icon) }
                                <span>{tech.name}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn tech_icon(icon: TechIcon) -> Html {
    match icon {
        TechIcon::Coloured(class) => html! { <i class={classes!("ci", class, "tech-icon")}></i> },
        TechIcon::Shopify => html! { <i class="fab fa-shopify tech-icon shopify"></i> },
    }
}

const TECH_CSS: &str = r#"
    .tech-section {
        padding: 5rem 0;
        position: relative;
        overflow: hidden;
        color: white;
        background: linear-gradient(180deg, black, rgba(88, 28, 135, 0.05), black);
    }
    .tech-marquee {
        position: relative;
        overflow: hidden;
    }
    .tech-fade {
        position: absolute;
        top: 0;
        bottom: 0;
        width: 5rem;
        z-index: 10;
    }
    .tech-fade.left { left: 0; background: linear-gradient(90deg, black, transparent); }
    .tech-fade.right { right: 0; background: linear-gradient(270deg, black, transparent); }
    .tech-track {
        display: flex;
        gap: 3rem;
        padding: 2rem 0;
        align-items: center;
    }
    .tech-item {
        flex-shrink: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
        white-space: nowrap;
    }
    .tech-icon { font-size: 4rem; }
    .tech-icon.shopify { color: #95bf47; }
"#;
