use yew::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 8] = [
    Service { title: "Custom Web Development", description: "Build your digital presence that converts", icon: "fa-globe" },
    Service { title: "Mobile App Development", description: "Launch your app on iOS and Android", icon: "fa-mobile-screen" },
    Service { title: "Shopify Development", description: "Create profitable online stores fast", icon: "fa-store" },
    Service { title: "WordPress Development", description: "Professional websites with easy management", icon: "fa-pen-to-square" },
    Service { title: "AI Solutions", description: "Automate processes and boost efficiency", icon: "fa-brain" },
    Service { title: "E-commerce Development", description: "Sell online with custom store solutions", icon: "fa-cart-shopping" },
    Service { title: "SaaS Development", description: "Scale your business with cloud software", icon: "fa-cloud" },
    Service { title: "System Integration", description: "Connect your tools and streamline workflow", icon: "fa-plug" },
];

/// Grid span class for the card at `index` (two wide, two narrow per row).
pub fn bento_span(index: usize) -> &'static str {
    match index {
        0 | 1 | 4 | 5 => "span-wide",
        _ => "span-narrow",
    }
}

#[function_component]
pub fn ServicesSection() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>{SERVICES_CSS}</style>
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge"><span class="pulse-dot"></span><span>{"Our Services"}</span></div>
                    <h2>{"What We"}<span class="gradient-text">{"Deliver"}</span></h2>
                    <p>{"From concept to deployment, we provide comprehensive software solutions that drive growth and innovation for your business."}</p>
                </div>
                <div class="bento-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            key={service.title}
                            class={classes!("bento-card", bento_span(index))}
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                        >
                            <div class="bento-icon"><i class={classes!("fas", service.icon)}></i></div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-section {
        padding: 5rem 0;
        background: black;
        color: white;
    }
    .bento-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        grid-auto-rows: 22rem;
        gap: 1rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .bento-card {
        grid-column: span 4;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: rgba(0, 0, 0, 0.4);
        border: 1px solid rgba(255, 255, 255, 0.1);
        animation: card-rise 0.6s both;
    }
    @media (min-width: 640px) {
        .bento-card { grid-column: span 2; }
    }
    @media (min-width: 1024px) {
        .bento-card.span-narrow { grid-column: span 1; }
    }
    .bento-icon {
        width: 4rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 1rem;
        border: 1px solid rgba(192, 132, 252, 0.3);
        color: #c084fc;
        font-size: 2rem;
    }
    @keyframes card-rise {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_wide_and_narrow() {
        let spans: Vec<_> = (0..SERVICES.len()).map(bento_span).collect();
        assert_eq!(
            spans,
            vec![
                "span-wide", "span-wide", "span-narrow", "span-narrow",
                "span-wide", "span-wide", "span-narrow", "span-narrow",
            ]
        );
        assert_eq!(bento_span(12), "span-narrow");
    }
}
