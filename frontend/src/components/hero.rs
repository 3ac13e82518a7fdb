use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::utils::marquee::{marquee_css, repeat_items, track};
use crate::utils::platform::{BrowserLinks, ExternalLinks};

const TITLES: [&str; 5] = [
    "innovative",
    "scalable",
    "intelligent",
    "cutting-edge",
    "transformative",
];

const HERO_SERVICES: [&str; 7] = [
    "Custom Web Development",
    "Mobile App Development",
    "AI Solutions",
    "E-commerce Development",
    "SaaS Development",
    "System Integration",
    "Performance Optimization",
];

pub fn next_title_index(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

/// Click-to-chat link with the message pre-filled.
pub fn whatsapp_url(phone_number: &str, message: &str) -> String {
    let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[function_component]
pub fn HeroSection() -> Html {
    let title_index = use_state(|| 0_usize);

    {
        let current = *title_index;
        let title_index = title_index.clone();
        let delay = config::get_title_rotation_ms();
        use_effect_with_deps(
            move |current| {
                let current = *current;
                let timeout = Timeout::new(delay, move || {
                    title_index.set(next_title_index(current, TITLES.len()));
                });
                move || drop(timeout)
            },
            current,
        );
    }

    let open_whatsapp = Callback::from(|_: MouseEvent| {
        let url = whatsapp_url(config::get_whatsapp_number(), config::get_whatsapp_message());
        if let Err(e) = BrowserLinks.open_external(&url) {
            log::error!("Failed to open WhatsApp chat: {}", e);
        }
    });

    let ticker = track(HERO_SERVICES.len(), 3, 200, 200);
    let ticker_css = marquee_css("hero-ticker-track", ticker, 25);

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <style>{ticker_css}</style>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span>{"We build"}</span>
                    <span class="hero-rotator">
                        { for TITLES.iter().enumerate().map(|(index, title)| {
                            let position = if index == *title_index {
                                "current"
                            } else if index < *title_index {
                                "above"
                            } else {
                                "below"
                            };
                            html! {
                                <span key={index} class={classes!("hero-rotator-word", position)}>{*title}</span>
                            }
                        }) }
                    </span>
                    <span class="hero-title-tail">{"software solutions"}</span>
                </h1>
                <p class="hero-subtitle">
                    <strong>{"Revolutionize your business"}</strong>
                    {" with custom software development, AI integration, and cloud solutions."}
                    <span class="hero-subtitle-line">{"From concept to deployment, we turn your vision into powerful digital reality."}</span>
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={open_whatsapp}>
                        <i class="fab fa-whatsapp"></i>
                        {"Chat on WhatsApp"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
                <div class="hero-ticker">
                    <div class="hero-ticker-track">
                        { for repeat_items(&HERO_SERVICES, 3).into_iter().enumerate().map(|(index, service)| html! {
                            <div key={format!("{}-{}", service, index)} class="hero-ticker-item">{service}</div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
        background: radial-gradient(circle at top, #2e1065, black 70%);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        text-align: center;
        color: white;
    }
    .hero-title {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 700;
    }
    .hero-rotator {
        position: relative;
        display: flex;
        justify-content: center;
        align-items: center;
        overflow: hidden;
        height: 6rem;
    }
    .hero-rotator-word {
        position: absolute;
        background: linear-gradient(90deg, #c084fc, #f472b6, #d8b4fe);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        transition: transform 0.6s ease, opacity 0.6s ease;
    }
    .hero-rotator-word.current { transform: translateY(0); opacity: 1; }
    .hero-rotator-word.above { transform: translateY(-100px); opacity: 0; }
    .hero-rotator-word.below { transform: translateY(100px); opacity: 0; }
    .hero-title-tail { display: block; }
    .hero-subtitle-line { display: block; margin-top: 0.5rem; color: #d1d5db; }
    .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        background: white;
        color: black;
        padding: 1rem 2.5rem;
        border: none;
        border-radius: 0.75rem;
        font-weight: 700;
        font-size: 1.125rem;
        cursor: pointer;
    }
    .hero-ticker {
        overflow: hidden;
        margin-top: 1.5rem;
    }
    .hero-ticker-track {
        display: flex;
        gap: 2rem;
    }
    .hero-ticker-item {
        flex-shrink: 0;
        min-width: 180px;
        color: #9ca3af;
        white-space: nowrap;
        font-size: 0.875rem;
    }
"#;
