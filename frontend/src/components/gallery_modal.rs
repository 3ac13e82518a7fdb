use std::rc::Rc;
use yew::prelude::*;

use crate::utils::platform::{BrowserScrollLock, ScrollLockGuard};

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryModalProps {
    pub is_open: bool,
    pub images: Rc<Vec<String>>,
    pub project_name: AttrValue,
    pub current: usize,
    pub counter: AttrValue,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_jump: Callback<usize>,
}

#[function_component]
pub fn GalleryModal(props: &GalleryModalProps) -> Html {
    // Page scroll stays locked exactly while the modal is open; the guard is
    // dropped when it closes or when this component unmounts.
    use_effect_with_deps(
        move |is_open| {
            let guard = is_open.then(|| ScrollLockGuard::acquire(BrowserScrollLock));
            move || drop(guard)
        },
        props.is_open,
    );

    if !props.is_open || props.images.is_empty() {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let current_src = props
        .images
        .get(props.current)
        .cloned()
        .unwrap_or_else(|| "/placeholder.svg".to_string());
    let has_many = props.images.len() > 1;

    html! {
        <div class="gallery-backdrop" onclick={on_backdrop}>
            <style>{GALLERY_CSS}</style>
            <div class="gallery-dialog" onclick={stop}>
                <div class="gallery-header">
                    <h3>{&props.project_name}</h3>
                    <button class="gallery-close" onclick={on_close_button} aria-label="Close gallery">
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>
                <div class="gallery-stage">
                    <img
                        src={current_src}
                        alt={format!("{} screenshot {}", props.project_name, props.current + 1)}
                    />
                    if has_many {
                        <>
                        <button class="gallery-arrow left" onclick={on_previous} aria-label="Previous image">
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <button class="gallery-arrow right" onclick={on_next} aria-label="Next image">
                            <i class="fas fa-chevron-right"></i>
                        </button>
                        </>
                    }
                    <div class="gallery-counter">{&props.counter}</div>
                </div>
                if has_many {
                    <div class="gallery-thumbnails">
                        { for props.images.iter().enumerate().map(|(index, image)| {
                            let on_jump = props.on_jump.clone();
                            html! {
                                <button
                                    key={index}
                                    class={classes!("gallery-thumb", (index == props.current).then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_jump.emit(index))}
                                >
                                    <img src={image.clone()} alt={format!("Thumbnail {}", index + 1)} />
                                </button>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}

const GALLERY_CSS: &str = r#"
    .gallery-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        background: rgba(0, 0, 0, 0.9);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .gallery-dialog {
        position: relative;
        width: 100%;
        max-width: 72rem;
        max-height: 90vh;
    }
    .gallery-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1rem;
        color: white;
    }
    .gallery-close {
        background: none;
        border: none;
        color: white;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .gallery-stage {
        position: relative;
        border-radius: 0.5rem;
        overflow: hidden;
    }
    .gallery-stage img {
        width: 100%;
        max-height: 70vh;
        object-fit: contain;
    }
    .gallery-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: rgba(0, 0, 0, 0.5);
        color: white;
        border: none;
        border-radius: 9999px;
        padding: 0.5rem 0.75rem;
        cursor: pointer;
    }
    .gallery-arrow.left { left: 1rem; }
    .gallery-arrow.right { right: 1rem; }
    .gallery-counter {
        position: absolute;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        background: rgba(0, 0, 0, 0.7);
        color: white;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
    }
    .gallery-thumbnails {
        display: flex;
        gap: 0.5rem;
        margin-top: 1rem;
        justify-content: center;
        overflow-x: auto;
    }
    .gallery-thumb {
        flex-shrink: 0;
        width: 4rem;
        height: 4rem;
        padding: 0;
        border-radius: 0.5rem;
        overflow: hidden;
        border: 2px solid #4b5563;
        cursor: pointer;
    }
    .gallery-thumb.active { border-color: #c084fc; }
    .gallery-thumb img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
"#;
