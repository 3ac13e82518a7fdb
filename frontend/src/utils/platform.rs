use gloo_timers::callback::Interval;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}

/// Opens URLs outside the app. Fire-and-forget.
pub trait ExternalLinks {
    fn open_external(&self, url: &str) -> Result<(), PlatformError>;
}

/// Suspends and restores page scrolling.
pub trait ScrollLock {
    fn lock(&self) -> Result<(), PlatformError>;
    fn unlock(&self) -> Result<(), PlatformError>;
}

/// Starts and cancels repeating timers.
pub trait Timers {
    type Handle;

    fn start_interval(&self, interval_ms: u32, tick: Box<dyn Fn()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Holds the page scroll lock until dropped.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        match lock.lock() {
            Ok(()) => log::debug!("Page scroll locked"),
            Err(e) => log::error!("Failed to lock page scroll: {}", e),
        }
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        match self.lock.unlock() {
            Ok(()) => log::debug!("Page scroll restored"),
            Err(e) => log::error!("Failed to restore page scroll: {}", e),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserLinks;

impl ExternalLinks for BrowserLinks {
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        let window = window().ok_or(PlatformError::NoWindow)?;
        log::info!("Opening {} in a new tab", url);
        window.open_with_url_and_target(url, "_blank")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScrollLock;

impl BrowserScrollLock {
    fn set_body_overflow(value: &str) -> Result<(), PlatformError> {
        let body = document()?.body().ok_or(PlatformError::NoDocument)?;
        body.style().set_property("overflow", value)?;
        Ok(())
    }
}

impl ScrollLock for BrowserScrollLock {
    fn lock(&self) -> Result<(), PlatformError> {
        Self::set_body_overflow("hidden")
    }

    fn unlock(&self) -> Result<(), PlatformError> {
        Self::set_body_overflow("unset")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    type Handle = Interval;

    fn start_interval(&self, interval_ms: u32, tick: Box<dyn Fn()>) -> Interval {
        Interval::new(interval_ms, move || tick())
    }

    fn cancel(&self, handle: Interval) {
        drop(handle);
    }
}

/// A `<link rel="stylesheet">` in `<head>`, removed again on drop.
pub struct StylesheetLink {
    element: Element,
}

impl StylesheetLink {
    pub fn attach(href: &str) -> Result<Self, PlatformError> {
        let document = document()?;
        let head = document.head().ok_or(PlatformError::NoDocument)?;
        let element = document.create_element("link")?;
        element.set_attribute("rel", "stylesheet")?;
        element.set_attribute("href", href)?;
        head.append_child(&element)?;
        log::debug!("Attached stylesheet {}", href);
        Ok(Self { element })
    }
}

impl Drop for StylesheetLink {
    fn drop(&mut self) {
        self.element.remove();
    }
}

fn document() -> Result<Document, PlatformError> {
    window()
        .ok_or(PlatformError::NoWindow)?
        .document()
        .ok_or(PlatformError::NoDocument)
}
