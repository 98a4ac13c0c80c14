//! Optional native features behind small traits.
//!
//! Each capability has a `Noop*` implementation that [`Capabilities::detect`]
//! picks whenever the platform has nothing better. Callers never branch on the
//! platform themselves.
//!
//! | capability | web                   | desktop  | mobile |
//! |------------|-----------------------|----------|--------|
//! | haptics    | `navigator.vibrate`   | noop     | noop   |
//! | share      | `navigator.share`     | noop     | noop   |
//! | clipboard  | `navigator.clipboard` | arboard  | noop   |

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::error::CapabilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Fire-and-forget tactile feedback. Implementations must not fail loudly.
pub trait Haptics {
    fn impact(&self, style: ImpactStyle);
    fn success(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) {}
    fn success(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
    /// What to put on the clipboard when no share sheet exists.
    pub fallback: String,
}

pub trait ShareSheet {
    fn is_supported(&self) -> bool;
    /// Resolves with an error when the user dismisses the sheet.
    fn share(&self, payload: &SharePayload) -> LocalBoxFuture<'static, Result<(), CapabilityError>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopShareSheet;

impl ShareSheet for NoopShareSheet {
    fn is_supported(&self) -> bool {
        false
    }

    fn share(&self, _payload: &SharePayload) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
        async { Err(CapabilityError::Unsupported) }.boxed_local()
    }
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn write_text(&self, _text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
        async { Err(CapabilityError::Unsupported) }.boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{VibrationHaptics, WebClipboard, WebShareSheet};

#[cfg(target_arch = "wasm32")]
mod web {
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{CapabilityError, Clipboard, Haptics, ImpactStyle, SharePayload, ShareSheet};

    fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|window| window.navigator())
    }

    fn js_error(err: JsValue) -> CapabilityError {
        CapabilityError::Failed(format!("{err:?}"))
    }

    /// Looks up `target[name]` as a callable, if present.
    fn method(target: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }

    fn call_promise(
        this: &JsValue,
        function: &Function,
        arg: &JsValue,
    ) -> Result<JsFuture, CapabilityError> {
        let promise: Promise = function
            .call1(this, arg)
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        Ok(JsFuture::from(promise))
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct VibrationHaptics;

    impl VibrationHaptics {
        fn pulse(ms: u32) {
            if let Some(navigator) = navigator() {
                let _ = navigator.vibrate_with_duration(ms);
            }
        }
    }

    impl Haptics for VibrationHaptics {
        fn impact(&self, style: ImpactStyle) {
            Self::pulse(match style {
                ImpactStyle::Light => 10,
                ImpactStyle::Medium => 20,
                ImpactStyle::Heavy => 35,
            });
        }

        fn success(&self) {
            Self::pulse(15);
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct WebShareSheet;

    impl ShareSheet for WebShareSheet {
        fn is_supported(&self) -> bool {
            navigator()
                .map(|navigator| method(&navigator.into(), "share").is_some())
                .unwrap_or(false)
        }

        fn share(&self, payload: &SharePayload) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            let pending = (|| -> Result<JsFuture, CapabilityError> {
                let navigator: JsValue = navigator().ok_or(CapabilityError::Unsupported)?.into();
                let share = method(&navigator, "share").ok_or(CapabilityError::Unsupported)?;

                let data = Object::new();
                Reflect::set(&data, &"title".into(), &payload.title.as_str().into())
                    .map_err(js_error)?;
                Reflect::set(&data, &"text".into(), &payload.text.as_str().into())
                    .map_err(js_error)?;
                if let Some(url) = payload.url.as_deref() {
                    Reflect::set(&data, &"url".into(), &url.into()).map_err(js_error)?;
                }
                call_promise(&navigator, &share, &data.into())
            })();

            async move {
                pending?.await.map(|_| ()).map_err(js_error)
            }
            .boxed_local()
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct WebClipboard;

    impl Clipboard for WebClipboard {
        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            let pending = (|| -> Result<JsFuture, CapabilityError> {
                let navigator: JsValue = navigator().ok_or(CapabilityError::Unsupported)?.into();
                let clipboard = Reflect::get(&navigator, &"clipboard".into())
                    .ok()
                    .filter(|value| !value.is_undefined() && !value.is_null())
                    .ok_or(CapabilityError::Unsupported)?;
                let write = method(&clipboard, "writeText").ok_or(CapabilityError::Unsupported)?;
                call_promise(&clipboard, &write, &JsValue::from_str(text))
            })();

            async move {
                pending?.await.map(|_| ()).map_err(js_error)
            }
            .boxed_local()
        }
    }
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
pub use system::SystemClipboard;

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
mod system {
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;

    use super::{CapabilityError, Clipboard};

    /// OS clipboard through `arboard`. The handle is opened per write; some
    /// platforms drop clipboard ownership when it goes away, which is fine for
    /// text that is pasted elsewhere later.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClipboard;

    impl Clipboard for SystemClipboard {
        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CapabilityError>> {
            let outcome = arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
                .map_err(|err| CapabilityError::Failed(err.to_string()));
            async move { outcome }.boxed_local()
        }
    }
}

/// The capability set handed to pages through context.
#[derive(Clone)]
pub struct Capabilities {
    pub haptics: Rc<dyn Haptics>,
    pub share: Rc<dyn ShareSheet>,
    pub clipboard: Rc<dyn Clipboard>,
}

impl Capabilities {
    pub fn noop() -> Self {
        Self {
            haptics: Rc::new(NoopHaptics),
            share: Rc::new(NoopShareSheet),
            clipboard: Rc::new(NoopClipboard),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        Self {
            haptics: Rc::new(VibrationHaptics),
            share: Rc::new(WebShareSheet),
            clipboard: Rc::new(WebClipboard),
        }
    }

    #[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
    pub fn detect() -> Self {
        Self {
            clipboard: Rc::new(SystemClipboard),
            ..Self::noop()
        }
    }

    #[cfg(any(target_os = "android", target_os = "ios"))]
    pub fn detect() -> Self {
        Self::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_capabilities_absorb_calls() {
        let caps = Capabilities::noop();
        caps.haptics.impact(ImpactStyle::Heavy);
        caps.haptics.success();
        assert!(!caps.share.is_supported());

        let payload = SharePayload {
            title: "t".into(),
            text: "x".into(),
            url: None,
            fallback: "x".into(),
        };
        let shared = futures::executor::block_on(caps.share.share(&payload));
        assert_eq!(shared, Err(CapabilityError::Unsupported));
        let copied = futures::executor::block_on(caps.clipboard.write_text("x"));
        assert_eq!(copied, Err(CapabilityError::Unsupported));
    }
}
