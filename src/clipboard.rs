//! Best-effort system clipboard access.
//!
//! Copying is fire-and-forget: a missing display server, an unsupported
//! platform, or a denied clipboard all degrade to doing nothing. Built
//! without the `clipboard` feature, [`copy`] is a no-op.

#[cfg(feature = "clipboard")]
pub fn copy(text: &str) {
    use arboard::Clipboard;

    let _ = Clipboard::new().and_then(|mut c| c.set_text(text.to_owned()));
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) {}
