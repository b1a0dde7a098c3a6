/// One acknowledgement shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
}

/// Sink for submit acknowledgements (an alert dialog, a toast, a log line).
pub trait Notifier {
    /// Show `title` / `message`. Called exactly once per submit.
    fn notify(&mut self, title: &str, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, title: &str, message: &str) {
        (**self).notify(title, message);
    }
}

/// Keeps every notification in order; handy for headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    received: Vec<Notification>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far.
    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    /// Most recent notification.
    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        self.received.push(Notification {
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }
}

/// Emits each notification as an `info` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        tracing::info!(%title, %message, "notify");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/notifier.rs"]
mod tests;
