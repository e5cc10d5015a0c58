use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Outcome sink the flows report through. The CLI wires in a terminal
/// sink; tests capture events in memory.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Terminal sink: one `title: message` line per event, errors on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Error => eprintln!("{title}: {message}"),
            _ => println!("{title}: {message}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// In-memory sink for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    events: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().map(|ev| ev.clone()).unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        if let Ok(mut events) = self.events.lock() {
            events.push(Notification {
                title: title.to_string(),
                message: message.to_string(),
                severity,
            });
        }
    }
}
