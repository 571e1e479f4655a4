use std::process::{Child, Command, Stdio};

/// Reads utterances aloud through an external synthesizer command.
///
/// At most one utterance is in flight at a time. The guard is a single
/// flag, not a queue: a request made while speaking is dropped. Finish is
/// detected by polling the child on timer ticks.
pub struct Narrator {
    command: Option<String>,
    child: Option<Child>,
}

impl Narrator {
    /// An empty command disables narration entirely.
    pub fn new(command: &str) -> Self {
        let command = command.trim();
        Self {
            command: if command.is_empty() {
                None
            } else {
                Some(command.to_string())
            },
            child: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Reap a finished utterance. Called on timer ticks.
    pub fn poll(&mut self) {
        if let Some(child) = self.child.as_mut() {
            if child.try_wait().ok().flatten().is_some() {
                self.child = None;
            }
        }
    }

    /// True while an utterance is in flight.
    pub fn is_speaking(&mut self) -> bool {
        self.poll();
        self.child.is_some()
    }

    /// Speak the text unless an utterance is already in flight. A failing
    /// command silently disables the narrator.
    pub fn speak(&mut self, text: &str) {
        let command = match &self.command {
            Some(c) => c.clone(),
            None => return,
        };
        if self.is_speaking() {
            return;
        }

        match Command::new(&command)
            .arg(text.to_lowercase())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => self.child = Some(child),
            Err(_) => self.command = None,
        }
    }

    /// Cut off the current utterance.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_disables_narration() {
        let mut narrator = Narrator::new("");
        assert!(!narrator.is_enabled());
        narrator.speak("three plus two i");
        assert!(!narrator.is_speaking());
    }

    #[test]
    fn test_missing_command_disables_after_first_attempt() {
        let mut narrator = Narrator::new("argand-no-such-synthesizer");
        assert!(narrator.is_enabled());
        narrator.speak("anything");
        assert!(!narrator.is_enabled());
        assert!(!narrator.is_speaking());
    }

    #[cfg(unix)]
    #[test]
    fn test_overlapping_requests_are_dropped() {
        let mut narrator = Narrator::new("sleep");
        narrator.speak("2");
        assert!(narrator.is_speaking());

        // Still busy: the second request must not replace the child.
        narrator.speak("2");
        assert!(narrator.is_speaking());

        narrator.stop();
        assert!(!narrator.is_speaking());
    }
}
