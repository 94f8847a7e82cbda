/// Messages a view shows after a submission: at most one error and one
/// success message at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    error: Option<String>,
    success: Option<String>,
}

impl Feedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission, dropping whatever the previous one left behind.
    pub fn begin(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_messages() {
        let mut feedback = Feedback::new();
        feedback.fail("Invalid token");
        assert_eq!(feedback.error(), Some("Invalid token"));

        feedback.begin();
        assert_eq!(feedback.error(), None);
        assert_eq!(feedback.success(), None);

        feedback.succeed("Code verified!");
        assert_eq!(feedback.success(), Some("Code verified!"));
        assert_eq!(feedback.error(), None);
    }

    #[test]
    fn only_one_message_is_visible() {
        let mut feedback = Feedback::new();
        feedback.succeed("done");
        feedback.fail("broken");
        assert_eq!(feedback.error(), Some("broken"));
        assert_eq!(feedback.success(), None);
    }
}
