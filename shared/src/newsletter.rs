use std::time::Duration;

/// How long the "Thanks!" state stays on the subscribe button
pub const ACKNOWLEDGE_FOR: Duration = Duration::from_millis(2200);

/// Footer signup form. Subscribing is simulated: nothing leaves the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    email: String,
    acknowledged: bool,
    generation: u64,
}

impl NewsletterSignup {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Returns the generation to hand back to [`Self::expire`] once
    /// [`ACKNOWLEDGE_FOR`] has passed, or `None` for an empty address.
    pub fn subscribe(&mut self) -> Option<u64> {
        if self.email.trim().is_empty() {
            return None;
        }
        tracing::info!("📬 NEWSLETTER: simulated subscribe");
        self.email.clear();
        self.acknowledged = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Drop the acknowledgement, unless a newer subscribe happened since
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.acknowledged = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_ignored() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("   ");
        assert_eq!(signup.subscribe(), None);
        assert!(!signup.is_acknowledged());
        assert_eq!(signup.email(), "   ");
    }

    #[test]
    fn test_subscribe_clears_and_acknowledges() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("you@email.com");
        let generation = signup.subscribe().unwrap();
        assert!(signup.is_acknowledged());
        assert_eq!(signup.email(), "");

        signup.expire(generation);
        assert!(!signup.is_acknowledged());
    }

    #[test]
    fn test_older_timer_does_not_clear_newer_acknowledgement() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("a@b.c");
        let first = signup.subscribe().unwrap();
        signup.set_email("d@e.f");
        let second = signup.subscribe().unwrap();

        signup.expire(first);
        assert!(signup.is_acknowledged());
        signup.expire(second);
        assert!(!signup.is_acknowledged());
    }
}
