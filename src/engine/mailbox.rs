//! Single-slot event mailbox.

/// Holds at most one event. Posting replaces whatever was there.
#[derive(Debug)]
pub(crate) struct Mailbox<E> {
    slot: Option<E>,
}

impl<E> Default for Mailbox<E> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<E> Mailbox<E> {
    /// Store `event`, returning the unconsumed event it replaced.
    pub(crate) fn post(&mut self, event: E) -> Option<E> {
        self.slot.replace(event)
    }

    pub(crate) fn peek(&self) -> Option<&E> {
        self.slot.as_ref()
    }

    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mailbox_is_empty() {
        let mailbox: Mailbox<u32> = Mailbox::default();
        assert!(mailbox.peek().is_none());
    }

    #[test]
    fn post_overwrites_previous_event() {
        let mut mailbox = Mailbox::default();
        assert_eq!(mailbox.post(1), None);
        assert_eq!(mailbox.post(2), Some(1));
        assert_eq!(mailbox.peek(), Some(&2));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut mailbox = Mailbox::default();
        mailbox.post("ping");
        assert_eq!(mailbox.peek(), Some(&"ping"));
        assert_eq!(mailbox.peek(), Some(&"ping"));

        mailbox.clear();
        assert!(mailbox.peek().is_none());
    }
}
