//! Toast bookkeeping. Each toast walks `Created -> Visible -> Hidden` and is
//! then dropped from the queue. Timers live in the component; they only ever
//! send ids back here, so a timer for a toast that is already gone does nothing.

use log::debug;

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    Created,
    Visible,
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Show(String),
    Reveal(ToastId),
    Hide(ToastId),
    Remove(ToastId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn show(&mut self, message: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!("Toast {} created: {}", id, message);
        self.toasts.push(Toast {
            id,
            message,
            phase: ToastPhase::Created,
        });
        id
    }

    pub fn reveal(&mut self, id: ToastId) -> bool {
        self.advance(id, ToastPhase::Visible)
    }

    pub fn hide(&mut self, id: ToastId) -> bool {
        self.advance(id, ToastPhase::Hidden)
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        let removed = self.toasts.len() != before;
        if removed {
            debug!("Toast {} removed", id);
        }
        removed
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: ToastAction) -> bool {
        match action {
            ToastAction::Show(message) => {
                self.show(message);
                true
            }
            ToastAction::Reveal(id) => self.reveal(id),
            ToastAction::Hide(id) => self.hide(id),
            ToastAction::Remove(id) => self.remove(id),
        }
    }

    #[cfg(test)]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    // Phases never go backwards: a frame callback arriving after the hide timer is ignored.
    fn advance(&mut self, id: ToastId, to: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) if toast.phase < to => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_walks_through_its_phases() {
        let mut queue = ToastQueue::default();
        let id = queue.show("Saved");
        assert_eq!(queue.get(id).unwrap().phase, ToastPhase::Created);

        assert!(queue.reveal(id));
        assert!(queue.get(id).unwrap().is_visible());

        assert!(queue.hide(id));
        assert_eq!(queue.get(id).unwrap().phase, ToastPhase::Hidden);

        assert!(queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn two_toasts_expire_independently() {
        let mut queue = ToastQueue::default();
        let first = queue.show("Test drive booked for GT");
        let second = queue.show("Test drive booked for GT");
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        queue.reveal(first);
        queue.reveal(second);
        queue.hide(first);
        queue.remove(first);

        assert_eq!(queue.len(), 1);
        let left = queue.get(second).unwrap();
        assert!(left.is_visible());
        assert_eq!(left.message, "Test drive booked for GT");

        queue.hide(second);
        queue.remove(second);
        assert!(queue.is_empty());
    }

    #[test]
    fn late_timers_are_noops() {
        let mut queue = ToastQueue::default();
        let id = queue.show("Hello");
        queue.remove(id);
        let before = queue.clone();

        assert!(!queue.apply(ToastAction::Reveal(id)));
        assert!(!queue.apply(ToastAction::Hide(id)));
        assert!(!queue.apply(ToastAction::Remove(id)));
        assert_eq!(queue, before);
    }

    #[test]
    fn reveal_after_hide_is_ignored() {
        let mut queue = ToastQueue::default();
        let id = queue.show("Hello");
        queue.hide(id);
        assert!(!queue.reveal(id));
        assert_eq!(queue.get(id).unwrap().phase, ToastPhase::Hidden);
    }

    #[test]
    fn ids_keep_increasing_after_removal() {
        let mut queue = ToastQueue::default();
        let first = queue.show("a");
        queue.remove(first);
        let second = queue.show("b");
        assert!(second > first);
        assert_eq!(queue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }
}
