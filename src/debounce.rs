use std::time::{Duration, Instant};

/// Trailing-edge debounce combinator.
///
/// `schedule` stores a value and (re)starts the quiet period; rapid calls
/// within the window replace the pending value and push the deadline out.
/// `poll_at` yields the value once the deadline has passed, so only the last
/// schedule within a burst fires. Generic over the payload, independent of
/// any particular handler.
#[derive(Debug)]
pub struct Debouncer<T> {
  delay: Duration,
  pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
  pub fn new(delay: Duration) -> Self {
    Self { delay, pending: None }
  }

  /// Schedule `value`, replacing and re-timing any pending value.
  pub fn schedule(&mut self, value: T) {
    self.pending = Some((Instant::now() + self.delay, value));
  }

  /// Drop any pending value without firing it.
  pub fn cancel(&mut self) -> Option<T> {
    self.pending.take().map(|(_, value)| value)
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  /// Fire the pending value if its deadline has passed at `now`.
  pub fn poll_at(&mut self, now: Instant) -> Option<T> {
    match &self.pending {
      Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, value)| value),
      _ => None,
    }
  }

  /// `poll_at` with the current time; call once per event-loop tick.
  pub fn poll(&mut self) -> Option<T> {
    self.poll_at(Instant::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const DELAY: Duration = Duration::from_millis(300);

  #[test]
  fn does_not_fire_before_deadline() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.schedule("a");
    assert_eq!(debouncer.poll_at(Instant::now()), None);
    assert!(debouncer.is_pending());
  }

  #[test]
  fn fires_after_deadline() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.schedule("a");
    assert_eq!(debouncer.poll_at(Instant::now() + DELAY), Some("a"));
    assert!(!debouncer.is_pending());
  }

  #[test]
  fn fires_at_most_once() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.schedule("a");
    let late = Instant::now() + DELAY * 2;
    assert_eq!(debouncer.poll_at(late), Some("a"));
    assert_eq!(debouncer.poll_at(late), None);
  }

  #[test]
  fn reschedule_replaces_pending_value() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.schedule("first");
    debouncer.schedule("last");
    assert_eq!(debouncer.poll_at(Instant::now() + DELAY), Some("last"));
    assert_eq!(debouncer.poll_at(Instant::now() + DELAY * 2), None);
  }

  #[test]
  fn cancel_discards_pending() {
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.schedule("a");
    assert_eq!(debouncer.cancel(), Some("a"));
    assert_eq!(debouncer.poll_at(Instant::now() + DELAY), None);
  }
}
