//! Deadline scheduler for the page session.
//!
//! Every timer the page uses lives in one [`Timers`] value owned by the
//! event loop. Teardown is therefore a non-event: dropping the loop drops
//! the scheduler and nothing can fire afterwards.

use std::time::{Duration, Instant};

/// Identifies one timer slot. Scheduling a key that is already armed
/// replaces the pending deadline instead of adding a second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKey {
    /// Advances the social links carousel.
    SocialRotation,
    /// Advances the featured projects carousel.
    ProjectRotation,
    /// Advances the testimonials carousel.
    TestimonialRotation,
    /// Drives cross-fade frames while any carousel is mid-transition.
    Frame,
    /// Clears the "copied" confirmation.
    CopyReset,
}

/// Rotation cadences and feedback delays for one page session.
#[derive(Debug, Clone)]
pub struct SessionTimings {
    pub social_rotation: Duration,
    pub project_rotation: Duration,
    pub testimonial_rotation: Duration,
    pub frame: Duration,
    pub copy_reset: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            social_rotation: Duration::from_secs(5),
            project_rotation: Duration::from_secs(7),
            testimonial_rotation: Duration::from_secs(10),
            frame: Duration::from_millis(75),
            copy_reset: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: TimerKey,
    due: Instant,
    period: Option<Duration>,
}

/// Keyed deadline set. Repeating entries re-arm themselves when collected;
/// one-shot entries fire once and disappear.
#[derive(Debug, Default)]
pub struct Timers {
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the three rotation cadences plus the frame tick for a fresh
    /// session, first fire one period from `now`.
    pub fn arm_session(&mut self, timings: &SessionTimings, now: Instant) {
        self.schedule_repeating(TimerKey::SocialRotation, now, timings.social_rotation);
        self.schedule_repeating(TimerKey::ProjectRotation, now, timings.project_rotation);
        self.schedule_repeating(TimerKey::TestimonialRotation, now, timings.testimonial_rotation);
        self.schedule_repeating(TimerKey::Frame, now, timings.frame);
    }

    /// Arm a repeating timer. An already armed `key` is replaced.
    pub fn schedule_repeating(&mut self, key: TimerKey, now: Instant, period: Duration) {
        self.remove(key);
        self.entries.push(Entry {
            key,
            due: now + period,
            period: Some(period),
        });
    }

    /// Arm a one-shot timer. An already armed `key` is replaced, which is
    /// what lets a fresh copy confirmation supersede the pending reset.
    pub fn schedule_once(&mut self, key: TimerKey, now: Instant, delay: Duration) {
        self.remove(key);
        self.entries.push(Entry {
            key,
            due: now + delay,
            period: None,
        });
    }

    /// Disarm `key` if it is pending.
    pub fn cancel(&mut self, key: TimerKey) {
        self.remove(key);
    }

    /// Whether `key` currently has a pending deadline.
    pub fn is_armed(&self, key: TimerKey) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Time until the earliest deadline, `None` when nothing is armed.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.due.saturating_duration_since(now))
            .min()
    }

    /// Collect every key that is due at `now`, in deadline order.
    ///
    /// A repeating entry fires at most once per call: if the loop stalled
    /// past several periods, the backlog is dropped and the next fire is a
    /// full period from `now`.
    pub fn due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut fired: Vec<(Instant, TimerKey)> = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].due > now {
                index += 1;
                continue;
            }
            let entry = &mut self.entries[index];
            fired.push((entry.due, entry.key));
            match entry.period {
                Some(period) => {
                    entry.due += period;
                    if entry.due <= now {
                        entry.due = now + period;
                    }
                    index += 1;
                }
                None => {
                    self.entries.remove(index);
                }
            }
        }
        fired.sort_by_key(|(due, _)| *due);
        fired.into_iter().map(|(_, key)| key).collect()
    }

    fn remove(&mut self, key: TimerKey) {
        self.entries.retain(|entry| entry.key != key);
    }
}
