//! Debounced text input
//!
//! Binds a [`Debouncer`] to a gloo `Timeout`. Replacing the stored timeout
//! drops (cancels) the previous one, so at most one timer is pending.

use std::time::Duration;

use blog_core::debounce::timer_millis;
use blog_core::{Debouncer, Ticket};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::browser::now_ms;

#[derive(Clone, Copy)]
pub struct DebouncedText {
    /// What the input shows
    pub raw: ReadSignal<String>,
    set_raw: WriteSignal<String>,
    /// The value once typing paused for the quiet window
    pub settled: ReadSignal<String>,
    set_settled: WriteSignal<String>,
    debouncer: StoredValue<Debouncer<String>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl DebouncedText {
    pub fn input(&self, value: String) {
        self.set_raw.set(value.clone());
        let now = now_ms();
        let mut ticket = None;
        self.debouncer.update_value(|d| ticket = Some(d.input(value, now)));
        let Some(ticket) = ticket else { return };

        let this = *self;
        let wait = ticket.deadline().saturating_sub(now);
        let timeout = Timeout::new(timer_millis(wait), move || this.fire(ticket));
        self.timer.set_value(Some(timeout));
    }

    fn fire(&self, ticket: Ticket) {
        if let Some(value) = self.debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
            self.set_settled.set(value);
        }
    }

    /// Reset both values immediately, dropping any pending input.
    pub fn clear(&self) {
        self.timer.set_value(None);
        self.debouncer.update_value(|d| d.cancel());
        self.set_raw.set(String::new());
        self.set_settled.set(String::new());
    }
}

pub fn use_debounced_text(window: Duration) -> DebouncedText {
    let (raw, set_raw) = signal(String::new());
    let (settled, set_settled) = signal(String::new());
    DebouncedText {
        raw,
        set_raw,
        settled,
        set_settled,
        debouncer: StoredValue::new(Debouncer::new(window)),
        timer: StoredValue::new_local(None),
    }
}
