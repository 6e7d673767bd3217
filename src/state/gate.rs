//! Entry gate
//!
//! A one-question check shown before the gallery. The answer is normalized
//! and then matched against a loose pattern so punctuation, case and extra
//! words around the answer don't matter. Once passed, the result is stored
//! and the gate never appears again.

use once_cell::sync::Lazy;
use regex::Regex;

use super::store::Store;

/// Shown after every rejected answer
pub const GATE_HINT: &str = "Not quite. Hint: it's the café where it all started.";

/// How long the gate stays on screen after a correct answer
pub const GATE_HIDE_DELAY_MS: u64 = 420;

static PASSPHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"cafe\s+namoo").expect("passphrase pattern is a valid regex")
});

/// Lowercase, turn anything but `[a-z0-9]` and whitespace into spaces,
/// collapse whitespace runs and trim.
pub fn normalize(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pattern test on an already-normalized answer
pub fn matches_passphrase(normalized: &str) -> bool {
    PASSPHRASE.is_match(normalized)
}

/// Visual phase of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Prompt visible, page locked (advisory)
    Locked,
    /// Answer accepted, overlay playing its exit transition
    Unlocking,
    /// Gate gone
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOutcome {
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct Gate {
    phase: GatePhase,
    input: String,
    error: Option<&'static str>,
}

impl Gate {
    /// Build the gate from the persisted flag. A passed gate starts hidden.
    pub fn new(passed: bool) -> Self {
        Self {
            phase: if passed { GatePhase::Hidden } else { GatePhase::Locked },
            input: String::new(),
            error: None,
        }
    }

    /// Read the flag from the store. A read failure counts as "not passed".
    pub fn from_store(store: &Store) -> Self {
        let passed = store.gate_passed().unwrap_or_else(|e| {
            tracing::error!("Failed to read gate flag: {}", e);
            false
        });
        if passed {
            tracing::info!("🔓 Gate already passed, skipping prompt");
        }
        Self::new(passed)
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Page is in locked mode (only the gate's own input is meant for use)
    pub fn is_locked(&self) -> bool {
        self.phase == GatePhase::Locked
    }

    pub fn is_visible(&self) -> bool {
        self.phase != GatePhase::Hidden
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Validate an answer.
    ///
    /// On success the flag is persisted, the error cleared and the gate moves
    /// to `Unlocking`; the caller schedules `finish_unlock` and the celebration.
    /// A failed write is logged and the gate still opens for this session.
    pub fn check(&mut self, raw: &str, store: &Store) -> GateOutcome {
        let accepted = matches_passphrase(&normalize(raw));

        if accepted {
            if let Err(e) = store.mark_gate_passed() {
                tracing::error!("Failed to persist gate flag: {}", e);
            }
            self.error = None;
            if self.phase == GatePhase::Locked {
                self.phase = GatePhase::Unlocking;
            }
            tracing::info!("🎉 Gate passed");
        } else {
            self.error = Some(GATE_HINT);
            tracing::debug!("Gate answer rejected");
        }

        GateOutcome { accepted }
    }

    /// End of the exit transition
    pub fn finish_unlock(&mut self) {
        if self.phase == GatePhase::Unlocking {
            self.phase = GatePhase::Hidden;
        }
    }
}
