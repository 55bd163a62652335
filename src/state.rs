/// Outcome of a submit action, decided by validation and computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the payment came out finite.
    Computed,
    /// Validation failed.
    Rejected,
    /// Validation passed but the payment was not finite; nothing changes.
    NonFinite,
}

/// Events that move the widget between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Submitted(SubmitOutcome),
    BasisToggled,
    Cleared,
}

/// Where the widget is between user actions.
///
/// `Error` and `Result` are not exclusive on screen: an invalid submission
/// after a successful one keeps the stale results visible under the error
/// line, because submission failure never resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Error,
    Result,
}

impl Phase {
    /// Pure transition function; all state mutation happens in the app,
    /// driven by the phase this returns.
    pub fn step(self, event: WidgetEvent) -> Phase {
        match event {
            WidgetEvent::Submitted(SubmitOutcome::Computed) => Phase::Result,
            WidgetEvent::Submitted(SubmitOutcome::Rejected) => Phase::Error,
            WidgetEvent::Submitted(SubmitOutcome::NonFinite) => self,
            WidgetEvent::BasisToggled => {
                if self == Phase::Result {
                    Phase::Idle
                } else {
                    self
                }
            }
            WidgetEvent::Cleared => Phase::Idle,
        }
    }
}
