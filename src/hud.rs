//! HUD sink interface
//!
//! The simulation never touches the scene graph directly. A host renderer
//! implements `HudSink` and receives speedometer, warning and score updates
//! from the drive tick; tests use `NullHud`.

/// How a warning should be presented (green praise vs red violation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Praise,
    Violation,
}

/// The three independent warning lines on the drive HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningChannel {
    Speed,
    WorkZone,
    TrafficLight,
}

/// Receiver for per-frame HUD updates from the drive simulation
pub trait HudSink {
    /// Displayed speed in km/h
    fn speed(&mut self, kmh: u32);

    /// Set or clear (None) one of the warning lines
    fn warning(&mut self, channel: WarningChannel, message: Option<(&'static str, Severity)>);

    /// Current score after a ledger change
    fn score(&mut self, value: i64);
}

/// No-op sink for headless tests
#[derive(Debug, Default)]
pub struct NullHud;

impl HudSink for NullHud {
    fn speed(&mut self, _kmh: u32) {}
    fn warning(&mut self, _channel: WarningChannel, _message: Option<(&'static str, Severity)>) {}
    fn score(&mut self, _value: i64) {}
}
