/// Seconds elapsed since the first animation frame.
///
/// Timestamps come from the host; a timestamp earlier than one already seen
/// never moves time backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let seconds = ((now_ms - start) / 1000.0) as f32;
        self.last = self.last.max(seconds);
        self.last
    }
}
