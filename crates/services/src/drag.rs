/// Horizontal pointer drag state: whether a drag is active and where the
/// pointer was last seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    dragging: bool,
    last_x: f32,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer down or touch start.
    pub fn press(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
    }

    /// Pointer or touch move. Returns the x delta since the last event while a
    /// drag is active.
    pub fn move_to(&mut self, x: f32) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let delta = x - self.last_x;
        self.last_x = x;
        Some(delta)
    }

    /// Pointer up, pointer leave or touch end.
    pub fn release(&mut self) {
        self.dragging = false;
    }
}
