/// "Redraw owed" flag coalescing bursts of resize notifications.
///
/// Only the first notification after a recompute asks the caller to schedule
/// one; later ones are absorbed until the recompute clears the flag.
#[derive(Debug, Default)]
pub struct RedrawGate {
    owed: bool,
}

impl RedrawGate {
    /// Mark a recompute as owed. Returns `true` if the caller must schedule it.
    pub fn request(&mut self) -> bool {
        if self.owed {
            false
        } else {
            self.owed = true;
            true
        }
    }

    pub fn is_owed(&self) -> bool {
        self.owed
    }

    /// Clear the flag, returning whether a recompute was owed.
    pub fn clear(&mut self) -> bool {
        std::mem::take(&mut self.owed)
    }
}
