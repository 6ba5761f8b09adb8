// SPDX-License-Identifier: MPL-2.0
//! The container whose interaction is suspended while a gesture is in flight.

/// Ancestor container that stops reacting to the pointer during a drag, so the
/// drag does not select or activate anything underneath it.
pub trait SelectionHost {
    fn set_selectable(&mut self, selectable: bool);
}

impl SelectionHost for () {
    fn set_selectable(&mut self, _selectable: bool) {}
}

/// Host used by the resizable widget: when closed, mouse events are no longer
/// forwarded to the wrapped content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGate {
    open: bool,
}

impl ContentGate {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for ContentGate {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SelectionHost for ContentGate {
    fn set_selectable(&mut self, selectable: bool) {
        self.open = selectable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_open() {
        assert!(ContentGate::default().is_open());
    }

    #[test]
    fn gate_follows_selectable_flag() {
        let mut gate = ContentGate::default();
        gate.set_selectable(false);
        assert!(!gate.is_open());
        gate.set_selectable(true);
        assert!(gate.is_open());
    }
}
