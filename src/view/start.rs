//! Start screen state

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct StartView {
    show_instructions: bool,
    elapsed: Duration,
}

impl StartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }

    /// Label of the toggle control
    pub fn toggle_label(&self) -> &'static str {
        if self.show_instructions {
            "HIDE INSTRUCTIONS"
        } else {
            "HOW TO PLAY"
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut view = StartView::new();
        assert!(!view.show_instructions());
        assert_eq!(view.toggle_label(), "HOW TO PLAY");

        view.toggle_instructions();
        assert!(view.show_instructions());
        assert_eq!(view.toggle_label(), "HIDE INSTRUCTIONS");

        view.toggle_instructions();
        assert!(!view.show_instructions());
    }
}
