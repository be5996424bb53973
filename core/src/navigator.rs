pub type PageIndex = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
}

/// Keyboard binding table for the mounted widget.
pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowLeft" => Some(NavCommand::Previous),
        "ArrowRight" => Some(NavCommand::Next),
        _ => None,
    }
}

/// A flip the animation surface has confirmed. Produced at most once per
/// index change; the turn sound is keyed off this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipConfirmed {
    pub from: PageIndex,
    pub to: PageIndex,
    pub is_open: bool,
}

/// Current-page tracker. Input handlers only *request* flips; the index
/// moves when the surface reports completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigatorState {
    current: PageIndex,
    total: usize,
}

impl NavigatorState {
    pub fn new(total_pages: usize) -> Self {
        Self {
            current: 0,
            total: total_pages.max(1),
        }
    }

    pub fn current_page(&self) -> PageIndex {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total
    }

    /// The album is "open" once the cover has been turned.
    pub fn is_open(&self) -> bool {
        self.current > 0
    }

    /// Returns the command to forward to the flip surface, or `None` at the
    /// first/last page. The surface enforces its own bounds too; the guard
    /// keeps boundary requests strict no-ops on our side.
    pub fn request(&self, command: NavCommand) -> Option<NavCommand> {
        match command {
            NavCommand::Previous if self.current == 0 => None,
            NavCommand::Next if self.current + 1 >= self.total => None,
            other => Some(other),
        }
    }

    /// Completion callback from the surface. Out-of-range indices are
    /// clamped; a notification that does not change the index (the surface
    /// double-fires on orientation changes) is absorbed.
    pub fn flip_completed(&mut self, new_index: PageIndex) -> Option<FlipConfirmed> {
        let clamped = new_index.min(self.total - 1);
        if clamped == self.current {
            return None;
        }
        let from = self.current;
        self.current = clamped;
        Some(FlipConfirmed {
            from,
            to: clamped,
            is_open: self.is_open(),
        })
    }
}
