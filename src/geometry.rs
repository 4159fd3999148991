/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size of the attached terminal, if stdout is one.
    pub fn terminal() -> Option<Self> {
        crossterm::terminal::size()
            .ok()
            .filter(|&(width, height)| width > 0 && height > 0)
            .map(|(width, height)| Self::new(width, height))
    }
}
