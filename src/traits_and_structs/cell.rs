#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::new(!self.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::new(true), Cell::Alive);
    }
}
