/// An immutable stencil, stored as its bounding box plus the live cells in it.
/// Every other cell of the box is dead and is written as dead when stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    live: &'static [(usize, usize)],
}

impl Pattern {
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.live_cells().contains(&(row, col))
    }

    pub fn live_cells(&self) -> &'static [(usize, usize)] {
        self.live
    }
}

//  . . #
//  # . #
//  . # #
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: 3,
    cols: 3,
    live: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper glider gun",
    rows: 11,
    cols: 38,
    live: &[
        // left block
        (5, 1),
        (5, 2),
        (6, 1),
        (6, 2),
        // left queen bee
        (3, 13),
        (3, 14),
        (4, 12),
        (4, 16),
        (5, 11),
        (5, 17),
        (6, 11),
        (6, 15),
        (6, 17),
        (6, 18),
        (7, 11),
        (7, 17),
        (8, 12),
        (8, 16),
        (9, 13),
        (9, 14),
        // right queen bee
        (1, 25),
        (2, 23),
        (2, 25),
        (3, 21),
        (3, 22),
        (4, 21),
        (4, 22),
        (5, 21),
        (5, 22),
        (6, 23),
        (6, 25),
        (7, 25),
        // right block
        (3, 35),
        (3, 36),
        (4, 35),
        (4, 36),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inside(p: &Pattern) {
        for &(r, c) in p.live_cells() {
            assert!(r < p.rows && c < p.cols, "{} has ({}, {}) outside", p.name, r, c);
        }
    }

    #[test]
    fn test_glider_stencil() {
        let rows: Vec<Vec<u8>> = (0..GLIDER.rows)
            .map(|r| (0..GLIDER.cols).map(|c| GLIDER.is_alive(r, c) as u8).collect())
            .collect();
        assert_eq!(rows, vec![vec![0, 0, 1], vec![1, 0, 1], vec![0, 1, 1]]);
    }

    #[test]
    fn test_gun_shape() {
        assert_eq!((GOSPER_GLIDER_GUN.rows, GOSPER_GLIDER_GUN.cols), (11, 38));
        assert_eq!(GOSPER_GLIDER_GUN.live_cells().len(), 36);
        assert_inside(&GOSPER_GLIDER_GUN);
        assert_inside(&GLIDER);
    }

    #[test]
    fn test_gun_has_no_duplicates() {
        let cells = GOSPER_GLIDER_GUN.live_cells();
        for (i, a) in cells.iter().enumerate() {
            assert!(!cells[i + 1..].contains(a), "duplicate {:?}", a);
        }
    }
}
