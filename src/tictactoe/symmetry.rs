//! D4 symmetry group operations for board canonicalization

use std::collections::HashMap;

use super::board::{BOARD_SIZE, Board, Cell};

/// A symmetry of the square expressed as a cell permutation.
///
/// Applying it produces a board where `new[i] = old[perm[i]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symmetry {
    pub name: &'static str,
    pub perm: [usize; BOARD_SIZE],
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry {
        name: "identity",
        perm: [0, 1, 2, 3, 4, 5, 6, 7, 8],
    };

    /// Apply to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; BOARD_SIZE]) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|idx| cells[self.perm[idx]])
    }

    /// Apply to a board
    pub fn apply(&self, board: &Board) -> Board {
        Board {
            cells: self.apply_to_cells(&board.cells),
        }
    }
}

/// The seven non-identity symmetries in probing order.
///
/// Construction and lookup must walk this list in the same order.
pub const SYMMETRIES: [Symmetry; 7] = [
    Symmetry {
        name: "mirror-vertical",
        perm: [2, 1, 0, 5, 4, 3, 8, 7, 6],
    },
    Symmetry {
        name: "mirror-horizontal",
        perm: [6, 7, 8, 3, 4, 5, 0, 1, 2],
    },
    Symmetry {
        name: "anti-transpose",
        perm: [8, 5, 2, 7, 4, 1, 6, 3, 0],
    },
    Symmetry {
        name: "transpose",
        perm: [0, 3, 6, 1, 4, 7, 2, 5, 8],
    },
    Symmetry {
        name: "rotate-180",
        perm: [8, 7, 6, 5, 4, 3, 2, 1, 0],
    },
    Symmetry {
        name: "rotate-counter-clockwise",
        perm: [2, 5, 8, 1, 4, 7, 0, 3, 6],
    },
    Symmetry {
        name: "rotate-clockwise",
        perm: [6, 3, 0, 7, 4, 1, 8, 5, 2],
    },
];

/// Something that knows which board keys are already canonical
pub trait KnownKeys {
    fn contains_key(&self, key: &str) -> bool;
}

impl<V> KnownKeys for HashMap<String, V> {
    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }
}

/// Existing key for `board` or one of its images, probed identity first.
pub fn find_key<K: KnownKeys + ?Sized>(board: &Board, known: &K) -> Option<String> {
    let key = board.encode();
    if known.contains_key(&key) {
        return Some(key);
    }
    SYMMETRIES
        .iter()
        .map(|sym| sym.apply(board).encode())
        .find(|key| known.contains_key(key))
}

/// Canonical key of `board` relative to the keys already known.
///
/// When no image of the board is known yet, the board's own encoding becomes
/// the canonical key of its class.
pub fn canonical_key<K: KnownKeys + ?Sized>(board: &Board, known: &K) -> String {
    find_key(board, known).unwrap_or_else(|| board.encode())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_symmetries() -> Vec<Symmetry> {
        std::iter::once(Symmetry::IDENTITY)
            .chain(SYMMETRIES.iter().copied())
            .collect()
    }

    fn compose(first: &Symmetry, second: &Symmetry) -> [usize; BOARD_SIZE] {
        // second applied after first: new[i] = old[first[second[i]]]
        std::array::from_fn(|i| first.perm[second.perm[i]])
    }

    #[test]
    fn test_permutations_are_bijections() {
        for sym in all_symmetries() {
            let unique: HashSet<usize> = sym.perm.iter().copied().collect();
            assert_eq!(unique.len(), BOARD_SIZE, "{} is not a bijection", sym.name);
        }
    }

    #[test]
    fn test_group_is_closed() {
        let perms: HashSet<[usize; BOARD_SIZE]> =
            all_symmetries().iter().map(|sym| sym.perm).collect();
        assert_eq!(perms.len(), 8);
        for a in all_symmetries() {
            for b in all_symmetries() {
                assert!(
                    perms.contains(&compose(&a, &b)),
                    "{} then {} leaves the group",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_center_is_fixed() {
        for sym in all_symmetries() {
            assert_eq!(sym.perm[4], 4);
        }
    }

    #[test]
    fn test_rotation_moves_corner() {
        let board = Board::from_string("X.. ... ...").unwrap();
        let rotated = SYMMETRIES[6].apply(&board);
        assert_eq!(rotated.encode(), "..X......");
    }

    #[test]
    fn test_canonical_key_prefers_known_image() {
        let mut known: HashMap<String, ()> = HashMap::new();
        known.insert("X........".to_string(), ());

        for corner in ["..X......", "......X..", "........X"] {
            let board = Board::from_string(corner).unwrap();
            assert_eq!(canonical_key(&board, &known), "X........");
        }
    }

    #[test]
    fn test_canonical_key_falls_back_to_identity() {
        let known: HashMap<String, ()> = HashMap::new();
        let board = Board::from_string(".X. ... ...").unwrap();
        assert_eq!(canonical_key(&board, &known), ".X.......");
        assert_eq!(find_key(&board, &known), None);
    }
}
