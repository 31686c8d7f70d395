//! Lookup tables for marching squares.
//!
//! Corner order around a cell at `(x, y)`:
//!
//! ```text
//!  3 ---- 2
//!  |      |
//!  |      |
//!  0 ---- 1
//! ```
//!
//! corner 0 = `(x, y)`, 1 = `(x + 1, y)`, 2 = `(x + 1, y + 1)`, 3 = `(x, y + 1)`.

/// Slot marker for "no edge".
pub const NO_EDGE: i8 = -1;

/// Corner pairs for each edge index. The first corner is the interpolation start.
pub const EDGE_PAIRS: [[usize; 2]; 4] = [
    [0, 1], // 0
    [3, 0], // 1
    [1, 2], // 2
    [2, 3], // 3
];

/// Edge indices per configuration, consumed two at a time; each pair is one
/// segment. 5 and 10 are the saddles and always split along the same diagonal.
pub const CORNER_COMBINATIONS: [[i8; 4]; 16] = [
    [-1, -1, -1, -1], // 0
    [0, 1, -1, -1],   // 1
    [0, 2, -1, -1],   // 2
    [1, 2, -1, -1],   // 3
    [3, 2, -1, -1],   // 4
    [0, 1, 3, 2],     // 5
    [0, 3, -1, -1],   // 6
    [1, 3, -1, -1],   // 7
    [1, 3, -1, -1],   // 8
    [3, 0, -1, -1],   // 9
    [1, 0, 3, 2],     // 10
    [3, 2, -1, -1],   // 11
    [1, 2, -1, -1],   // 12
    [0, 2, -1, -1],   // 13
    [1, 0, -1, -1],   // 14
    [-1, -1, -1, -1], // 15
];

/// Number of segments a configuration produces.
#[inline]
pub fn segment_count(configuration: u8) -> usize {
    CORNER_COMBINATIONS[usize::from(configuration & 0x0F)]
        .chunks_exact(2)
        .take_while(|pair| pair[0] != NO_EDGE)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_counts_by_configuration() {
        for c in 0u8..16 {
            let expect = match c {
                0 | 15 => 0,
                5 | 10 => 2,
                _ => 1,
            };
            assert_eq!(segment_count(c), expect, "configuration {}", c);
        }
    }

    // Every referenced edge separates an inside corner from an outside one.
    #[test]
    fn referenced_edges_cross_the_boundary() {
        for c in 1u8..15 {
            for &e in CORNER_COMBINATIONS[c as usize].iter().filter(|&&e| e != NO_EDGE) {
                let [a, b] = EDGE_PAIRS[e as usize];
                let inside_a = c & (1 << a) != 0;
                let inside_b = c & (1 << b) != 0;
                assert_ne!(inside_a, inside_b, "configuration {} edge {}", c, e);
            }
        }
    }

    #[test]
    fn sentinels_only_trail() {
        for row in CORNER_COMBINATIONS.iter() {
            let first_empty = row.iter().position(|&e| e == NO_EDGE).unwrap_or(4);
            assert!(row[first_empty..].iter().all(|&e| e == NO_EDGE));
            assert_eq!(first_empty % 2, 0);
        }
    }
}
