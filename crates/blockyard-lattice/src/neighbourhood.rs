//! Fixed neighbourhood offset tables.

use blockyard_core::Offset;

/// The 26 offsets of the 3×3×3 Moore neighbourhood, excluding the origin.
///
/// Ordered x-major, then y, then z, each running from -1 to 1.
pub const MOORE_OFFSETS: [Offset; 26] = moore_table();

/// The four in-plane face neighbours: +x, -x, +z, -z.
pub const PLANAR_OFFSETS: [Offset; 4] = [
    Offset::new(1, 0, 0),
    Offset::new(-1, 0, 0),
    Offset::new(0, 0, 1),
    Offset::new(0, 0, -1),
];

const fn moore_table() -> [Offset; 26] {
    let mut out = [Offset::ZERO; 26];
    let mut i = 0;
    let mut dx: i8 = -1;
    while dx <= 1 {
        let mut dy: i8 = -1;
        while dy <= 1 {
            let mut dz: i8 = -1;
            while dz <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    out[i] = Offset::new(dx, dy, dz);
                    i += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn moore_table_is_complete_and_unique() {
        let unique: IndexSet<Offset> = MOORE_OFFSETS.iter().copied().collect();
        assert_eq!(unique.len(), 26);
        assert!(!unique.contains(&Offset::ZERO));
        assert!(MOORE_OFFSETS
            .iter()
            .all(|o| o.dx.abs() <= 1 && o.dy.abs() <= 1 && o.dz.abs() <= 1));
    }

    #[test]
    fn moore_table_order_is_x_major() {
        assert_eq!(MOORE_OFFSETS[0], Offset::new(-1, -1, -1));
        assert_eq!(MOORE_OFFSETS[12], Offset::new(0, 0, -1));
        assert_eq!(MOORE_OFFSETS[13], Offset::new(0, 0, 1));
        assert_eq!(MOORE_OFFSETS[25], Offset::new(1, 1, 1));
    }

    #[test]
    fn planar_offsets_stay_in_plane() {
        assert!(PLANAR_OFFSETS
            .iter()
            .all(|o| o.dy == 0 && o.length_squared() == 1));
    }
}
