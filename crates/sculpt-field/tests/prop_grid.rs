use proptest::prelude::*;
use sculpt_field::{
    AggregateOptions, AggregationWindow, Voxel, VoxelGrid, aggregate_at, recompute_values,
};

fn dim() -> impl Strategy<Value = i32> {
    1i32..=12
}

fn coord() -> impl Strategy<Value = i32> {
    -40i32..=40
}

fn window() -> impl Strategy<Value = AggregationWindow> {
    prop_oneof![
        Just(AggregationWindow::Cheap),
        (1i32..=3).prop_map(|radius| AggregationWindow::Full { radius }),
    ]
}

/// Grid of the given size with a pseudo-random solid pattern.
fn patterned(w: i32, h: i32, bits: u64) -> VoxelGrid {
    let mut g = VoxelGrid::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) as u64 % 64;
            if bits & (1 << i) != 0 {
                g.set_block(x, y, true);
            }
        }
    }
    g
}

proptest! {
    // Outside the grid every query is synthetic air carrying the query coordinates
    #[test]
    fn outside_reads_are_air(w in dim(), h in dim(), x in coord(), y in coord(), bits in any::<u64>()) {
        let g = patterned(w, h, bits);
        let v = g.get(x, y);
        if g.contains(x, y) {
            prop_assert_eq!((v.x, v.y), (x, y));
        } else {
            prop_assert_eq!(v, Voxel::air(x, y));
        }
    }

    // Aggregates are averages of 0/1 samples
    #[test]
    fn aggregate_is_a_fraction(w in dim(), h in dim(), x in coord(), y in coord(), bits in any::<u64>(), win in window()) {
        let g = patterned(w, h, bits);
        let a = aggregate_at(&g, x, y, win);
        prop_assert!((0.0..=1.0).contains(&a));
    }

    // Toggling invert only flips the sign of solid cells' aggregate
    #[test]
    fn invert_flips_solid_cells_only(w in dim(), h in dim(), bits in any::<u64>(), win in window()) {
        let base = patterned(w, h, bits);
        let mut inverted = base.clone();
        recompute_values(&mut inverted, AggregateOptions { window: win, invert: true });
        for y in 0..h {
            for x in 0..w {
                let raw = aggregate_at(&base, x, y, win);
                let v = inverted.get(x, y);
                if v.solid {
                    prop_assert_eq!(v.value, -raw);
                } else {
                    prop_assert_eq!(v.value, raw);
                }
            }
        }
    }
}
