use std::fmt;

/// One grid sample: thresholded occupancy plus the scalar used for
/// interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
    pub solid: bool,
    pub value: f64,
    pub x: i32,
    pub y: i32,
}

impl Voxel {
    /// The synthetic cell returned for coordinates outside the grid.
    #[inline]
    pub const fn air(x: i32, y: i32) -> Self {
        Self {
            solid: false,
            value: 0.0,
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed-size 2D voxel grid. Anything outside `[0, width) x [0, height)`
/// reads as air, so the world border behaves as a closed boundary.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    width: i32,
    height: i32,
    cells: Vec<Voxel>,
}

impl VoxelGrid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Voxel::air(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Voxel {
        if !self.contains(x, y) {
            return Voxel::air(x, y);
        }
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Voxel> {
        if !self.contains(x, y) {
            return None;
        }
        let i = self.idx(x, y);
        self.cells.get_mut(i)
    }

    #[inline]
    pub fn set_value(&mut self, x: i32, y: i32, value: f64) {
        if let Some(v) = self.get_mut(x, y) {
            v.value = value;
        }
    }

    #[inline]
    pub fn set_solid(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(v) = self.get_mut(x, y) {
            v.solid = solid;
        }
    }

    /// Hard edit: solid cells get value 1, air cells value 0.
    pub fn set_block(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(v) = self.get_mut(x, y) {
            v.solid = solid;
            v.value = if solid { 1.0 } else { 0.0 };
        }
    }

    pub fn fill_air(&mut self) {
        for v in &mut self.cells {
            v.solid = false;
            v.value = 0.0;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Voxel> {
        self.cells.iter_mut()
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|v| v.solid).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            VoxelGrid::new(0, 4).unwrap_err(),
            GridError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(VoxelGrid::new(3, -1).is_err());
        assert!(VoxelGrid::new(1, 1).is_ok());
    }

    #[test]
    fn cells_carry_their_coordinates() {
        let g = VoxelGrid::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let v = g.get(x, y);
                assert_eq!((v.x, v.y), (x, y));
                assert!(!v.solid);
            }
        }
    }

    #[test]
    fn out_of_range_reads_air_and_writes_are_ignored() {
        let mut g = VoxelGrid::new(2, 2).unwrap();
        g.set_block(-1, 0, true);
        g.set_value(2, 0, 5.0);
        g.set_solid(0, 2, true);
        assert_eq!(g.solid_count(), 0);
        assert_eq!(g.get(-1, 0), Voxel::air(-1, 0));
        assert_eq!(g.get(7, 9), Voxel::air(7, 9));
        assert!(g.get_mut(2, 2).is_none());
    }

    #[test]
    fn set_block_keeps_value_and_solidity_together() {
        let mut g = VoxelGrid::new(3, 3).unwrap();
        g.set_block(1, 2, true);
        let v = g.get(1, 2);
        assert!(v.solid);
        assert_eq!(v.value, 1.0);
        g.set_block(1, 2, false);
        assert_eq!(g.get(1, 2).value, 0.0);

        g.set_block(0, 0, true);
        g.fill_air();
        assert_eq!(g.solid_count(), 0);
    }
}
