use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major grid of fixed size, indexed by `Vec2`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>, pad: T) -> Self
    where
        T: Clone,
    {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, pad.clone());
            cells.extend(row);
        }
        BoundedGrid {
            bounds: BoundsOriginRoot::new(height as i32, width as i32),
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Every position paired with its cell, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let width = self.bounds.width;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let index = index as i32;
            (Vec2 { i: index / width, j: index % width }, cell)
        })
    }

    fn offset(&self, pos: &Vec2) -> usize {
        (pos.i * self.bounds.width + pos.j) as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}
