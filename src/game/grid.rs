use generic_array::{ArrayLength, GenericArray};
use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by generic parameters `R` and `C`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Deref for Grid<T, R, C> {
    type Target = [GenericArray<T, C>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Returns `true` if `index` points inside the grid.
    pub fn contains(index: GridIndex) -> bool {
        index.row < R::to_usize() && index.col < C::to_usize()
    }

    /// Checked access, [`None`] if `index` is out of the grid.
    pub fn get(&self, index: GridIndex) -> Option<&T> {
        self.contents.get(index.row)?.get(index.col)
    }

    /// Checked mutable access, [`None`] if `index` is out of the grid.
    pub fn get_mut(&mut self, index: GridIndex) -> Option<&mut T> {
        self.contents.get_mut(index.row)?.get_mut(index.col)
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        (0..R::to_usize()).flat_map(move |i| self.right_iter((i, 0).into()).indexed())
    }

    /// Returns an iterator with rightwards direction that starts with a `pos`.
    pub fn right_iter(&self, pos: GridIndex) -> RightGridIterator<T, R, C> {
        RightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns an iterator with downwards direction that starts with a `pos`.
    pub fn bottom_iter(&self, pos: GridIndex) -> BottomGridIterator<T, R, C> {
        BottomGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-right direction that starts with a `pos`.
    pub fn bottom_right_iter(&self, pos: GridIndex) -> BottomRightGridIterator<T, R, C> {
        BottomRightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-left direction that starts with a `pos`.
    pub fn bottom_left_iter(&self, pos: GridIndex) -> BottomLeftGridIterator<T, R, C> {
        BottomLeftGridIterator {
            current: Some(pos),
            grid: self,
        }
    }
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Sets every element back to its default value.
    pub fn clear(&mut self) {
        self.contents = Default::default();
    }
}

/// An iterator with rightwards direction.
/// On each step it's incrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct RightGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for RightGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row, self.current.col + 1);
        Some(item)
    }
}

/// An iterator with downwards direction.
/// On each step it's incrementing `row` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct BottomGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row + 1, self.current.col);
        Some(item)
    }
}

/// A diagonal iterator with bottom-right direction.
/// On each step it's incrementing `col` and `row` by 1 in the underlying [`GridIndex`].
pub struct BottomRightGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomRightGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row + 1, self.current.col + 1);
        Some(item)
    }
}

/// A diagonal iterator with bottom-left direction.
/// On each step it's incrementing `row` and decrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops after column 0 has been yielded.
pub struct BottomLeftGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: Option<GridIndex>,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomLeftGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let item = self.grid.get(current)?;
        self.current = current
            .col
            .checked_sub(1)
            .map(|col| GridIndex::new(current.row + 1, col));
        Some(item)
    }
}

/// Needed to create iterator adapter which gives the current iteration [`GridIndex`]
/// as well as the next value.
pub trait WithGridIndex {
    /// Returns current [`GridIndex`] if it is valid, otherwise [`None`].
    fn get_index(&self) -> Option<GridIndex>;

    /// Returns an iterator which gives the current iteration [`GridIndex`]
    /// as well as the next value.
    fn indexed(self) -> IndexedGridIterator<Self>
    where
        Self: Sized,
    {
        IndexedGridIterator { it: self }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for RightGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomRightGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomLeftGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        self.current
    }
}

/// An iterator that yields the current [`GridIndex`] and the element during iteration.
pub struct IndexedGridIterator<It> {
    it: It,
}

impl<It> Iterator for IndexedGridIterator<It>
where
    It: Iterator + WithGridIndex,
{
    type Item = (GridIndex, It::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.it.get_index()?;
        self.it.next().map(|item| (index, item))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use generic_array::typenum;

    type Grid3 = Grid<usize, typenum::U3, typenum::U3>;

    fn numbered() -> Grid3 {
        let mut grid = Grid3::default();
        for row in 0..3 {
            for col in 0..3 {
                grid[(row, col).into()] = row * 3 + col;
            }
        }
        grid
    }

    #[test]
    fn test_all_indexed() {
        let mut grid = Grid::<usize, typenum::U2, typenum::U2>::default();
        grid[(1, 1).into()] = 1;
        itertools::assert_equal(
            grid.all_indexed(),
            [
                ((0, 0).into(), &0),
                ((0, 1).into(), &0),
                ((1, 0).into(), &0),
                ((1, 1).into(), &1),
            ],
        );
    }

    #[test]
    fn test_lines() {
        let grid = numbered();
        itertools::assert_equal(grid.right_iter((1, 0).into()), &[3, 4, 5]);
        itertools::assert_equal(grid.bottom_iter((0, 2).into()), &[2, 5, 8]);
        itertools::assert_equal(grid.bottom_right_iter((0, 0).into()), &[0, 4, 8]);
        itertools::assert_equal(grid.bottom_left_iter((0, 2).into()), &[2, 4, 6]);
    }

    #[test]
    fn test_iterators_stop_at_the_edge() {
        let grid = numbered();
        itertools::assert_equal(grid.right_iter((2, 1).into()), &[7, 8]);
        itertools::assert_equal(grid.bottom_left_iter((1, 1).into()), &[4, 6]);
        assert_eq!(grid.right_iter((3, 0).into()).count(), 0);
    }

    #[test]
    fn test_checked_access() {
        let mut grid = numbered();
        assert_eq!(grid.get((2, 2).into()), Some(&8));
        assert_eq!(grid.get((3, 0).into()), None);
        assert_eq!(grid.get((0, 3).into()), None);
        assert!(grid.get_mut((5, 5).into()).is_none());
        assert!(Grid3::contains((2, 0).into()));
        assert!(!Grid3::contains((0, 3).into()));
    }

    #[test]
    fn test_clear() {
        let mut grid = numbered();
        grid.clear();
        assert!(grid.iter().flatten().all(|v| *v == 0));
        assert_eq!(grid, Grid3::default());
    }
}
