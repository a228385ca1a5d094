use std::fmt;

use chumsky::prelude::*;
use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    #[diagnostic(code(grid::invalid_dimension))]
    InvalidDimension { rows: usize, columns: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(grid::ragged_input),
        help("rows must be non-empty and as long as the first row")
    )]
    RaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{axis} of length {found} does not fit a grid expecting {expected}")]
    #[diagnostic(code(grid::length_mismatch))]
    LengthMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error("cannot append an empty {axis}")]
    #[diagnostic(code(grid::length_mismatch))]
    EmptyLine { axis: Axis },
}

/// Canonical `"{row}-{column}"` address of a cell.
pub fn cell_key(row: usize, column: usize) -> String {
    format!("{row}-{column}")
}

fn key_parser<'a>() -> impl Parser<'a, &'a str, (&'a str, &'a str), extra::Err<Rich<'a, char>>> {
    let index = text::int(10).padded();

    index.clone().then_ignore(just('-')).then(index)
}

/// Parses a `"{row}-{column}"` key, returning `None` for anything malformed.
pub fn parse_key(key: &str) -> Option<(usize, usize)> {
    let (row, column) = key_parser().parse(key).into_result().ok()?;
    Some((row.parse().ok()?, column.parse().ok()?))
}

/// A dense, rectangular, row-major 2D grid.
///
/// Every row always holds exactly `columns()` cells, and `columns()` is zero
/// only while the grid has no rows. Operations that would break that shape
/// fail instead of mutating the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    pub fn new() -> Self {
        Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
        }
    }

    /// Builds a `rows` x `columns` grid with every cell set to `value`.
    pub fn filled(rows: usize, columns: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            cells: vec![value; rows * columns],
        })
    }

    /// Builds a grid mirroring `rows`, which must all be non-empty and equally long.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut grid = Self::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row: Vec<T> = row.into_iter().collect();
            if row.is_empty() || (index > 0 && row.len() != grid.columns) {
                return Err(GridError::RaggedInput {
                    row: index,
                    expected: grid.columns,
                    found: row.len(),
                });
            }

            grid.columns = row.len();
            grid.rows += 1;
            grid.cells.extend(row);
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            None
        } else {
            Some(row * self.columns + column)
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.index(row, column).map(|index| &self.cells[index])
    }

    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.index(row, column).map(|index| &mut self.cells[index])
    }

    pub fn get_by_key(&self, key: &str) -> Option<&T> {
        let (row, column) = parse_key(key)?;
        self.get(row, column)
    }

    /// Overwrites an in-bounds cell and returns the stored value.
    ///
    /// Out-of-bounds writes leave the grid untouched and return `None`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Option<&T> {
        let index = self.index(row, column)?;
        self.cells[index] = value;
        Some(&self.cells[index])
    }

    pub fn set_by_key(&mut self, key: &str, value: T) -> Option<&T> {
        let (row, column) = parse_key(key)?;
        self.set(row, column, value)
    }

    /// Appends `values` as the new last row.
    pub fn append_row(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), GridError> {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(GridError::EmptyLine { axis: Axis::Row });
        }
        if !self.is_empty() && values.len() != self.columns {
            return Err(GridError::LengthMismatch {
                axis: Axis::Row,
                expected: self.columns,
                found: values.len(),
            });
        }

        self.columns = values.len();
        self.rows += 1;
        self.cells.extend(values);
        Ok(())
    }

    /// Appends `values` as the new last column, one value per row.
    pub fn append_column(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), GridError> {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(GridError::EmptyLine { axis: Axis::Column });
        }

        if self.is_empty() {
            self.rows = values.len();
            self.columns = 1;
            self.cells = values;
            return Ok(());
        }

        if values.len() != self.rows {
            return Err(GridError::LengthMismatch {
                axis: Axis::Column,
                expected: self.rows,
                found: values.len(),
            });
        }

        // Rebuild row by row, splicing one new value after each old row.
        let mut old = std::mem::take(&mut self.cells).into_iter();
        let mut cells = Vec::with_capacity(self.rows * (self.columns + 1));
        for value in values {
            cells.extend(old.by_ref().take(self.columns));
            cells.push(value);
        }

        self.cells = cells;
        self.columns += 1;
        Ok(())
    }

    /// Row-major iteration over every cell with its `(row, column)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / columns, index % columns), cell))
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.columns.max(1))
    }

    /// Keys of every cell equal to `value`, in row-major order.
    pub fn find_all<'a>(&'a self, value: &'a T) -> impl Iterator<Item = String> + 'a
    where
        T: PartialEq,
    {
        self.iter()
            .filter(move |(_, cell)| *cell == value)
            .map(|((row, column), _)| cell_key(row, column))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Like [`Grid::map`], stopping at the first cell `f` rejects.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut((usize, usize), &T) -> Result<U, E>,
    ) -> Result<Grid<U>, E> {
        let cells = self
            .iter()
            .map(|(position, cell)| f(position, cell))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid {
            rows: self.rows,
            columns: self.columns,
            cells,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.rows_iter().map(|row| row.iter().join("")).join("\n");
        f.write_str(&text)
    }
}
