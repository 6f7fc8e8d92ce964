//! Text rendering of searched maps.
//!
//! Nodes are drawn on a grid at their rounded coordinates, leaving a spare
//! cell between neighbouring positions so roads on the path can be drawn.
use derive_more::Display;
use thiserror::Error;

use crate::space::Node;
use crate::spatial::Coordinates;
use crate::spatial::Point;

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
pub enum Cell {
    #[default]
    #[display("   ")]
    Empty,
    #[display("[.]")]
    Node,
    #[display("[*]")]
    Path,
    #[display(" - ")]
    Road,
    #[display("[S]")]
    Start,
    #[display("[G]")]
    Goal,
}

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Node {node} at {p} can't be placed on the grid")]
    OffGrid { node: String, p: Point },
    #[error("Node {node} at {p} is too far out to draw")]
    TooLarge { node: String, p: Point },
    #[error("A grid reaching {0} doesn't fit in memory")]
    GridTooLarge(Point),
    #[error("Node {0} has no coordinates")]
    MissingCoordinate(String),
}

/// Largest coordinate that can be drawn, in either axis.
pub const MAX_GRID_EXTENT: f64 = 1024.0;

/// A grid of [`Cell`]s, indexed as `cells[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    cells: Vec<Vec<Cell>>,
}

/// The grid position of a node.
fn place<N: Node>(node: &N, p: Point) -> Result<(usize, usize), RenderError> {
    let (x, y) = (p.x.round(), p.y.round());
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return Err(RenderError::OffGrid {
            node: node.to_string(),
            p,
        });
    }
    if x > MAX_GRID_EXTENT || y > MAX_GRID_EXTENT {
        return Err(RenderError::TooLarge {
            node: node.to_string(),
            p,
        });
    }
    Ok((x as usize, y as usize))
}

/// Cells needed to draw every position up to `max`, plus a spare border.
fn grid_len(max: usize) -> Option<usize> {
    max.checked_add(1)?.checked_mul(2)?.checked_add(1)
}

impl GridView {
    /// Lays out every node in `coordinates`, the `path` between `start` and
    /// `goal` if there's one, and both ends regardless.
    ///
    /// ```
    /// use routes::render::GridView;
    /// use routes::spatial::Coordinates;
    /// use routes::spatial::Point;
    ///
    /// let coordinates = Coordinates::from_iter([
    ///     ("a", Point::new(0.0, 0.0)),
    ///     ("b", Point::new(1.0, 1.0)),
    /// ]);
    /// let view = GridView::new(&coordinates, Some(["a", "b"].as_slice()), &"a", &"b").unwrap();
    /// assert_eq!(view.rows(), 5);
    /// assert!(view.to_string().contains("[S]"));
    /// ```
    pub fn new<N: Node>(
        coordinates: &Coordinates<N>,
        path: Option<&[N]>,
        start: &N,
        goal: &N,
    ) -> Result<Self, RenderError> {
        let mut positions = Vec::with_capacity(coordinates.len());
        for (node, p) in coordinates.iter() {
            positions.push(place(node, *p)?);
        }
        let Some((_, max)) = coordinates.bounds() else {
            return Ok(Self { cells: vec![] });
        };

        // Every position was placed, so `max` rounds onto the grid too.
        let columns = grid_len(max.x.round() as usize);
        let rows = grid_len(max.y.round() as usize);
        let (Some(columns), Some(rows)) = (columns, rows) else {
            return Err(RenderError::GridTooLarge(max));
        };
        let mut cells = vec![vec![Cell::Empty; columns]; rows];
        for (x, y) in positions {
            cells[2 * y][2 * x] = Cell::Node;
        }

        let cell_of = |node: &N| -> Result<(usize, usize), RenderError> {
            let p = coordinates
                .get(node)
                .ok_or_else(|| RenderError::MissingCoordinate(node.to_string()))?;
            let (x, y) = place(node, *p)?;
            Ok((2 * x, 2 * y))
        };

        if let Some(path) = path {
            let mut previous: Option<(usize, usize)> = None;
            for node in path {
                let (x2, y2) = cell_of(node)?;
                cells[y2][x2] = Cell::Path;

                if let Some((x1, y1)) = previous {
                    let dx = x2 as f64 - x1 as f64;
                    let dy = y2 as f64 - y1 as f64;
                    // Cells are already doubled, so this is twice the longest side.
                    let steps = dx.abs().max(dy.abs()) as usize;
                    for step in 1..steps {
                        let t = step as f64 / steps as f64;
                        let cx = (x1 as f64 + dx * t).floor() as usize;
                        let cy = (y1 as f64 + dy * t).floor() as usize;
                        if cells[cy][cx] == Cell::Empty {
                            cells[cy][cx] = Cell::Road;
                        }
                    }
                }
                previous = Some((x2, y2));
            }
        }

        let (x, y) = cell_of(start)?;
        cells[y][x] = Cell::Start;
        let (x, y) = cell_of(goal)?;
        cells[y][x] = Cell::Goal;

        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }
}

impl std::fmt::Display for GridView {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.cells.is_empty() {
            return Ok(());
        }

        write!(f, "    ")?;
        for c in 0..self.columns() {
            write!(f, "{c:^3}")?;
        }
        writeln!(f)?;

        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r:^3} ")?;
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample;

    #[test]
    fn two_nodes() {
        let coordinates =
            Coordinates::from_iter([("A", Point::new(0.0, 0.0)), ("B", Point::new(1.0, 0.0))]);
        let view = GridView::new(&coordinates, Some(["A", "B"].as_slice()), &"A", &"B").unwrap();

        let expected = [
            "     0  1  2  3  4 ",
            " 0  [S] - [G]      ",
            " 1                 ",
            " 2                 ",
        ];
        assert_eq!(view.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn sample_path() {
        let (_, coordinates) = sample();
        let path = ["A", "B", "C", "D"];
        let view = GridView::new(&coordinates, Some(path.as_slice()), &"A", &"D").unwrap();

        assert_eq!((view.rows(), view.columns()), (13, 13));
        assert_eq!(view.cell(0, 0), Some(Cell::Start));
        assert_eq!(view.cell(2, 4), Some(Cell::Path));
        assert_eq!(view.cell(4, 8), Some(Cell::Path));
        assert_eq!(view.cell(10, 10), Some(Cell::Goal));
        assert_eq!(view.cell(8, 2), Some(Cell::Node));
        // A -> B
        assert_eq!(view.cell(0, 1), Some(Cell::Road));
        assert_eq!(view.cell(1, 2), Some(Cell::Road));
        assert_eq!(view.cell(1, 3), Some(Cell::Road));

        let s = view.to_string();
        let mut lines = s.lines();
        assert_eq!(
            lines.next(),
            Some("     0  1  2  3  4  5  6  7  8  9 10 11 12 ")
        );
        assert!(lines.next().unwrap().starts_with(" 0  [S] - "));
        assert_eq!(s.matches("[*]").count(), 2);
        assert_eq!(s.matches("[.]").count(), 1);
    }

    #[test]
    fn no_path() {
        let (_, coordinates) = sample();
        let view = GridView::new(&coordinates, None, &"A", &"D").unwrap();
        let s = view.to_string();

        assert!(s.contains("[S]") && s.contains("[G]"));
        assert_eq!(s.matches("[.]").count(), 3);
        assert!(!s.contains("[*]") && !s.contains(" - "));
    }

    #[test]
    fn coordinates_are_rounded() {
        let coordinates =
            Coordinates::from_iter([("A", Point::new(0.4, -0.2)), ("B", Point::new(1.6, 0.0))]);
        let view = GridView::new(&coordinates, None, &"A", &"B").unwrap();
        assert_eq!(view.columns(), 7);
        assert_eq!(view.cell(0, 0), Some(Cell::Start));
        assert_eq!(view.cell(0, 4), Some(Cell::Goal));
    }

    #[test]
    fn off_grid() {
        let coordinates =
            Coordinates::from_iter([("A", Point::new(0.0, 0.0)), ("B", Point::new(-3.0, 1.0))]);
        assert_eq!(
            GridView::new(&coordinates, None, &"A", &"A"),
            Err(RenderError::OffGrid {
                node: "B".to_string(),
                p: Point::new(-3.0, 1.0)
            })
        );

        let coordinates = Coordinates::from_iter([("A", Point::new(f64::NAN, 0.0))]);
        assert!(matches!(
            GridView::new(&coordinates, None, &"A", &"A"),
            Err(RenderError::OffGrid { .. })
        ));
    }

    #[test]
    fn far_away_nodes_are_rejected() {
        let coordinates =
            Coordinates::from_iter([("A", Point::new(0.0, 0.0)), ("D", Point::new(1e300, 0.0))]);
        assert_eq!(
            GridView::new(&coordinates, Some(["A", "D"].as_slice()), &"A", &"D"),
            Err(RenderError::TooLarge {
                node: "D".to_string(),
                p: Point::new(1e300, 0.0)
            })
        );

        let coordinates =
            Coordinates::from_iter([("A", Point::new(0.0, 0.0)), ("D", Point::new(3.0, 1e7))]);
        assert!(matches!(
            GridView::new(&coordinates, None, &"A", &"D"),
            Err(RenderError::TooLarge { .. })
        ));
    }

    #[test]
    fn largest_grid() {
        let coordinates = Coordinates::from_iter([
            ("A", Point::new(0.0, 0.0)),
            ("D", Point::new(MAX_GRID_EXTENT, 2.0)),
        ]);
        let view = GridView::new(&coordinates, None, &"A", &"D").unwrap();
        assert_eq!((view.rows(), view.columns()), (7, 2051));
        assert_eq!(view.cell(4, 2048), Some(Cell::Goal));
    }

    #[test]
    fn grid_len_overflow() {
        assert_eq!(grid_len(0), Some(3));
        assert_eq!(grid_len(5), Some(13));
        assert_eq!(grid_len(usize::MAX), None);
        assert_eq!(grid_len(usize::MAX / 2), None);
    }

    #[test]
    fn unknown_ends() {
        let (_, coordinates) = sample();
        assert_eq!(
            GridView::new(&coordinates, None, &"A", &"Z"),
            Err(RenderError::MissingCoordinate("Z".to_string()))
        );
    }

    #[test]
    fn empty() {
        let view = GridView::new(&Coordinates::<&str>::new(), None, &"A", &"B").unwrap();
        assert_eq!(view.to_string(), "");
        assert_eq!((view.rows(), view.columns()), (0, 0));
    }
}
