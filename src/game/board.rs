use crate::error::BoardError;

pub const WALL: char = '#';
pub const FLOOR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
}

/// A cell coordinate in the board's (row, column) system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// An agent spawn extracted from a digit marker in the board art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub index: usize,
    pub marker: char,
    pub position: Position,
}

/// Static board geometry: walls and floor. Agents live outside the board and
/// only consult it for passability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

/// A parsed board together with its agent spawns, sorted by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSetup {
    pub board: Board,
    pub spawns: Vec<Spawn>,
}

impl Board {
    /// Parse ASCII art into a board and its agent spawns.
    ///
    /// `#` is a wall, ` ` is floor, and each digit marks an agent spawn whose
    /// index is the digit's value. Markers must be unique and cover 0..n so
    /// that every action-batch slot maps to exactly one agent.
    pub fn parse<S: AsRef<str>>(art: &[S]) -> Result<BoardSetup, BoardError> {
        if art.is_empty() {
            return Err(BoardError::EmptyArt);
        }

        let width = art[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(art.len());
        let mut spawns: Vec<Spawn> = Vec::new();

        for (row, line) in art.iter().enumerate() {
            let line = line.as_ref();
            let got = line.chars().count();
            if got != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    got,
                });
            }

            let mut cell_row = Vec::with_capacity(width);
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    WALL => cell_row.push(Cell::Wall),
                    FLOOR => cell_row.push(Cell::Floor),
                    '0'..='9' => {
                        let index = ch as usize - '0' as usize;
                        if spawns.iter().any(|s| s.index == index) {
                            return Err(BoardError::DuplicateMarker { ch });
                        }
                        spawns.push(Spawn {
                            index,
                            marker: ch,
                            position: Position { row, col },
                        });
                        // Agents stand on floor; the marker is not terrain
                        cell_row.push(Cell::Floor);
                    }
                    other => {
                        return Err(BoardError::UnknownCharacter {
                            ch: other,
                            row,
                            col,
                        })
                    }
                }
            }
            cells.push(cell_row);
        }

        if spawns.is_empty() {
            return Err(BoardError::NoAgents);
        }

        spawns.sort_by_key(|s| s.index);
        if spawns.iter().enumerate().any(|(i, s)| s.index != i) {
            return Err(BoardError::NonContiguousMarkers {
                found: spawns.iter().map(|s| s.index).collect(),
            });
        }

        Ok(BoardSetup {
            board: Board { cells },
            spawns,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether (row, col) is impassable. Out-of-range coordinates count as
    /// walls, so movement checks never index past the edge.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        match self.cells.get(row).and_then(|r| r.get(col)) {
            Some(cell) => *cell == Cell::Wall,
            None => true,
        }
    }

    /// Base render: one row of characters per board row, no agents.
    pub fn to_char_rows(&self) -> Vec<Vec<char>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => WALL,
                        Cell::Floor => FLOOR,
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor_art() -> Vec<&'static str> {
        vec!["#   0                #", "#             1      #"]
    }

    #[test]
    fn test_parse_corridor() {
        let setup = Board::parse(&corridor_art()).unwrap();
        assert_eq!(setup.board.rows(), 2);
        assert_eq!(setup.board.cols(), 22);
        assert_eq!(setup.spawns.len(), 2);

        assert_eq!(setup.spawns[0].index, 0);
        assert_eq!(setup.spawns[0].marker, '0');
        assert_eq!(setup.spawns[0].position, Position { row: 0, col: 4 });

        assert_eq!(setup.spawns[1].index, 1);
        assert_eq!(setup.spawns[1].position, Position { row: 1, col: 14 });
    }

    #[test]
    fn test_walls_and_floor() {
        let setup = Board::parse(&corridor_art()).unwrap();
        let board = &setup.board;

        assert!(board.is_wall(0, 0));
        assert!(board.is_wall(0, 21));
        assert!(!board.is_wall(0, 1));
        // Spawn cells are floor underneath the marker
        assert_eq!(board.get(0, 4), Cell::Floor);
    }

    #[test]
    fn test_out_of_range_is_wall() {
        let setup = Board::parse(&corridor_art()).unwrap();
        assert!(setup.board.is_wall(5, 0));
        assert!(setup.board.is_wall(0, 99));
    }

    #[test]
    fn test_empty_art() {
        let art: Vec<&str> = Vec::new();
        assert_eq!(Board::parse(&art), Err(BoardError::EmptyArt));
    }

    #[test]
    fn test_ragged_rows() {
        let art = vec!["####", "##"];
        assert_eq!(
            Board::parse(&art),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 4,
                got: 2
            })
        );
    }

    #[test]
    fn test_unknown_character() {
        let art = vec!["#0x#"];
        assert_eq!(
            Board::parse(&art),
            Err(BoardError::UnknownCharacter {
                ch: 'x',
                row: 0,
                col: 2
            })
        );
    }

    #[test]
    fn test_duplicate_marker() {
        let art = vec!["#00#"];
        assert_eq!(
            Board::parse(&art),
            Err(BoardError::DuplicateMarker { ch: '0' })
        );
    }

    #[test]
    fn test_no_agents() {
        let art = vec!["#  #"];
        assert_eq!(Board::parse(&art), Err(BoardError::NoAgents));
    }

    #[test]
    fn test_non_contiguous_markers() {
        let art = vec!["#0 2#"];
        assert_eq!(
            Board::parse(&art),
            Err(BoardError::NonContiguousMarkers { found: vec![0, 2] })
        );
    }

    #[test]
    fn test_to_char_rows_has_no_markers() {
        let setup = Board::parse(&corridor_art()).unwrap();
        let rows = setup.board.to_char_rows();
        assert_eq!(rows[0].iter().collect::<String>(), "#                    #");
        assert_eq!(rows[1].iter().collect::<String>(), "#                    #");
    }
}
