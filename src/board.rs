//! Go strings and the board grid.
//!
//! Every occupied point maps to the string it belongs to. Strings track
//! their own liberties, so placing a stone only touches its neighbours
//! instead of flood-filling whole groups.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::COLS;
use crate::types::{Player, Point};

/// Slot of a string inside the board's string table.
type StringId = usize;

/// A connected set of same-coloured stones and their shared liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    color: Player,
    stones: BTreeSet<Point>,
    liberties: BTreeSet<Point>,
}

impl GoString {
    /// Build a string. Connectivity of `stones` is the caller's job.
    ///
    /// # Panics
    /// Panics if `stones` is empty.
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        let stones: BTreeSet<Point> = stones.into_iter().collect();
        assert!(!stones.is_empty(), "a go string needs at least one stone");
        let liberties = liberties
            .into_iter()
            .filter(|p| !stones.contains(p))
            .collect();
        Self {
            color,
            stones,
            liberties,
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &BTreeSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &BTreeSet<Point> {
        &self.liberties
    }

    #[inline]
    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(&point);
    }

    pub fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }

    /// Join two strings connected by a newly placed stone.
    ///
    /// Neither operand changes. The result's liberties are
    /// `(L1 ∪ L2) − (S1 ∪ S2)`.
    ///
    /// # Panics
    /// Panics if the strings have different colours.
    pub fn merged_with(&self, other: &GoString) -> GoString {
        assert_eq!(
            self.color, other.color,
            "cannot merge strings of different colours"
        );
        let stones: BTreeSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        GoString {
            color: self.color,
            stones,
            liberties,
        }
    }
}

/// A rectangular Go board.
///
/// Strings live in a slot table; the grid stores a slot per point. Cloning
/// the board copies the table, so a clone never aliases the original.
#[derive(Clone, Debug)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    grid: Vec<Option<StringId>>,
    strings: Vec<Option<GoString>>,
    free: Vec<StringId>,
}

impl Board {
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        assert!(
            num_rows > 0 && num_cols > 0,
            "board dimensions must be positive (got {num_rows}x{num_cols})"
        );
        Self {
            num_rows,
            num_cols,
            grid: vec![None; num_rows * num_cols],
            strings: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn is_on_grid(&self, point: Point) -> bool {
        1 <= point.row
            && point.row as usize <= self.num_rows
            && 1 <= point.col
            && point.col as usize <= self.num_cols
    }

    /// All on-grid points, row by row from row 1.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (rows, cols) = (self.num_rows as i32, self.num_cols as i32);
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| Point::new(row, col)))
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        (point.row as usize - 1) * self.num_cols + (point.col as usize - 1)
    }

    #[inline]
    fn string_id(&self, point: Point) -> Option<StringId> {
        if self.is_on_grid(point) {
            self.grid[self.idx(point)]
        } else {
            None
        }
    }

    fn string(&self, id: StringId) -> &GoString {
        self.strings[id].as_ref().expect("grid points at a live string")
    }

    fn string_mut(&mut self, id: StringId) -> &mut GoString {
        self.strings[id].as_mut().expect("grid points at a live string")
    }

    fn insert_string(&mut self, string: GoString) -> StringId {
        match self.free.pop() {
            Some(id) => {
                self.strings[id] = Some(string);
                id
            }
            None => {
                self.strings.push(Some(string));
                self.strings.len() - 1
            }
        }
    }

    fn take_string(&mut self, id: StringId) -> GoString {
        let string = self.strings[id].take().expect("string slot already empty");
        self.free.push(id);
        string
    }

    /// Colour of the stone at `point`, or `None` if empty or off the board.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.get_go_string(point).map(GoString::color)
    }

    /// The string occupying `point`, if any.
    pub fn get_go_string(&self, point: Point) -> Option<&GoString> {
        self.string_id(point).map(|id| self.string(id))
    }

    /// Place a stone, merging friendly strings and capturing enemy strings
    /// left without liberties.
    ///
    /// Suicide is not checked here; a self-capturing stone stays on the board
    /// with zero liberties.
    ///
    /// # Panics
    /// Panics if `point` is off the board or already occupied.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(
            self.is_on_grid(point),
            "point ({}, {}) is off the board",
            point.row,
            point.col
        );
        assert!(
            self.grid[self.idx(point)].is_none(),
            "point ({}, {}) is already occupied",
            point.row,
            point.col
        );

        let mut adjacent_same_color: Vec<StringId> = Vec::new();
        let mut adjacent_opposite_color: Vec<StringId> = Vec::new();
        let mut liberties = Vec::new();

        for neighbour in point.neighbours() {
            if !self.is_on_grid(neighbour) {
                continue;
            }
            match self.grid[self.idx(neighbour)] {
                None => liberties.push(neighbour),
                Some(id) if self.string(id).color == player => {
                    if !adjacent_same_color.contains(&id) {
                        adjacent_same_color.push(id);
                    }
                }
                Some(id) => {
                    if !adjacent_opposite_color.contains(&id) {
                        adjacent_opposite_color.push(id);
                    }
                }
            }
        }

        let mut new_string = GoString::new(player, [point], liberties);
        for id in adjacent_same_color {
            let same_color_string = self.take_string(id);
            new_string = new_string.merged_with(&same_color_string);
        }
        let stones: Vec<Point> = new_string.stones.iter().copied().collect();
        let new_id = self.insert_string(new_string);
        for stone in stones {
            let i = self.idx(stone);
            self.grid[i] = Some(new_id);
        }

        for &id in &adjacent_opposite_color {
            self.string_mut(id).remove_liberty(point);
        }
        for id in adjacent_opposite_color {
            if self.string(id).num_liberties() == 0 {
                self.remove_string(id);
            }
        }
    }

    /// Clear a captured string. Each freed point becomes a liberty of every
    /// other string next to it.
    fn remove_string(&mut self, id: StringId) {
        let string = self.take_string(id);
        for &stone in &string.stones {
            for neighbour in stone.neighbours() {
                match self.string_id(neighbour) {
                    Some(other) if other != id => self.string_mut(other).add_liberty(stone),
                    _ => {}
                }
            }
            let i = self.idx(stone);
            self.grid[i] = None;
        }
    }
}

/// Two boards are equal when every point holds an equal string (same colour,
/// stones and liberties), regardless of internal slot numbering.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self
                .points()
                .all(|p| self.get_go_string(p) == other.get_go_string(p))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.num_rows as i32).rev() {
            let bump = if row <= 9 { " " } else { "" };
            write!(f, "{bump}{row} ")?;
            for col in 1..=self.num_cols as i32 {
                let ch = match self.get(Point::new(row, col)) {
                    Some(Player::Black) => 'x',
                    Some(Player::White) => 'o',
                    None => '.',
                };
                write!(f, " {ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for c in COLS.chars().take(self.num_cols) {
            write!(f, " {c} ")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_lone_stone_liberties() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(3, 3));
        let s = board.get_go_string(p(3, 3)).unwrap();
        assert_eq!(s.color(), Player::Black);
        assert_eq!(s.stones().len(), 1);
        assert_eq!(s.num_liberties(), 4);

        board.place_stone(Player::White, p(1, 1));
        assert_eq!(board.get_go_string(p(1, 1)).unwrap().num_liberties(), 2);

        board.place_stone(Player::White, p(1, 3));
        assert_eq!(board.get_go_string(p(1, 3)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_merge_law() {
        let a = GoString::new(Player::Black, [p(2, 2)], [p(1, 2), p(2, 1), p(2, 3), p(3, 2)]);
        let b = GoString::new(Player::Black, [p(2, 3)], [p(1, 3), p(2, 2), p(2, 4), p(3, 3)]);
        let m = a.merged_with(&b);
        let expected_stones: BTreeSet<Point> = [p(2, 2), p(2, 3)].into_iter().collect();
        assert_eq!(m.stones(), &expected_stones);
        let expected_libs: BTreeSet<Point> = [p(1, 2), p(2, 1), p(3, 2), p(1, 3), p(2, 4), p(3, 3)]
            .into_iter()
            .collect();
        assert_eq!(m.liberties(), &expected_libs);
        // Operands untouched
        assert_eq!(a.stones().len(), 1);
        assert_eq!(b.num_liberties(), 4);
        assert_eq!(m, b.merged_with(&a));
    }

    #[test]
    #[should_panic(expected = "different colours")]
    fn test_merge_different_colours_panics() {
        let a = GoString::new(Player::Black, [p(1, 1)], []);
        let b = GoString::new(Player::White, [p(1, 2)], []);
        let _ = a.merged_with(&b);
    }

    #[test]
    fn test_placement_merges_strings() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(3, 2));
        board.place_stone(Player::Black, p(3, 4));
        board.place_stone(Player::Black, p(3, 3));
        let s = board.get_go_string(p(3, 2)).unwrap();
        assert_eq!(s.stones().len(), 3);
        assert_eq!(s.num_liberties(), 8);
        assert_eq!(board.get_go_string(p(3, 4)), Some(s));
    }

    #[test]
    fn test_enemy_loses_liberty() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(3, 3));
        board.place_stone(Player::White, p(3, 4));
        assert_eq!(board.get_go_string(p(3, 3)).unwrap().num_liberties(), 3);
        assert_eq!(board.get_go_string(p(3, 4)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_capture_restores_liberties() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::White, p(1, 1));
        board.place_stone(Player::Black, p(1, 2));
        assert_eq!(board.get_go_string(p(1, 2)).unwrap().num_liberties(), 2);
        board.place_stone(Player::Black, p(2, 1));
        assert_eq!(board.get(p(1, 1)), None);
        assert_eq!(board.get_go_string(p(1, 2)).unwrap().num_liberties(), 3);
        assert_eq!(board.get_go_string(p(2, 1)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_capture_two_strings_at_once() {
        // White stones at (1,1) and (1,3), each nearly surrounded; black
        // fills (1,2) taking both.
        let mut board = Board::new(5, 5);
        board.place_stone(Player::White, p(1, 1));
        board.place_stone(Player::White, p(1, 3));
        board.place_stone(Player::Black, p(2, 1));
        board.place_stone(Player::Black, p(2, 3));
        board.place_stone(Player::Black, p(1, 4));
        board.place_stone(Player::Black, p(1, 2));
        assert_eq!(board.get(p(1, 1)), None);
        assert_eq!(board.get(p(1, 3)), None);
        assert_eq!(board.get_go_string(p(1, 2)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_suicide_stone_stays_with_no_liberties() {
        let mut board = Board::new(3, 3);
        board.place_stone(Player::Black, p(1, 2));
        board.place_stone(Player::Black, p(2, 1));
        board.place_stone(Player::White, p(1, 1));
        assert_eq!(board.get_go_string(p(1, 1)).unwrap().num_liberties(), 0);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_panics() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(3, 3));
        board.place_stone(Player::White, p(3, 3));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_place_off_grid_panics() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(6, 1));
    }

    #[test]
    fn test_equality_ignores_slot_numbering() {
        let mut a = Board::new(5, 5);
        a.place_stone(Player::Black, p(1, 1));
        a.place_stone(Player::White, p(4, 4));
        let mut b = Board::new(5, 5);
        b.place_stone(Player::White, p(4, 4));
        b.place_stone(Player::Black, p(1, 1));
        assert_eq!(a, b);
        b.place_stone(Player::Black, p(5, 5));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Board::new(5, 5);
        a.place_stone(Player::Black, p(2, 2));
        let mut b = a.clone();
        b.place_stone(Player::White, p(2, 3));
        assert_eq!(a.get_go_string(p(2, 2)).unwrap().num_liberties(), 4);
        assert_eq!(b.get_go_string(p(2, 2)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 3);
        board.place_stone(Player::Black, p(1, 1));
        board.place_stone(Player::White, p(3, 3));
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 3  .  .  o ");
        assert_eq!(lines[2], " 1  x  .  . ");
        assert_eq!(lines[3], "    A  B  C ");
    }
}
