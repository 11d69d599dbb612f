//! Move-pruning heuristics shared by the agents.

use crate::board::Board;
use crate::types::{Player, Point};

/// Check if `point` is an eye of `color`.
///
/// An eye is an empty point whose on-board neighbours are all `color`, and
/// whose diagonal corners are controlled:
/// - At an edge or corner: every on-board corner must be `color`
/// - In the centre: at least 3 of the 4 corners must be `color`
///
/// This is a heuristic; some false eyes pass the test.
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    for neighbour in point.neighbours() {
        if board.is_on_grid(neighbour) && board.get(neighbour) != Some(color) {
            return false;
        }
    }

    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for corner in point.corners() {
        if board.is_on_grid(corner) {
            if board.get(corner) == Some(color) {
                friendly_corners += 1;
            }
        } else {
            off_board_corners += 1;
        }
    }

    if off_board_corners > 0 {
        off_board_corners + friendly_corners == 4
    } else {
        friendly_corners >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, black: &[(i32, i32)], white: &[(i32, i32)]) -> Board {
        let mut board = Board::new(size, size);
        for &(r, c) in black {
            board.place_stone(Player::Black, Point::new(r, c));
        }
        for &(r, c) in white {
            board.place_stone(Player::White, Point::new(r, c));
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_eyes() {
        let board = Board::new(5, 5);
        assert!(!is_point_an_eye(&board, Point::new(1, 1), Player::Black));
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Player::Black));
    }

    #[test]
    fn test_centre_eye() {
        let ring = [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)];
        let board = board_with(5, &ring, &[]);
        assert!(is_point_an_eye(&board, Point::new(3, 3), Player::Black));
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Player::White));
    }

    #[test]
    fn test_centre_eye_tolerates_one_bad_corner() {
        let board = board_with(
            5,
            &[(2, 3), (3, 2), (3, 4), (4, 3), (2, 2), (2, 4), (4, 2)],
            &[(4, 4)],
        );
        assert!(is_point_an_eye(&board, Point::new(3, 3), Player::Black));
    }

    #[test]
    fn test_centre_two_bad_corners_not_eye() {
        let board = board_with(5, &[(2, 3), (3, 2), (3, 4), (4, 3), (2, 2), (2, 4)], &[(4, 4)]);
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Player::Black));
    }

    #[test]
    fn test_opposing_neighbour_breaks_eye() {
        let board = board_with(
            5,
            &[(2, 2), (2, 3), (2, 4), (3, 2), (4, 2), (4, 3), (4, 4)],
            &[(3, 4)],
        );
        assert!(!is_point_an_eye(&board, Point::new(3, 3), Player::Black));
    }

    #[test]
    fn test_corner_eye_needs_its_corner() {
        let board = board_with(5, &[(1, 2), (2, 1)], &[]);
        assert!(!is_point_an_eye(&board, Point::new(1, 1), Player::Black));
        let board = board_with(5, &[(1, 2), (2, 1), (2, 2)], &[]);
        assert!(is_point_an_eye(&board, Point::new(1, 1), Player::Black));
    }

    #[test]
    fn test_edge_eye_needs_all_corners() {
        let board = board_with(5, &[(1, 2), (1, 4), (2, 3), (2, 2)], &[]);
        assert!(!is_point_an_eye(&board, Point::new(1, 3), Player::Black));
        let board = board_with(5, &[(1, 2), (1, 4), (2, 3), (2, 2), (2, 4)], &[]);
        assert!(is_point_an_eye(&board, Point::new(1, 3), Player::Black));
    }

    #[test]
    fn test_occupied_point_not_eye() {
        let board = board_with(5, &[(1, 1)], &[]);
        assert!(!is_point_an_eye(&board, Point::new(1, 1), Player::Black));
    }
}
