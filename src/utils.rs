use crate::engine::{Board, Chip, Position, Suit, MAX_COL_COUNT, MAX_ROW_COUNT};

/// Parses an array of string slices into a `Board` with the given stack
/// heights.
///
/// Each string slice represents a row, starting from row 0; each character a
/// column. `'.'` (or `'0'`) leaves the column empty, a digit `'1'..='9'`
/// builds a stack of that height, filled bottom-up with a fixed placeholder
/// chip (stones rank 1). Rows shorter than the board and missing trailing
/// rows default to empty. Tests that care about chip values overwrite slots
/// with `Board::set` afterwards.
///
/// # Returns
/// * `Ok(Board)` on success.
/// * `Err(String)` if there are more rows than `MAX_ROW_COUNT`, a row is
///   longer than `MAX_COL_COUNT`, or an unrecognized character appears.
///
/// # Examples
/// ```
/// use mahjong_solitaire::engine::{column_height, Position};
/// use mahjong_solitaire::utils::board_from_heights;
///
/// let board = board_from_heights(&[
///     "2.1",
///     "...",
/// ]).unwrap();
/// assert_eq!(column_height(&board, 0, 0), 2);
/// assert_eq!(column_height(&board, 0, 2), 1);
/// assert_eq!(board.get(Position::new(1, 0, 0)), None);
///
/// assert!(board_from_heights(&["1x"]).is_err());
/// ```
pub fn board_from_heights(s: &[&str]) -> Result<Board, String> {
    if s.len() > MAX_ROW_COUNT {
        return Err(format!(
            "Invalid number of rows. Expected at most {}, found {}",
            MAX_ROW_COUNT,
            s.len()
        ));
    }

    let mut board = Board::new_empty();
    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > MAX_COL_COUNT {
            return Err(format!(
                "Row {} is too long. Expected at most {} characters, found {}",
                r,
                MAX_COL_COUNT,
                row_str.chars().count()
            ));
        }

        for (c, ch) in row_str.chars().enumerate() {
            let height = match ch {
                '.' => 0,
                '0'..='9' => ch as i32 - '0' as i32,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            };
            for level in 0..height {
                board.set(
                    Position::new(r as i32, c as i32, level),
                    Some(Chip::Suit(Suit::Stones, 1)),
                );
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::column_height;

    #[test]
    fn test_board_from_heights_valid() {
        let board = board_from_heights(&[
            "31", //
            ".2", //
        ])
        .unwrap();
        assert_eq!(column_height(&board, 0, 0), 3);
        assert_eq!(column_height(&board, 0, 1), 1);
        assert_eq!(column_height(&board, 1, 0), 0);
        assert_eq!(column_height(&board, 1, 1), 2);
        assert_eq!(board.chip_count(), 6);
    }

    #[test]
    fn test_board_from_heights_zero_and_dot_are_empty() {
        let board = board_from_heights(&["0."]).unwrap();
        assert_eq!(board.chip_count(), 0);
    }

    #[test]
    fn test_board_from_heights_empty_input() {
        let board = board_from_heights(&[]).unwrap();
        assert_eq!(board.chip_count(), 0);
    }

    #[test]
    fn test_board_from_heights_invalid_char() {
        let result = board_from_heights(&["1a"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character 'a'"));
    }

    #[test]
    fn test_board_from_heights_row_too_long() {
        let too_long = "1".repeat(MAX_COL_COUNT + 1);
        let result = board_from_heights(&[too_long.as_str()]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 is too long"));
    }

    #[test]
    fn test_board_from_heights_too_many_rows() {
        let rows = vec!["1"; MAX_ROW_COUNT + 1];
        let result = board_from_heights(&rows);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }
}
