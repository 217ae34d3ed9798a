#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::console_interface::parse_level;
    use crate::core::*;
    use crate::error::InvalidBoardError;
    use crate::test::test_util::{board, count_cells};

    #[test]
    fn player_and_boxes_are_derived_from_cells() {
        let board = board(r#"
#####
#@$.#
# * #
#####
"#);
        assert_eq!(board.player(), Vec2 { i: 1, j: 1 });
        assert_eq!(board.boxes(), &[Vec2 { i: 1, j: 2 }, Vec2 { i: 2, j: 2 }]);
        assert_eq!(board.boxes_on_targets(), 1);
        assert_eq!(board.height(), 4);
        assert_eq!(board.width(), 5);
    }

    #[test]
    fn short_rows_are_padded_with_floor() {
        let board = board(r#"
#####
#@
#####
"#);
        assert_eq!(board.width(), 5);
        assert_eq!(board.get(&Vec2 { i: 1, j: 4 }), Some(Cell::Floor));
        assert_eq!(board.get(&Vec2 { i: 1, j: 5 }), None);
    }

    #[test]
    fn empty_level_is_rejected() {
        assert_eq!(parse_level("").unwrap_err(), InvalidBoardError::Empty);
        assert_eq!(parse_level("\n\n").unwrap_err(), InvalidBoardError::Empty);
        assert_eq!(Board::new(vec![]).unwrap_err(), InvalidBoardError::Empty);
        assert_eq!(Board::new(vec![vec![], vec![]]).unwrap_err(), InvalidBoardError::Empty);
    }

    #[test]
    fn level_without_player_is_rejected() {
        let result = parse_level(r#"
#####
# $.#
#####
"#);
        assert_eq!(result.unwrap_err(), InvalidBoardError::MissingPlayer);
    }

    #[test]
    fn level_with_two_players_is_rejected() {
        let result = parse_level(r#"
#####
#@$+#
#####
"#);
        assert_eq!(
            result.unwrap_err(),
            InvalidBoardError::MultiplePlayers {
                first: Vec2 { i: 1, j: 1 },
                second: Vec2 { i: 1, j: 3 },
            }
        );
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let result = parse_level(r#"
#####
#@x.#
#####
"#);
        assert_eq!(
            result.unwrap_err(),
            InvalidBoardError::UnknownSymbol { row: 1, column: 2, symbol: 'x' }
        );
    }

    #[test]
    fn constructed_boards_have_exactly_one_player() {
        for level in ["@", "+", "#@$.#", "-@-\n-$-\n-.-"] {
            let board = board(level);
            assert_eq!(count_cells(&board, |c| c.is_player()), 1, "{level}");
        }
    }

    #[test]
    fn is_goal_requires_every_box_on_a_target() {
        assert!(board("#@*#").is_goal());
        assert!(board("#*@*#").is_goal());
        assert!(!board("#@$.#").is_goal());
        assert!(!board("#*@$.#").is_goal());
    }

    #[test]
    fn board_without_boxes_is_never_a_goal() {
        assert!(!board("#@ #").is_goal());
        assert!(!board("#+ #").is_goal());
        assert!(!board("#@.#").is_goal());
    }

    #[test]
    fn targets_include_covered_targets() {
        let board = board(r#"
######
#+$*.#
######
"#);
        let targets = Targets::from_board(&board);

        assert_eq!(
            targets.as_slice(),
            &[Vec2 { i: 1, j: 1 }, Vec2 { i: 1, j: 3 }, Vec2 { i: 1, j: 4 }]
        );
        assert!(targets.contains(&Vec2 { i: 1, j: 3 }));
        assert!(!targets.contains(&Vec2 { i: 1, j: 2 }));
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn equal_cells_make_equal_boards() {
        let a = board("#@ $ #");
        let b = board("#@ $ #");
        let c = board("# @$ #");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Board> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn walls_and_outside_are_blocking() {
        let board = board("#@$ #");
        assert!(board.is_wall(&Vec2 { i: 0, j: 0 }));
        assert!(board.is_wall(&Vec2 { i: -1, j: 1 }));
        assert!(!board.is_wall(&Vec2 { i: 0, j: 2 }));
        assert!(board.is_blocked(&Vec2 { i: 0, j: 2 }));
        assert!(!board.is_blocked(&Vec2 { i: 0, j: 3 }));
        assert!(board.is_blocked(&Vec2 { i: 0, j: 5 }));
    }

    #[test]
    fn renders_back_to_the_same_text() {
        let level = "#####\n#@$.#\n# *+#\n#####\n";
        let result = parse_level(level);
        assert!(matches!(result, Err(InvalidBoardError::MultiplePlayers { .. })));

        let level = "#####\n#@$.#\n# * #\n#####\n";
        assert_eq!(board(level).to_string(), level);
    }
}
