#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use Direction::*;

    use crate::console_interface::{parse_level, render_board_to_string};
    use crate::core::*;
    use crate::test::test_util::{assert_board_set_matches, count_cells, BoardTestState};

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = BoardTestState::new(r#"
#@ #
"#);
        let change = game.assert_move(Right);

        game.assert_matches(r#"
# @#
"#);
        assert_eq!(change, GameChangeType::PlayerMove);
        assert_eq!(game.pushes, 0);
    }

    #[test]
    fn when_push_pushes() {
        let mut game = BoardTestState::new(r#"
#@$ #
"#);
        let change = game.assert_move(Right);

        game.assert_matches(r#"
# @$#
"#);
        assert_eq!(change, GameChangeType::PlayerAndBoxMove);
        assert_eq!(game.pushes, 1);
    }

    #[test]
    fn when_box_pushed_onto_target_becomes_box_on_target() {
        let mut game = BoardTestState::new(r#"
#@$.#
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
# @*#
"#);
        assert!(game.board.is_goal());
    }

    #[test]
    fn when_box_pushed_off_target_leaves_player_on_target() {
        let mut game = BoardTestState::new(r#"
#@* #
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
# +$#
"#);
    }

    #[test]
    fn when_player_leaves_target_target_remains() {
        let mut game = BoardTestState::new(r#"
#+ #
"#);
        game.assert_move(Right);

        game.assert_matches(r#"
#.@#
"#);
    }

    #[test]
    fn when_walking_into_wall_nothing_changes() {
        let mut game = BoardTestState::new(r#"
#@#
"#);
        let update = game.try_move(Right);

        assert!(matches!(update, GameUpdate::Error(_)));
        game.assert_matches(r#"
#@#
"#);
    }

    #[test]
    fn when_walking_off_the_grid_nothing_changes() {
        let mut game = BoardTestState::new(r#"
@ 
"#);
        assert!(matches!(game.try_move(Left), GameUpdate::Error(_)));
        assert!(matches!(game.try_move(Up), GameUpdate::Error(_)));
        assert!(matches!(game.try_move(Down), GameUpdate::Error(_)));
        game.assert_matches("@ ");
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = BoardTestState::new(r#"
#@$$ #
"#);
        let update = game.try_move(Right);

        assert!(matches!(update, GameUpdate::Error(_)));
        game.assert_matches(r#"
#@$$ #
"#);
    }

    #[test]
    fn when_block_pushed_into_wall_or_edge_nothing_changes() {
        let mut game = BoardTestState::new(r#"
#@$#
"#);
        assert!(matches!(game.try_move(Right), GameUpdate::Error(_)));

        let mut edge = BoardTestState::new("@$");
        assert!(matches!(edge.try_move(Right), GameUpdate::Error(_)));
        edge.assert_matches("@$");
    }

    #[test]
    fn when_block_moves_board_is_unequal() {
        let mut game = BoardTestState::new(r#"
#@$ #
"#);
        let original = game.board.clone();
        game.assert_move(Right);

        assert_ne!(original, game.board);
    }

    #[test]
    fn when_player_moves_back_board_is_equal() {
        let mut game = BoardTestState::new(r#"
#@ $#
"#);
        let original = game.board.clone();
        game.assert_moves(&[Right, Left]);

        game.assert_matches(r#"
#@ $#
"#);
        assert_eq!(original, game.board);

        let seen: HashSet<Board> = [original, game.board.clone()].into_iter().collect();
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn when_blocks_swap_board_remains_equal() {
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = BoardTestState::new(level);
        let original = game.board.clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(level);
        assert_eq!(original, game.board);
        assert_eq!(game.board.boxes(), original.boxes());
    }

    #[test]
    fn successors_lists_every_legal_action() {
        let level = r#"
######
#    #
#  $ #
# $@ #
#    #
######
"#;
        let board = parse_level(level).unwrap();
        let next = successors(&board);

        let directions: Vec<Direction> = next.iter().map(|s| s.direction).collect();
        assert_eq!(directions, vec![Up, Down, Left, Right]);
        let pushes: Vec<u32> = next.iter().map(|s| s.change.cost()).collect();
        assert_eq!(pushes, vec![1, 0, 1, 0]);

        let boards: Vec<Board> = next.iter().map(|s| s.board.clone()).collect();
        assert_board_set_matches(&boards, vec![r#"
######
#  $ #
#  @ #
# $  #
#    #
######
"#, r#"
######
#    #
#  $ #
# $  #
#  @ #
######
"#, r#"
######
#    #
#  $ #
#$@  #
#    #
######
"#, r#"
######
#    #
#  $ #
# $ @#
#    #
######
"#,
        ]);
    }

    #[test]
    fn successors_skips_blocked_directions() {
        let board = parse_level(r#"
####
#@$#
# ##
####
"#).unwrap();
        let next = successors(&board);

        assert_eq!(next.len(), 1);
        assert_eq!(next[0].direction, Down);
        assert_eq!(next[0].change, GameChangeType::PlayerMove);
    }

    #[test]
    fn random_walk_preserves_board_invariants() {
        let level = r#"
#########
#   .   #
# $ # $ #
#  .@.  #
# $ # * #
#       #
#########
"#;
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = BoardTestState::new(level);
        let box_count = game.board.boxes().len();
        let target_count = count_cells(&game.board, |c| c.is_target());

        for _ in 0..2000 {
            let direction = Direction::ALL[rng.random_range(0..4)];
            let before = game.board.clone();
            let pushes_before = game.pushes;

            let GameUpdate::NextState(_, change) = game.try_move(direction) else {
                assert_eq!(before, game.board);
                continue;
            };

            let boxes_moved = before.boxes() != game.board.boxes();
            assert_eq!(boxes_moved, change == GameChangeType::PlayerAndBoxMove);
            assert_eq!(game.pushes - pushes_before, change.cost());
            assert_eq!(count_cells(&game.board, |c| c.is_player()), 1);
            assert_eq!(game.board.boxes().len(), box_count);
            assert_eq!(count_cells(&game.board, |c| c.is_target()), target_count);

            // derived fields agree with a fresh scan of the cells
            let rescanned = parse_level(&render_board_to_string(&game.board)).unwrap();
            assert_eq!(rescanned, game.board);
            assert_eq!(rescanned.player(), game.board.player());
            assert_eq!(rescanned.boxes(), game.board.boxes());
        }
    }
}
