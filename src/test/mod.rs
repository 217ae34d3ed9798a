
mod test_board;
mod test_moves;
