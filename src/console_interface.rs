use crate::core::{Board, Cell};
use crate::error::InvalidBoardError;
use crate::search::SolveReport;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn cell_from_symbol(ch: char) -> Option<Cell> {
    Some(match ch {
        '#' => Cell::Wall,
        ' ' | '-' | '_' => Cell::Floor,
        '.' => Cell::Target,
        '$' => Cell::Box,
        '*' => Cell::BoxOnTarget,
        '@' => Cell::Player,
        '+' => Cell::PlayerOnTarget,
        _ => return None,
    })
}

pub fn symbol_from_cell(cell: Cell) -> char {
    match cell {
        Cell::Wall => '#',
        Cell::Floor => ' ',
        Cell::Target => '.',
        Cell::Box => '$',
        Cell::BoxOnTarget => '*',
        Cell::Player => '@',
        Cell::PlayerOnTarget => '+',
    }
}

/// Parses a level in the usual Sokoban text format. Blank lines are skipped, so raw string
/// literals may start and end with a newline.
pub fn parse_level(s: &str) -> Result<Board, InvalidBoardError> {
    let mut grid: Vec<Vec<Cell>> = Vec::new();

    for line in s.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(column, symbol)| {
                cell_from_symbol(symbol).ok_or(InvalidBoardError::UnknownSymbol {
                    row: grid.len(),
                    column,
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(row);
    }

    if grid.is_empty() {
        return Err(InvalidBoardError::Empty);
    }
    Board::new(grid)
}

pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for (pos, cell) in board.cells() {
        if pos.j == 0 && pos.i > 0 {
            result.push('\n');
        }
        result.push(symbol_from_cell(cell));
    }
    result.push('\n');
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_board_to_string(self))
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub struct ReportRenderState<'a> {
    pub title: &'a str,
    pub start: &'a Board,
    pub final_board: Option<&'a Board>,
    pub report: &'a SolveReport,
}

pub fn render_report(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &ReportRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(f.area());
        let boards = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let start_paragraph = Paragraph::new(render_board_to_string(state.start))
            .block(Block::default().borders(Borders::ALL).title(state.title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(start_paragraph, boards[0]);

        let final_text = match state.final_board {
            Some(board) => render_board_to_string(board),
            None => "No solution found.".to_string(),
        };
        let final_paragraph = Paragraph::new(final_text)
            .block(Block::default().borders(Borders::ALL).title("Final board"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(final_paragraph, boards[1]);

        let report = state.report;
        let summary = format!(
            "Solved: {} ({:?}) | Pushes: {} | Nodes explored: {} | Time: {} ms\nMoves: [{}]\nPress any key to continue.",
            report.solved,
            report.termination,
            report.pushes,
            report.nodes_explored,
            report.elapsed_ms,
            report.moves,
        );
        let summary_paragraph = Paragraph::new(summary)
            .block(Block::default().borders(Borders::ALL).title("Result"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(summary_paragraph, rows[1]);
    })?;
    Ok(())
}

pub fn wait_for_key() -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(());
        }
    }
}
