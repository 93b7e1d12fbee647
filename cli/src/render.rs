use std::fmt::Write as _;

use swooper_core::{GameStatus, LossCause, Snapshot};

/// `mm:ss` as shown in the corner of the board.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "Game in progress",
        GameStatus::Won => "You won!",
        GameStatus::Lost(LossCause::Mine) => "You stepped on a mine!",
        GameStatus::Lost(LossCause::Captured) => "The hunter caught you!",
    }
}

/// Text rendering of the board. Mines are only shown once the game has ended.
///
/// `@` player, `H` hunter, `F` flag, `.` hidden, `*` mine, `~` fog, digits for counts.
pub fn board(snapshot: &Snapshot) -> String {
    let (cols, rows) = snapshot.size;
    let show_mines = snapshot.status != GameStatus::InProgress;
    let hunter = snapshot
        .hunter
        .filter(|hunter| hunter.visible)
        .map(|hunter| hunter.position);

    let mut s = String::new();
    let _ = writeln!(s, "{}", format_elapsed(snapshot.elapsed_seconds));
    for y in 0..rows {
        for x in 0..cols {
            let coords = (x, y);
            let cell = snapshot.cell_at(coords);
            let ch = if coords == snapshot.player {
                '@'
            } else if Some(coords) == hunter {
                'H'
            } else if !snapshot.is_visible(coords) {
                '~'
            } else if cell.is_flagged() {
                'F'
            } else if cell.is_mine() && (show_mines || cell.is_revealed()) {
                '*'
            } else if !cell.is_revealed() {
                '.'
            } else if cell.adjacent_mines() == 0 {
                ' '
            } else {
                char::from_digit(u32::from(cell.adjacent_mines()), 10).unwrap_or('?')
            };
            s.push(ch);
        }
        s.push('\n');
    }
    s
}
