//! Text console front-end
//!
//! A menu loop over any reader and writer, so the whole interaction can be
//! driven from a script in tests. End of input counts as quitting.

use std::io::{self, BufRead, Write};

use crate::board::{Piece, PIECES_PER_SIDE};
use crate::session::Session;

const RULE: &str = "========================================";

/// Run the console until the user quits or input ends.
///
/// `depth` is the search depth used for the "Computer move" entry.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    depth: i8,
    input: R,
    output: W,
) -> io::Result<()> {
    Console {
        session,
        depth,
        input,
        output,
    }
    .run()
}

struct Console<'a, R, W> {
    session: &'a mut Session,
    depth: i8,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Three Men's Morris!")?;

        loop {
            let keep_going = if self.session.is_active() {
                self.game_turn()?
            } else {
                self.idle_menu()?
            };
            if !keep_going {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn idle_menu(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "1. Start a new game")?;
        writeln!(self.output, "2. Quit")?;
        writeln!(self.output, "{RULE}")?;

        let Some(choice) = self.prompt("Enter your choice (1-2): ")? else {
            return Ok(false);
        };
        match choice.as_str() {
            "1" => {
                self.session.start();
                writeln!(self.output, "New game started!")?;
            }
            "2" => return Ok(false),
            _ => writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?,
        }
        Ok(true)
    }

    fn game_turn(&mut self) -> io::Result<bool> {
        self.show_board()?;

        if let Some(winner) = self.session.get_winner() {
            writeln!(self.output, "\n{} wins!", winner.name())?;
            self.session.deactivate();
            return Ok(true);
        }

        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "1. Take an action")?;
        writeln!(self.output, "2. Undo a move")?;
        writeln!(self.output, "3. Restart the game")?;
        writeln!(self.output, "4. Computer move")?;
        writeln!(self.output, "5. Quit")?;
        writeln!(self.output, "{RULE}")?;

        let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
            return Ok(false);
        };
        match choice.as_str() {
            "1" => return self.take_action(),
            "2" => {
                if self.session.undo() {
                    writeln!(self.output, "Move undone")?;
                } else {
                    writeln!(self.output, "Error: No moves to undo")?;
                }
            }
            "3" => {
                self.session.start();
                writeln!(self.output, "Game restarted!")?;
            }
            "4" => self.computer_move()?,
            "5" => return Ok(false),
            _ => writeln!(self.output, "Invalid choice. Please enter 1-5.")?,
        }
        Ok(true)
    }

    fn take_action(&mut self) -> io::Result<bool> {
        let player = self.session.game().current_player().name();

        if self.session.is_placement_phase() {
            writeln!(self.output, "\nPlacement phase - {player} to place a piece")?;
            let Some((x, y)) = self.read_coords("Enter coordinates (x y): ")? else {
                return Ok(false);
            };
            if self.session.place(x, y) {
                writeln!(self.output, "Piece placed at ({x}, {y})")?;
            } else {
                writeln!(self.output, "Error: Invalid placement. The cell may be occupied.")?;
            }
        } else {
            writeln!(self.output, "\nMovement phase - {player} to move a piece")?;
            let Some((x, y)) = self.read_coords("Source (x y): ")? else {
                return Ok(false);
            };
            let Some((nx, ny)) = self.read_coords("Destination (x y): ")? else {
                return Ok(false);
            };
            if self.session.move_piece(x, y, nx, ny) {
                writeln!(self.output, "Piece moved from ({x}, {y}) to ({nx}, {ny})")?;
            } else {
                writeln!(
                    self.output,
                    "Error: Invalid move. The source must hold your piece and the destination must be an adjacent empty cell."
                )?;
            }
        }
        Ok(true)
    }

    fn computer_move(&mut self) -> io::Result<()> {
        match self.session.get_computer_move(self.depth) {
            Ok(Some(mv)) => {
                if self.session.apply_move(mv) {
                    writeln!(self.output, "Computer plays: {mv}")?;
                } else {
                    writeln!(self.output, "Error: Computer move {mv} was rejected")?;
                }
            }
            Ok(None) => writeln!(self.output, "No legal move available")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nCurrent Board:")?;
        for line in self.session.game().board().render() {
            writeln!(self.output, "  {line}")?;
        }

        let state = self.session.get_board_state();
        writeln!(self.output, "\nCurrent Player: {}", state.current_player.name())?;
        writeln!(
            self.output,
            "White pieces: {}/{PIECES_PER_SIDE}, Black pieces: {}/{PIECES_PER_SIDE}",
            state.white_count, state.black_count
        )?;
        writeln!(
            self.output,
            "Legend: {} = White, {} = Black, {} = Empty",
            Piece::White.symbol(),
            Piece::Black.symbol(),
            Piece::Empty.symbol()
        )
    }

    /// Ask until two integers in [0, 2] are given. `None` on end of input.
    fn read_coords(&mut self, prompt: &str) -> io::Result<Option<(i32, i32)>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 2 {
                writeln!(self.output, "Error: Please enter exactly two numbers (x y)")?;
                continue;
            }
            let (Ok(x), Ok(y)) = (parts[0].parse::<i32>(), parts[1].parse::<i32>()) else {
                writeln!(self.output, "Error: Please enter valid numbers")?;
                continue;
            };
            if (0..=2).contains(&x) && (0..=2).contains(&y) {
                return Ok(Some((x, y)));
            }
            writeln!(self.output, "Error: Coordinates must be between 0 and 2")?;
        }
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
