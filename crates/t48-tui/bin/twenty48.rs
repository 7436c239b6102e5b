//! twenty48: terminal 2048
//!
//! Asks for a board size on stdout, then runs the game in the alternate
//! screen with raw mode enabled.

use std::io::{self, Write};

use crossterm::{
    event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use t48_core::{DEFAULT_SIZE, GameRng, GameState};
use t48_tui::{App, SessionOutcome, Theme};

fn print_title() {
    println!();
    println!("  ██████╗  ██████╗ ██╗  ██╗ █████╗ ");
    println!("  ╚════██╗██╔═████╗██║  ██║██╔══██╗");
    println!("   █████╔╝██║██╔██║███████║╚█████╔╝");
    println!("  ██╔═══╝ ████╔╝██║╚════██║██╔══██╗");
    println!("  ███████╗╚██████╔╝     ██║╚█████╔╝");
    println!("  ╚══════╝ ╚═════╝      ╚═╝ ╚════╝ ");
    println!();
    println!("  Join the numbers and get to the 2048 tile!");
    println!();
    println!("  Move with w/a/s/d or the arrow keys.");
    println!("  Press q to quit, r to restart.");
    println!();
}

/// Read the board size from stdin. Anything unparsable, and any size too
/// small to play on, falls back to the default 4x4.
fn prompt_board_size() -> io::Result<usize> {
    print!("  Now, please input the size of the board: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let size = line.trim().parse::<usize>().unwrap_or(DEFAULT_SIZE);
    Ok(if size <= 1 { DEFAULT_SIZE } else { size })
}

fn main() -> io::Result<()> {
    print_title();
    let size = prompt_board_size()?;
    let state = GameState::new(size, GameRng::from_entropy()).map_err(io::Error::other)?;
    let mut app = App::new(state, Theme::detect());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    println!();
    println!("Thanks for playing!");
    println!(
        "Final score: {}  (best: {})",
        app.state().score,
        app.state().best_score
    );
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event::read()?;
        if let Some(command) = app.handle_event(event) {
            app.execute(command);
        }

        match app.take_outcome() {
            Some(SessionOutcome::Quit) => return Ok(()),
            Some(SessionOutcome::Restart) => app.restart(),
            None => {}
        }
    }
}
