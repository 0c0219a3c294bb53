use std::error::Error;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

use crate::config::SortConfig;
use crate::display::render_step;
use crate::sorting_algorithms::generate_steps;
use crate::step::StepSequence;

/// Walks a pre-computed step sequence one event at a time. The sequence is
/// regenerated wholesale on reset; nothing is streamed or resumed.
pub struct Stepper {
    config: SortConfig,
    sequence: StepSequence,
    position: usize,
}

impl Stepper {
    pub fn new(config: SortConfig) -> Self {
        let sequence = generate_steps(&config);
        Stepper {
            config,
            sequence,
            position: 0,
        }
    }

    /// Key loop: `n`/space/enter step forward, `r` restarts with a fresh
    /// array, `q`/esc quits. Stepping past the last step restarts too.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        let outcome = self.key_loop();
        terminal::disable_raw_mode()?;
        outcome
    }

    fn key_loop(&mut self) -> Result<(), Box<dyn Error>> {
        self.paint()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
                        if self.position == self.sequence.max_index {
                            self.reset();
                        } else {
                            self.position += 1;
                        }
                        self.paint()?;
                    }
                    KeyCode::Char('r') => {
                        self.reset();
                        self.paint()?;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.config.regenerate();
        self.sequence = generate_steps(&self.config);
        self.position = 0;
    }

    /// Repaints the whole screen in one write to avoid flickering.
    fn paint(&self) -> Result<(), Box<dyn Error>> {
        let step = &self.sequence.steps[self.position];
        let mut buffer = String::new();

        // Hide the cursor, home it, clear to the end of the screen.
        buffer.push_str("\x1B[?25l\x1B[H\x1B[J");
        buffer += &format!("{} Sort Visualization\n\n", self.config.algorithm.title());
        if step.is_pass_header {
            if let Some(pass) = step.pass_number {
                buffer += &format!("--- Pass {} ---\n", pass);
            }
        }
        buffer += &format!(
            "Step {}/{}: {}\n\n",
            self.position, self.sequence.max_index, step.description
        );
        buffer += &render_step(step, self.config.algorithm);
        buffer.push('\n');
        buffer.push_str("\n[n] next   [r] reset   [q] quit\n");
        buffer.push_str("\x1B[?25h");

        let mut stdout = io::stdout();
        // Raw mode needs explicit carriage returns.
        write!(stdout, "{}", buffer.replace('\n', "\r\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Prints the whole sequence at once, for non-interactive terminals.
    pub fn dump(&self) {
        println!("{} Sort Visualization", self.config.algorithm.title());
        for (index, step) in self.sequence.steps.iter().enumerate() {
            println!();
            println!("Step {}: {}", index, step.description);
            println!("{}", render_step(step, self.config.algorithm));
        }
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }
}
