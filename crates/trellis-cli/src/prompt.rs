//! Interactive disambiguation prompt

use std::io::{self, BufRead, Write};

use trellis_search::Chooser;

/// Chooser that presents a numbered candidate list on the console and
/// reads a 1-based selection from stdin. Zero, out-of-range, or
/// non-numeric input cancels.
pub struct StdinChooser;

impl Chooser for StdinChooser {
    fn choose(&mut self, candidates: &[String]) -> Option<usize> {
        println!("\nDid you mean:");
        for (i, name) in candidates.iter().enumerate() {
            println!("  {:2}) {}", i + 1, name);
        }
        print!("Choose (1-{}) or 0 to cancel: ", candidates.len());
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => Some(n - 1),
            _ => {
                println!("Cancelled selection.");
                None
            }
        }
    }
}
