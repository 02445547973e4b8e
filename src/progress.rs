//! Dot-matrix progress rendering for fill runs.

use std::io::{self, Write};

const LINE_SIZE: u64 = 50;
const LINES: u64 = 10;

/// Renders a table's fill progress as a block of dots: 50 dots per line,
/// 10 lines per table, with the running percentage at each line break.
///
/// Each call to [`DotProgress::tick`] accounts for one insert out of the
/// expected total; calls beyond the total render nothing.
pub struct DotProgress {
    total: u64,
    calls: u64,
    dots: u64,
}

impl DotProgress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            calls: 0,
            dots: 0,
        }
    }

    /// Start over for the next table.
    pub fn reset(&mut self) {
        self.calls = 0;
        self.dots = 0;
    }

    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.calls + 1 > self.total {
            return Ok(());
        }
        self.calls += 1;

        let total_dots = LINE_SIZE * LINES;
        let new_dots = self.calls * total_dots / self.total;

        let mut line = self.dots / LINE_SIZE;
        for dot in self.dots + 1..=new_dots {
            write!(out, ".")?;

            let dot_line = dot / LINE_SIZE;
            if dot_line > line {
                writeln!(out, " {:.0}%", dot as f64 / total_dots as f64 * 100.0)?;
                line = dot_line;
            }
        }
        self.dots = new_dots;

        Ok(())
    }
}
