//! gnuplot text-protocol emitter.
//!
//! Frames are inline `plot '-'` blocks, one per generation, suitable for
//! piping straight into `gnuplot --persist`.

use cgol_core::Result;
use cgol_engine::World;
use std::io::Write;

pub struct PlotWriter<W: Write> {
    out: W,
}

impl<W: Write> PlotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit the one-time header fixing the axis ranges to the viewport
    pub fn header(&mut self, size: i64) -> Result<()> {
        let half = size / 2;
        writeln!(self.out, "unset key; set xrange[-{half}:{half}]")?;
        writeln!(self.out, "set yrange[-{half}:{half}]")?;
        writeln!(self.out, "set style line 1 lc rgb '#0060ad' pt 7")?;
        Ok(())
    }

    /// Emit one generation's live cells as a points block
    pub fn frame(&mut self, world: &World) -> Result<()> {
        writeln!(self.out, "plot '-' with points ls 1")?;
        for cell in world.iter() {
            writeln!(self.out, "{}, {}", cell.x, cell.y)?;
        }
        writeln!(self.out, "e")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgol_core::Coord;

    fn rendered(write: impl FnOnce(&mut PlotWriter<&mut Vec<u8>>)) -> String {
        let mut buffer = Vec::new();
        let mut plot = PlotWriter::new(&mut buffer);
        write(&mut plot);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_centers_axis_ranges() {
        let output = rendered(|plot| plot.header(50).unwrap());
        assert_eq!(
            output,
            "unset key; set xrange[-25:25]\n\
             set yrange[-25:25]\n\
             set style line 1 lc rgb '#0060ad' pt 7\n"
        );
    }

    #[test]
    fn test_frame_lists_cells_between_plot_and_terminator() {
        let world: World = [Coord::new(3, -4)].into_iter().collect();
        let output = rendered(|plot| plot.frame(&world).unwrap());
        assert_eq!(output, "plot '-' with points ls 1\n3, -4\ne\n");
    }

    #[test]
    fn test_frame_of_empty_world_is_just_framing() {
        let output = rendered(|plot| plot.frame(&World::new()).unwrap());
        assert_eq!(output, "plot '-' with points ls 1\ne\n");
    }

    #[test]
    fn test_frame_emits_every_live_cell_once() {
        let world: World = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
            .into_iter()
            .collect();
        let output = rendered(|plot| plot.frame(&world).unwrap());

        let mut rows: Vec<&str> = output
            .lines()
            .filter(|line| !line.starts_with("plot") && *line != "e")
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, vec!["0, 0", "1, 0", "2, 0"]);
    }
}
