use std::io::{self, Write};

use sculpt_geom::Segment;

/// One `x0 y0 x1 y1` line per segment.
pub fn write_segments<W: Write>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    for s in segments {
        writeln!(out, "{} {} {} {}", s.a.x, s.a.y, s.b.x, s.b.y)?;
    }
    Ok(())
}
