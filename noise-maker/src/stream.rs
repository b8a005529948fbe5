use std::io::{self, Write};

use rand::Rng;

use crate::generator::LogGenerator;

/// Writes `lines` generated lines to `out`, `batch_size` lines per write.
pub fn write_log<R: Rng, W: Write>(
    generator: &mut LogGenerator<R>,
    lines: usize,
    batch_size: usize,
    mut out: W,
) -> io::Result<()> {
    let batch_size = batch_size.max(1);
    let mut remaining = lines;
    while remaining > 0 {
        let batch = remaining.min(batch_size);
        let mut buffer = String::with_capacity(batch * 160);
        for _ in 0..batch {
            buffer.push_str(&generator.next_line());
            buffer.push('\n');
        }
        out.write_all(buffer.as_bytes())?;
        remaining -= batch;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn writes_requested_line_count_across_batches() {
        let start = NaiveDateTime::parse_from_str(
            "17/May/2015:10:00:00",
            crate::generator::TIMESTAMP_FORMAT,
        )
        .unwrap();
        let mut generator = LogGenerator::new(StdRng::seed_from_u64(11), 4, start);
        let mut out = Vec::new();
        write_log(&mut generator, 25, 10, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 25);
        assert!(text.ends_with('\n'));
    }
}
