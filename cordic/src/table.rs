//! Verilog angle table emission.
//!
//! The table is a `cordic_angle` wire array with one `assign` per stage,
//! followed by comments giving the quantization error, the gain and the gain
//! annihilation constant. A downstream HDL generator splices this text into a
//! module that defines `NSTAGES`. The layout is consumed verbatim.

use std::io::Write;

use crate::{
    angle::angles,
    gain::{annihilation, gain},
    literal::hex,
    variance::phase_quantization_variance,
};

/// Comment block that precedes the table in existing generated modules.
pub const PREAMBLE: &str = "\t//
\t// In many ways, the key to this whole algorithm lies in the angles
\t// necessary to do this.  These angles are also our basic reason for
\t// building this CORDIC in C++: Verilog just can't parameterize this
\t// much.  Further, these angle's risk becoming unsupportable magic
\t// numbers, hence we define these and set them in C++, based upon
\t// the needs of our problem, specifically the number of stages and
\t// the number of bits required in our phase accumulator
\t//
";

/// Write the [`PREAMBLE`] comment block.
///
/// Emitting it before [`emit_angle_table`] reproduces existing generated
/// files byte for byte.
pub fn emit_preamble<W: Write + ?Sized>(sink: &mut W) -> std::io::Result<()> {
    sink.write_all(PREAMBLE.as_bytes())
}

/// Write the table row of every stage and the diagnostic trailer.
///
/// # Args
/// * `sink` - Destination of the Verilog text. Write errors are returned.
/// * `stages` - Number of CORDIC stages.
/// * `phase_bits` - Phase accumulator width.
pub fn emit_angle_table<W: Write + ?Sized>(
    sink: &mut W,
    stages: u32,
    phase_bits: u32,
) -> std::io::Result<()> {
    writeln!(
        sink,
        "\twire\t[{}:0]\tcordic_angle [0:(NSTAGES-1)];\n",
        i64::from(phase_bits) - 1
    )?;

    for stage in angles(stages, phase_bits) {
        writeln!(
            sink,
            "\tassign\tcordic_angle[{:2}] = {}; //{:11.6} deg",
            stage.index,
            hex(phase_bits, stage.phase),
            stage.degrees()
        )?;
    }

    let variance = phase_quantization_variance(stages, phase_bits);
    writeln!(sink, "\t// Std-Dev    : {variance:.2} (Units)")?;
    writeln!(
        sink,
        "\t// Phase Quantization: {:.6} (Radians)",
        variance.sqrt()
    )?;
    writeln!(sink, "\t// Gain is {:.6}", gain(stages))?;
    writeln!(
        sink,
        "\t// You can annihilate this gain by multiplying by 32'h{:08x}",
        annihilation(stages)
    )?;
    writeln!(sink, "\t// and right shifting by 32 bits.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(stages: u32, phase_bits: u32) -> String {
        let mut buf = Vec::new();
        emit_angle_table(&mut buf, stages, phase_bits).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_stage() {
        let text = emit(1, 8);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("\twire\t[7:0]\tcordic_angle [0:(NSTAGES-1)];")
        );
        assert_eq!(lines.next(), Some(""));
        assert_eq!(
            lines.next(),
            Some("\tassign\tcordic_angle[ 0] =  8'h12; //  26.565051 deg")
        );
        assert_eq!(lines.next(), Some("\t// Std-Dev    : 0.00 (Units)"));
        assert_eq!(
            lines.next(),
            Some("\t// Phase Quantization: 0.021861 (Radians)")
        );
        assert_eq!(lines.next(), Some("\t// Gain is 1.118034"));
        assert_eq!(
            lines.next(),
            Some("\t// You can annihilate this gain by multiplying by 32'he4f92e2d")
        );
        assert_eq!(lines.next(), Some("\t// and right shifting by 32 bits."));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_table() {
        let text = emit(0, 16);
        assert!(!text.contains("assign"));
        assert!(text.contains("\t// Gain is 1.000000\n"));
        assert!(text.contains("32'hffffffff\n"));
    }

    #[test]
    fn preamble() {
        let mut buf = Vec::new();
        emit_preamble(&mut buf).unwrap();
        emit_angle_table(&mut buf, 1, 8).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9 + 2 + 1 + 5);
        assert!(lines[..9].iter().all(|l| l.starts_with("\t//")));
        assert_eq!(
            lines[1],
            "\t// In many ways, the key to this whole algorithm lies in the angles"
        );
        assert_eq!(lines[9], "\twire\t[7:0]\tcordic_angle [0:(NSTAGES-1)];");
        assert!(text.ends_with(&emit(1, 8)));
    }

    #[test]
    fn idempotent() {
        assert_eq!(emit(20, 24), emit(20, 24));
    }
}
