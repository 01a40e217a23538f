//! Human-readable listing of verified IMG2 images.
//!
//! Everything here renders an [`Img2Info`] produced by the verifier; nothing
//! re-parses the image on its own.

use std::fmt::{self, Write};

use crate::{read_image_bytes, Img2Info, Result};

const SEPARATOR: &str = "-------------------------";

/// Bytes of the signature block shown per line.
const SIG_BYTES_PER_LINE: usize = 0x20;

/// Render `data` as a hex + ASCII dump: 16 bytes per line, grouped by 8.
///
/// ```text
/// 31 2E 30 00                                         |  1.0.
/// ```
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_hexdump(&mut out, data);
    out
}

fn write_hexdump<W: Write>(out: &mut W, data: &[u8]) -> fmt::Result {
    for line in data.chunks(16) {
        let mut ascii = String::with_capacity(16);
        for (i, &b) in line.iter().enumerate() {
            write!(out, "{b:02X} ")?;
            ascii.push(if (b' '..=b'~').contains(&b) { b as char } else { '.' });
            if (i + 1) % 8 == 0 || i + 1 == line.len() {
                out.write_char(' ')?;
            }
        }
        // Pad a short last line so the ASCII column lines up.
        if line.len() < 16 {
            if line.len() <= 8 {
                out.write_char(' ')?;
            }
            for _ in line.len()..16 {
                out.write_str("   ")?;
            }
        }
        writeln!(out, "|  {ascii} ")?;
    }
    Ok(())
}

impl fmt::Display for Img2Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hdr = &self.header;

        writeln!(f, "IMG2:")?;
        writeln!(f, "magic        : {}", hdr.magic)?;
        writeln!(f, "type         : {}", hdr.identifier)?;
        writeln!(f, "epoch        : 0x{:x}", hdr.epoch)?;
        writeln!(f, "loadaddr     : 0x{:08x}", hdr.load_addr)?;
        writeln!(f, "dataSize     : 0x{:08x}", hdr.data_size)?;
        writeln!(f, "decSize      : 0x{:08x}", hdr.dec_size)?;
        writeln!(f, "options      : 0x{:08x}", hdr.options)?;
        writeln!(f, "nextExtSize  : 0x{:08x}", hdr.next_ext_size)?;
        writeln!(f, "crc32        : 0x{:08x}", hdr.crc32)?;

        write!(f, "sig:")?;
        for chunk in hdr.sig.chunks(SIG_BYTES_PER_LINE) {
            write!(f, "\n\t")?;
            for b in chunk {
                write!(f, "{b:02x}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{SEPARATOR}")?;

        for (i, ext) in self.extensions.iter().enumerate() {
            writeln!(f, "Ext {i}:")?;
            writeln!(f, "\tcrc32       : 0x{:08x}", ext.crc32)?;
            writeln!(f, "\tnextExtSize : 0x{:08x}", ext.next_ext_size)?;
            writeln!(f, "\ttype        : {}", ext.tag)?;
            writeln!(f, "\toptions     : 0x{:08x}", ext.options)?;
            write_hexdump(f, &ext.data)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Render the header, signature and extension chain of a verified image.
pub fn format_image_info(info: &Img2Info) -> String {
    info.to_string()
}

/// Verify `data` and render it with [`format_image_info`].
pub fn describe_image_bytes(data: &[u8]) -> Result<String> {
    let info = read_image_bytes(data)?;
    Ok(format_image_info(&info))
}

/// Print image information to `stdout`.
pub fn print_image_info(info: &Img2Info) {
    print!("{info}");
}
