//! Parsing of extension arguments given on the command line.
//!
//! An argument is a 4-character tag, a selector and the data:
//!
//! - `vers=hello world` stores the string followed by a NUL byte
//! - `vers-41424344` stores the hex-decoded bytes

use crate::{Extension, Img2Error, Result, Tag};

fn malformed(arg: &str, reason: &'static str) -> Img2Error {
    Img2Error::MalformedExtensionSpec {
        arg: arg.to_string(),
        reason,
    }
}

/// Parse a `TAGG=string` or `TAGG-hexbytes` extension argument.
pub fn parse_extension(arg: &str) -> Result<Extension> {
    let bytes = arg.as_bytes();
    if bytes.len() <= 5 {
        return Err(malformed(arg, "expected <type><=|-><data>"));
    }
    let tag = Tag::try_from(&bytes[..4])
        .map_err(|_| malformed(arg, "type must be exactly 4 ASCII characters"))?;

    // Bytes 0..5 are ASCII here, so slicing at 5 is on a char boundary.
    let data = match bytes[4] {
        b'=' => {
            let mut data = arg[5..].as_bytes().to_vec();
            data.push(0);
            data
        }
        b'-' => parse_hex_bytes(arg, &arg[5..])?,
        _ => return Err(malformed(arg, "invalid selector (use '=' or '-')")),
    };

    Ok(Extension::new(tag, data))
}

fn parse_hex_bytes(arg: &str, hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(malformed(arg, "odd hex string"));
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16);
            let lo = (pair[1] as char).to_digit(16);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4 | lo) as u8),
                _ => Err(malformed(arg, "invalid hex digit")),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(arg: &str) -> &'static str {
        match parse_extension(arg) {
            Err(Img2Error::MalformedExtensionSpec { reason, .. }) => reason,
            other => panic!("{arg}: expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn string_extension_is_nul_terminated() {
        let ext = parse_extension("vers=hello world").unwrap();
        assert_eq!(ext.tag, Tag::new(*b"vers"));
        assert_eq!(ext.data, b"hello world\0");
    }

    #[test]
    fn hex_extension() {
        let ext = parse_extension("vers-41424344").unwrap();
        assert_eq!(ext.data, b"ABCD");
        assert_eq!(parse_extension("salt-deADbeEF").unwrap().data, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn selector_is_fifth_character() {
        // '=' and '-' later in the data are plain data
        let ext = parse_extension("ab-c=x-y").unwrap();
        assert_eq!(ext.tag, Tag::new(*b"ab-c"));
        assert_eq!(ext.data, b"x-y\0");
    }

    #[test]
    fn malformed_arguments() {
        assert_eq!(reason("vers="), "expected <type><=|-><data>");
        assert_eq!(reason("vers"), "expected <type><=|-><data>");
        assert_eq!(reason("vers-414"), "odd hex string");
        assert_eq!(reason("vers-4G"), "invalid hex digit");
        assert_eq!(reason("vers-+1"), "invalid hex digit");
        assert_eq!(reason("vers:abc"), "invalid selector (use '=' or '-')");
        assert_eq!(reason("vé=abc"), "type must be exactly 4 ASCII characters");
    }

    #[test]
    fn multibyte_selector_position_rejected() {
        // 'é' occupies bytes 3..5, so byte 4 is not a selector
        assert!(parse_extension("veré=abc").is_err());
    }
}
