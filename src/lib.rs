//! # img2tool
//!
//! A Rust library for creating and inspecting IMG2 firmware image containers.
//!
//! An IMG2 image consists of:
//!
//! - a **0x400-byte header**: a fixed 0x68-byte record protected by a CRC-32,
//!   followed by a 0x398-byte extension area
//! - an optional **extension chain** living in that area: typed records, each
//!   with its own CRC-32, where every record announces the data size of the
//!   record that follows it
//! - the **payload**, padded with zeroes to a 0x400-byte boundary
//!
//! ## Example
//!
//! ```
//! use img2tool::{Extension, Img2Params, Tag};
//!
//! let params = Img2Params::builder(Tag::new(*b"krnl"))
//!     .extension(Extension::new(Tag::new(*b"vers"), b"1.0\0".to_vec()))
//!     .build();
//!
//! let image = img2tool::create_image_bytes(&params, &[0xAA, 0xBB]).unwrap();
//! assert_eq!(image.len() % img2tool::PAGE_SIZE, 0);
//!
//! let info = img2tool::read_image_bytes(&image).unwrap();
//! assert_eq!(info.extensions.len(), 1);
//! assert_eq!(info.payload(&image), &[0xAA, 0xBB]);
//! ```

pub mod dump;
pub mod extarg;

pub use dump::{describe_image_bytes, format_image_info, hexdump, print_image_info};
pub use extarg::parse_extension;

use std::fmt;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use crc::{Crc, CRC_32_BZIP2};
use log::debug;
use thiserror::Error;

/// Version of the img2tool library and binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic tag identifying an IMG2 image.
pub const IMG2_MAGIC: Tag = Tag(*b"Img2");

/// Size of the fixed header record (everything up to and including `crc32`).
pub const HEADER_FIXED_SIZE: usize = 0x68;

/// Offset of the header `crc32` field; the header CRC covers `[0, HEADER_CRC_OFFSET)`.
pub const HEADER_CRC_OFFSET: usize = 0x64;

/// Size of the extension area reserved inside the header.
pub const EXT_AREA_SIZE: usize = 0x398;

/// Total header size. The payload starts at this offset.
pub const HEADER_SIZE: usize = HEADER_FIXED_SIZE + EXT_AREA_SIZE;

/// Size of the fixed part of an extension node (crc32, nextExtSize, type, options).
pub const EXT_NODE_SIZE: usize = 0x10;

/// Size of the opaque signature block.
pub const SIG_SIZE: usize = 64;

/// Bit in an `options` field signalling that an extension node follows.
pub const OPTION_HAS_EXTENSION: u32 = 1 << 30;

/// `nextExtSize` value marking the end of the chain (0 is accepted too).
pub const NO_EXTENSION: u32 = 0xffff_ffff;

/// Anti-rollback epoch written into newly created images.
pub const DEFAULT_EPOCH: u16 = 2;

/// Marker byte written directly after the data of each extension node.
pub const EXT_END_MARKER: u8 = 0xff;

/// Created images are padded to a multiple of this size.
pub const PAGE_SIZE: usize = 0x400;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum Img2Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image too small ({size} bytes, need at least {min})")]
    TooSmall { size: usize, min: usize },

    #[error("bad magic '{found}' (expected 'Img2')")]
    BadMagic { found: Tag },

    #[error("{field} larger than buffer ({len:#x} bytes, only {available:#x} after header)")]
    PayloadOutOfBounds {
        field: &'static str,
        len: u32,
        available: usize,
    },

    #[error("header CRC32 mismatch (stored {stored:#010x}, computed {computed:#010x})")]
    HeaderChecksumMismatch { stored: u32, computed: u32 },

    #[error("ext {index} CRC32 mismatch (stored {stored:#010x}, computed {computed:#010x})")]
    ExtensionChecksumMismatch {
        index: usize,
        stored: u32,
        computed: u32,
    },

    #[error("ext {index} out of bounds (ends at {end:#x}, buffer is {size:#x} bytes)")]
    ExtensionOutOfBounds { index: usize, end: u64, size: usize },

    #[error("out of extension memory ({needed} bytes needed, {remaining} remaining)")]
    ExtensionAreaExhausted { needed: usize, remaining: usize },

    #[error("ext {index} has no data (a zero size terminates the chain)")]
    EmptyExtension { index: usize },

    #[error("payload too large ({size} bytes)")]
    PayloadTooLarge { size: usize },

    #[error("malformed extension argument '{arg}': {reason}")]
    MalformedExtensionSpec { arg: String, reason: &'static str },

    #[error("invalid tag '{0}' (must be exactly 4 ASCII characters)")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, Img2Error>;

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// A four-character code such as `Img2` or `krnl`.
///
/// On disk a tag is a little-endian `u32` whose value is the four characters
/// read as a big-endian integer, so `Img2` is stored as the bytes `2gmI`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag([u8; 4]);

impl Tag {
    pub const fn new(chars: [u8; 4]) -> Self {
        Self(chars)
    }

    /// Tag from its integer value (big-endian interpretation of the characters).
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Integer value of the tag, as stored in header and extension fields.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = Img2Error;

    fn try_from(chars: &[u8]) -> Result<Self> {
        match <[u8; 4]>::try_from(chars) {
            Ok(arr) if arr.is_ascii() => Ok(Self(arr)),
            _ => Err(Img2Error::InvalidTag(
                String::from_utf8_lossy(chars).into_owned(),
            )),
        }
    }
}

impl FromStr for Tag {
    type Err = Img2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.as_bytes())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            let c = if c.is_ascii_graphic() || c == b' ' {
                c as char
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{self}\")")
    }
}

// ---------------------------------------------------------------------------
// CRC-32 helpers
// ---------------------------------------------------------------------------

const IMG2_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_BZIP2);

/// Compute the IMG2 CRC-32 of a byte slice.
///
/// This is the MSB-first CRC-32 (polynomial `0x04C11DB7`, initial value
/// `0xFFFFFFFF`, complemented result), computed independently per call.
pub fn crc32(data: &[u8]) -> u32 {
    IMG2_CRC.checksum(data)
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_le_bytes(b)
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ---------------------------------------------------------------------------
// IMG2 header (little-endian on disk)
// ---------------------------------------------------------------------------

/// The fixed 0x68-byte IMG2 header record.
#[derive(Clone, PartialEq, Eq)]
pub struct Img2Header {
    /// Must be [`IMG2_MAGIC`]
    pub magic: Tag,
    /// Image type, e.g. `krnl`
    pub identifier: Tag,
    /// Preserved verbatim
    pub unknown1: u16,
    /// Anti-rollback counter
    pub epoch: u16,
    /// Target load address
    pub load_addr: u32,
    /// Payload size in bytes
    pub data_size: u32,
    /// Decompressed payload size
    pub dec_size: u32,
    /// All-ones on creation, preserved on parse
    pub unknown2: u32,
    /// Bit 30 ([`OPTION_HAS_EXTENSION`]) set when an extension chain follows
    pub options: u32,
    /// Signature block, never interpreted
    pub sig: [u8; SIG_SIZE],
    /// Data size of the first extension node, or 0 / [`NO_EXTENSION`]
    pub next_ext_size: u32,
    /// CRC-32 over the preceding header bytes
    pub crc32: u32,
}

impl Img2Header {
    /// Header for a new image, as written by [`create_image_bytes`] before any
    /// extension is attached. The CRC is already up to date.
    pub fn new(identifier: Tag, payload_size: u32) -> Self {
        let mut hdr = Self {
            magic: IMG2_MAGIC,
            identifier,
            unknown1: 0,
            epoch: DEFAULT_EPOCH,
            load_addr: 0,
            data_size: payload_size,
            dec_size: payload_size,
            unknown2: 0xffff_ffff,
            options: 0,
            sig: [0u8; SIG_SIZE],
            next_ext_size: NO_EXTENSION,
            crc32: 0,
        };
        hdr.update_crc();
        hdr
    }

    /// Serialize the fixed header record.
    pub fn to_bytes(&self) -> [u8; HEADER_FIXED_SIZE] {
        let mut buf = [0u8; HEADER_FIXED_SIZE];
        write_u32(&mut buf, 0x00, self.magic.to_u32());
        write_u32(&mut buf, 0x04, self.identifier.to_u32());
        buf[0x08..0x0a].copy_from_slice(&self.unknown1.to_le_bytes());
        buf[0x0a..0x0c].copy_from_slice(&self.epoch.to_le_bytes());
        write_u32(&mut buf, 0x0c, self.load_addr);
        write_u32(&mut buf, 0x10, self.data_size);
        write_u32(&mut buf, 0x14, self.dec_size);
        write_u32(&mut buf, 0x18, self.unknown2);
        write_u32(&mut buf, 0x1c, self.options);
        buf[0x20..0x60].copy_from_slice(&self.sig);
        write_u32(&mut buf, 0x60, self.next_ext_size);
        write_u32(&mut buf, HEADER_CRC_OFFSET, self.crc32);
        buf
    }

    /// Deserialize the fixed header record (`data` must be >= 0x68 bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_FIXED_SIZE {
            return Err(Img2Error::TooSmall {
                size: data.len(),
                min: HEADER_FIXED_SIZE,
            });
        }
        let mut sig = [0u8; SIG_SIZE];
        sig.copy_from_slice(&data[0x20..0x60]);
        Ok(Self {
            magic: Tag::from_u32(read_u32(data, 0x00)),
            identifier: Tag::from_u32(read_u32(data, 0x04)),
            unknown1: read_u16(data, 0x08),
            epoch: read_u16(data, 0x0a),
            load_addr: read_u32(data, 0x0c),
            data_size: read_u32(data, 0x10),
            dec_size: read_u32(data, 0x14),
            unknown2: read_u32(data, 0x18),
            options: read_u32(data, 0x1c),
            sig,
            next_ext_size: read_u32(data, 0x60),
            crc32: read_u32(data, HEADER_CRC_OFFSET),
        })
    }

    /// CRC-32 of the serialized header bytes preceding the `crc32` field.
    pub fn compute_crc(&self) -> u32 {
        crc32(&self.to_bytes()[..HEADER_CRC_OFFSET])
    }

    pub fn update_crc(&mut self) {
        self.crc32 = self.compute_crc();
    }

    /// True when the continuation bit announces an extension chain.
    pub fn has_extensions(&self) -> bool {
        self.options & OPTION_HAS_EXTENSION != 0
    }
}

impl fmt::Debug for Img2Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Img2Header")
            .field("magic", &self.magic)
            .field("identifier", &self.identifier)
            .field("unknown1", &self.unknown1)
            .field("epoch", &self.epoch)
            .field("load_addr", &format_args!("0x{:08x}", self.load_addr))
            .field("data_size", &format_args!("0x{:08x}", self.data_size))
            .field("dec_size", &format_args!("0x{:08x}", self.dec_size))
            .field("unknown2", &format_args!("0x{:08x}", self.unknown2))
            .field("options", &format_args!("0x{:08x}", self.options))
            .field("next_ext_size", &format_args!("0x{:08x}", self.next_ext_size))
            .field("crc32", &format_args!("0x{:08x}", self.crc32))
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Extensions
// ---------------------------------------------------------------------------

/// An extension to attach when creating an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub tag: Tag,
    pub data: Vec<u8>,
}

impl Extension {
    pub fn new(tag: Tag, data: Vec<u8>) -> Self {
        Self { tag, data }
    }
}

/// A verified extension node read back from an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionNode {
    /// Offset of the node from the start of the image
    pub offset: usize,
    pub crc32: u32,
    /// Data size of the following node, or 0 / [`NO_EXTENSION`]
    pub next_ext_size: u32,
    pub tag: Tag,
    pub options: u32,
    /// Node data; its length was announced by the previous node (or header)
    pub data: Vec<u8>,
}

impl ExtensionNode {
    /// True when this node's continuation bit is set.
    pub fn has_next(&self) -> bool {
        self.options & OPTION_HAS_EXTENSION != 0
    }

    pub fn to_extension(&self) -> Extension {
        Extension::new(self.tag, self.data.clone())
    }
}

fn is_chain_end(ext_size: u32) -> bool {
    ext_size == 0 || ext_size == NO_EXTENSION
}

/// Walk the extension chain starting right after the fixed header record.
///
/// Each node's length comes only from the size announced by its predecessor.
/// Every node is bounds-checked against `data` before it is read.
fn read_extensions(data: &[u8], first_ext_size: u32) -> Result<Vec<ExtensionNode>> {
    let mut nodes = Vec::new();
    let mut offset = HEADER_FIXED_SIZE;
    let mut ext_size = first_ext_size;

    while !is_chain_end(ext_size) {
        let index = nodes.len();
        let end = (offset + EXT_NODE_SIZE) as u64 + u64::from(ext_size);
        if end > data.len() as u64 {
            return Err(Img2Error::ExtensionOutOfBounds {
                index,
                end,
                size: data.len(),
            });
        }
        let node = &data[offset..end as usize];

        let stored = read_u32(node, 0);
        let computed = crc32(&node[4..]);
        if stored != computed {
            return Err(Img2Error::ExtensionChecksumMismatch {
                index,
                stored,
                computed,
            });
        }

        let ext = ExtensionNode {
            offset,
            crc32: stored,
            next_ext_size: read_u32(node, 0x4),
            tag: Tag::from_u32(read_u32(node, 0x8)),
            options: read_u32(node, 0xc),
            data: node[EXT_NODE_SIZE..].to_vec(),
        };
        let has_next = ext.has_next();
        ext_size = ext.next_ext_size;
        nodes.push(ext);

        if !has_next {
            break;
        }
        offset = end as usize;
    }

    Ok(nodes)
}

// ---------------------------------------------------------------------------
// Verification / extraction
// ---------------------------------------------------------------------------

/// A verified IMG2 image: parsed header, extension chain and payload location.
#[derive(Debug, Clone)]
pub struct Img2Info {
    pub header: Img2Header,
    pub extensions: Vec<ExtensionNode>,
    /// Byte range of the payload within the verified buffer.
    pub payload: Range<usize>,
}

impl Img2Info {
    /// The payload slice of `data`, which must be the buffer this info was
    /// verified from.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than the verified buffer.
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.payload.clone()]
    }
}

/// Read and verify an IMG2 image file.
pub fn read_image(path: impl AsRef<Path>) -> Result<Img2Info> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    read_image_bytes(&data)
}

/// Verify an in-memory IMG2 image.
///
/// Checks, in order:
/// 1. The buffer holds a full header
/// 2. Magic
/// 3. `dataSize` and `decSize` fit in the buffer after the header
/// 4. Header CRC
/// 5. CRC and bounds of every node in the extension chain
pub fn read_image_bytes(data: &[u8]) -> Result<Img2Info> {
    if data.len() < HEADER_SIZE {
        return Err(Img2Error::TooSmall {
            size: data.len(),
            min: HEADER_SIZE,
        });
    }

    let hdr = Img2Header::from_bytes(data)?;

    if hdr.magic != IMG2_MAGIC {
        return Err(Img2Error::BadMagic { found: hdr.magic });
    }

    let available = data.len() - HEADER_SIZE;
    for (field, len) in [("dataSize", hdr.data_size), ("decSize", hdr.dec_size)] {
        if len as usize > available {
            return Err(Img2Error::PayloadOutOfBounds {
                field,
                len,
                available,
            });
        }
    }

    let computed = hdr.compute_crc();
    if computed != hdr.crc32 {
        return Err(Img2Error::HeaderChecksumMismatch {
            stored: hdr.crc32,
            computed,
        });
    }

    let extensions = if hdr.has_extensions() {
        read_extensions(data, hdr.next_ext_size)?
    } else {
        Vec::new()
    };

    Ok(Img2Info {
        payload: HEADER_SIZE..HEADER_SIZE + hdr.data_size as usize,
        header: hdr,
        extensions,
    })
}

/// Verify an in-memory image and return a copy of its payload.
pub fn extract_payload_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let info = read_image_bytes(data)?;
    Ok(info.payload(data).to_vec())
}

/// Verify `image_file` and write its payload to `output_file`.
pub fn extract_payload(
    image_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<()> {
    let image_path = image_file.as_ref();
    let data = fs::read(image_path)?;
    debug!("read {} bytes from {}", data.len(), image_path.display());

    let payload = extract_payload_bytes(&data)?;
    fs::write(output_file.as_ref(), &payload)?;
    debug!(
        "wrote {} payload bytes to {}",
        payload.len(),
        output_file.as_ref().display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Image parameters (builder for creating images)
// ---------------------------------------------------------------------------

/// Parameters for creating an IMG2 image.
#[derive(Debug, Clone)]
pub struct Img2Params {
    pub image_type: Tag,
    pub load_addr: u32,
    /// Extensions in chain order.
    pub extensions: Vec<Extension>,
}

impl Img2Params {
    pub fn new(image_type: Tag) -> Self {
        Self {
            image_type,
            load_addr: 0,
            extensions: Vec::new(),
        }
    }

    pub fn builder(image_type: Tag) -> Img2ParamsBuilder {
        Img2ParamsBuilder {
            params: Self::new(image_type),
        }
    }
}

/// Builder for [`Img2Params`].
pub struct Img2ParamsBuilder {
    params: Img2Params,
}

impl Img2ParamsBuilder {
    pub fn load_addr(mut self, addr: u32) -> Self {
        self.params.load_addr = addr;
        self
    }
    pub fn extension(mut self, ext: Extension) -> Self {
        self.params.extensions.push(ext);
        self
    }
    pub fn extensions(mut self, exts: impl IntoIterator<Item = Extension>) -> Self {
        self.params.extensions.extend(exts);
        self
    }
    pub fn build(self) -> Img2Params {
        self.params
    }
}

// ---------------------------------------------------------------------------
// Image creation
// ---------------------------------------------------------------------------

/// Recompute the CRC of the node at `offset` over its fields and `data_len`
/// bytes of data.
fn seal_node(area: &mut [u8], offset: usize, data_len: usize) {
    let crc = crc32(&area[offset + 4..offset + EXT_NODE_SIZE + data_len]);
    write_u32(area, offset, crc);
}

/// Lay out the extension chain in a fresh extension area, linking the header
/// to the first node and each node to the next.
fn write_extensions(hdr: &mut Img2Header, extensions: &[Extension]) -> Result<Vec<u8>> {
    let mut area = vec![0u8; EXT_AREA_SIZE];
    // Offset and data length of the node placed last.
    let mut prev: Option<(usize, usize)> = None;

    for (index, ext) in extensions.iter().enumerate() {
        if ext.data.is_empty() {
            return Err(Img2Error::EmptyExtension { index });
        }

        let offset = prev.map_or(0, |(off, len)| off + EXT_NODE_SIZE + len);
        let remaining = EXT_AREA_SIZE - offset;
        // node + data + end marker
        let needed = EXT_NODE_SIZE + ext.data.len() + 1;
        if needed > remaining {
            return Err(Img2Error::ExtensionAreaExhausted { needed, remaining });
        }
        let data_len = ext.data.len();

        match prev {
            None => {
                hdr.options |= OPTION_HAS_EXTENSION;
                hdr.next_ext_size = data_len as u32;
                hdr.update_crc();
            }
            Some((prev_off, prev_len)) => {
                let options = read_u32(&area, prev_off + 0xc) | OPTION_HAS_EXTENSION;
                write_u32(&mut area, prev_off + 0xc, options);
                write_u32(&mut area, prev_off + 0x4, data_len as u32);
                seal_node(&mut area, prev_off, prev_len);
            }
        }

        // The previous node's end marker sits where this node's crc goes.
        write_u32(&mut area, offset + 0x4, NO_EXTENSION);
        write_u32(&mut area, offset + 0x8, ext.tag.to_u32());
        let data_start = offset + EXT_NODE_SIZE;
        area[data_start..data_start + data_len].copy_from_slice(&ext.data);
        area[data_start + data_len] = EXT_END_MARKER;
        seal_node(&mut area, offset, data_len);

        prev = Some((offset, data_len));
    }

    Ok(area)
}

/// Create an IMG2 image from raw bytes, returning the complete image
/// (header + extensions + payload + padding) as a `Vec<u8>`.
///
/// Nothing is returned unless every extension fits in the extension area.
pub fn create_image_bytes(params: &Img2Params, payload: &[u8]) -> Result<Vec<u8>> {
    let payload_size = u32::try_from(payload.len()).map_err(|_| Img2Error::PayloadTooLarge {
        size: payload.len(),
    })?;

    let mut hdr = Img2Header::new(params.image_type, payload_size);
    hdr.load_addr = params.load_addr;
    hdr.update_crc();

    let ext_area = write_extensions(&mut hdr, &params.extensions)?;

    let mut image = Vec::with_capacity((HEADER_SIZE + payload.len()).next_multiple_of(PAGE_SIZE));
    image.extend_from_slice(&hdr.to_bytes());
    image.extend_from_slice(&ext_area);
    image.extend_from_slice(payload);

    let padded = image.len().next_multiple_of(PAGE_SIZE);
    image.resize(padded, 0);

    Ok(image)
}

/// Create an IMG2 image from a payload file (an empty payload when
/// `data_file` is `None`) and write it to `output_file`.
///
/// The created image is verified before it is written.
pub fn create_image(
    params: &Img2Params,
    data_file: Option<&Path>,
    output_file: impl AsRef<Path>,
) -> Result<()> {
    let payload = match data_file {
        Some(path) => {
            let data = fs::read(path)?;
            debug!("read {} payload bytes from {}", data.len(), path.display());
            data
        }
        None => Vec::new(),
    };

    let image = create_image_bytes(params, &payload)?;
    read_image_bytes(&image)?;

    fs::write(output_file.as_ref(), &image)?;
    debug!(
        "wrote {} byte image to {}",
        image.len(),
        output_file.as_ref().display()
    );
    Ok(())
}

/// Verify an existing image file. Returns `Ok(Img2Info)` if valid.
pub fn verify_image(path: impl AsRef<Path>) -> Result<Img2Info> {
    read_image(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
