use byteorder::{ByteOrder, BE, LE};
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// An enum for little or big endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    LittleEndian,
    BigEndian,
}

/// Probe value for host order detection. Its big-endian encoding is
/// `[0x00, 0xFF]`; the native layout either matches or mirrors it.
const HOST_PROBE: u16 = 0x00FF;

static HOST_ORDER: OnceLock<Endianness> = OnceLock::new();

impl Endianness {
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;

    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// The byte order in which this machine stores multi-byte integers.
    ///
    /// Detection runs at most once per process; all subsequent calls,
    /// including concurrent first calls, observe the same cached result.
    pub fn host() -> Self {
        *HOST_ORDER.get_or_init(|| {
            if HOST_PROBE.to_ne_bytes() == Self::BigEndian.encode_u16(HOST_PROBE) {
                Self::BigEndian
            } else {
                Self::LittleEndian
            }
        })
    }

    /// Returns `"little-endian"` or `"big-endian"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::LittleEndian => "little-endian",
            Self::BigEndian => "big-endian",
        }
    }

    pub fn is_little(self) -> bool {
        matches!(self, Self::LittleEndian)
    }

    pub fn is_big(self) -> bool {
        matches!(self, Self::BigEndian)
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! endian_codec {
    ($ty:ident, $size:literal, $encode:ident, $decode:ident, $try_decode:ident, $read:ident, $write:ident) => {
        impl Endianness {
            /// Encodes `value` into its fixed-size byte representation.
            pub fn $encode(self, value: $ty) -> [u8; $size] {
                let mut buf = [0u8; $size];
                match self {
                    Self::LittleEndian => LE::$write(&mut buf, value),
                    Self::BigEndian => BE::$write(&mut buf, value),
                }
                buf
            }

            /// Decodes a fixed-size byte sequence in this byte order.
            pub fn $decode(self, bytes: [u8; $size]) -> $ty {
                match self {
                    Self::LittleEndian => LE::$read(&bytes),
                    Self::BigEndian => BE::$read(&bytes),
                }
            }

            /// Decodes `bytes` in this byte order, failing with
            /// [`Error::InvalidLength`] unless the slice holds exactly
            /// the integer's width in bytes.
            pub fn $try_decode(self, bytes: &[u8]) -> Result<$ty> {
                match <[u8; $size]>::try_from(bytes) {
                    Ok(array) => Ok(self.$decode(array)),
                    Err(_) => Err(Error::InvalidLength {
                        expected: $size,
                        actual: bytes.len(),
                    }),
                }
            }

            /// Obtains the integer's bytes from `reader`, one byte per
            /// request, and decodes them in this byte order.
            ///
            /// If the reader errors or runs dry first, the returned
            /// [`Error::Io`] names the byte index that could not be
            /// obtained and no value is produced.
            pub fn $read<R: Read>(self, mut reader: R) -> Result<$ty> {
                let mut buf = [0u8; $size];
                for index in 0..buf.len() {
                    reader
                        .read_exact(&mut buf[index..index + 1])
                        .map_err(|source| Error::Io { index, source })?;
                }
                Ok(self.$decode(buf))
            }

            /// Encodes `value` and writes all of its bytes to `writer`,
            /// returning the number of bytes written.
            ///
            /// Short accepts are continued until the full width is on the
            /// sink. A writer error, including a zero-length accept, is
            /// returned as [`Error::Io`] naming the first unwritten byte;
            /// nothing is retried.
            pub fn $write<W: Write>(self, mut writer: W, value: $ty) -> Result<usize> {
                let buf = self.$encode(value);
                let mut written = 0;
                while written < buf.len() {
                    match writer.write(&buf[written..]) {
                        Ok(0) => {
                            return Err(Error::Io {
                                index: written,
                                source: io::ErrorKind::WriteZero.into(),
                            })
                        }
                        Ok(n) => written += n,
                        Err(source) => {
                            return Err(Error::Io {
                                index: written,
                                source,
                            })
                        }
                    }
                }
                Ok(written)
            }
        }
    };
}

endian_codec!(u16, 2, encode_u16, decode_u16, try_decode_u16, read_u16, write_u16);
endian_codec!(u32, 4, encode_u32, decode_u32, try_decode_u32, read_u32, write_u32);
endian_codec!(u64, 8, encode_u64, decode_u64, try_decode_u64, read_u64, write_u64);
