//! # endian-io
//!
//! This crate encodes and decodes fixed-width unsigned integers (16, 32
//! and 64 bits) to and from byte sequences, in an explicitly chosen byte
//! order, and detects the byte order the executing machine uses natively.
//!
//! ## Example
//!
//! ```rust
//! use endian_io::Endianness;
//!
//! # fn main() -> Result<(), endian_io::Error> {
//! // Fixed-size buffers: encode and decode are total.
//! let bytes = Endianness::BigEndian.encode_u32(0xDEAD_BEEF);
//! assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
//! assert_eq!(Endianness::BigEndian.decode_u32(bytes), 0xDEAD_BEEF);
//!
//! // Streams: write to any io::Write, read back from any io::Read.
//! let mut out = Vec::new();
//! Endianness::LittleEndian.write_u16(&mut out, 0x1234)?;
//! assert_eq!(out, [0x34, 0x12]);
//! assert_eq!(Endianness::LittleEndian.read_u16(&out[..])?, 0x1234);
//!
//! // The byte order of the machine we are running on.
//! assert_eq!(Endianness::host(), Endianness::NATIVE);
//! assert_eq!(Endianness::BigEndian.name(), "big-endian");
//! # Ok(())
//! # }
//! ```

mod endian;
mod error;
mod random;

pub use endian::*;
pub use error::*;
pub use random::*;

#[cfg(test)]
mod test {
    use crate::Endianness;

    #[test]
    fn it_works() {
        // A header with fields of mixed widths and mixed byte orders.
        let mut out = Vec::new();
        Endianness::BigEndian.write_u16(&mut out, 0xCAFE).unwrap();
        Endianness::LittleEndian
            .write_u32(&mut out, 0xDEAD_BEEF)
            .unwrap();
        Endianness::BigEndian
            .write_u64(&mut out, 0x0102_0304_0506_0708)
            .unwrap();
        assert_eq!(
            out,
            [0xCA, 0xFE, 0xEF, 0xBE, 0xAD, 0xDE, 1, 2, 3, 4, 5, 6, 7, 8]
        );

        let mut reader = &out[..];
        assert_eq!(Endianness::BigEndian.read_u16(&mut reader).unwrap(), 0xCAFE);
        assert_eq!(
            Endianness::LittleEndian.read_u32(&mut reader).unwrap(),
            0xDEAD_BEEF
        );
        assert_eq!(
            Endianness::BigEndian.read_u64(&mut reader).unwrap(),
            0x0102_0304_0506_0708
        );
        assert!(reader.is_empty());
    }
}
