use rand::rngs::OsRng;
use rand::RngCore;

use crate::endian::Endianness;
use crate::error::{Error, Result};

fn fill(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|source| Error::Io {
        index: 0,
        source: source.into(),
    })
}

/// Draws a uniformly random `u16` from the operating system's CSPRNG.
pub fn random_u16() -> Result<u16> {
    let mut buf = [0u8; 2];
    fill(&mut buf)?;
    Ok(Endianness::host().decode_u16(buf))
}

/// Draws a uniformly random `u32` from the operating system's CSPRNG.
pub fn random_u32() -> Result<u32> {
    let mut buf = [0u8; 4];
    fill(&mut buf)?;
    Ok(Endianness::host().decode_u32(buf))
}

/// Draws a uniformly random `u64` from the operating system's CSPRNG.
pub fn random_u64() -> Result<u64> {
    let mut buf = [0u8; 8];
    fill(&mut buf)?;
    Ok(Endianness::host().decode_u64(buf))
}

#[cfg(test)]
mod test {
    use super::{random_u16, random_u32, random_u64};

    #[test]
    fn draws_values_of_every_width() {
        random_u16().unwrap();
        random_u32().unwrap();
        random_u64().unwrap();
    }

    #[test]
    fn u64_draws_cover_the_high_bytes() {
        let any_high = (0..32).any(|_| random_u64().unwrap() > u64::from(u32::MAX));
        assert!(any_high);
    }
}
