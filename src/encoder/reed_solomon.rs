//! Reed-Solomon error correction for the Version-1/L symbol
//!
//! Systematic encoding: the 7 ECC codewords are the remainder of the data
//! polynomial (times x^7) divided by the generator polynomial in GF(256).

use super::galois::gf_mul;
use super::{DATA_CODEWORDS, ECC_CODEWORDS};

/// Version-1/L generator polynomial coefficients (degree 7, leading term
/// dropped), in descending order of the remaining powers of x.
const GENERATOR: [u8; ECC_CODEWORDS] = [87, 229, 146, 149, 238, 102, 21];

/// Compute the 7 ECC codewords for a 19-byte data codeword block
pub fn rs_encode(data: &[u8; DATA_CODEWORDS]) -> [u8; ECC_CODEWORDS] {
    let mut ecc = [0u8; ECC_CODEWORDS];

    for &byte in data.iter() {
        let factor = byte ^ ecc[0];
        // Shift the accumulator left by one position
        for j in 0..ECC_CODEWORDS - 1 {
            ecc[j] = ecc[j + 1];
        }
        ecc[ECC_CODEWORDS - 1] = 0;
        // XOR in generator * factor
        for j in 0..ECC_CODEWORDS {
            ecc[j] ^= gf_mul(GENERATOR[j], factor);
        }
    }

    ecc
}
