//! GF(256) arithmetic and Reed-Solomon parity generation

/// GF(256) arithmetic for QR codes, reduction polynomial
/// x^8 + x^4 + x^3 + x^2 + 1 (0x11d)
pub struct Gf256;

impl Gf256 {
    /// Multiply two field elements (peasant multiplication with conditional
    /// XOR reduction)
    pub fn mul(a: u8, b: u8) -> u8 {
        let mut product: u16 = 0;
        let mut a = a as u16;
        let mut b = b as u16;
        while a != 0 && b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & 0x100 != 0 {
                a ^= 0x11d;
            }
        }
        product as u8
    }

    /// alpha^n for the generator element alpha = 2
    pub fn pow(n: usize) -> u8 {
        let mut result = 1u8;
        for _ in 0..n % 255 {
            result = Gf256::mul(result, 2);
        }
        result
    }
}

/// Reed-Solomon parity generator for one error correction block
pub struct ReedSolomonEncoder {
    /// Generator polynomial coefficients in descending power order, leading
    /// 1 omitted
    coefficients: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the degree-`num_ecc` generator polynomial, the product of
    /// (x - alpha^i) for i in 0..num_ecc
    pub fn new(num_ecc: usize) -> Self {
        let mut gpoly = vec![0u8; num_ecc + 1];
        gpoly[0] = 1;
        for i in 0..num_ecc {
            let root = Gf256::pow(i);
            // Multiply gpoly by (x + root); gpoly is in ascending order here
            for j in (1..=i + 1).rev() {
                gpoly[j] = gpoly[j - 1] ^ Gf256::mul(gpoly[j], root);
            }
            gpoly[0] = Gf256::mul(gpoly[0], root);
        }

        // Flip to descending order and drop the leading coefficient
        let mut coefficients: Vec<u8> = gpoly[0..num_ecc].to_vec();
        coefficients.reverse();
        Self { coefficients }
    }

    /// Number of parity bytes this encoder produces
    pub fn num_ecc(&self) -> usize {
        self.coefficients.len()
    }

    /// Compute the parity bytes for one block of data codewords.
    /// The remainder comes back in descending power order, ready to append
    /// to the codeword stream.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let n = self.coefficients.len();
        let mut results = vec![0u8; n];
        for &byte in data {
            let multiplier = byte ^ results[0];
            for j in 0..n {
                let shifted = if j + 1 == n { 0 } else { results[j + 1] };
                results[j] = shifted ^ Gf256::mul(self.coefficients[j], multiplier);
            }
        }
        results
    }
}
