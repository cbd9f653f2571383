//! Checksum and format validators used by the procedural detectors

use sha2::{Digest, Sha256};

pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BECH32_ALPHABET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const BECH32_CONST: u32 = 1;
const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Luhn mod-10 check over an all-digit string
pub fn luhn(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

fn base58_decode(input: &str) -> Option<Vec<u8>> {
    // Little-endian accumulator, reversed at the end
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());

    for c in input.bytes() {
        let mut carry = BASE58_ALPHABET.bytes().position(|a| a == c)? as u32;
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = input.bytes().take_while(|&c| c == b'1').count();
    bytes.extend(std::iter::repeat_n(0u8, leading_zeros));
    bytes.reverse();
    Some(bytes)
}

/// Legacy (P2PKH `1...`) and script (P2SH `3...`) addresses
pub fn base58check(address: &str) -> bool {
    let Some(decoded) = base58_decode(address) else {
        return false;
    };
    if decoded.len() != 25 {
        return false;
    }

    let version_ok = match address.as_bytes().first() {
        Some(b'1') => decoded[0] == 0x00,
        Some(b'3') => decoded[0] == 0x05,
        _ => false,
    };
    if !version_ok {
        return false;
    }

    let (payload, checksum) = decoded.split_at(21);
    let digest = Sha256::digest(Sha256::digest(payload));
    digest[..4] == *checksum
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut expanded: Vec<u8> = hrp.bytes().map(|b| b >> 5).collect();
    expanded.push(0);
    expanded.extend(hrp.bytes().map(|b| b & 31));
    expanded
}

/// Regroup 5-bit words into bytes, rejecting non-zero padding
fn convert_bits_5_to_8(data: &[u8]) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits = 0;
    let mut out = Vec::with_capacity(data.len() * 5 / 8);

    for &value in data {
        acc = ((acc << 5) | u32::from(value)) & 0xfff;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }

    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return None;
    }
    Some(out)
}

/// Segwit addresses (`bc1...`), bech32 for v0 and bech32m for later versions
pub fn bech32_address(address: &str) -> bool {
    let address = address.to_ascii_lowercase();
    let Some(data_part) = address.strip_prefix("bc1") else {
        return false;
    };
    if address.len() < 14 || address.len() > 90 {
        return false;
    }

    let Some(data) = data_part
        .bytes()
        .map(|c| BECH32_ALPHABET.bytes().position(|a| a == c).map(|p| p as u8))
        .collect::<Option<Vec<u8>>>()
    else {
        return false;
    };

    let mut values = hrp_expand("bc");
    values.extend_from_slice(&data);
    let constant = bech32_polymod(&values);

    let version = data[0];
    let expected = if version == 0 { BECH32_CONST } else { BECH32M_CONST };
    if version > 16 || constant != expected {
        return false;
    }

    let Some(program) = convert_bits_5_to_8(&data[1..data.len() - 6]) else {
        return false;
    };
    if !(2..=40).contains(&program.len()) {
        return false;
    }
    version != 0 || program.len() == 20 || program.len() == 32
}

fn ccc_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(d - b'0') * ((1u32 << i) % 11))
        .sum();
    let check = sum % 11;
    if check < 2 { check as u8 } else { (11 - check) as u8 }
}

/// Spanish Código Cuenta Cliente: 4 bank + 4 branch + 2 control + 10 account
pub fn spanish_ccc(number: &str) -> bool {
    let digits: Vec<u8> = number
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b'-')
        .collect();
    if digits.len() != 20 || !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut bank_branch = vec![b'0', b'0'];
    bank_branch.extend_from_slice(&digits[..8]);

    let first = ccc_check_digit(&bank_branch);
    let second = ccc_check_digit(&digits[10..]);
    digits[8] - b'0' == first && digits[9] - b'0' == second
}

const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Spanish DNI (8 digits) or NIE (X/Y/Z + 7 digits) followed by its control letter
pub fn spanish_dni_letter(id: &str) -> bool {
    let compact: Vec<u8> = id
        .bytes()
        .filter(|b| !matches!(b, b' ' | b'-'))
        .map(|b| b.to_ascii_uppercase())
        .collect();
    if compact.len() != 9 {
        return false;
    }

    let (body, letter) = compact.split_at(8);
    let mut number = String::with_capacity(8);
    for (i, &b) in body.iter().enumerate() {
        match (i, b) {
            (0, b'X') => number.push('0'),
            (0, b'Y') => number.push('1'),
            (0, b'Z') => number.push('2'),
            (_, b) if b.is_ascii_digit() => number.push(char::from(b)),
            _ => return false,
        }
    }

    match number.parse::<usize>() {
        Ok(n) => DNI_LETTERS[n % 23] == letter[0],
        Err(_) => false,
    }
}
