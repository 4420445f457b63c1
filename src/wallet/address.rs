//! CIP-30 returns addresses as raw hex bytes. Shelley addresses are shown and
//! relayed in their bech32 form (CIP-19); anything else passes through as hex.

use bech32::{Bech32, Hrp};

/// Header type nibbles 0..=7 are Shelley payment addresses, 14/15 are reward
/// (stake) addresses. Byron (8) keeps its base58 form and is not handled here.
fn hrp_for(header: u8) -> Option<&'static str> {
    let kind = header >> 4;
    let mainnet = header & 0x0f == 1;
    match (kind, mainnet) {
        (0..=7, true) => Some("addr"),
        (0..=7, false) => Some("addr_test"),
        (14 | 15, true) => Some("stake"),
        (14 | 15, false) => Some("stake_test"),
        _ => None,
    }
}

/// Convert a hex-encoded address to bech32 where possible.
///
/// Input that is not hex, or whose header is not a Shelley/reward address,
/// is returned unchanged.
pub fn display_address(raw: &str) -> String {
    let Ok(bytes) = hex::decode(raw) else {
        return raw.to_string();
    };
    let Some(hrp) = bytes.first().copied().and_then(hrp_for) else {
        return raw.to_string();
    };
    let Ok(hrp) = Hrp::parse(hrp) else {
        return raw.to_string();
    };
    bech32::encode::<Bech32>(hrp, &bytes).unwrap_or_else(|_| raw.to_string())
}

/// Inverse of [`display_address`]: the hex form CIP-30 `signData` expects.
pub fn raw_address(display: &str) -> String {
    match bech32::decode(display) {
        Ok((_, bytes)) => hex::encode(bytes),
        Err(_) => display.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(header: u8) -> String {
        let mut bytes = vec![header];
        bytes.extend([0xabu8; 56]);
        hex::encode(bytes)
    }

    #[test]
    fn mainnet_base_address_is_bech32_addr() {
        let encoded = display_address(&payload(0x01));
        assert!(encoded.starts_with("addr1"));

        let (hrp, data) = bech32::decode(&encoded).unwrap();
        assert_eq!(hrp.as_str(), "addr");
        assert_eq!(hex::encode(data), payload(0x01));
    }

    #[test]
    fn testnet_and_stake_prefixes() {
        assert!(display_address(&payload(0x00)).starts_with("addr_test1"));
        assert!(display_address(&payload(0x61)).starts_with("addr1"));
        assert!(display_address(&payload(0xe1)).starts_with("stake1"));
        assert!(display_address(&payload(0xe0)).starts_with("stake_test1"));
    }

    #[test]
    fn raw_address_recovers_hex() {
        let hex_form = payload(0x01);
        assert_eq!(raw_address(&display_address(&hex_form)), hex_form);
        assert_eq!(raw_address("not-bech32"), "not-bech32");
    }

    #[test]
    fn passthrough_for_non_hex_and_byron() {
        assert_eq!(display_address("addr1already"), "addr1already");
        let byron = payload(0x82);
        assert_eq!(display_address(&byron), byron);
    }
}
