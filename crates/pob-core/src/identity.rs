//! Wallet signing identity
//!
//! The proof API authenticates operators by asking them to sign a one-time
//! message with an Ethereum account key. Signatures follow EIP-191
//! (`personal_sign`) and addresses are rendered with the EIP-55 checksum,
//! which is what the service verifies against.

use std::fmt;

use k256::{
    ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::error::{CoreError, Result};

/// Prefix prepended to every message before hashing (EIP-191 version 0x45)
const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Offset added to the recovery id in the serialized `v` byte
const RECOVERY_ID_OFFSET: u8 = 27;

/// Anything that can prove control of an account address
///
/// Implementations own their key material; callers only ever see the
/// address and signatures.
pub trait MessageSigner: Send + Sync {
    /// Checksummed `0x`-prefixed account address
    fn address(&self) -> &str;

    /// Sign `message` exactly as given, returning the `0x`-prefixed
    /// 65-byte `r || s || v` signature
    fn sign_message(&self, message: &str) -> Result<String>;
}

/// Software wallet holding a secp256k1 private key in memory
pub struct LocalWallet {
    signing_key: SigningKey,
    address: String,
}

impl LocalWallet {
    /// Build a wallet from a hex-encoded private key
    ///
    /// Surrounding whitespace and an optional `0x` prefix are accepted.
    pub fn from_hex(key: &str) -> Result<Self> {
        let trimmed = key.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(CoreError::InvalidKey("key material is empty".to_string()));
        }
        if digits.len() != 64 {
            return Err(CoreError::InvalidKey(format!(
                "expected 64 hex digits, got {}",
                digits.len()
            )));
        }

        let bytes = Zeroizing::new(
            hex::decode(digits).map_err(|e| CoreError::InvalidKey(e.to_string()))?,
        );
        Self::from_bytes(&bytes)
    }

    /// Build a wallet from raw 32-byte key material
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let signing_key =
            SigningKey::from_slice(bytes).map_err(|e| CoreError::InvalidKey(e.to_string()))?;
        let address = address_of(signing_key.verifying_key());
        Ok(Self {
            signing_key,
            address,
        })
    }
}

impl MessageSigner for LocalWallet {
    fn address(&self) -> &str {
        &self.address
    }

    fn sign_message(&self, message: &str) -> Result<String> {
        let digest = personal_message_hash(message);
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| CoreError::Crypto(format!("Signing failed: {}", e)))?;

        let mut encoded = [0u8; 65];
        encoded[..64].copy_from_slice(&signature.to_bytes());
        encoded[64] = RECOVERY_ID_OFFSET + recovery_id.to_byte();

        Ok(format!("0x{}", hex::encode(encoded)))
    }
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Keccak-256 of the EIP-191 framed message
pub fn personal_message_hash(message: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

/// Recover the checksummed address that produced `signature` over `message`
pub fn recover_address(message: &str, signature: &str) -> Result<String> {
    let digits = signature.strip_prefix("0x").unwrap_or(signature);
    let bytes = hex::decode(digits).map_err(|e| CoreError::InvalidSignature(e.to_string()))?;
    if bytes.len() != 65 {
        return Err(CoreError::InvalidSignature(format!(
            "expected 65 bytes, got {}",
            bytes.len()
        )));
    }

    let v = bytes[64]
        .checked_sub(RECOVERY_ID_OFFSET)
        .ok_or_else(|| CoreError::InvalidSignature(format!("bad recovery byte {}", bytes[64])))?;
    let recovery_id = RecoveryId::from_byte(v)
        .ok_or_else(|| CoreError::InvalidSignature(format!("bad recovery byte {}", bytes[64])))?;
    let signature = K256Signature::from_slice(&bytes[..64])
        .map_err(|e| CoreError::InvalidSignature(e.to_string()))?;

    let digest = personal_message_hash(message);
    let verifying_key = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
        .map_err(|e| CoreError::InvalidSignature(e.to_string()))?;

    Ok(address_of(&verifying_key))
}

/// Ethereum address of a public key, EIP-55 checksummed
fn address_of(verifying_key: &VerifyingKey) -> String {
    let point = k256::PublicKey::from(verifying_key).to_encoded_point(false);
    // Skip the 0x04 prefix
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    to_checksum_address(&hash[12..])
}

/// Render 20 address bytes with the EIP-55 mixed-case checksum
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    const TEST_ADDRESS: &str = "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23";

    #[test]
    fn test_address_matches_known_vector() {
        let wallet = LocalWallet::from_hex(TEST_KEY).unwrap();
        assert_eq!(wallet.address(), TEST_ADDRESS);
    }

    #[test]
    fn test_address_is_stable() {
        let wallet = LocalWallet::from_hex(TEST_KEY).unwrap();
        let first = wallet.address().to_string();
        assert_eq!(wallet.address(), first);
        assert_eq!(LocalWallet::from_hex(TEST_KEY).unwrap().address(), first);
    }

    #[test]
    fn test_key_whitespace_and_prefix_are_ignored() {
        let bare = TEST_KEY.trim_start_matches("0x");
        let padded = format!("  {}\n", bare);
        let wallet = LocalWallet::from_hex(&padded).unwrap();
        assert_eq!(wallet.address(), TEST_ADDRESS);
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert!(matches!(
            LocalWallet::from_hex("   \n"),
            Err(CoreError::InvalidKey(_))
        ));
        assert!(matches!(
            LocalWallet::from_hex("0xabc"),
            Err(CoreError::InvalidKey(_))
        ));
        assert!(matches!(
            LocalWallet::from_hex(&"zz".repeat(32)),
            Err(CoreError::InvalidKey(_))
        ));
        // Zero is not a valid scalar
        assert!(matches!(
            LocalWallet::from_hex(&"00".repeat(32)),
            Err(CoreError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_personal_message_hash_vector() {
        let hash = personal_message_hash("Some data");
        assert_eq!(
            hex::encode(hash),
            "1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655"
        );
    }

    #[test]
    fn test_sign_message_vector() {
        let wallet = LocalWallet::from_hex(TEST_KEY).unwrap();
        let signature = wallet.sign_message("Some data").unwrap();
        assert_eq!(
            signature,
            "0xb91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd\
             6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a0291c"
        );
    }

    #[test]
    fn test_signature_recovers_to_address() {
        let wallet = LocalWallet::from_hex(TEST_KEY).unwrap();
        let signature = wallet.sign_message("sign-this-nonce").unwrap();
        assert_eq!(signature.len(), 132);
        assert_eq!(
            recover_address("sign-this-nonce", &signature).unwrap(),
            wallet.address()
        );
        assert_ne!(
            recover_address("another-nonce", &signature).unwrap(),
            wallet.address()
        );
    }

    #[test]
    fn test_recover_rejects_malformed_signature() {
        assert!(recover_address("m", "0x1234").is_err());
        let mut bad_v = "00".repeat(64);
        bad_v.push_str("05");
        assert!(recover_address("m", &bad_v).is_err());
    }

    #[test]
    fn test_checksum_address_eip55_vectors() {
        let raw = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            to_checksum_address(&raw),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        let raw = hex::decode("fb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap();
        assert_eq!(
            to_checksum_address(&raw),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let wallet = LocalWallet::from_hex(TEST_KEY).unwrap();
        let debug = format!("{:?}", wallet);
        assert!(debug.contains(TEST_ADDRESS));
        assert!(!debug.contains("4c0883a6"));
    }
}
