//! ECDSA over SHA-256 digests.
//!
//! Signatures are canonical (low-S) and DER-encoded, which is what the node's
//! secp256k1 verifier accepts.

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::Signature;
use sha2::{Digest, Sha256};

use crate::crypto::keys::{verifying_key_from_hex, KeyError, KeyPair};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Sign a 32-byte digest, returning the DER encoding of the low-S signature.
pub fn sign_digest(key: &KeyPair, digest: &[u8; 32]) -> Result<Vec<u8>, KeyError> {
    let signature: Signature = key
        .signing_key()
        .sign_prehash(digest)
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;
    let signature = signature.normalize_s().unwrap_or(signature);
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Verify a DER signature over a 32-byte digest. Malformed input yields `false`.
pub fn verify_digest(pub_key_hex: &str, digest: &[u8; 32], der: &[u8]) -> bool {
    let Ok(verifying_key) = verifying_key_from_hex(pub_key_hex) else {
        return false;
    };
    let Ok(signature) = Signature::from_der(der) else {
        return false;
    };
    verifying_key.verify_prehash(digest, &signature).is_ok()
}

/// Hash `msg` with SHA-256 and sign it. Returns the hex DER signature.
pub fn sign_with_sha256(msg: &[u8], priv_key_hex: &str) -> Result<String, KeyError> {
    let key = KeyPair::from_priv_key_hex(priv_key_hex)?;
    Ok(hex::encode(sign_digest(&key, &sha256(msg))?))
}

/// Verify a hex DER signature produced by [`sign_with_sha256`].
pub fn verify_with_sha256(msg: &[u8], pub_key_hex: &str, sig_hex: &str) -> bool {
    match hex::decode(sig_hex) {
        Ok(der) => verify_digest(pub_key_hex, &sha256(msg), &der),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::gen_priv_key_hex;

    #[test]
    fn test_sign_and_verify() {
        let kp = KeyPair::generate();
        let msg = b"send 1 LNO to bob";
        let sig = sign_with_sha256(msg, &kp.priv_key_hex()).unwrap();
        assert!(verify_with_sha256(msg, &kp.pub_key_hex(), &sig));
    }

    #[test]
    fn test_flipped_message_byte_fails() {
        let kp = KeyPair::generate();
        let msg = b"send 1 LNO to bob".to_vec();
        let sig = sign_with_sha256(&msg, &kp.priv_key_hex()).unwrap();
        for i in 0..msg.len() {
            let mut tampered = msg.clone();
            tampered[i] ^= 0x01;
            assert!(!verify_with_sha256(&tampered, &kp.pub_key_hex(), &sig));
        }
    }

    #[test]
    fn test_flipped_signature_byte_fails() {
        let kp = KeyPair::generate();
        let msg = b"hello lino";
        let sig = hex::decode(sign_with_sha256(msg, &kp.priv_key_hex()).unwrap()).unwrap();
        for i in 0..sig.len() {
            let mut tampered = sig.clone();
            tampered[i] ^= 0x01;
            assert!(!verify_with_sha256(msg, &kp.pub_key_hex(), &hex::encode(&tampered)));
        }
    }

    #[test]
    fn test_wrong_key_fails() {
        let msg = b"hello lino";
        let sig = sign_with_sha256(msg, &gen_priv_key_hex()).unwrap();
        let other = KeyPair::generate();
        assert!(!verify_with_sha256(msg, &other.pub_key_hex(), &sig));
    }

    #[test]
    fn test_signature_is_low_s() {
        let kp = KeyPair::generate();
        for i in 0u8..16 {
            let der = sign_digest(&kp, &sha256(&[i])).unwrap();
            let sig = Signature::from_der(&der).unwrap();
            assert!(sig.normalize_s().is_none());
        }
    }

    #[test]
    fn test_malformed_signature_is_false() {
        let kp = KeyPair::generate();
        assert!(!verify_with_sha256(b"x", &kp.pub_key_hex(), "not-hex"));
        assert!(!verify_with_sha256(b"x", &kp.pub_key_hex(), "3006020101020101"));
        assert!(!verify_with_sha256(b"x", "bogus", "3006020101020101"));
    }
}
