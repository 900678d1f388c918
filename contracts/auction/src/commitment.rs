use soroban_sdk::{Bytes, BytesN, Env};

/// SHA-256 over the big-endian 16-byte price followed by the 32-byte salt.
pub fn hash_price(env: &Env, price: i128, salt: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &price.to_be_bytes());
    let salt_bytes: Bytes = salt.clone().into();
    preimage.append(&salt_bytes);
    env.crypto().sha256(&preimage).to_bytes()
}

pub fn verify(env: &Env, commitment: &BytesN<32>, price: i128, salt: &BytesN<32>) -> bool {
    hash_price(env, price, salt) == *commitment
}
