//! # 一次性密码本模块
//!
//! 在嵌入前对数据做逐字节模 256 加法掩码，提取后做逆运算。
//! 密钥与数据等长，每次加密都必须重新生成，绝不能跨消息复用。

use crate::error::StegoError;
use rand::RngCore;

/// 生成与数据等长的随机密钥，随机源为密码学安全的生成器。
pub fn gen_key(length: usize) -> Vec<u8> {
    let mut key = vec![0u8; length];
    rand::rng().fill_bytes(&mut key);
    key
}

fn check_lengths(data: &[u8], key: &[u8]) -> Result<(), StegoError> {
    if data.len() != key.len() {
        return Err(StegoError::KeyLengthMismatch {
            data: data.len(),
            key: key.len(),
        });
    }
    Ok(())
}

/// `ciphertext[i] = (data[i] + key[i]) mod 256`
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    check_lengths(data, key)?;
    Ok(data
        .iter()
        .zip(key)
        .map(|(&d, &k)| d.wrapping_add(k))
        .collect())
}

/// `data[i] = (ciphertext[i] - key[i] + 256) mod 256`
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, StegoError> {
    check_lengths(ciphertext, key)?;
    Ok(ciphertext
        .iter()
        .zip(key)
        .map(|(&c, &k)| c.wrapping_sub(k))
        .collect())
}
