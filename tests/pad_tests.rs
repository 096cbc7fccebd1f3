use lsb_stash::error::StegoError;
use lsb_stash::pad::{decrypt, encrypt, gen_key};
use rand::RngCore;

/// 验证等长密钥下加解密互逆 (性质 4)
#[test]
fn test_pad_inverse() -> anyhow::Result<()> {
    let data: Vec<u8> = (0..=255).collect();
    let key = gen_key(data.len());

    let ciphertext = encrypt(&data, &key)?;
    assert_eq!(decrypt(&ciphertext, &key)?, data);

    // 单字节全值域穷举
    for d in 0..=255u8 {
        for k in (0..=255u8).step_by(17) {
            let c = encrypt(&[d], &[k])?;
            assert_eq!(decrypt(&c, &[k])?, [d]);
        }
    }

    Ok(())
}

/// 验证模 256 加法的回绕行为
#[test]
fn test_known_values() -> anyhow::Result<()> {
    assert_eq!(encrypt(&[250], &[10])?, [4]);
    assert_eq!(decrypt(&[4], &[10])?, [250]);
    assert_eq!(encrypt(&[0], &[0])?, [0]);
    assert_eq!(encrypt(&[255], &[255])?, [254]);
    Ok(())
}

/// 验证密钥生成的长度与新鲜度
#[test]
fn test_gen_key() {
    assert_eq!(gen_key(0).len(), 0);
    assert_eq!(gen_key(64).len(), 64);

    // 两次生成得到相同 32 字节密钥的概率可以忽略不计
    assert_ne!(gen_key(32), gen_key(32), "keys must be fresh per call");
}

/// 验证密钥与数据长度不一致时被拒绝
#[test]
fn test_key_length_mismatch() {
    let mut data = vec![0u8; 8];
    rand::rng().fill_bytes(&mut data);

    assert!(matches!(
        encrypt(&data, &[1, 2, 3]),
        Err(StegoError::KeyLengthMismatch { data: 8, key: 3 })
    ));
    assert!(matches!(
        decrypt(&data, &gen_key(9)),
        Err(StegoError::KeyLengthMismatch { data: 8, key: 9 })
    ));
}
