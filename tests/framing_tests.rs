use lsb_stash::constants::MAX_PAYLOAD_SIZE;
use lsb_stash::error::StegoError;
use lsb_stash::framing::{embed_header, extract_payload, read_header_length};

/// 验证头部布局：3 字节大端序长度在前，负载紧随其后
#[test]
fn test_header_layout() -> anyhow::Result<()> {
    assert_eq!(embed_header(b"Hi")?, vec![0u8, 0, 2, 0x48, 0x69]);
    assert_eq!(embed_header(&[])?, vec![0u8, 0, 0]);

    let payload = vec![0xAAu8; 300];
    let framed = embed_header(&payload)?;
    assert_eq!(&framed[..3], &[0x00, 0x01, 0x2C]);
    assert_eq!(&framed[3..], payload.as_slice());

    Ok(())
}

/// 验证头部长度字段按大端序解释
#[test]
fn test_read_header_length_big_endian() -> anyhow::Result<()> {
    assert_eq!(read_header_length(&[0x01, 0x02, 0x03])?, 0x010203);
    assert_eq!(read_header_length(&[0xFF, 0xFF, 0xFF])?, MAX_PAYLOAD_SIZE);
    assert_eq!(read_header_length(&[0x00, 0x00, 0x00])?, 0);
    Ok(())
}

/// 验证头部边界：16,777,215 字节可表示，16,777,216 字节被拒绝 (性质 3)
#[test]
fn test_header_bounds() -> anyhow::Result<()> {
    let payload = vec![0u8; MAX_PAYLOAD_SIZE];
    let framed = embed_header(&payload)?;
    assert_eq!(read_header_length(&framed)?, MAX_PAYLOAD_SIZE);

    let oversized = vec![0u8; MAX_PAYLOAD_SIZE + 1];
    assert!(matches!(
        embed_header(&oversized),
        Err(StegoError::HeaderOverflow(len)) if len == MAX_PAYLOAD_SIZE + 1
    ));

    Ok(())
}

/// 验证不足 3 字节的数据无法读出头部
#[test]
fn test_read_header_too_short() {
    assert!(matches!(
        read_header_length(&[0x00, 0x01]),
        Err(StegoError::TruncatedCarrier { .. })
    ));
}

/// 验证负载提取的往返与越界检查
#[test]
fn test_extract_payload() -> anyhow::Result<()> {
    let framed = embed_header(b"steganography")?;
    assert_eq!(extract_payload(&framed)?, b"steganography");

    // 头部声称 5 字节，实际只有 2 字节：必须报错而不是返回截断数据
    assert!(matches!(
        extract_payload(&[0, 0, 5, 1, 2]),
        Err(StegoError::TruncatedCarrier {
            claimed: 5,
            available: 2
        })
    ));

    Ok(())
}

/// 验证头部之后的多余字节会被忽略
#[test]
fn test_extract_payload_ignores_trailing_bytes() -> anyhow::Result<()> {
    assert_eq!(extract_payload(&[0, 0, 2, 0x48, 0x69, 0xFF, 0xFF])?, b"Hi");
    Ok(())
}
