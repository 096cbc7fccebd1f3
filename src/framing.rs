//! # 长度帧模块
//!
//! 在负载前添加 3 字节大端序长度头部，解码端据此从容量未知的载体流中
//! 恢复出准确的负载边界。

use crate::constants::{HEADER_SIZE, MAX_PAYLOAD_SIZE};
use crate::error::StegoError;

/// 构造带头部的消息：`[3 字节大端序长度][负载]`。
/// 负载超过头部可表示的上限时返回 [`StegoError::HeaderOverflow`]。
pub fn embed_header(payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(StegoError::HeaderOverflow(payload.len()));
    }

    let len = payload.len() as u32;
    let mut framed = Vec::with_capacity(HEADER_SIZE + payload.len());
    framed.extend_from_slice(&len.to_be_bytes()[1..]);
    framed.extend_from_slice(payload);
    Ok(framed)
}

/// 将前 3 个字节解释为无符号 24 位大端序整数。
pub fn read_header_length(framed: &[u8]) -> Result<usize, StegoError> {
    if framed.len() < HEADER_SIZE {
        return Err(StegoError::TruncatedCarrier {
            claimed: HEADER_SIZE,
            available: framed.len(),
        });
    }

    let mut bytes = [0u8; 4];
    bytes[1..].copy_from_slice(&framed[..HEADER_SIZE]);
    Ok(u32::from_be_bytes(bytes) as usize)
}

/// 按头部声称的长度取出负载字节 `[3, 3 + len)`。
/// 数据比头部声称的短时返回 [`StegoError::TruncatedCarrier`]，不返回截断的数据。
pub fn extract_payload(framed: &[u8]) -> Result<Vec<u8>, StegoError> {
    let len = read_header_length(framed)?;
    if framed.len() < HEADER_SIZE + len {
        return Err(StegoError::TruncatedCarrier {
            claimed: len,
            available: framed.len() - HEADER_SIZE,
        });
    }

    Ok(framed[HEADER_SIZE..HEADER_SIZE + len].to_vec())
}
