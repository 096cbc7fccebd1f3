//! # 错误类型模块
//!
//! 定义隐写流水线所有阶段共用的错误枚举。
//! 所有错误均由调用方输入引起，不做重试，直接携带描述性信息上抛。

use std::path::PathBuf;
use thiserror::Error;

/// 隐写编码、解码及载体加载过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 位宽超出 1..=8 的合法范围。
    #[error("invalid bit width {0}, expected a value between 1 and 8")]
    InvalidBitWidth(u8),

    /// 载体容量不足以容纳完整的带头部消息。
    #[error("carrier too small: {required} bits required, but capacity is {capacity} bits")]
    CarrierTooSmall { required: usize, capacity: usize },

    /// 消息长度超出 3 字节头部所能表示的范围。
    #[error("message of {0} bytes exceeds the 16,777,215 byte header limit")]
    HeaderOverflow(usize),

    /// 头部声称的负载长度超出了载体实际能提供的数据量。
    #[error("truncated carrier: {claimed} bytes claimed, but only {available} available")]
    TruncatedCarrier { claimed: usize, available: usize },

    /// 请求提取的比特数不是 8 的整数倍，无法重组为完整字节。
    #[error("bit count {0} is not a multiple of 8")]
    UnalignedBitCount(usize),

    /// 载体文件不存在。
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// 载体路径不是可读的常规文件。
    #[error("source file cannot be read: {}", .0.display())]
    SourceUnreadable(PathBuf),

    /// 载体文件的扩展名不在受支持的无损格式之列。
    #[error("unsupported image format: {0:?}, expected one of bmp/png/tif/tiff/webp/qoi")]
    UnsupportedFormat(String),

    /// 像素坐标越界。
    #[error("pixel ({x}, {y}) is out of range for a {width}x{height} image")]
    PixelOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// 请求访问 Alpha 通道，但图像不含 Alpha 通道。
    #[error("image has no alpha channel")]
    NoAlphaChannel,

    /// 一次性密码本的密钥长度与数据长度不一致。
    #[error("pad key length {key} does not match data length {data}")]
    KeyLengthMismatch { data: usize, key: usize },

    /// 底层图像解码或编码失败。
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
