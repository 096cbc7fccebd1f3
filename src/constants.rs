/// 长度头部占用的字节数。
/// 头部以大端序存储负载长度，解码端据此确定要提取多少负载字节。
pub const HEADER_SIZE: usize = 3;

/// 负载的最大长度 (字节)。
/// 3 字节头部最多能表示 2^24 - 1 = 16,777,215，超出的消息必须被显式拒绝。
pub const MAX_PAYLOAD_SIZE: usize = (1 << 24) - 1;

/// 每个载体字节可用于嵌入的最小低位比特数。
pub const MIN_BIT_WIDTH: u8 = 1;

/// 每个载体字节可用于嵌入的最大低位比特数。
/// 取 8 时整个载体字节都会被消息数据覆盖。
pub const MAX_BIT_WIDTH: u8 = 8;

/// 受支持的无损图像格式扩展名。
/// 与 `image` crate 启用的解码器保持一致；有损格式会破坏低位数据，因此不受支持。
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "png", "tif", "tiff", "webp", "qoi"];

/// 未指定输出路径时，默认输出文件名的前缀。
pub const DEFAULT_OUTPUT_PREFIX: &str = "doctored_";
