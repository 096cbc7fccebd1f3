//! # 载体模块
//!
//! 负责图像文件与扁平字节序列之间的相互转换。
//!
//! 编解码核心只消费一个有序字节序列，本模块定义其线性化顺序：
//! 外层遍历 X (列)，内层遍历 Y (行)，对每个像素依固定顺序输出通道字节
//! (含 Alpha 时为 Alpha, Red, Green, Blue，否则为 Red, Green, Blue)。
//! 读取与写回必须使用完全相同的遍历，否则编解码操作的是错位的载体视图。

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::StegoError;
use crate::steganography;
use image::{ImageBuffer, Rgb, Rgba};
use std::fs::File;
use std::path::Path;

/// 像素内的单个颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

/// 一幅已线性化的载体图像。
///
/// 加载后尺寸与通道布局固定不变，编码阶段原地改写字节，
/// 保存时按相同的遍历顺序还原为像素。
#[derive(Debug, Clone)]
pub struct Carrier {
    width: u32,
    height: u32,
    has_alpha: bool,
    bytes: Vec<u8>,
}

impl Carrier {
    /// 从图像文件加载载体。
    ///
    /// 依次校验：路径存在、是可读的常规文件、扩展名属于受支持的无损格式，
    /// 然后解码图像并按列主序展开通道字节。
    pub fn load(path: &Path) -> Result<Self, StegoError> {
        validate_source(path)?;

        let img = image::open(path)?;
        let has_alpha = img.color().has_alpha();
        let (width, height) = (img.width(), img.height());

        let mut bytes = Vec::with_capacity(
            width as usize * height as usize * if has_alpha { 4 } else { 3 },
        );

        if has_alpha {
            let rgba = img.to_rgba8();
            for x in 0..width {
                for y in 0..height {
                    let pixel = rgba.get_pixel(x, y);
                    bytes.push(pixel[3]);
                    bytes.push(pixel[0]);
                    bytes.push(pixel[1]);
                    bytes.push(pixel[2]);
                }
            }
        } else {
            let rgb = img.to_rgb8();
            for x in 0..width {
                for y in 0..height {
                    let pixel = rgb.get_pixel(x, y);
                    bytes.push(pixel[0]);
                    bytes.push(pixel[1]);
                    bytes.push(pixel[2]);
                }
            }
        }

        Ok(Self {
            width,
            height,
            has_alpha,
            bytes,
        })
    }

    /// 按加载时的遍历顺序将线性字节还原为像素并写入图像文件。
    /// 输出格式由目标路径的扩展名决定。
    pub fn save(&self, path: &Path) -> Result<(), StegoError> {
        if self.has_alpha {
            let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> =
                ImageBuffer::new(self.width, self.height);
            let mut index = 0;
            for x in 0..self.width {
                for y in 0..self.height {
                    let (a, r, g, b) = (
                        self.bytes[index],
                        self.bytes[index + 1],
                        self.bytes[index + 2],
                        self.bytes[index + 3],
                    );
                    img.put_pixel(x, y, Rgba([r, g, b, a]));
                    index += 4;
                }
            }
            img.save(path)?;
        } else {
            let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> =
                ImageBuffer::new(self.width, self.height);
            let mut index = 0;
            for x in 0..self.width {
                for y in 0..self.height {
                    let (r, g, b) = (
                        self.bytes[index],
                        self.bytes[index + 1],
                        self.bytes[index + 2],
                    );
                    img.put_pixel(x, y, Rgb([r, g, b]));
                    index += 3;
                }
            }
            img.save(path)?;
        }

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// 每个像素在线性视图中占用的字节数。
    pub fn channels_per_pixel(&self) -> usize {
        if self.has_alpha { 4 } else { 3 }
    }

    /// 载体的线性字节视图，解码时只读。
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 载体的可变线性字节视图，编码时原地改写低位。
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// 给定位宽下的总嵌入容量 (比特)。
    pub fn capacity_bits(&self, bit_width: u8) -> usize {
        steganography::capacity_bits(self.bytes.len(), bit_width)
    }

    /// 读取指定像素的单个通道值。
    /// 坐标越界返回 [`StegoError::PixelOutOfRange`]。
    pub fn channel(&self, x: u32, y: u32, channel: Channel) -> Result<u8, StegoError> {
        let offset = self.offset(x, y, channel)?;
        Ok(self.bytes[offset])
    }

    /// 改写指定像素的单个通道值。
    pub fn set_channel(
        &mut self,
        x: u32,
        y: u32,
        channel: Channel,
        value: u8,
    ) -> Result<(), StegoError> {
        let offset = self.offset(x, y, channel)?;
        self.bytes[offset] = value;
        Ok(())
    }

    /// 坐标到线性偏移的映射，索引前校验 `x < width` 且 `y < height`。
    fn offset(&self, x: u32, y: u32, channel: Channel) -> Result<usize, StegoError> {
        if x >= self.width || y >= self.height {
            return Err(StegoError::PixelOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let slot = match (channel, self.has_alpha) {
            (Channel::Alpha, true) => 0,
            (Channel::Alpha, false) => return Err(StegoError::NoAlphaChannel),
            (Channel::Red, alpha) => alpha as usize,
            (Channel::Green, alpha) => alpha as usize + 1,
            (Channel::Blue, alpha) => alpha as usize + 2,
        };

        let pixel = x as usize * self.height as usize + y as usize;
        Ok(pixel * self.channels_per_pixel() + slot)
    }
}

fn validate_source(path: &Path) -> Result<(), StegoError> {
    if !path.exists() {
        return Err(StegoError::SourceNotFound(path.to_path_buf()));
    }
    if !path.is_file() || File::open(path).is_err() {
        return Err(StegoError::SourceUnreadable(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(StegoError::UnsupportedFormat(extension));
    }

    Ok(())
}
