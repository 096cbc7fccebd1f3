//! # 命令处理逻辑模块
//!
//! 包含处理 `view`、`encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::carrier::{Carrier, Channel};
use crate::cli::{DecodeArgs, EncodeArgs, ViewArgs};
use crate::constants::{DEFAULT_OUTPUT_PREFIX, HEADER_SIZE, MAX_BIT_WIDTH, MIN_BIT_WIDTH};
use crate::{framing, pad, steganography};
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'View' 命令的执行逻辑。
///
/// 加载图像并打印其尺寸、通道布局、左上角像素采样以及
/// 各位宽下扣除头部后的可嵌入消息容量。
///
/// # Arguments
///
/// * `args` - 包含输入路径的 `ViewArgs` 结构体。
///
/// # Errors
///
/// 如果图像文件无法加载，将返回错误。
pub fn handle_view(args: ViewArgs) -> Result<()> {
    let carrier = Carrier::load(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("Image: {}", args.image.to_string_lossy().cyan().bold());
    println!(
        "Dimensions: {} x {}",
        carrier.width().to_string().green(),
        carrier.height().to_string().green()
    );
    println!(
        "Channel layout: {}",
        if carrier.has_alpha() {
            "Alpha, Red, Green, Blue"
        } else {
            "Red, Green, Blue"
        }
    );

    if carrier.width() > 0 && carrier.height() > 0 {
        let red = carrier.channel(0, 0, Channel::Red)?;
        let green = carrier.channel(0, 0, Channel::Green)?;
        let blue = carrier.channel(0, 0, Channel::Blue)?;
        if carrier.has_alpha() {
            let alpha = carrier.channel(0, 0, Channel::Alpha)?;
            println!("Top-left pixel: A={alpha} R={red} G={green} B={blue}");
        } else {
            println!("Top-left pixel: R={red} G={green} B={blue}");
        }
    }

    println!("Message capacity (after the {HEADER_SIZE}-byte length header):");
    for bits in MIN_BIT_WIDTH..=MAX_BIT_WIDTH {
        let capacity = (carrier.capacity_bits(bits) / 8).saturating_sub(HEADER_SIZE);
        println!(
            "  {} bit(s) per carrier byte: {} bytes",
            bits,
            capacity.to_string().green()
        );
    }

    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、为消息添加长度头部、按需套用一次性密码本、
/// 检查嵌入空间是否足够、调用隐写核心函数写入低位，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、位宽及各开关的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法加载输入图像或读取文本文件。
/// * 位宽不在 1-8 范围内，或消息超出头部可表示的长度。
/// * 图像在该位宽下没有足够的空间容纳带头部的消息。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let mut carrier = Carrier::load(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        (MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&args.bits),
        "Bit width must be between {MIN_BIT_WIDTH} and {MAX_BIT_WIDTH}, got {}",
        args.bits.to_string().red().bold()
    );

    let framed = framing::embed_header(&text)
        .context("The message is too long for the 3-byte length header.")?;

    let (framed, key) = if args.pad {
        let key = pad::gen_key(framed.len());
        let ciphertext =
            pad::encrypt(&framed, &key).context("Failed to apply the one-time pad.")?;
        (ciphertext, Some(key))
    } else {
        (framed, None)
    };

    let required_space = framed.len() * 8;
    let available_space = carrier.capacity_bits(args.bits);

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the message. \nRequired: {} bits, Available: {} bits",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    steganography::encode(carrier.bytes_mut(), &framed, args.bits)
        .context("Failed to embed the message into the image data.")?;

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    check_overwrite(&dest, args.force)?;

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    if let Some(key) = key {
        println!(
            "One-time pad key (transmit it out-of-band, it is never saved): {}",
            STANDARD.encode(&key).yellow().bold()
        );
    }

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责加载经过隐写的图像、从低位读出长度头部与负载
/// (提供密钥时先解开一次性密码本)，
/// 最后将恢复的消息写入目标文件或打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、位宽及密钥的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法加载输入图像。
/// * 位宽不在 1-8 范围内，或密钥不是合法的 base64。
/// * 头部声称的消息长度超出了图像在该位宽下的容量。
/// * 输出文件已存在且未指定 `--force`，或无法写入输出文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let carrier = Carrier::load(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        (MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&args.bits),
        "Bit width must be between {MIN_BIT_WIDTH} and {MAX_BIT_WIDTH}, got {}",
        args.bits.to_string().red().bold()
    );

    let framed = match &args.key {
        Some(encoded_key) => {
            let key = STANDARD
                .decode(encoded_key)
                .context("The pad key is not valid base64.")?;
            let ciphertext = steganography::decode(carrier.bytes(), args.bits, key.len() * 8)
                .with_context(|| {
                    format!(
                        "Failed to read {} pad-covered bytes from '{}'. \nThe key may not belong to this image.",
                        key.len().to_string().red().bold(),
                        args.image.to_string_lossy().red().bold()
                    )
                })?;
            pad::decrypt(&ciphertext, &key).context("Failed to invert the one-time pad.")?
        }
        None => {
            let header = steganography::decode(carrier.bytes(), args.bits, HEADER_SIZE * 8)
                .with_context(|| {
                    format!(
                        "Failed to read the length header from '{}'. \nThe image may not contain a hidden message or is corrupted.",
                        args.image.to_string_lossy().red().bold()
                    )
                })?;
            let length = framing::read_header_length(&header)?;

            steganography::decode(carrier.bytes(), args.bits, (HEADER_SIZE + length) * 8)
                .with_context(|| {
                    format!(
                        "Failed to recover a message of {} bytes. \nThe bit width may not match the one used for encoding.",
                        length.to_string().red().bold()
                    )
                })?
        }
    };

    let message = framing::extract_payload(&framed)
        .context("The recovered data is shorter than its header claims.")?;

    match &args.text {
        Some(path) => {
            check_overwrite(path, args.force)?;
            fs::write(path, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{}", String::from_utf8_lossy(&message)),
    }

    Ok(())
}

/// 未指定输出路径时，在输入图像旁生成默认输出路径。
fn default_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    image.with_file_name(format!("{DEFAULT_OUTPUT_PREFIX}{name}"))
}

/// 覆盖保护：目标文件已存在且未指定 `--force` 时拒绝写入。
fn check_overwrite(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
