//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款位平面隐写命令行工具，可按 1-8 位的可调位宽在无损格式图像 (如 PNG, BMP) 中隐藏或恢复消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款位平面隐写命令行工具，可按 1-8 位的可调位宽在无损格式图像 (如 PNG, BMP) 中隐藏或恢复消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：view (查看)、encode (嵌入) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 查看图像的尺寸、通道布局与各位宽下的嵌入容量。
    View(ViewArgs),

    /// 在无损格式图像 (如 PNG, BMP) 中嵌入文本文件内容。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中提取隐藏的消息。
    Decode(DecodeArgs),
}

/// 'view' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// 要查看的图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 每个载体字节用于嵌入的低位比特数 (1-8)。
    /// 解码时必须使用相同的值。
    #[arg(short, long)]
    pub bits: u8,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 省略时默认保存到输入图像旁的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 嵌入前先用一次性密码本加密消息，密钥会以 base64 形式打印到终端。
    #[arg(long)]
    pub pad: bool,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 嵌入时使用的位宽 (1-8)，必须与编码端一致。
    #[arg(short, long)]
    pub bits: u8,

    /// 恢复消息后，保存消息内容的输出路径。
    /// 省略时将消息打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 编码时打印的一次性密码本密钥 (base64)。
    #[arg(short, long)]
    pub key: Option<String>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}
