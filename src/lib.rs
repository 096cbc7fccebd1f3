//! # lsb_stash 库
//!
//! 本库包含位平面隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod carrier;
pub mod cli;
pub mod constants;
pub mod error;
pub mod framing;
pub mod handler;
pub mod pad;
pub mod steganography;
