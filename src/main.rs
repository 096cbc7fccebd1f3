use clap::Parser;

use lsb_stash::{
    cli::{Cli, Commands},
    handler::{handle_decode, handle_encode, handle_view},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`view`、`encode` 或 `decode`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::View(args) => handle_view(args),
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
    }
}
