//! wi 工具的命令行接口
//!
//! 本模块提供了命令行参数解析。无法识别的选项会被静默忽略。

use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::finder::options::TypeFilter;

/// 按名称快速定位文件和目录
#[derive(Parser, Debug)]
#[command(
    name = "wi",
    author,
    version,
    about = "Locate files faster",
    after_help = "Examples:\n  wi config.json\n  wi \".js\" -t f -i\n  wi node_modules -t d --exact -r"
)]
pub struct Cli {
    /// 要匹配的名称（按字面文本匹配）
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// 多余的位置参数，忽略
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// 搜索目录（默认：当前目录）
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// 递归搜索
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// 递归搜索的最大深度（隐含 --recursive）
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// 条目类型：f=文件, d=目录, a=全部
    #[arg(
        short = 't',
        long = "type",
        value_name = "f|d|a",
        default_value = "a",
        value_parser = parse_type_filter
    )]
    pub type_filter: TypeFilter,

    /// 不区分大小写
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// 只输出名称完全相同的条目
    #[arg(short = 'e', long)]
    pub exact: bool,

    /// 最多输出的结果数（默认 100）
    #[arg(short = 'm', long, value_name = "NUM")]
    pub max: Option<NonZeroUsize>,

    /// 包含隐藏文件和目录
    #[arg(long)]
    pub hidden: bool,

    /// 按名称顺序遍历每个目录
    #[arg(short = 's', long)]
    pub sort: bool,

    /// 输出被跳过的目录
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// 启用调试日志
    #[arg(long)]
    pub debug: bool,
}

fn parse_type_filter(code: &str) -> Result<TypeFilter, String> {
    Ok(TypeFilter::from_code(code))
}

/// 可识别的长选项
const KNOWN_LONG: &[&str] = &[
    "dir",
    "recursive",
    "depth",
    "type",
    "ignore-case",
    "exact",
    "max",
    "hidden",
    "sort",
    "verbose",
    "debug",
    "help",
    "version",
];

/// 可识别的短选项
const KNOWN_SHORT: &[char] = &['d', 'r', 't', 'i', 'e', 'm', 's', 'v', 'h', 'V'];

impl Cli {
    /// 解析命令行参数，先丢弃无法识别的选项
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(retain_known_args(args))
    }

    /// 与 [`Cli::parse_lenient`] 相同，但把解析错误返回给调用方
    pub fn try_parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(retain_known_args(args))
    }
}

/// 去掉 clap 无法识别的选项，第一个参数（程序名）原样保留
pub fn retain_known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut after_separator = false;

    for arg in args {
        if after_separator {
            kept.push(arg);
            continue;
        }
        if arg == "--" {
            after_separator = true;
            kept.push(arg);
            continue;
        }
        if is_known_arg(&arg.to_string_lossy()) {
            kept.push(arg);
        } else {
            log::debug!("Ignoring unrecognized option {:?}", arg);
        }
    }

    kept
}

fn is_known_arg(arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        let name = long.split_once('=').map_or(long, |(name, _)| name);
        return KNOWN_LONG.contains(&name);
    }

    match arg.strip_prefix('-') {
        // 单独的 "-" 以及普通参数都保留
        None | Some("") => true,
        Some(shorts) => {
            // 值可以紧跟在短选项后面，例如 -m5 或 -tf
            let first = shorts.chars().next().unwrap_or_default();
            if matches!(first, 'd' | 't' | 'm') {
                return true;
            }
            shorts.chars().all(|c| KNOWN_SHORT.contains(&c))
        }
    }
}
