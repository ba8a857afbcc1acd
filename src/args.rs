// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use country_stats_shared_kernel::CountryCode;

use crate::options::{AreaPolicyArg, OutputFormat, QueryKind, RegionArg};
use crate::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "country_stats",
    version,
    about = "国データの集計ツール (人口・面積・タイムゾーン・地域別統計)"
)]
pub struct Args {
    /// 実行するクエリ (省略時はすべて)
    #[arg(value_enum, help_heading = "クエリ")]
    pub queries: Vec<QueryKind>,

    /// 国データファイル (.json / .yaml / .yml)。省略時は同梱データ
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub data: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 地域別クエリの対象地域
    #[arg(long, value_enum, default_value = "europe", help_heading = "クエリ")]
    pub region: RegionArg,

    /// first-names / least-populous の件数
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "クエリ")]
    pub limit: Option<usize>,

    /// 面積欠損の扱い (area-stats)
    #[arg(long, value_enum, default_value = "exclude", help_heading = "クエリ")]
    pub area_policy: AreaPolicyArg,

    /// first-containing で探す文字列 (大文字小文字を区別しない)
    #[arg(long, default_value = "island", help_heading = "クエリ")]
    pub needle: String,

    /// lookup 対象の国コード
    #[arg(long, value_parser = parsers::parse_country_code, help_heading = "クエリ")]
    pub code: Option<CountryCode>,

    /// lookup が見つからない場合にエラー終了
    #[arg(long, help_heading = "挙動")]
    pub strict: bool,
}
