use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
商品名称と条码の照合ツール

1. 準備した表（商品名称のみ）を指定
2. 商品明细表（商品名称+条码）を指定（省略時はカレントの 商品明细表.xlsx）
3. 自動照合の候補から正しい商品を選択
4. 結果をExcelに出力";

#[derive(Parser)]
#[command(name = "barcode-match")]
#[command(about = "商品名称と条码の照合ツール", long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 照合して候補を選択し、結果をExcelに出力
    Match {
        /// 準備した表（商品名称）
        names: Option<PathBuf>,

        /// 商品明细表（商品名称+条码）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力Excelファイル（既存ディレクトリなら その中に 匹配结果.xlsx、デフォルト: ./匹配结果.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 対話せず最上位の候補を採用
        #[arg(long)]
        auto: bool,
    },

    /// 照合候補をJSONで出力（外部で選択する場合）
    Candidates {
        /// 準備した表（商品名称）
        names: Option<PathBuf>,

        /// 商品明细表（商品名称+条码）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 候補JSONと選択JSONから結果Excelを出力
    Apply {
        /// `candidates` で出力した候補JSON
        #[arg(required = true)]
        candidates: PathBuf,

        /// 選択JSON（{"行番号": 候補位置, ...}）
        #[arg(required = true)]
        selections: PathBuf,

        /// 出力Excelファイル（既存ディレクトリなら その中に 匹配结果.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 商品名称の列名を設定
        #[arg(long)]
        name_column: Option<String>,

        /// 条码の列名を設定
        #[arg(long)]
        barcode_column: Option<String>,

        /// 自動検出する商品明细表のファイル名を設定
        #[arg(long)]
        catalog_file: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
