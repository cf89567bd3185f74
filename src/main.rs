use barcode_match::{cli, config, error, export, pipeline, review, telemetry};
use barcode_match_common::{finalize, Selections};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{BarcodeMatchError, Result};
use review::{InteractiveReviewer, Reviewer, TopCandidateReviewer};
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("✖ {}", e);
        if matches!(e, BarcodeMatchError::MissingInput(_)) {
            eprintln!("  `barcode-match match <商品名称の表> [-c <商品明细表>]` で実行してください");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    telemetry::init(cli.verbose)?;
    let config = Config::load()?;

    match cli.command {
        Commands::Match { names, catalog, output, auto } => {
            println!("🔎 barcode-match - 商品照合\n");

            let interactive = !auto && std::io::stdin().is_terminal();
            if !auto && !interactive {
                return Err(BarcodeMatchError::Prompt(
                    "ターミナルでないため対話選択できません。--auto を指定してください".into(),
                ));
            }

            // 1. 読み込み
            println!("[1/4] 表を読み込み中...");
            let base_dir = std::env::current_dir()?;
            let sources = pipeline::resolve_sources(names, catalog.as_deref(), &base_dir, &config, interactive)?;
            println!("  商品名称: {}", sources.names.display());
            println!("  商品明细表: {}", sources.catalog.display());

            // 2. 照合
            println!("[2/4] 照合中...");
            let (lists, catalog_rows) = pipeline::build_candidates(&sources, &config)?;
            println!("✔ {}件の商品名称を明细表{}行と照合\n", lists.len(), catalog_rows);

            // 3. 選択
            println!("[3/4] 候補を選択{}", if auto { "（最上位を自動採用）" } else { "" });
            let mut reviewer: Box<dyn Reviewer> = if auto {
                Box::new(TopCandidateReviewer)
            } else {
                Box::new(InteractiveReviewer)
            };
            let results = pipeline::review_and_finalize(&lists, reviewer.as_mut())?;
            println!("✔ 選択完了\n");
            export::print_preview(&results);

            // 4. 出力
            println!("\n[4/4] Excelを出力中...");
            let output_path = export::output_path(output.as_deref());
            export::write_results(&results, &output_path)?;
            println!("✔ 結果を保存: {}", output_path.display());

            println!("\n✅ 完了");
        }

        Commands::Candidates { names, catalog, output } => {
            let base_dir = std::env::current_dir()?;
            let sources = pipeline::resolve_sources(names, catalog.as_deref(), &base_dir, &config, false)?;
            let (lists, _) = pipeline::build_candidates(&sources, &config)?;
            let json = serde_json::to_string_pretty(&lists)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ {}件の候補一覧を保存: {}", lists.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Apply { candidates, selections, output } => {
            println!("📄 barcode-match - 選択結果の出力\n");

            let lists = pipeline::read_candidates_json(&candidates)?;
            if !selections.exists() {
                return Err(BarcodeMatchError::FileNotFound(selections.display().to_string()));
            }
            let content = std::fs::read_to_string(&selections)?;
            let selections: Selections = serde_json::from_str(&content)?;

            let results = finalize(&lists, &selections)?;
            export::print_preview(&results);

            let output_path = export::output_path(output.as_deref());
            export::write_results(&results, &output_path)?;
            println!("\n✔ 結果を保存: {}", output_path.display());
        }

        Commands::Config { name_column, barcode_column, catalog_file, show } => {
            let mut config = config;
            let changed = name_column.is_some() || barcode_column.is_some() || catalog_file.is_some();

            if let Some(col) = name_column {
                config.name_column = col;
            }
            if let Some(col) = barcode_column {
                config.barcode_column = col;
            }
            if let Some(file) = catalog_file {
                config.catalog_file = file;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  商品名称の列: {}", config.name_column);
                println!("  条码の列: {}", config.barcode_column);
                println!("  既定の商品明细表: {}", config.catalog_file);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
