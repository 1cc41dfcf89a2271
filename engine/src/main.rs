// One-shot runner: reads an organization description from a file argument (or
// stdin when no argument is given), runs the pipeline once, and prints the
// analysis. The HTTP server lives in ../api.

use anyhow::Result;
use std::env;
use std::fs;
use std::io::Read;
use swot_engine::AnalysisService;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let organization = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path, e))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let organization = organization.trim();
    if organization.is_empty() {
        return Err(anyhow::anyhow!(
            "no organization description given; pass a file path or pipe text on stdin"
        ));
    }

    let service = AnalysisService::initialize().await?;
    let report = service.analyze(organization).await?;

    println!("{}", report.analysis);
    println!();
    println!("Quadrant item counts:");
    for bar in &report.bar_chart.bars {
        println!("  {:<13} {}", bar.category, bar.count);
    }
    println!();
    println!("Generated in {} ms", report.processing_time_ms);

    Ok(())
}
