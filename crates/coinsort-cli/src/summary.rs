use console::Style;
use coinsort_core::classify::Denomination;
use coinsort_core::pipeline::config::PipelineConfig;
use coinsort_core::pipeline::{BatchItem, CoinReport};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    skip: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            skip: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{s:.2}"))
}

pub fn print_run_summary(config: &PipelineConfig, input_count: usize) {
    let s = Styles::new();
    let det = &config.detection;

    println!();
    println!("  {}", s.title.apply_to("Coinsort"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(input_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Radius"),
        s.value
            .apply_to(format!("{}-{} px", det.min_radius, det.max_radius))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Hough"),
        s.value.apply_to(format!(
            "dp={} min_dist={} canny={} votes={} sigma={}",
            det.dp, det.min_dist, det.canny_high, det.acc_threshold, det.vote_sigma
        ))
    );
    if config.write_unannotated {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Empty images"),
            s.value.apply_to("written unmodified")
        );
    }
    println!();
}

pub fn print_coin_table(coins: &[CoinReport]) {
    let s = Styles::new();

    if coins.is_empty() {
        println!("  {}", s.skip.apply_to("No coins detected"));
        return;
    }

    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:>6} {:>6} {:>6}  {:>8} {:>8}  {}",
            "x", "y", "r", "center", "ring", "decision"
        ))
    );
    for coin in coins {
        let row = format!(
            "{:>6} {:>6} {:>6}  {:>8} {:>8}  {}",
            coin.circle.center_x,
            coin.circle.center_y,
            coin.circle.radius,
            format_score(coin.center_score),
            format_score(coin.ring_score),
            coin.decision.label
        );
        if coin.decision.is_skip() {
            println!("  {}", s.skip.apply_to(row));
        } else {
            println!("  {}", s.value.apply_to(row));
        }
    }
}

/// Print one line per input plus batch totals. Returns the failure count.
pub fn print_batch_results(items: &[BatchItem]) -> usize {
    let s = Styles::new();
    let mut failed = 0usize;
    let mut grand_total = 0.0f64;
    let mut counts = [0usize; Denomination::ALL.len()];

    println!();
    for item in items {
        let name = item.input.display();
        match &item.outcome {
            Ok(outcome) => {
                let total = outcome.total_value();
                grand_total += total;
                for coin in &outcome.coins {
                    if let Some(i) = Denomination::ALL
                        .iter()
                        .position(|d| *d == coin.decision.denomination)
                    {
                        counts[i] += 1;
                    }
                }
                let written = match outcome.written {
                    Some(ref p) => p.display().to_string(),
                    None => "not written".to_string(),
                };
                println!(
                    "  {:<40} {:>3} coins  {:>8.2} PLN  {}",
                    name,
                    outcome.coins.len(),
                    total,
                    s.label.apply_to(written)
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {:<40} {}", name, s.error.apply_to(e));
            }
        }
    }

    println!();
    println!("  {}", s.header.apply_to("Totals"));
    for (denomination, count) in Denomination::ALL.iter().zip(counts) {
        if count > 0 {
            println!(
                "    {:<12}{}",
                s.label.apply_to(denomination.label()),
                s.value.apply_to(count)
            );
        }
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Value"),
        s.value.apply_to(format!("{grand_total:.2} PLN"))
    );
    if failed > 0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Failed"),
            s.error.apply_to(failed)
        );
    }

    failed
}
