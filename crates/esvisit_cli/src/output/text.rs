//! Text output formatter

use super::NodeStats;

pub fn output_text(stats: &NodeStats) {
    println!("{}:", stats.path.display());

    let mut sorted: Vec<_> = stats.counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (node_type, count) in sorted {
        println!("  {:<30} {:>8}", node_type, count);
    }

    println!();
    println!(
        "Counted {} nodes of {} types",
        stats.total,
        stats.counts.values().filter(|count| **count > 0).count()
    );
}
