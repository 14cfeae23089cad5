//! Analytics report command.

use folio_core::WindowDays;
use folio_server::db::AnalyticsRepository;
use folio_server::models::AnalyticsSummary;

/// Print the visit summary for the trailing window.
///
/// # Errors
///
/// Returns an error if `days` is out of range or the queries fail.
pub async fn print(days: i32, page_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let days = WindowDays::new(days)?;
    let pool = super::connect().await?;

    let summary = AnalyticsRepository::new(&pool)
        .summary(days, page_path)
        .await?;

    render(days, &summary);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn render(days: WindowDays, summary: &AnalyticsSummary) {
    let stats = &summary.stats;
    println!("Last {days} days");
    println!("  total visits:    {}", stats.total_visits);
    println!("  unique visitors: {}", stats.unique_visitors);
    println!("  pages visited:   {}", stats.pages_visited);

    if summary.analytics.is_empty() {
        println!("\nNo visits in this window.");
        return;
    }

    println!("\n{:<12} {:>8}  page", "date", "visits");
    for row in &summary.analytics {
        println!("{:<12} {:>8}  {}", row.date.to_string(), row.visits, row.page_path);
    }
}
