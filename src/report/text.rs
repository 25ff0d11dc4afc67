// Plain-text rendering of the dashboard.
use crate::model::{
    CohortRetention, DashboardReport, FrictionTable, MonthlyRevenue, RETENTION_WINDOW, RenderError,
};
use crate::report::Renderer;
use std::fmt::{self, Write};

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &DashboardReport) -> Result<String, RenderError> {
        let mut out = String::new();
        out.push_str("E-Commerce BI Dashboard\n=======================\n\n");
        render_revenue(&mut out, &report.revenue_trend)?;
        render_cohorts(&mut out, &report.cohort_retention)?;
        render_friction(&mut out, &report.support_friction)?;
        Ok(out)
    }
}

fn section(out: &mut String, title: &str, question: &str) -> fmt::Result {
    writeln!(out, "{}\n{}", title, "-".repeat(title.len()))?;
    writeln!(out, "Q: {}\n", question)
}

fn render_revenue(out: &mut String, rows: &[MonthlyRevenue]) -> fmt::Result {
    section(
        out,
        "1. Revenue Trend with Anomaly Detection",
        "How does revenue change over time, and which months deviate significantly?",
    )?;
    if rows.is_empty() {
        out.push_str("(no paid transactions)\n\n");
        return Ok(());
    }
    writeln!(out, "{:<8} {:>14} {:>6} {:>8}  {}", "month", "revenue", "txns", "z", "status")?;
    for row in rows {
        writeln!(
            out,
            "{:<8} {:>14.2} {:>6} {:>8.2}  {}",
            row.month.format("%Y-%m").to_string(),
            row.total_amount,
            row.transaction_count,
            row.z_score,
            if row.anomaly { "ANOMALY" } else { "normal" }
        )?;
    }
    out.push('\n');
    Ok(())
}

fn render_cohorts(out: &mut String, rows: &[CohortRetention]) -> fmt::Result {
    section(
        out,
        "2. Cohort Retention (0-5 months)",
        "How well do customer cohorts retain over their first six months?",
    )?;
    if rows.is_empty() {
        out.push_str("(no customers)\n\n");
        return Ok(());
    }
    write!(out, "{:<8} {:>6}", "cohort", "size")?;
    for offset in 0..RETENTION_WINDOW {
        write!(out, " {:>7}", format!("m{}", offset))?;
    }
    out.push('\n');
    for row in rows {
        write!(out, "{:<8} {:>6}", row.cohort_month.format("%Y-%m").to_string(), row.cohort_size)?;
        for pct in row.retention {
            write!(out, " {:>6.1}%", pct)?;
        }
        out.push('\n');
    }
    out.push('\n');
    Ok(())
}

fn render_friction(out: &mut String, table: &FrictionTable) -> fmt::Result {
    section(
        out,
        "3. Support Ticket Volume vs Payment Status",
        "Does customer support friction correlate with payment problems?",
    )?;
    if table.rows.is_empty() {
        out.push_str("(no tickets or transactions)\n\n");
        return Ok(());
    }
    write!(out, "{:<12} {:>8}", "customer", "tickets")?;
    for status in &table.statuses {
        write!(out, " {:>13}", status)?;
    }
    out.push('\n');
    for row in &table.rows {
        write!(out, "{:<12} {:>8}", row.customer_id, row.ticket_count)?;
        for status in &table.statuses {
            let count = row.payment_counts.get(status).copied().unwrap_or(0);
            write!(out, " {:>13}", count)?;
        }
        out.push('\n');
    }
    out.push_str("\nticket correlation:");
    for (status, r) in &table.ticket_correlation {
        match r {
            Some(r) => write!(out, " {}={:+.3}", status, r)?,
            None => write!(out, " {}=n/a", status)?,
        }
    }
    out.push_str("\n\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analyzer, AnalyzerImpl};
    use crate::parser::{ArchiveParser, Parser};
    use crate::test_support::sample_archive;

    #[test]
    fn renders_every_section() {
        let datasets = ArchiveParser::new().parse(&sample_archive()).unwrap();
        let text = TextRenderer
            .render(&AnalyzerImpl::new().analyze(&datasets))
            .unwrap();

        assert!(text.contains("1. Revenue Trend"));
        assert!(text.contains("2023-02        10100.00"));
        assert!(text.contains("2. Cohort Retention"));
        assert!(text.contains("2023-01       1  100.0%    0.0%  100.0%"));
        assert!(text.contains("3. Support Ticket Volume"));
        assert!(text.contains("refunded=-1.000"));
    }

    #[test]
    fn renders_placeholders_for_empty_report() {
        let report = AnalyzerImpl::new().analyze(&Default::default());
        let text = TextRenderer.render(&report).unwrap();
        assert!(text.contains("(no paid transactions)"));
        assert!(text.contains("(no customers)"));
        assert!(text.contains("(no tickets or transactions)"));
    }
}
