use crate::model::{DashboardReport, RenderError};
use crate::report::Renderer;

/// Pretty-printed JSON for downstream chart renderers.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &DashboardReport) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analyzer, AnalyzerImpl};
    use crate::parser::{ArchiveParser, Parser};
    use crate::test_support::sample_archive;
    use serde_json::Value;

    #[test]
    fn exposes_plain_records() {
        let datasets = ArchiveParser::new().parse(&sample_archive()).unwrap();
        let json = JsonRenderer
            .render(&AnalyzerImpl::new().analyze(&datasets))
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let first = &value["revenue_trend"][0];
        assert_eq!(first["month"], "2023-01-01");
        assert_eq!(first["total_amount"], 100.0);
        assert_eq!(first["anomaly"], false);

        let cohort = &value["cohort_retention"][0];
        assert_eq!(cohort["cohort_month"], "2023-01-01");
        assert_eq!(cohort["retention"].as_array().unwrap().len(), 6);

        let friction = &value["support_friction"]["rows"][2];
        assert_eq!(friction["customer_id"], "3");
        assert_eq!(friction["ticket_count"], 1);
        assert_eq!(friction["payment_counts"]["charged_back"], 0);
    }
}
