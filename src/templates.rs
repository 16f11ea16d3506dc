//! HTML templates

use minijinja::Environment;
use serde::Serialize;

use crate::charts::ChartFragment;

const INDEX_TEMPLATE: &str = "index.html";

/// Everything the dashboard page needs
#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    /// Selector options, most recent first
    pub years: &'a [i32],
    pub selected_year: i32,
    pub incident_count: usize,
    pub charts: &'a [ChartFragment],
}

/// Compiled template set, built once at startup
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn render_dashboard(&self, view: &DashboardView<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;

    fn fragment(empty: bool) -> ChartFragment {
        ChartFragment {
            id: "chart-test",
            title: "Test",
            kind: ChartKind::Bar,
            empty,
            html: "<div id=\"chart-test\" class=\"chart\"></div>".to_string(),
        }
    }

    #[test]
    fn test_selector_marks_selected_year() {
        let templates = Templates::new().unwrap();
        let charts = [fragment(false)];
        let html = templates
            .render_dashboard(&DashboardView {
                years: &[2024, 2023, 2022],
                selected_year: 2023,
                incident_count: 12,
                charts: &charts,
            })
            .unwrap();

        assert!(html.contains(r#"<option value="2023" selected>2023</option>"#));
        assert!(html.contains(r#"<option value="2024">2024</option>"#));
        assert!(html.contains("<strong>12</strong> incidents"));
        // fragment is embedded unescaped
        assert!(html.contains("<div id=\"chart-test\" class=\"chart\"></div>"));
        assert!(!html.contains("No data for"));
        assert!(html.contains(r#"<section class="card chart-bar" aria-label="Test">"#));
    }

    #[test]
    fn test_empty_chart_notice() {
        let templates = Templates::new().unwrap();
        let charts = [fragment(true)];
        let html = templates
            .render_dashboard(&DashboardView {
                years: &[2024],
                selected_year: 1999,
                incident_count: 0,
                charts: &charts,
            })
            .unwrap();

        assert!(html.contains("No data for 1999."));
        assert!(!html.contains(" selected>"));
    }
}
