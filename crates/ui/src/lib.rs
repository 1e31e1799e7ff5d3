pub fn index_html() -> &'static str {
    include_str!("../static/index.html")
}

pub fn styles_css() -> &'static str {
    include_str!("../static/styles.css")
}

pub fn app_js() -> &'static str {
    include_str!("../static/app.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_bundle_contains_index_html() {
        let html = index_html();

        assert!(html.contains("<!doctype html>"));
        assert!(html.contains("/static/styles.css"));
        assert!(html.contains("/static/app.js"));
    }

    #[test]
    fn ui_shell_contains_log_and_summary_panels() {
        let html = index_html();
        assert!(html.contains("Market Simulation Log"));
        assert!(html.contains("Human Trade Summary"));
        assert!(html.contains("Download Simulation Log (CSV)"));
    }

    #[test]
    fn sidebar_exposes_every_parameter() {
        let html = index_html();
        for name in [
            "fair_price",
            "initial_bid",
            "initial_ask",
            "human_buy_price",
            "algo_step",
            "max_steps",
        ] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
    }

    #[test]
    fn script_talks_to_run_and_export_endpoints() {
        let js = app_js();
        assert!(js.contains("/api/runs"));
        assert!(js.contains("/api/runs/export"));
    }
}
