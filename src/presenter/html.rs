use crate::config::AppConfig;
use crate::model::SignalRecord;
use crate::utils::{escape_html, format_timestamp};

pub const NO_SIGNAL_MESSAGE: &str = "⚠️ No trading signal detected.";

/// Where the embedded chart widget points.
#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub chart_base_url: String,
    pub chain: String,
}

impl ChartSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            chart_base_url: config.chart_base_url.trim_end_matches('/').to_string(),
            chain: config.chain.clone(),
        }
    }

    pub fn chart_url(&self, token: &str) -> String {
        format!("{}/{}/{}", self.chart_base_url, self.chain, token)
    }
}

/// Renders the analysis page: chart widget plus the signals table or a "no signal" message.
pub fn render_page(token: &str, chart_url: &str, signals: Option<&[SignalRecord]>) -> String {
    let token = escape_html(token);
    let signals_html = match signals {
        Some(records) => render_table(records),
        None => format!("<p>{}</p>", NO_SIGNAL_MESSAGE),
    };

    format!(
        r#"<html>
    <head>
        <meta charset="utf-8">
        <title>Token analysis {token}</title>
    </head>
    <body>
        <h1>Token analysis: {token}</h1>
        <iframe src="{chart}" width="100%" height="600" frameborder="0"></iframe>
        <h2>Trading signals:</h2>
        {signals_html}
    </body>
</html>
"#,
        chart = escape_html(chart_url),
    )
}

fn render_table(records: &[SignalRecord]) -> String {
    let mut html = String::from(
        "<table class=\"signals\">\n<thead><tr><th>timestamp</th><th>price</th><th>signal</th></tr></thead>\n<tbody>\n",
    );
    for record in records {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            format_timestamp(&record.timestamp),
            record.price,
            record.signal
        ));
    }
    html.push_str("</tbody>\n</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Signal;
    use crate::utils::epoch_to_datetime;

    fn record(price: f64, signal: Signal) -> SignalRecord {
        SignalRecord {
            timestamp: epoch_to_datetime(1_700_000_000),
            price,
            signal,
        }
    }

    #[test]
    fn chart_url_uses_chain_and_token() {
        let config = AppConfig {
            chart_base_url: "https://dexscreener.com/".into(),
            ..AppConfig::default()
        };
        let chart = ChartSettings::from_config(&config);
        assert_eq!(chart.chart_url("abc"), "https://dexscreener.com/solana/abc");
    }

    #[test]
    fn renders_table_rows_for_signals() {
        let records = [record(0.08, Signal::Buy), record(0.1, Signal::Sell)];
        let page = render_page("abc", "https://dexscreener.com/solana/abc", Some(&records));

        assert!(page.contains("<title>Token analysis abc</title>"));
        assert!(page.contains(r#"<iframe src="https://dexscreener.com/solana/abc""#));
        assert!(page.contains("<th>timestamp</th><th>price</th><th>signal</th>"));
        assert!(page.contains("<tr><td>2023-11-14 22:13:20</td><td>0.08</td><td>BUY</td></tr>"));
        assert!(page.contains("<tr><td>2023-11-14 22:13:20</td><td>0.1</td><td>SELL</td></tr>"));
        assert!(!page.contains(NO_SIGNAL_MESSAGE));
    }

    #[test]
    fn renders_message_without_signals() {
        let page = render_page("abc", "https://dexscreener.com/solana/abc", None);
        assert!(page.contains(&format!("<p>{}</p>", NO_SIGNAL_MESSAGE)));
        assert!(!page.contains("<table"));
    }

    #[test]
    fn token_is_escaped() {
        let token = r#"<script>"x"</script>"#;
        let page = render_page(token, &format!("https://dexscreener.com/solana/{}", token), None);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
    }
}
