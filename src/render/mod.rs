//! HTML for the tracker page.

pub mod chart;
pub mod format;

use crate::error::DashboardError;
use crate::view::{DisplayModel, Holdings, PositionView};
use format::{currency, escape_html, percent, quantity};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

pub const PAGE_TITLE: &str = "Baris AI Fund";
pub const HEADING: &str = "Baris AI Hedge Fund: Public Tracker";
pub const ALL_CASH_NOTICE: &str = "Portfolio is currently 100% Cash.";

/// Every refresh starts over at `Loading` and settles in one of the other two.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum RenderState {
    Loading,
    Success(DisplayModel),
    Failed(DashboardError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    Absent,
    /// A change exists conceptually but cannot be computed.
    Unavailable,
    Change(Decimal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub delta: Delta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub ticker: String,
    pub value: String,
    pub qty: String,
    pub pl: String,
    pub pl_percent: String,
}

pub const TABLE_HEADER: [&str; 5] = ["Ticker", "Value", "Qty", "P/L ($)", "P/L (%)"];

pub fn metrics(model: &DisplayModel) -> [Metric; 3] {
    [
        Metric {
            label: "Total Equity",
            value: currency(model.equity),
            delta: model.percent_change.map_or(Delta::Unavailable, Delta::Change),
        },
        Metric {
            label: "Buying Power",
            value: currency(model.buying_power),
            delta: Delta::Absent,
        },
        Metric {
            label: "Cash",
            value: currency(model.cash),
            delta: Delta::Absent,
        },
    ]
}

pub fn table_rows(positions: &[PositionView]) -> Vec<TableRow> {
    positions
        .iter()
        .map(|p| TableRow {
            ticker: p.symbol.clone(),
            value: currency(p.market_value),
            qty: quantity(p.quantity),
            pl: currency(p.unrealized_pl),
            pl_percent: percent(p.unrealized_pl_percent),
        })
        .collect()
}

fn metric_html(out: &mut String, metric: &Metric) {
    let delta = match &metric.delta {
        Delta::Absent => String::new(),
        Delta::Unavailable => r#"<div class="delta flat">n/a</div>"#.to_string(),
        Delta::Change(change) => {
            let class = if change.is_sign_negative() && !change.is_zero() {
                "down"
            } else {
                "up"
            };
            format!(r#"<div class="delta {class}">{}</div>"#, percent(*change))
        }
    };
    let _ = write!(
        out,
        r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div>{delta}</div>"#,
        metric.label, metric.value,
    );
}

fn table_html(out: &mut String, rows: &[TableRow]) {
    out.push_str("<table><thead><tr>");
    for column in TABLE_HEADER {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.ticker),
            row.value,
            row.qty,
            row.pl,
            row.pl_percent,
        );
    }
    out.push_str("</tbody></table>");
}

fn success_html(out: &mut String, model: &DisplayModel) {
    out.push_str(r#"<section class="metrics">"#);
    for metric in metrics(model) {
        metric_html(out, &metric);
    }
    out.push_str("</section><hr>");

    match &model.holdings {
        Holdings::AllCash => {
            let _ = write!(out, r#"<div class="info" role="status">{ALL_CASH_NOTICE}</div>"#);
        }
        Holdings::Invested { positions, allocation } => {
            let wedges = chart::wedges(allocation);
            out.push_str(r#"<section class="chart"><h2>Asset Allocation</h2>"#);
            if wedges.is_empty() {
                out.push_str(r#"<p class="muted">No long positions to chart.</p>"#);
            } else {
                out.push_str(&chart::donut_svg(&wedges));
                out.push_str(&chart::legend(&wedges));
            }
            out.push_str("</section>");
            table_html(out, &table_rows(positions));
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;background:#0e1117;color:#fafafa}\
main{max-width:1100px;margin:0 auto;padding:2rem}\
.metrics{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem}\
.metric .label{font-size:.9rem;opacity:.8}.metric .value{font-size:2rem}\
.delta.up{color:#09ab3b}.delta.down{color:#ff2b2b}.delta.flat{opacity:.6}\
.info{background:#172d43;padding:1rem;border-radius:.5rem}\
.error{background:#3e2428;color:#ffdede;padding:1rem;border-radius:.5rem}\
.donut{height:400px;width:100%}.legend{list-style:none;padding:0}\
.swatch{display:inline-block;width:.8rem;height:.8rem;margin-right:.4rem}\
table{border-collapse:collapse;width:100%}td,th{padding:.4rem .8rem;border-bottom:1px solid #333;text-align:right}\
td:first-child,th:first-child{text-align:left}button{margin-top:1.5rem;padding:.5rem 1rem}";

/// Full page for the given state.
pub fn render_page(state: &RenderState) -> String {
    let mut body = String::new();
    match state {
        RenderState::Loading => body.push_str(r#"<div class="info" role="status">Loading account data…</div>"#),
        RenderState::Success(model) => success_html(&mut body, model),
        RenderState::Failed(err) => {
            let _ = write!(
                body,
                r#"<div class="error" role="alert">⚠️ {}</div>"#,
                escape_html(&err.user_message())
            );
        }
    }

    // Missing secrets stop the page; nothing a refresh could fix.
    let refresh = match state {
        RenderState::Failed(DashboardError::Configuration(_)) => "",
        _ => r#"<form method="get" action="/"><button type="submit">🔄 Refresh Data</button></form>"#,
    };
    let reload = match state {
        RenderState::Loading => r#"<meta http-equiv="refresh" content="2">"#,
        _ => "",
    };

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">{reload}<title>{PAGE_TITLE}</title>\
         <style>{STYLE}</style></head><body><main><h1>🚀 {HEADING}</h1>{body}{refresh}</main></body></html>"
    )
}
