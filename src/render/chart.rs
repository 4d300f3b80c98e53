//! Allocation donut drawn as inline SVG.
//!
//! Each wedge is a stroked circle whose dash covers its share of the
//! circumference, so a single holding still renders as a full ring.

use super::format::{currency, escape_html};
use crate::view::Slice;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::f64::consts::PI;
use std::fmt::Write;

/// Inner radius over outer radius.
pub const HOLE: f64 = 0.3;

const SIZE: f64 = 200.0;
const OUTER: f64 = 90.0;

// Plotly's default qualitative palette.
const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub value: Decimal,
    /// Share of the whole pie, in `0.0..=1.0`.
    pub fraction: f64,
    pub color: &'static str,
}

pub fn wedges(slices: &[Slice]) -> Vec<Wedge> {
    let total: Decimal = slices.iter().map(|s| s.value).sum();
    let total = total.to_f64().unwrap_or(0.0);
    if total <= 0.0 {
        return Vec::new();
    }

    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| Wedge {
            label: slice.label.clone(),
            value: slice.value,
            fraction: slice.value.to_f64().unwrap_or(0.0) / total,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

pub fn donut_svg(wedges: &[Wedge]) -> String {
    let ring = OUTER * (1.0 + HOLE) / 2.0;
    let width = OUTER * (1.0 - HOLE);
    let circumference = 2.0 * PI * ring;
    let center = SIZE / 2.0;

    let mut svg = format!(
        r#"<svg class="donut" viewBox="0 0 {SIZE} {SIZE}" role="img" aria-label="Asset Allocation">"#
    );
    let mut offset = 0.0;
    for wedge in wedges {
        let length = wedge.fraction * circumference;
        let _ = write!(
            svg,
            r#"<circle cx="{center}" cy="{center}" r="{ring:.3}" fill="none" stroke="{color}" stroke-width="{width:.3}" stroke-dasharray="{length:.3} {circumference:.3}" stroke-dashoffset="{dashoffset:.3}" transform="rotate(-90 {center} {center})" data-label="{label}"><title>{label}: {value} ({share:.1}%)</title></circle>"#,
            color = wedge.color,
            dashoffset = -offset,
            label = escape_html(&wedge.label),
            value = currency(wedge.value),
            share = wedge.fraction * 100.0,
        );
        offset += length;
    }
    svg.push_str("</svg>");
    svg
}

pub fn legend(wedges: &[Wedge]) -> String {
    let mut html = String::from(r#"<ul class="legend">"#);
    for wedge in wedges {
        let _ = write!(
            html,
            r#"<li><span class="swatch" style="background:{}"></span>{} <span class="share">{:.1}%</span></li>"#,
            wedge.color,
            escape_html(&wedge.label),
            wedge.fraction * 100.0,
        );
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn slice(label: &str, value: Decimal) -> Slice {
        Slice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn single_holding_fills_the_ring() {
        let wedges = wedges(&[slice("AAPL", dec!(3000))]);
        assert_eq!(wedges.len(), 1);
        assert_eq!(wedges[0].label, "AAPL");
        assert_eq!(wedges[0].value, dec!(3000));
        assert!((wedges[0].fraction - 1.0).abs() < 1e-12);

        let svg = donut_svg(&wedges);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(r#"data-label="AAPL""#));
        assert!(svg.contains("AAPL: $3,000.00 (100.0%)"));
    }

    #[test]
    fn fractions_sum_to_one_in_input_order() {
        let wedges = wedges(&[slice("MSFT", dec!(1)), slice("AAPL", dec!(3))]);
        assert_eq!(wedges[0].label, "MSFT");
        assert!((wedges[0].fraction - 0.25).abs() < 1e-12);
        let sum: f64 = wedges.iter().map(|w| w.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_ne!(wedges[0].color, wedges[1].color);
    }

    #[test]
    fn hole_leaves_the_center_empty() {
        let svg = donut_svg(&wedges(&[slice("AAPL", dec!(1))]));
        // ring radius 58.5 with stroke 63 spans radii 27..90
        assert!(svg.contains(r#"r="58.500""#));
        assert!(svg.contains(r#"stroke-width="63.000""#));
    }

    #[test]
    fn nothing_to_draw_without_value() {
        assert!(wedges(&[]).is_empty());
    }

    #[test]
    fn labels_are_escaped() {
        let wedges = wedges(&[slice("<X>", dec!(1))]);
        assert!(legend(&wedges).contains("&lt;X&gt;"));
        assert!(!donut_svg(&wedges).contains("<X>"));
    }
}
